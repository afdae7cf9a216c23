//! Off-chain validator signing.
//!
//! Produces the same signatures as an Ethereum wallet's `signMessage(hash)`
//! flow, so a relayer holding the validator key can authorize redeems.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use thiserror::Error;

use crate::intent::TransferIntent;
use crate::signature::{evm_address_from_pubkey, format_evm_address, RecoverableSignature};

#[derive(Error, Debug)]
pub enum SignerError {
    #[error("Invalid validator key: {0}")]
    InvalidKey(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

/// A validator's secp256k1 secret key
pub struct ValidatorKey {
    signing_key: SigningKey,
}

impl ValidatorKey {
    /// Load from a 32-byte secret
    pub fn from_bytes(secret: &[u8]) -> Result<Self, SignerError> {
        let signing_key =
            SigningKey::from_slice(secret).map_err(|e| SignerError::InvalidKey(e.to_string()))?;
        Ok(Self { signing_key })
    }

    /// Load from a hex secret, with or without 0x prefix
    pub fn from_hex(secret: &str) -> Result<Self, SignerError> {
        let hex_str = secret.strip_prefix("0x").unwrap_or(secret);
        let bytes = hex::decode(hex_str).map_err(|e| SignerError::InvalidKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// EVM address of this key
    pub fn address(&self) -> [u8; 20] {
        let point = self
            .signing_key
            .verifying_key()
            .as_affine()
            .to_encoded_point(false);
        // An uncompressed SEC1 point is always 65 bytes with a 0x04 tag
        evm_address_from_pubkey(point.as_bytes()).unwrap_or_default()
    }

    /// EVM address as lowercase 0x hex (the bridge `validator` field)
    pub fn address_hex(&self) -> String {
        format_evm_address(&self.address())
    }

    /// Sign an already-prefixed 32-byte digest
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<RecoverableSignature, SignerError> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| SignerError::Signing(e.to_string()))?;

        let bytes = signature.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(RecoverableSignature::new(r, s, 27 + recovery_id.to_byte()))
    }

    /// Sign a transfer intent the way the destination bridge verifies it
    pub fn sign_intent(
        &self,
        intent: &TransferIntent,
    ) -> Result<RecoverableSignature, SignerError> {
        self.sign_digest(&intent.signing_digest())
    }
}
