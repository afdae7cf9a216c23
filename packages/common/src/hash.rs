//! Keccak helpers shared by the codec and the signature checks.

use tiny_keccak::{Hasher, Keccak};

/// Prefix applied by Ethereum `personal_sign` / `signMessage` to a 32-byte payload
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Digest a validator signs for a 32-byte message hash.
///
/// Matches `ethers.Signer.signMessage(arrayify(hash))`:
/// `keccak256("\x19Ethereum Signed Message:\n32" || hash)`
pub fn eth_signed_message_hash(hash: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 28 + 32];
    data[..28].copy_from_slice(ETH_SIGNED_MESSAGE_PREFIX);
    data[28..].copy_from_slice(hash);
    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
