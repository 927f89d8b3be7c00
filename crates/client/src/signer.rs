//! Relay request signing.

use crate::error::Result;
use alloy::{
    primitives::keccak256,
    signers::{local::PrivateKeySigner, SignerSync},
};

/// Compute the `X-Flashbots-Signature` header value for a request payload.
///
/// The relay expects an EIP-191 personal-message signature over the
/// `0x`-prefixed hex encoding of the payload's keccak256 hash. The personal
/// message prefix is the domain separation: the signature cannot be replayed
/// as a signature over the raw payload bytes.
///
/// The header value is `<checksummed signer address>:<0x-hex signature>`.
pub fn flashbots_signature(signer: &PrivateKeySigner, payload: &[u8]) -> Result<String> {
    let digest = hex::encode_prefixed(keccak256(payload));
    let signature = signer.sign_message_sync(digest.as_bytes())?;
    Ok(format!("{}:{}", signer.address(), hex::encode_prefixed(signature.as_bytes())))
}
