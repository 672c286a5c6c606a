//! Deterministic intent addressing.
//!
//! An intent lives at the `instantiate2` address computed from three inputs:
//! - the checksum of the intent code (the shared implementation every instance runs),
//! - the factory that instantiates it,
//! - a salt equal to the SHA-256 digest of the canonical parameter encoding.
//!
//! The factory uses these functions both when creating an intent and when answering address
//! queries, and the intent contract uses them to check that it was created by its factory.

use cosmwasm_std::{instantiate2_address, Addr, Api, Checksum, StdError, StdResult};
use sha2::{Digest, Sha256};

use crate::IntentParams;

/// Domain tag prefixed to every parameter encoding
pub const PARAMS_DIGEST_TAG: &[u8] = b"standing-intent/v1";

const ASSET_NATIVE: u8 = 0x00;
const ASSET_CW20: u8 = 0x01;

/// Canonical byte encoding of the four intent parameters
pub fn encode_params(params: &IntentParams) -> Vec<u8> {
    let mut out = Vec::with_capacity(
        PARAMS_DIGEST_TAG.len() + 64 + params.target.len() + params.payload.len(),
    );
    out.extend_from_slice(PARAMS_DIGEST_TAG);

    match &params.asset {
        None => out.push(ASSET_NATIVE),
        Some(asset) => {
            out.push(ASSET_CW20);
            push_len_prefixed(&mut out, asset.as_bytes());
        }
    }

    out.extend_from_slice(&params.amount.u128().to_be_bytes());
    push_len_prefixed(&mut out, params.target.as_bytes());
    push_len_prefixed(&mut out, params.payload.as_slice());
    out
}

// Lengths are bounded by MAX_PAYLOAD_LEN and address limits, well below u32::MAX.
fn push_len_prefixed(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    out.extend_from_slice(bytes);
}

/// SHA-256 digest of the canonical parameter encoding; used as the instantiate2 salt
pub fn params_digest(params: &IntentParams) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(encode_params(params));
    hasher.finalize().into()
}

/// Address at which `factory` instantiates the intent for `params`
pub fn derive_intent_address(
    api: &dyn Api,
    code_checksum: &Checksum,
    factory: &Addr,
    params: &IntentParams,
) -> StdResult<Addr> {
    let creator = api.addr_canonicalize(factory.as_str())?;
    let salt = params_digest(params);
    let canonical = instantiate2_address(code_checksum.as_slice(), &creator, &salt)
        .map_err(|e| StdError::generic_err(format!("instantiate2 address: {e}")))?;
    api.addr_humanize(&canonical)
}

/// Contract label used when instantiating the intent for `params`
pub fn intent_label(params: &IntentParams) -> String {
    let digest = params_digest(params);
    format!("standing-intent-{}", hex::encode(&digest[..8]))
}
