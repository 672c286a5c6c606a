use cosmwasm_std::{Binary, Deps, Env, StdResult, Uint128};

use crate::helpers::{intent_params, resolve_intent_address};
use crate::msg::{ConfigResponse, IntentAddressResponse};
use crate::state::CONFIG;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        intent_code_id: config.intent_code_id,
        intent_checksum: config.intent_checksum,
        native_denom: config.native_denom,
    })
}

pub fn query_intent_address(
    deps: Deps,
    env: Env,
    asset: Option<String>,
    amount: Uint128,
    target: String,
    payload: Binary,
) -> StdResult<IntentAddressResponse> {
    let config = CONFIG.load(deps.storage)?;
    let params = intent_params(asset, amount, target, payload);
    let (address, salt) = resolve_intent_address(deps, &env, &config, &params)?;
    Ok(IntentAddressResponse {
        address: address.to_string(),
        salt: hex::encode(salt),
    })
}
