use cosmwasm_std::{Addr, Binary, Coin, Deps, Env, StdResult, Uint128};
use standing_intents_types::{derive_intent_address, params_digest, IntentParams};

use crate::error::ContractError;
use crate::state::Config;

pub const REPLY_BATCH_FILL: u64 = 1;
pub const REPLY_BATCH_RECLAIM: u64 = 2;

pub fn intent_params(
    asset: Option<String>,
    amount: Uint128,
    target: String,
    payload: Binary,
) -> IntentParams {
    IntentParams {
        asset,
        amount,
        target,
        payload,
    }
}

/// Derived address and salt of the intent for `params` under this factory.
///
/// Both intent creation and the address query go through here.
pub fn resolve_intent_address(
    deps: Deps,
    env: &Env,
    config: &Config,
    params: &IntentParams,
) -> StdResult<(Addr, [u8; 32])> {
    let address =
        derive_intent_address(deps.api, &config.intent_checksum, &env.contract.address, params)?;
    Ok((address, params_digest(params)))
}

/// Batch operation a reply id belongs to
pub fn batch_operation(reply_id: u64) -> Option<&'static str> {
    match reply_id {
        REPLY_BATCH_FILL => Some("fill"),
        REPLY_BATCH_RECLAIM => Some("reclaim"),
        _ => None,
    }
}

/// Reject attached coins the receiving contract could never pay out.
///
/// `denom` is the only denom accepted; `None` accepts no coins at all.
pub fn check_funds(funds: &[Coin], denom: Option<&str>) -> Result<(), ContractError> {
    if funds.iter().all(|coin| Some(coin.denom.as_str()) == denom) {
        return Ok(());
    }

    Err(ContractError::InvalidFunds {
        expected: match denom {
            Some(denom) => format!("only {denom}"),
            None => "no funds".to_string(),
        },
        got: funds
            .iter()
            .map(Coin::to_string)
            .collect::<Vec<_>>()
            .join(","),
    })
}
