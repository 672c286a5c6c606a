use cosmwasm_std::{Addr, Coin, Deps, DepsMut, Env, MessageInfo, Response, SubMsg};
use standing_intents_types::{call_msg, query_allowance, set_allowance_msg, FundingAsset};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, FILL_COUNTS, LIFETIME_FILLS, OUTSTANDING_FILLS, PARAMS};

pub const REPLY_SET_ALLOWANCE: u64 = 1;
pub const REPLY_TARGET_CALL: u64 = 2;
pub const REPLY_RETURN_FUNDS: u64 = 3;

/// Name of the asset step a reply id belongs to
pub fn stage_for_reply(id: u64) -> Option<&'static str> {
    match id {
        REPLY_SET_ALLOWANCE => Some("set_allowance"),
        REPLY_TARGET_CALL => Some("target_call"),
        REPLY_RETURN_FUNDS => Some("return_funds"),
        _ => None,
    }
}

/// The account a fill or reclaim is recorded against.
///
/// Direct callers act for themselves; the factory relays batch entries for the account that
/// submitted the batch.
fn resolve_actor(
    deps: Deps,
    config: &Config,
    sender: &Addr,
    on_behalf_of: Option<String>,
) -> Result<Addr, ContractError> {
    match on_behalf_of {
        None => Ok(sender.clone()),
        Some(account) => {
            if *sender != config.factory {
                return Err(ContractError::Unauthorized {});
            }
            Ok(deps.api.addr_validate(&account)?)
        }
    }
}

/// Fill and reclaim move only the instance's own balance and accept no attached coins
fn nonpayable(info: &MessageInfo) -> Result<(), ContractError> {
    if info.funds.is_empty() {
        return Ok(());
    }
    Err(ContractError::InvalidFunds {
        expected: "no funds".to_string(),
        got: info
            .funds
            .iter()
            .map(Coin::to_string)
            .collect::<Vec<_>>()
            .join(","),
    })
}

pub fn execute_fill(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    expected_sequence: u64,
    on_behalf_of: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    let params = PARAMS.load(deps.storage)?;
    let filler = resolve_actor(deps.as_ref(), &config, &info.sender, on_behalf_of)?;

    let outstanding = OUTSTANDING_FILLS.load(deps.storage)?;
    if expected_sequence != outstanding {
        return Err(ContractError::SequenceMismatch {
            expected: outstanding,
            got: expected_sequence,
        });
    }

    let messages = match &config.funding_asset {
        FundingAsset::Native { denom } => vec![SubMsg::reply_on_error(
            call_msg(
                &params.target,
                &params.payload,
                vec![Coin {
                    denom: denom.clone(),
                    amount: params.amount,
                }],
            ),
            REPLY_TARGET_CALL,
        )],
        FundingAsset::Cw20 { contract } => {
            let current = query_allowance(
                &deps.querier,
                contract,
                &env.contract.address,
                &params.target,
            )
            .map_err(|e| ContractError::TransferFailed {
                stage: "query_allowance".to_string(),
                reason: e.to_string(),
            })?;

            let mut messages = Vec::with_capacity(2);
            if let Some(grant) = set_allowance_msg(contract, &params.target, current, params.amount)? {
                messages.push(SubMsg::reply_on_error(grant, REPLY_SET_ALLOWANCE));
            }
            messages.push(SubMsg::reply_on_error(
                call_msg(&params.target, &params.payload, vec![]),
                REPLY_TARGET_CALL,
            ));
            messages
        }
    };

    let filler_count = FILL_COUNTS
        .may_load(deps.storage, &filler)?
        .unwrap_or_default()
        .checked_add(1)
        .ok_or(ContractError::CounterOverflow {})?;
    let outstanding = outstanding
        .checked_add(1)
        .ok_or(ContractError::CounterOverflow {})?;
    let position = LIFETIME_FILLS
        .load(deps.storage)?
        .checked_add(1)
        .ok_or(ContractError::CounterOverflow {})?;

    FILL_COUNTS.save(deps.storage, &filler, &filler_count)?;
    OUTSTANDING_FILLS.save(deps.storage, &outstanding)?;
    LIFETIME_FILLS.save(deps.storage, &position)?;

    Ok(Response::new()
        .add_submessages(messages)
        .add_attribute("action", "fill")
        .add_attribute("filler", filler)
        .add_attribute("sequence", expected_sequence.to_string())
        .add_attribute("outstanding_fills", outstanding.to_string())
        .add_attribute("fill_position", position.to_string())
        .add_attribute("asset", config.funding_asset.label())
        .add_attribute("amount", params.amount)
        .add_attribute("target", params.target))
}

pub fn execute_reclaim(
    deps: DepsMut,
    info: MessageInfo,
    on_behalf_of: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    let params = PARAMS.load(deps.storage)?;
    let filler = resolve_actor(deps.as_ref(), &config, &info.sender, on_behalf_of)?;

    let no_fill = || ContractError::NoOutstandingFill {
        filler: filler.to_string(),
    };

    let filler_count = FILL_COUNTS
        .may_load(deps.storage, &filler)?
        .unwrap_or_default()
        .checked_sub(1)
        .ok_or_else(no_fill)?;
    let outstanding = OUTSTANDING_FILLS
        .load(deps.storage)?
        .checked_sub(1)
        .ok_or_else(no_fill)?;

    if filler_count == 0 {
        FILL_COUNTS.remove(deps.storage, &filler);
    } else {
        FILL_COUNTS.save(deps.storage, &filler, &filler_count)?;
    }
    OUTSTANDING_FILLS.save(deps.storage, &outstanding)?;

    let refund = config.funding_asset.transfer_msg(&filler, params.amount)?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(refund, REPLY_RETURN_FUNDS))
        .add_attribute("action", "reclaim")
        .add_attribute("filler", filler)
        .add_attribute("outstanding_fills", outstanding.to_string())
        .add_attribute("asset", config.funding_asset.label())
        .add_attribute("amount", params.amount))
}
