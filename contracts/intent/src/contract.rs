#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
    SubMsgResult,
};
use standing_intents_types::derive_intent_address;

use crate::error::ContractError;
use crate::handlers::{execute_fill, execute_reclaim, stage_for_reply};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::queries::{query_fill_count, query_fillers, query_params, query_state};
use crate::state::{Config, CONFIG, LIFETIME_FILLS, OUTSTANDING_FILLS, PARAMS};

/// Binds the intent parameters. Only the factory whose derivation produced this contract's
/// address may instantiate it.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if PARAMS.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized {});
    }

    let expected = derive_intent_address(deps.api, &msg.code_checksum, &info.sender, &msg.params)?;
    if expected != env.contract.address {
        return Err(ContractError::Unauthorized {});
    }

    let params = msg.params.check(deps.api)?;
    let config = Config {
        factory: info.sender.clone(),
        filler_of_record: deps.api.addr_validate(&msg.filler_of_record)?,
        funding_asset: params.funding_asset(&msg.native_denom),
    };

    PARAMS.save(deps.storage, &params)?;
    CONFIG.save(deps.storage, &config)?;
    OUTSTANDING_FILLS.save(deps.storage, &0)?;
    LIFETIME_FILLS.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("factory", info.sender)
        .add_attribute("filler_of_record", config.filler_of_record)
        .add_attribute("asset", config.funding_asset.label())
        .add_attribute("amount", params.amount)
        .add_attribute("target", params.target))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Fill {
            expected_sequence,
            on_behalf_of,
        } => execute_fill(deps, env, info, expected_sequence, on_behalf_of),
        ExecuteMsg::Reclaim { on_behalf_of } => execute_reclaim(deps, info, on_behalf_of),
    }
}

/// Asset sub-messages are dispatched reply-on-error; any failure aborts the whole
/// fill or reclaim.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let stage = stage_for_reply(msg.id).ok_or(ContractError::UnknownReplyId { id: msg.id })?;

    match msg.result {
        SubMsgResult::Err(reason) => Err(ContractError::TransferFailed {
            stage: stage.to_string(),
            reason,
        }),
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Params {} => to_json_binary(&query_params(deps)?),
        QueryMsg::State {} => to_json_binary(&query_state(deps)?),
        QueryMsg::FillCount { address } => to_json_binary(&query_fill_count(deps, address)?),
        QueryMsg::Fillers { start_after, limit } => {
            to_json_binary(&query_fillers(deps, start_after, limit)?)
        }
    }
}
