#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    from_json, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult,
};

use crate::error::ContractError;
use crate::handlers::{
    batch_entry_failed, execute_create_intent, execute_multi_fill, execute_multi_reclaim,
};
use crate::helpers::batch_operation;
use crate::msg::{BatchEntry, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::queries::{query_config, query_intent_address};
use crate::state::{Config, CONFIG};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidNativeDenom {});
    }

    let code_info = deps.querier.query_wasm_code_info(msg.intent_code_id)?;
    let config = Config {
        intent_code_id: msg.intent_code_id,
        intent_checksum: code_info.checksum,
        native_denom: msg.native_denom,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("intent_code_id", config.intent_code_id.to_string())
        .add_attribute("intent_checksum", config.intent_checksum.to_hex()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateIntent {
            asset,
            amount,
            target,
            payload,
        } => execute_create_intent(deps, env, info, asset, amount, target, payload),
        ExecuteMsg::MultiFill { intents, sequences } => {
            execute_multi_fill(deps, info, intents, sequences)
        }
        ExecuteMsg::MultiReclaim { intents } => execute_multi_reclaim(deps, info, intents),
    }
}

/// Batch entries are dispatched reply-on-error. A failed entry has already been rolled back;
/// record it and let the rest of the batch stand.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let operation = batch_operation(msg.id).ok_or(ContractError::UnknownReplyId { id: msg.id })?;

    match msg.result {
        SubMsgResult::Err(error) => {
            let entry: BatchEntry = from_json(&msg.payload)?;
            Ok(Response::new().add_event(batch_entry_failed(
                operation,
                entry.index,
                &entry.intent,
                &error,
            )))
        }
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IntentAddress {
            asset,
            amount,
            target,
            payload,
        } => to_json_binary(&query_intent_address(
            deps, env, asset, amount, target, payload,
        )?),
    }
}
