#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};
use standing_intents_types::intent_signal_event;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    Ok(Response::new().add_attribute("action", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    _deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Broadcast {
            destination_domain,
            asset,
            amount,
            target,
            payload,
        } => Ok(Response::new()
            .add_event(intent_signal_event(
                &info.sender,
                destination_domain,
                asset.as_deref(),
                amount,
                &target,
                &payload,
            ))
            .add_attribute("action", "broadcast")),
    }
}
