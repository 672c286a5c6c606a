use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, Env, Event, MessageInfo, Response, SubMsg, Uint128, WasmMsg,
};
use standing_intents_intent::msg::{
    ExecuteMsg as IntentExecuteMsg, InstantiateMsg as IntentInstantiateMsg,
};
use standing_intents_types::{
    intent_created_event, intent_label, BATCH_ENTRY_FAILED_EVENT, MAX_BATCH_SIZE,
};

use crate::error::ContractError;
use crate::helpers::{
    check_funds, intent_params, resolve_intent_address, REPLY_BATCH_FILL, REPLY_BATCH_RECLAIM,
};
use crate::msg::{BatchEntry, CreateIntentResponse};
use crate::state::CONFIG;

pub fn execute_create_intent(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: Option<String>,
    amount: Uint128,
    target: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let params = intent_params(asset, amount, target, payload);
    let checked = params.check(deps.api)?;

    // Forwarded funds are only spendable by a native intent, and only in its denom
    let spendable_denom = checked.asset.is_none().then_some(config.native_denom.as_str());
    check_funds(&info.funds, spendable_denom)?;

    let (address, salt) = resolve_intent_address(deps.as_ref(), &env, &config, &params)?;

    // instantiate2 cannot redeploy to an occupied address
    if deps.querier.query_wasm_contract_info(&address).is_ok() {
        return Err(ContractError::IntentExists {
            address: address.to_string(),
        });
    }

    let instantiate = WasmMsg::Instantiate2 {
        admin: None,
        code_id: config.intent_code_id,
        label: intent_label(&params),
        msg: to_json_binary(&IntentInstantiateMsg {
            params,
            native_denom: config.native_denom.clone(),
            code_checksum: config.intent_checksum,
            filler_of_record: info.sender.to_string(),
        })?,
        funds: info.funds.clone(),
        salt: Binary::from(salt.to_vec()),
    };

    let asset_label = checked.funding_asset(&config.native_denom).label();

    Ok(Response::new()
        .add_message(instantiate)
        .add_event(intent_created_event(
            &address,
            &info.sender,
            &asset_label,
            checked.amount,
        ))
        .add_attribute("action", "create_intent")
        .add_attribute("intent", address.to_string())
        .add_attribute("creator", info.sender)
        .set_data(to_json_binary(&CreateIntentResponse {
            address: address.to_string(),
        })?))
}

pub fn execute_multi_fill(
    deps: DepsMut,
    info: MessageInfo,
    intents: Vec<String>,
    sequences: Vec<u64>,
) -> Result<Response, ContractError> {
    check_funds(&info.funds, None)?;
    check_batch_size(intents.len())?;
    if sequences.len() != intents.len() {
        return Err(ContractError::BatchLengthMismatch {
            intents: intents.len(),
            sequences: sequences.len(),
        });
    }

    let entries = intents.into_iter().zip(sequences).map(|(intent, expected_sequence)| {
        let msg = IntentExecuteMsg::Fill {
            expected_sequence,
            on_behalf_of: Some(info.sender.to_string()),
        };
        (intent, msg)
    });

    dispatch_batch(deps, "multi_fill", "fill", REPLY_BATCH_FILL, entries)
}

pub fn execute_multi_reclaim(
    deps: DepsMut,
    info: MessageInfo,
    intents: Vec<String>,
) -> Result<Response, ContractError> {
    check_funds(&info.funds, None)?;
    check_batch_size(intents.len())?;

    let entries = intents.into_iter().map(|intent| {
        let msg = IntentExecuteMsg::Reclaim {
            on_behalf_of: Some(info.sender.to_string()),
        };
        (intent, msg)
    });

    dispatch_batch(deps, "multi_reclaim", "reclaim", REPLY_BATCH_RECLAIM, entries)
}

fn check_batch_size(size: usize) -> Result<(), ContractError> {
    if size > MAX_BATCH_SIZE {
        return Err(ContractError::BatchTooLarge {
            size,
            max: MAX_BATCH_SIZE,
        });
    }
    Ok(())
}

/// Dispatch each entry as an isolated sub-message until the first empty slot.
///
/// Entries whose address does not parse are reported immediately and skipped; execution
/// failures come back through `reply` and are reported there.
fn dispatch_batch(
    deps: DepsMut,
    action: &str,
    operation: &str,
    reply_id: u64,
    entries: impl Iterator<Item = (String, IntentExecuteMsg)>,
) -> Result<Response, ContractError> {
    let mut response = Response::new();
    let mut dispatched = 0u32;

    for (index, (intent, msg)) in (0u32..).zip(entries) {
        if intent.is_empty() {
            break;
        }

        let contract = match deps.api.addr_validate(&intent) {
            Ok(contract) => contract,
            Err(e) => {
                response = response.add_event(batch_entry_failed(
                    operation,
                    index,
                    &intent,
                    &e.to_string(),
                ));
                continue;
            }
        };

        let payload = to_json_binary(&BatchEntry {
            index,
            intent: contract.to_string(),
        })?;
        let execute = WasmMsg::Execute {
            contract_addr: contract.to_string(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        };

        response = response
            .add_submessage(SubMsg::reply_on_error(execute, reply_id).with_payload(payload));
        dispatched += 1;
    }

    Ok(response
        .add_attribute("action", action)
        .add_attribute("dispatched", dispatched.to_string()))
}

pub fn batch_entry_failed(operation: &str, index: u32, intent: &str, error: &str) -> Event {
    Event::new(BATCH_ENTRY_FAILED_EVENT)
        .add_attribute("operation", operation)
        .add_attribute("index", index.to_string())
        .add_attribute("intent", intent)
        .add_attribute("error", error)
}
