use cosmwasm_std::{Addr, Binary, Event, Uint128};

pub const INTENT_CREATED_EVENT: &str = "intent_created";
pub const INTENT_SIGNAL_EVENT: &str = "intent_signal";
pub const BATCH_ENTRY_FAILED_EVENT: &str = "batch_entry_failed";

/// Creation notification consumed by off-chain observers
pub fn intent_created_event(instance: &Addr, creator: &Addr, asset: &str, amount: Uint128) -> Event {
    Event::new(INTENT_CREATED_EVENT)
        .add_attribute("instance", instance)
        .add_attribute("creator", creator)
        .add_attribute("asset", asset)
        .add_attribute("amount", amount)
}

/// Cross-domain signal; `payload` is carried base64-encoded
pub fn intent_signal_event(
    caller: &Addr,
    destination_domain: u32,
    asset: Option<&str>,
    amount: Uint128,
    target: &str,
    payload: &Binary,
) -> Event {
    Event::new(INTENT_SIGNAL_EVENT)
        .add_attribute("caller", caller)
        .add_attribute("destination_domain", destination_domain.to_string())
        .add_attribute("asset", asset.unwrap_or_default())
        .add_attribute("amount", amount)
        .add_attribute("target", target)
        .add_attribute("payload", payload.to_base64())
}
