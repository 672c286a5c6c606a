use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Emit an `intent_signal` event for relayers watching this chain.
    ///
    /// Nothing is stored and nothing is acknowledged. `asset` and `target` refer to the
    /// destination domain and are passed through unvalidated.
    Broadcast {
        destination_domain: u32,
        asset: Option<String>,
        amount: Uint128,
        target: String,
        payload: Binary,
    },
}
