use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Checksum, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Code id of the uploaded intent contract
    pub intent_code_id: u64,
    /// Denom moved by intents created without an asset
    pub native_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Instantiate the intent for these parameters at its derived address.
    /// Native funds attached to this message are forwarded to the new intent.
    CreateIntent {
        asset: Option<String>,
        amount: Uint128,
        target: String,
        payload: Binary,
    },
    /// Fill up to ten intents on behalf of the sender. Processing stops at the first empty
    /// entry; a failing entry does not affect the others.
    MultiFill {
        intents: Vec<String>,
        sequences: Vec<u64>,
    },
    /// Reclaim one fill from each of up to ten intents, with the same rules as `MultiFill`.
    MultiReclaim { intents: Vec<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Address the intent for these parameters has (or will have)
    #[returns(IntentAddressResponse)]
    IntentAddress {
        asset: Option<String>,
        amount: Uint128,
        target: String,
        payload: Binary,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub intent_code_id: u64,
    pub intent_checksum: Checksum,
    pub native_denom: String,
}

#[cw_serde]
pub struct IntentAddressResponse {
    pub address: String,
    /// Hex-encoded instantiate2 salt
    pub salt: String,
}

/// Data returned by `CreateIntent`
#[cw_serde]
pub struct CreateIntentResponse {
    pub address: String,
}

/// Identifies a batch entry in reply payloads
#[cw_serde]
pub struct BatchEntry {
    pub index: u32,
    pub intent: String,
}
