use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Checksum, Uint128};
use standing_intents_types::IntentParams;

#[cw_serde]
pub struct InstantiateMsg {
    /// Action bound to this instance
    pub params: IntentParams,
    /// Denom moved when `params.asset` is unset
    pub native_denom: String,
    /// Checksum of this contract's code, used to verify the instance address
    pub code_checksum: Checksum,
    /// Account that requested creation, recorded for observers
    pub filler_of_record: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Perform the bound action once.
    ///
    /// `expected_sequence` must equal the current outstanding fill count; a stale value
    /// means another fill landed first and the caller should re-read and retry.
    /// Only the factory may fill on behalf of another account.
    Fill {
        expected_sequence: u64,
        on_behalf_of: Option<String>,
    },
    /// Undo one fill previously performed by the caller and return the funded amount.
    /// Only the factory may reclaim on behalf of another account.
    Reclaim { on_behalf_of: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ParamsResponse)]
    Params {},

    #[returns(StateResponse)]
    State {},

    #[returns(FillCountResponse)]
    FillCount { address: String },

    #[returns(FillersResponse)]
    Fillers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ParamsResponse {
    pub asset: Option<String>,
    /// Denom or token contract moved by each fill
    pub funding_asset: String,
    pub amount: Uint128,
    pub target: String,
    pub payload: Binary,
}

#[cw_serde]
pub struct StateResponse {
    pub factory: String,
    pub filler_of_record: String,
    /// Also the sequence value the next fill must submit
    pub outstanding_fills: u64,
    pub lifetime_fills: u64,
}

#[cw_serde]
pub struct FillCountResponse {
    pub address: String,
    pub count: u64,
}

#[cw_serde]
pub struct FillersResponse {
    pub fillers: Vec<FillCountResponse>,
}
