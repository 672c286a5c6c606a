use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use standing_intents_types::{CheckedParams, FundingAsset};

#[cw_serde]
pub struct Config {
    /// Factory that instantiated this intent
    pub factory: Addr,
    /// Account that requested creation
    pub filler_of_record: Addr,
    /// Asset resolved at instantiation
    pub funding_asset: FundingAsset,
}

/// Bound once at instantiation, never written again
pub const PARAMS: Item<CheckedParams> = Item::new("params");
pub const CONFIG: Item<Config> = Item::new("config");

/// Sum of all entries in FILL_COUNTS; the sequence the next fill must match
pub const OUTSTANDING_FILLS: Item<u64> = Item::new("outstanding_fills");
/// Successful fills over the instance's lifetime
pub const LIFETIME_FILLS: Item<u64> = Item::new("lifetime_fills");
pub const FILL_COUNTS: Map<&Addr, u64> = Map::new("fill_counts");
