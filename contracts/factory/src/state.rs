use cosmwasm_schema::cw_serde;
use cosmwasm_std::Checksum;
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// Code id every intent is instantiated from
    pub intent_code_id: u64,
    /// Checksum of that code, the template digest in address derivation
    pub intent_checksum: Checksum,
    /// Denom moved by intents created without an asset
    pub native_denom: String,
}

pub const CONFIG: Item<Config> = Item::new("config");
