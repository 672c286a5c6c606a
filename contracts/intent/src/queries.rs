use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{FillCountResponse, FillersResponse, ParamsResponse, StateResponse};
use crate::state::{CONFIG, FILL_COUNTS, LIFETIME_FILLS, OUTSTANDING_FILLS, PARAMS};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

pub fn query_params(deps: Deps) -> StdResult<ParamsResponse> {
    let params = PARAMS.load(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(ParamsResponse {
        asset: params.asset.map(|a| a.to_string()),
        funding_asset: config.funding_asset.label(),
        amount: params.amount,
        target: params.target.to_string(),
        payload: params.payload,
    })
}

pub fn query_state(deps: Deps) -> StdResult<StateResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(StateResponse {
        factory: config.factory.to_string(),
        filler_of_record: config.filler_of_record.to_string(),
        outstanding_fills: OUTSTANDING_FILLS.load(deps.storage)?,
        lifetime_fills: LIFETIME_FILLS.load(deps.storage)?,
    })
}

pub fn query_fill_count(deps: Deps, address: String) -> StdResult<FillCountResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let count = FILL_COUNTS.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(FillCountResponse { address, count })
}

pub fn query_fillers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<FillersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;

    let fillers = FILL_COUNTS
        .range(
            deps.storage,
            start.as_ref().map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| {
            item.map(|(address, count)| FillCountResponse {
                address: address.to_string(),
                count,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(FillersResponse { fillers })
}
