use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128,
    WasmMsg,
};
use serde::{Deserialize, Serialize};

/// Asset moved by an intent's fills
#[cw_serde]
pub enum FundingAsset {
    /// Native bank denom, attached to the target call as funds
    Native { denom: String },
    /// CW20 token, granted to the target as an allowance
    Cw20 { contract: Addr },
}

impl FundingAsset {
    /// Identifier used in events: the denom or the token contract address
    pub fn label(&self) -> String {
        match self {
            FundingAsset::Native { denom } => denom.clone(),
            FundingAsset::Cw20 { contract } => contract.to_string(),
        }
    }

    /// Message sending `amount` of this asset from the current contract to `recipient`
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        let msg = match self {
            FundingAsset::Native { denom } => BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }
            .into(),
            FundingAsset::Cw20 { contract } => WasmMsg::Execute {
                contract_addr: contract.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }
            .into(),
        };
        Ok(msg)
    }
}

/// Subset of the CW20 execute interface the intents invoke
#[cw_serde]
pub enum Cw20ExecuteMsg {
    Transfer { recipient: String, amount: Uint128 },
    IncreaseAllowance { spender: String, amount: Uint128 },
    DecreaseAllowance { spender: String, amount: Uint128 },
}

/// Subset of the CW20 query interface the intents invoke
#[cw_serde]
pub enum Cw20QueryMsg {
    Allowance { owner: String, spender: String },
}

/// CW20 allowance response; expiry is ignored
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

/// Current CW20 allowance `owner` has granted `spender`
pub fn query_allowance(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
) -> StdResult<Uint128> {
    let response: AllowanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
    )?;
    Ok(response.allowance)
}

/// Message moving the CW20 allowance of `spender` from `current` to exactly `desired`.
///
/// Returns `None` when no change is needed.
pub fn set_allowance_msg(
    token: &Addr,
    spender: &Addr,
    current: Uint128,
    desired: Uint128,
) -> StdResult<Option<CosmosMsg>> {
    let msg = if desired > current {
        Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount: desired - current,
        }
    } else if desired < current {
        Cw20ExecuteMsg::DecreaseAllowance {
            spender: spender.to_string(),
            amount: current - desired,
        }
    } else {
        return Ok(None);
    };

    Ok(Some(
        WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }
        .into(),
    ))
}

/// Message invoking `target` with `payload`, attaching `funds`
pub fn call_msg(target: &Addr, payload: &Binary, funds: Vec<Coin>) -> CosmosMsg {
    WasmMsg::Execute {
        contract_addr: target.to_string(),
        msg: payload.clone(),
        funds,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::MockApi;

    #[test]
    fn test_native_transfer_is_bank_send() {
        let api = MockApi::default();
        let recipient = api.addr_make("recipient");
        let asset = FundingAsset::Native {
            denom: "uatom".to_string(),
        };

        let msg = asset.transfer_msg(&recipient, Uint128::new(100)).unwrap();
        assert_eq!(
            msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin::new(100u128, "uatom")],
            })
        );
        assert_eq!(asset.label(), "uatom");
    }

    #[test]
    fn test_cw20_transfer_targets_token_contract() {
        let api = MockApi::default();
        let token = api.addr_make("token");
        let recipient = api.addr_make("recipient");
        let asset = FundingAsset::Cw20 {
            contract: token.clone(),
        };

        match asset.transfer_msg(&recipient, Uint128::new(7)).unwrap() {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, token.to_string());
                assert!(funds.is_empty());
                let decoded: Cw20ExecuteMsg = from_json(msg).unwrap();
                assert_eq!(
                    decoded,
                    Cw20ExecuteMsg::Transfer {
                        recipient: recipient.to_string(),
                        amount: Uint128::new(7),
                    }
                );
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_set_allowance_moves_to_exact_amount() {
        let api = MockApi::default();
        let token = api.addr_make("token");
        let spender = api.addr_make("spender");

        let increase = set_allowance_msg(&token, &spender, Uint128::new(10), Uint128::new(100))
            .unwrap()
            .unwrap();
        let decrease = set_allowance_msg(&token, &spender, Uint128::new(150), Uint128::new(100))
            .unwrap()
            .unwrap();
        let unchanged =
            set_allowance_msg(&token, &spender, Uint128::new(100), Uint128::new(100)).unwrap();

        let decode = |msg: CosmosMsg| -> Cw20ExecuteMsg {
            match msg {
                CosmosMsg::Wasm(WasmMsg::Execute { msg, .. }) => from_json(msg).unwrap(),
                other => panic!("unexpected message: {other:?}"),
            }
        };

        assert_eq!(
            decode(increase),
            Cw20ExecuteMsg::IncreaseAllowance {
                spender: spender.to_string(),
                amount: Uint128::new(90),
            }
        );
        assert_eq!(
            decode(decrease),
            Cw20ExecuteMsg::DecreaseAllowance {
                spender: spender.to_string(),
                amount: Uint128::new(50),
            }
        );
        assert!(unchanged.is_none());
    }

    #[test]
    fn test_allowance_response_ignores_expiry() {
        let parsed: AllowanceResponse =
            from_json(br#"{"allowance":"42","expires":{"never":{}}}"#).unwrap();
        assert_eq!(parsed.allowance, Uint128::new(42));
    }
}
