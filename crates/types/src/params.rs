use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Binary, Uint128};
use thiserror::Error;

use crate::FundingAsset;

/// Upper bound on the call data an intent may carry
pub const MAX_PAYLOAD_LEN: usize = 4096;

/// The four values that define an intent, as submitted by a caller
#[cw_serde]
pub struct IntentParams {
    /// CW20 contract moved by each fill; `None` moves the native denom
    pub asset: Option<String>,

    /// Amount moved per fill, in base units
    pub amount: Uint128,

    /// Contract invoked by each fill
    pub target: String,

    /// Opaque message forwarded to `target`
    pub payload: Binary,
}

#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("Intent amount must be greater than zero")]
    ZeroAmount,

    #[error("Payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("Invalid {field} address: {reason}")]
    InvalidAddress { field: &'static str, reason: String },
}

impl IntentParams {
    pub fn new(
        asset: Option<String>,
        amount: impl Into<Uint128>,
        target: impl Into<String>,
        payload: impl Into<Binary>,
    ) -> Self {
        Self {
            asset,
            amount: amount.into(),
            target: target.into(),
            payload: payload.into(),
        }
    }

    /// Validate the parameters and resolve addresses.
    ///
    /// Address fields must already be in normalized form, so the digest computed from the
    /// submitted strings is the same one any other caller computes for this intent.
    pub fn check(&self, api: &dyn Api) -> Result<CheckedParams, ParamsError> {
        if self.amount.is_zero() {
            return Err(ParamsError::ZeroAmount);
        }
        if self.payload.len() > MAX_PAYLOAD_LEN {
            return Err(ParamsError::PayloadTooLarge {
                len: self.payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        let target = validate_addr(api, "target", &self.target)?;
        let asset = self
            .asset
            .as_deref()
            .map(|asset| validate_addr(api, "asset", asset))
            .transpose()?;

        Ok(CheckedParams {
            asset,
            amount: self.amount,
            target,
            payload: self.payload.clone(),
        })
    }
}

fn validate_addr(api: &dyn Api, field: &'static str, input: &str) -> Result<Addr, ParamsError> {
    api.addr_validate(input)
        .map_err(|e| ParamsError::InvalidAddress {
            field,
            reason: e.to_string(),
        })
}

/// Parameters after validation, as bound into an intent instance
#[cw_serde]
pub struct CheckedParams {
    pub asset: Option<Addr>,
    pub amount: Uint128,
    pub target: Addr,
    pub payload: Binary,
}

impl CheckedParams {
    /// Resolve the asset moved by this intent against the chain's native denom
    pub fn funding_asset(&self, native_denom: &str) -> FundingAsset {
        match &self.asset {
            Some(contract) => FundingAsset::Cw20 {
                contract: contract.clone(),
            },
            None => FundingAsset::Native {
                denom: native_denom.to_string(),
            },
        }
    }

    pub fn unchecked(&self) -> IntentParams {
        IntentParams {
            asset: self.asset.as_ref().map(Addr::to_string),
            amount: self.amount,
            target: self.target.to_string(),
            payload: self.payload.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;

    #[test]
    fn test_check_accepts_native_intent() {
        let api = MockApi::default();
        let target = api.addr_make("target");
        let params = IntentParams::new(None, 100u128, target.to_string(), b"{}".to_vec());

        let checked = params.check(&api).unwrap();
        assert_eq!(checked.asset, None);
        assert_eq!(checked.target, target);
        assert_eq!(checked.unchecked(), params);
    }

    #[test]
    fn test_check_rejects_zero_amount() {
        let api = MockApi::default();
        let params = IntentParams::new(None, 0u128, api.addr_make("target"), b"{}".to_vec());

        assert_eq!(params.check(&api).unwrap_err(), ParamsError::ZeroAmount);
    }

    #[test]
    fn test_check_rejects_oversized_payload() {
        let api = MockApi::default();
        let params = IntentParams::new(
            None,
            1u128,
            api.addr_make("target"),
            vec![0u8; MAX_PAYLOAD_LEN + 1],
        );

        assert_eq!(
            params.check(&api).unwrap_err(),
            ParamsError::PayloadTooLarge {
                len: MAX_PAYLOAD_LEN + 1,
                max: MAX_PAYLOAD_LEN,
            }
        );
    }

    #[test]
    fn test_check_accepts_payload_at_limit() {
        let api = MockApi::default();
        let params = IntentParams::new(
            None,
            1u128,
            api.addr_make("target"),
            vec![0u8; MAX_PAYLOAD_LEN],
        );

        assert!(params.check(&api).is_ok());
    }

    #[test]
    fn test_check_rejects_bad_addresses() {
        let api = MockApi::default();
        let bad_target = IntentParams::new(None, 1u128, "not-an-address", b"{}".to_vec());
        assert!(matches!(
            bad_target.check(&api),
            Err(ParamsError::InvalidAddress { field: "target", .. })
        ));

        let bad_asset = IntentParams::new(
            Some("junk".to_string()),
            1u128,
            api.addr_make("target"),
            b"{}".to_vec(),
        );
        assert!(matches!(
            bad_asset.check(&api),
            Err(ParamsError::InvalidAddress { field: "asset", .. })
        ));
    }

    #[test]
    fn test_funding_asset_resolution() {
        let api = MockApi::default();
        let token = api.addr_make("token");
        let params = IntentParams::new(
            Some(token.to_string()),
            5u128,
            api.addr_make("target"),
            b"{}".to_vec(),
        );

        let checked = params.check(&api).unwrap();
        assert_eq!(
            checked.funding_asset("uatom"),
            FundingAsset::Cw20 { contract: token }
        );

        let native = IntentParams::new(None, 5u128, api.addr_make("target"), b"{}".to_vec())
            .check(&api)
            .unwrap();
        assert_eq!(
            native.funding_asset("uatom"),
            FundingAsset::Native {
                denom: "uatom".to_string()
            }
        );
    }
}
