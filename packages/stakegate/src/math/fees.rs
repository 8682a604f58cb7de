use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::Env;

use crate::constants::{BPS_DENOMINATOR, MAX_FEE_BPS};
use crate::error::{ErrorCode, StakeGateResult};
use crate::math::safe_math::SafeMath;

/// How a gross deposit settles before the swap leg runs.
///
/// The whole deposit is consumed: whatever is not taken as the ecosystem or
/// gateway fee becomes the swap input, so the integer-division remainder
/// always stays on the depositor's side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DepositSplit {
    pub ecosystem_fee: i128,
    pub gateway_fee: i128,
    pub swap_input: i128,
}

/// Settle a gross deposit against the configured fee rates.
///
/// The ecosystem fee is charged on the gross deposit, but only once the
/// gateway's cut reaches the activation threshold. The gateway fee is then
/// charged on the remainder. Both rates floor.
pub fn split_deposit(
    env: &Env,
    deposit: i128,
    gateway_fee_bps: i64,
    ecosystem_fee_bps: i64,
    ecosystem_fee_threshold_bps: i64,
) -> StakeGateResult<DepositSplit> {
    if deposit <= 0 {
        return Err(ErrorCode::InsufficientDeposit);
    }
    if !(0..=MAX_FEE_BPS).contains(&gateway_fee_bps)
        || !(0..=MAX_FEE_BPS).contains(&ecosystem_fee_bps)
        || !(0..=MAX_FEE_BPS).contains(&ecosystem_fee_threshold_bps)
    {
        return Err(ErrorCode::InvalidFee);
    }

    let ecosystem_fee = if gateway_fee_bps >= ecosystem_fee_threshold_bps {
        deposit
            .fixed_mul_floor(ecosystem_fee_bps as i128, BPS_DENOMINATOR)
            .ok_or(ErrorCode::MathError)?
    } else {
        0
    };

    let after_ecosystem = deposit.safe_sub(ecosystem_fee, env)?;
    let gateway_fee = after_ecosystem
        .fixed_mul_floor(gateway_fee_bps as i128, BPS_DENOMINATOR)
        .ok_or(ErrorCode::MathError)?;
    let swap_input = after_ecosystem.safe_sub(gateway_fee, env)?;

    Ok(DepositSplit {
        ecosystem_fee,
        gateway_fee,
        swap_input,
    })
}
