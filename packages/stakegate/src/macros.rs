// Validate all bps values to be within the range 0..=10_000
#[macro_export]
macro_rules! validate_bps {
    ($env:expr, $($value:expr),+) => {
        $(
            if !(0..=$crate::constants::MAX_FEE_BPS).contains(&$value) {
                soroban_sdk::panic_with_error!($env, $crate::error::ErrorCode::InvalidFee);
            }
        )+
    };
}
