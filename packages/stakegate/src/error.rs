use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    MathError = 3,
    InvalidFee = 4,
    InsufficientDeposit = 5,
    InsufficientOutputAmount = 6,
    DeadlineExpired = 7,
    InvalidPath = 8,
    MissingRole = 10,
    PositionNotFound = 12,
    NotPositionOwner = 13,
    InvalidAmount = 14,
}

pub type StakeGateResult<T> = Result<T, ErrorCode>;
