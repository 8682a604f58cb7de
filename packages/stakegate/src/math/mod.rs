pub mod fees;
pub mod safe_math;
