use rust_decimal::Decimal;

pub type ClientId = u16;
pub type TransactionId = u32;
pub type Amount = Decimal;

/// Number of fractional digits every emitted amount carries.
pub const AMOUNT_SCALE: u32 = 4;
