pub mod period;
pub mod transaction;
