pub mod dividend;
pub mod error;
pub mod types;

pub use error::DividendSimError;
pub use types::*;

/// Standard result type for all dividend-simulation operations
pub type DividendSimResult<T> = Result<T, DividendSimError>;
