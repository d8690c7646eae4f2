mod helpers;
mod secret;
mod usd;

pub use helpers::parse_boolean_flag;
pub use secret::Secret;
pub use usd::{UsdCents, UsdConversionError, USD_CURRENCY_CODE, USD_CURRENCY_CODE_LOWER};
