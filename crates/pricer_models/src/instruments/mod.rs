//! Option, underlying and market definitions.
//!
//! Every type validates in its constructor and is immutable afterwards, so
//! the pricing model only ever sees positive strikes, spots, volatilities
//! and expiries and a finite rate.
//!
//! - [`VanillaOption`]: strike, calendar days to expiry, [`OptionType`]
//! - [`Underlying`]: symbol, spot, annualised volatility
//! - [`MarketContext`]: risk-free rate
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{MarketContext, OptionType, Underlying, VanillaOption};
//!
//! let option = VanillaOption::new(50.0, 60.0, "call".parse::<OptionType>().unwrap()).unwrap();
//! let underlying = Underlying::new("XYZ", 45.0, 0.30).unwrap();
//! let market = MarketContext::new(0.10).unwrap();
//! assert!(option.option_type().is_call());
//! # let _ = (underlying, market);
//! ```

mod error;
mod market;
mod underlying;
mod vanilla;

pub use error::InstrumentError;
pub use market::MarketContext;
pub use underlying::Underlying;
pub use vanilla::{OptionType, VanillaOption, DAYS_PER_YEAR};
