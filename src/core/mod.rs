pub mod demos;
pub mod kiosk;
pub mod pricing;
pub mod prompt;
pub mod validators;

pub use crate::domain::model::{GroupQuote, MenuChoice, PriceBand, PriceQuote};
pub use crate::domain::ports::LineValidator;
pub use crate::utils::error::Result;
pub use pricing::PriceTable;
