pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::price_table::PriceTableConfig;
pub use core::{kiosk::Kiosk, pricing::PriceTable, prompt::Console};
pub use utils::error::{CinemaError, InputError, Result};
