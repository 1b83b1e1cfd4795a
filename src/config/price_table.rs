use crate::core::{PriceBand, PriceTable};
use crate::utils::error::{CinemaError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// Price table shipped with the binary. Omit a bound to leave that side open.
pub const DEFAULT_PRICE_TABLE: &str = r#"
[[bands]]
name = "Barnpris"
lower_exclusive = 0
upper_exclusive = 5
price = 0

[[bands]]
name = "Ungdomspris"
lower_exclusive = 0
upper_exclusive = 19
price = 80

[[bands]]
name = "Pensionärspris"
lower_exclusive = 65
upper_exclusive = 200
price = 90

[[bands]]
name = "Standardpris"
price = 120
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTableConfig {
    pub bands: Vec<PriceBand>,
}

impl PriceTableConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CinemaError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Parses and validates the embedded default table.
    pub fn default_table() -> Result<Self> {
        let config = Self::from_toml_str(DEFAULT_PRICE_TABLE)?;
        config.validate()?;
        Ok(config)
    }

    pub fn into_table(self) -> PriceTable {
        PriceTable::new(self.bands)
    }
}

impl Validate for PriceTableConfig {
    fn validate(&self) -> Result<()> {
        if self.bands.is_empty() {
            return Err(CinemaError::InvalidConfigValueError {
                field: "bands".to_string(),
                value: "[]".to_string(),
                reason: "At least one price band is required".to_string(),
            });
        }

        for band in &self.bands {
            validation::validate_non_empty_string("bands.name", &band.name)?;
            validation::validate_bounds(
                &format!("bands.{}", band.name),
                band.lower_exclusive,
                band.upper_exclusive,
            )?;
        }

        validation::validate_unique_names("bands.name", self.bands.iter().map(|b| b.name.as_str()))
    }
}
