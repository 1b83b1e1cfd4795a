use crate::core::{GroupQuote, PriceBand, PriceQuote};
use crate::utils::error::{CinemaError, Result};

/// Ordered, read-only list of price bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    bands: Vec<PriceBand>,
}

impl PriceTable {
    pub fn new(bands: Vec<PriceBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[PriceBand] {
        &self.bands
    }

    /// Cheapest band containing `age`. Equal prices resolve to the band declared first.
    pub fn find_band(&self, age: u32) -> Option<&PriceBand> {
        self.bands
            .iter()
            .filter(|band| band.contains(age))
            .min_by_key(|band| band.price)
    }

    pub fn quote(&self, age: u32) -> Result<PriceQuote> {
        let band = self
            .find_band(age)
            .ok_or(CinemaError::NoPriceBand { age })?;

        tracing::debug!("Age {} resolved to {} ({}kr)", age, band.name, band.price);

        Ok(PriceQuote {
            band: band.name.clone(),
            price: band.price,
        })
    }

    pub fn quote_group(&self, ages: &[u32]) -> Result<GroupQuote> {
        let mut members = Vec::with_capacity(ages.len());
        let mut total: u32 = 0;

        for &age in ages {
            let quote = self.quote(age)?;
            total = total
                .checked_add(quote.price)
                .ok_or_else(|| CinemaError::ProcessingError {
                    message: format!("group total overflowed after {} people", members.len()),
                })?;
            members.push((age, quote));
        }

        Ok(GroupQuote { members, total })
    }
}
