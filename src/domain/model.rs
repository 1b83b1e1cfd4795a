use crate::utils::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named age range mapped to a ticket price.
///
/// Both bounds are exclusive. A missing bound leaves that side open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBand {
    pub name: String,
    #[serde(default)]
    pub lower_exclusive: Option<i64>,
    #[serde(default)]
    pub upper_exclusive: Option<i64>,
    pub price: u32,
}

impl PriceBand {
    pub fn new(
        name: impl Into<String>,
        lower_exclusive: Option<i64>,
        upper_exclusive: Option<i64>,
        price: u32,
    ) -> Self {
        Self {
            name: name.into(),
            lower_exclusive,
            upper_exclusive,
            price,
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        let age = i64::from(age);
        self.lower_exclusive.map_or(true, |lower| age > lower)
            && self.upper_exclusive.map_or(true, |upper| age < upper)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    pub band: String,
    pub price: u32,
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}kr", self.band, self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupQuote {
    pub members: Vec<(u32, PriceQuote)>,
    pub total: u32,
}

impl GroupQuote {
    pub fn head_count(&self) -> usize {
        self.members.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    SinglePrice,
    GroupPrice,
    Repeat,
    ThirdWord,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Exit,
        MenuChoice::SinglePrice,
        MenuChoice::GroupPrice,
        MenuChoice::Repeat,
        MenuChoice::ThirdWord,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::SinglePrice => 1,
            MenuChoice::GroupPrice => 2,
            MenuChoice::Repeat => 3,
            MenuChoice::ThirdWord => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::SinglePrice => "Single ticket price",
            MenuChoice::GroupPrice => "Group price",
            MenuChoice::Repeat => "Repeat ten times",
            MenuChoice::ThirdWord => "Third word",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || InputError::UnknownMenuChoice(s.trim().to_string());
        let number: i32 = s.trim().parse().map_err(|_| unknown())?;

        MenuChoice::ALL
            .into_iter()
            .find(|choice| i32::from(choice.number()) == number)
            .ok_or_else(unknown)
    }
}
