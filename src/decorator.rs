// Decorator Pattern: StarBuzz beverages
// Condiments wrap a beverage and add to its cost and description.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PatternError, Result};

// ============================================================================
// Price
// ============================================================================

/// Money in whole cents, so chained surcharges add up exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Price(cents)
    }

    pub fn cents(self) -> u32 {
        self.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// Component: Beverage
// ============================================================================

pub trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> Price;
}

impl<B: Beverage + ?Sized> Beverage for Box<B> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HouseBlend;

impl Beverage for HouseBlend {
    fn description(&self) -> String {
        "House Blend".to_string()
    }

    fn cost(&self) -> Price {
        Price::from_cents(89)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DarkRoast;

impl Beverage for DarkRoast {
    fn description(&self) -> String {
        "Dark Roast".to_string()
    }

    fn cost(&self) -> Price {
        Price::from_cents(99)
    }
}

// ============================================================================
// Decorators: Condiments
// ============================================================================

// Generic over the wrapped beverage: `Whip::new(Mocha::new(DarkRoast))`
// composes at compile time, `Box<dyn Beverage>` composes at runtime.

pub struct SteamedMilk<B = Box<dyn Beverage>> {
    beverage: B,
}

impl<B: Beverage> SteamedMilk<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }
}

impl<B: Beverage> Beverage for SteamedMilk<B> {
    // Steamed milk names the drink on its own; the wrapped description is dropped.
    fn description(&self) -> String {
        "Steamed Milk".to_string()
    }

    fn cost(&self) -> Price {
        Price::from_cents(10) + self.beverage.cost()
    }
}

pub struct Mocha<B = Box<dyn Beverage>> {
    beverage: B,
}

impl<B: Beverage> Mocha<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }
}

impl<B: Beverage> Beverage for Mocha<B> {
    fn description(&self) -> String {
        format!("Mocha {}", self.beverage.description())
    }

    fn cost(&self) -> Price {
        Price::from_cents(20) + self.beverage.cost()
    }
}

pub struct Whip<B = Box<dyn Beverage>> {
    beverage: B,
}

impl<B: Beverage> Whip<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }
}

impl<B: Beverage> Beverage for Whip<B> {
    fn description(&self) -> String {
        format!("Whipped {}", self.beverage.description())
    }

    fn cost(&self) -> Price {
        Price::from_cents(10) + self.beverage.cost()
    }
}

// ============================================================================
// Runtime composition from names
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum BeverageKind {
    HouseBlend,
    DarkRoast,
}

impl BeverageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BeverageKind::HouseBlend => "house-blend",
            BeverageKind::DarkRoast => "dark-roast",
        }
    }

    pub fn brew(self) -> Box<dyn Beverage> {
        match self {
            BeverageKind::HouseBlend => Box::new(HouseBlend),
            BeverageKind::DarkRoast => Box::new(DarkRoast),
        }
    }
}

impl FromStr for BeverageKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "house-blend" => Ok(BeverageKind::HouseBlend),
            "dark-roast" => Ok(BeverageKind::DarkRoast),
            _ => Err(PatternError::unknown_variant("beverage", s)),
        }
    }
}

impl TryFrom<String> for BeverageKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for BeverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum CondimentKind {
    SteamedMilk,
    Mocha,
    Whip,
}

impl CondimentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CondimentKind::SteamedMilk => "steamed-milk",
            CondimentKind::Mocha => "mocha",
            CondimentKind::Whip => "whip",
        }
    }

    /// Wraps `beverage` in this condiment.
    pub fn wrap(self, beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
        match self {
            CondimentKind::SteamedMilk => Box::new(SteamedMilk::new(beverage)),
            CondimentKind::Mocha => Box::new(Mocha::new(beverage)),
            CondimentKind::Whip => Box::new(Whip::new(beverage)),
        }
    }
}

impl FromStr for CondimentKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "steamed-milk" => Ok(CondimentKind::SteamedMilk),
            "mocha" => Ok(CondimentKind::Mocha),
            "whip" => Ok(CondimentKind::Whip),
            _ => Err(PatternError::unknown_variant("condiment", s)),
        }
    }
}

impl TryFrom<String> for CondimentKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for CondimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A base beverage plus condiments; the first condiment listed is innermost.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    pub beverage: BeverageKind,
    #[serde(default)]
    pub condiments: Vec<CondimentKind>,
}

impl Order {
    pub fn new(beverage: BeverageKind, condiments: Vec<CondimentKind>) -> Self {
        Self {
            beverage,
            condiments,
        }
    }

    pub fn brew(&self) -> Box<dyn Beverage> {
        let drink = self
            .condiments
            .iter()
            .fold(self.beverage.brew(), |drink, condiment| condiment.wrap(drink));
        tracing::debug!(
            beverage = %self.beverage,
            condiments = self.condiments.len(),
            cost = %drink.cost(),
            "brewed order"
        );
        drink
    }
}
