// Strategy Pattern: SimUDuck
// Flying is a behaviour a duck holds, not something it inherits,
// so it can be swapped at runtime.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PatternError, Result};

// ============================================================================
// Strategy: FlyBehaviour
// ============================================================================

pub trait FlyBehaviour {
    fn fly(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyWithWings;

impl FlyBehaviour for FlyWithWings {
    fn fly(&self) -> String {
        "Fly with Wings".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyNoWay;

impl FlyBehaviour for FlyNoWay {
    fn fly(&self) -> String {
        "Can't fly".to_string()
    }
}

// Closures work as strategies too.
impl<F> FlyBehaviour for F
where
    F: Fn() -> String,
{
    fn fly(&self) -> String {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum FlyKind {
    Wings,
    NoWay,
}

impl FlyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlyKind::Wings => "wings",
            FlyKind::NoWay => "no-way",
        }
    }

    pub fn behaviour(self) -> Box<dyn FlyBehaviour> {
        match self {
            FlyKind::Wings => Box::new(FlyWithWings),
            FlyKind::NoWay => Box::new(FlyNoWay),
        }
    }
}

impl FromStr for FlyKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wings" => Ok(FlyKind::Wings),
            "no-way" => Ok(FlyKind::NoWay),
            _ => Err(PatternError::unknown_variant("fly behaviour", s)),
        }
    }
}

impl TryFrom<String> for FlyKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for FlyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Context: Duck
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DuckKind {
    Mallard,
    Redhead,
    Rubber,
    Wooden,
}

impl DuckKind {
    pub fn name(self) -> &'static str {
        match self {
            DuckKind::Mallard => "MallardDuck",
            DuckKind::Redhead => "RedheadDuck",
            DuckKind::Rubber => "RubberDuck",
            DuckKind::Wooden => "WoodenDuck",
        }
    }

    pub fn default_fly(self) -> FlyKind {
        match self {
            DuckKind::Mallard | DuckKind::Redhead => FlyKind::Wings,
            DuckKind::Rubber | DuckKind::Wooden => FlyKind::NoWay,
        }
    }
}

impl FromStr for DuckKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mallard" => Ok(DuckKind::Mallard),
            "redhead" => Ok(DuckKind::Redhead),
            "rubber" => Ok(DuckKind::Rubber),
            "wooden" => Ok(DuckKind::Wooden),
            _ => Err(PatternError::unknown_variant("duck", s)),
        }
    }
}

impl TryFrom<String> for DuckKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

pub struct Duck {
    kind: DuckKind,
    fly_behaviour: Box<dyn FlyBehaviour>,
}

impl Duck {
    pub fn new(kind: DuckKind) -> Self {
        Self::with_behaviour(kind, kind.default_fly().behaviour())
    }

    pub fn with_behaviour(kind: DuckKind, fly_behaviour: Box<dyn FlyBehaviour>) -> Self {
        Self {
            kind,
            fly_behaviour,
        }
    }

    pub fn mallard() -> Self {
        Self::new(DuckKind::Mallard)
    }

    pub fn redhead() -> Self {
        Self::new(DuckKind::Redhead)
    }

    pub fn rubber() -> Self {
        Self::new(DuckKind::Rubber)
    }

    pub fn wooden() -> Self {
        Self::new(DuckKind::Wooden)
    }

    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    pub fn display(&self) -> &'static str {
        self.kind.name()
    }

    pub fn perform_fly(&self) -> String {
        self.fly_behaviour.fly()
    }

    pub fn set_fly_behaviour(&mut self, fly_behaviour: Box<dyn FlyBehaviour>) {
        tracing::debug!(duck = self.display(), "swapping fly behaviour");
        self.fly_behaviour = fly_behaviour;
    }
}

impl fmt::Debug for Duck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck")
            .field("kind", &self.kind)
            .field("fly", &self.perform_fly())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod mallard_duck {
        use super::*;

        #[test]
        fn displays_its_name() {
            assert_eq!(Duck::mallard().display(), "MallardDuck");
        }

        #[test]
        fn can_fly() {
            assert_eq!(Duck::mallard().perform_fly(), "Fly with Wings");
        }
    }

    mod redhead_duck {
        use super::*;

        #[test]
        fn displays_its_name() {
            assert_eq!(Duck::redhead().display(), "RedheadDuck");
        }

        #[test]
        fn can_fly() {
            assert_eq!(Duck::redhead().perform_fly(), "Fly with Wings");
        }
    }

    mod rubber_duck {
        use super::*;

        #[test]
        fn displays_its_name() {
            assert_eq!(Duck::rubber().display(), "RubberDuck");
        }

        #[test]
        fn cannot_fly() {
            assert_eq!(Duck::rubber().perform_fly(), "Can't fly");
        }
    }

    mod wooden_duck {
        use super::*;

        #[test]
        fn displays_its_name() {
            assert_eq!(Duck::wooden().display(), "WoodenDuck");
        }

        #[test]
        fn cannot_fly() {
            assert_eq!(Duck::wooden().perform_fly(), "Can't fly");
        }

        #[test]
        fn forcing_it_to_fly() {
            let mut duck = Duck::wooden();
            duck.set_fly_behaviour(Box::new(FlyWithWings));
            assert_eq!(duck.perform_fly(), "Fly with Wings");
        }
    }

    #[test]
    fn test_closure_strategy() {
        let mut duck = Duck::mallard();
        duck.set_fly_behaviour(Box::new(|| "Fly with a rocket".to_string()));
        assert_eq!(duck.perform_fly(), "Fly with a rocket");
    }

    #[test]
    fn test_parse_kinds() {
        assert_eq!("Rubber".parse::<DuckKind>().unwrap(), DuckKind::Rubber);
        assert_eq!("no-way".parse::<FlyKind>().unwrap(), FlyKind::NoWay);
        assert!("goose".parse::<DuckKind>().is_err());
    }

    #[test]
    fn test_explicit_behaviour_overrides_default() {
        let duck = Duck::with_behaviour(DuckKind::Rubber, FlyKind::Wings.behaviour());
        assert_eq!(duck.kind(), DuckKind::Rubber);
        assert_eq!(duck.perform_fly(), "Fly with Wings");
    }
}
