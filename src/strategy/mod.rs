//! Pattern 2: Strategy
//!
//! Cleaning clothes with different stains: branching on the stain,
//! subclassing per stain, and finally handing stain removal to a
//! swappable strategy while the wash cycle stays put.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub mod conditional;
pub mod inheritance;
pub mod spot_treatment;

pub use spot_treatment::{
    ClothesCleaner, CoffeeSpotTreatment, NoSpotTreatment, SpotTreatmentStrategy, WineSpotTreatment,
};

use crate::{PatternError, Result};

pub const COFFEE_TREATMENT: &str =
    "Apply baking soda and a bit of water to the stain. Scrub for some minutes.";
pub const WINE_TREATMENT: &str = "Put some salt on the stain. Wait for five minutes.";
pub const WASH_CYCLE: &str = "Wash clothes as usual.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stain {
    Coffee,
    Wine,
}

impl Stain {
    pub fn strategy(self) -> Box<dyn SpotTreatmentStrategy> {
        match self {
            Stain::Coffee => Box::new(CoffeeSpotTreatment),
            Stain::Wine => Box::new(WineSpotTreatment),
        }
    }

    pub fn cleaner(self) -> Box<dyn inheritance::ClothesCleaner> {
        match self {
            Stain::Coffee => Box::new(inheritance::CoffeeSpotCleaner),
            Stain::Wine => Box::new(inheritance::WineSpotCleaner),
        }
    }
}

impl FromStr for Stain {
    type Err = PatternError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "coffee" => Ok(Stain::Coffee),
            "wine" => Ok(Stain::Wine),
            other => Err(PatternError::UnknownStain(other.to_string())),
        }
    }
}

impl fmt::Display for Stain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stain::Coffee => write!(f, "coffee"),
            Stain::Wine => write!(f, "wine"),
        }
    }
}

pub fn conditional_example(stain: Stain, out: &mut dyn Write) -> Result<()> {
    let clothes_cleaner = conditional::ClothesCleaner;
    clothes_cleaner.clean(&stain.to_string(), out)?;
    Ok(())
}

pub fn inheritance_example(stain: Stain, out: &mut dyn Write) -> Result<()> {
    let clothes_cleaner = stain.cleaner();
    clothes_cleaner.clean(out)?;
    Ok(())
}

pub fn strategy_example(stain: Stain, out: &mut dyn Write) -> Result<()> {
    let clothes_cleaner = ClothesCleaner::with_strategy(stain.strategy());
    clothes_cleaner.clean(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture;

    #[test]
    fn test_all_approaches_agree() {
        for stain in [Stain::Coffee, Stain::Wine] {
            let by_branch = capture(|out| conditional_example(stain, out));
            let by_subclass = capture(|out| inheritance_example(stain, out));
            let by_strategy = capture(|out| strategy_example(stain, out));

            assert_eq!(by_branch, by_subclass, "{stain}");
            assert_eq!(by_branch, by_strategy, "{stain}");
        }
    }

    #[test]
    fn test_unknown_stain() {
        assert!(matches!(
            "mud".parse::<Stain>(),
            Err(PatternError::UnknownStain(s)) if s == "mud"
        ));
    }
}
