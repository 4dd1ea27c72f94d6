//! Pattern 4: Template Method
//!
//! Making mate three ways: one method with branches per kind, one struct per
//! kind repeating every step, and a trait whose fixed orchestration calls
//! the few steps each kind is allowed to change.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

pub mod monolithic;
pub mod per_recipe;
pub mod template_method;

pub use template_method::{ClassicMate, MakeMate, Mate, MateCordobes, Terere};

use crate::{PatternError, Result};

pub const CLASSIC_INGREDIENTS: &str = "Get yerba and 1/5 liter of water.";
pub const CORDOBES_INGREDIENTS: &str = "Get yerba, 1/5 liter of water and herbs.";
pub const TERERE_INGREDIENTS: &str = "Get yerba, 3 grapefruits and ice cubes.";
pub const HEAT_WATER: &str = "Heat water to 80 degrees Celsius.";
pub const SQUEEZE_GRAPEFRUITS: &str = "Squeeze the grapefruits and add the ice cubes to the juice.";
pub const FILL_WITH_YERBA: &str = "Fill 3/4 of the mate cup with yerba.";
pub const ADD_HERBS: &str = "Put some herbs inside of the mate cup.";
pub const POUR_WATER: &str = "Pour a bit of water and drink.";
pub const RUIDITO: &str = "*Ruidito de mate*";

/// Each step is followed by a blank line.
pub(crate) fn step(out: &mut dyn Write, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    writeln!(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MateKind {
    Classic,
    Cordobes,
    Terere,
}

impl MateKind {
    pub fn recipe(self) -> Box<dyn Mate> {
        match self {
            MateKind::Classic => Box::new(ClassicMate),
            MateKind::Cordobes => Box::new(MateCordobes),
            MateKind::Terere => Box::new(Terere),
        }
    }
}

impl FromStr for MateKind {
    type Err = PatternError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "classic" => Ok(MateKind::Classic),
            "cordobés" | "cordobes" => Ok(MateKind::Cordobes),
            "tereré" | "terere" => Ok(MateKind::Terere),
            other => Err(PatternError::UnknownMate(other.to_string())),
        }
    }
}

impl fmt::Display for MateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MateKind::Classic => write!(f, "classic"),
            MateKind::Cordobes => write!(f, "cordobés"),
            MateKind::Terere => write!(f, "tereré"),
        }
    }
}

pub fn monolithic_example(kind: MateKind, out: &mut dyn Write) -> Result<()> {
    monolithic::Mate.make_mate(&kind.to_string(), out)?;
    Ok(())
}

pub fn per_recipe_example(kind: MateKind, out: &mut dyn Write) -> Result<()> {
    match kind {
        MateKind::Classic => per_recipe::ClassicMate.make_mate(out)?,
        MateKind::Cordobes => per_recipe::MateCordobes.make_mate(out)?,
        MateKind::Terere => per_recipe::Terere.make_mate(out)?,
    }
    Ok(())
}

pub fn template_method_example(kind: MateKind, out: &mut dyn Write) -> Result<()> {
    kind.recipe().make_mate(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture;

    const ALL: [MateKind; 3] = [MateKind::Classic, MateKind::Cordobes, MateKind::Terere];

    #[test]
    fn test_kind_parsing_accepts_ascii_spelling() {
        assert_eq!("cordobés".parse::<MateKind>().unwrap(), MateKind::Cordobes);
        assert_eq!("cordobes".parse::<MateKind>().unwrap(), MateKind::Cordobes);
        assert_eq!("terere".parse::<MateKind>().unwrap(), MateKind::Terere);
        assert!(matches!(
            "chimarrão".parse::<MateKind>(),
            Err(PatternError::UnknownMate(_))
        ));
    }

    #[test]
    fn test_monolithic_and_per_recipe_agree() {
        for kind in ALL {
            if kind == MateKind::Terere {
                continue;
            }
            assert_eq!(
                capture(|out| monolithic_example(kind, out)),
                capture(|out| per_recipe_example(kind, out)),
                "{kind}"
            );
        }
    }

    #[test]
    fn test_monolithic_terere_still_heats_water() {
        let text = capture(|out| monolithic_example(MateKind::Terere, out));
        assert!(text.contains(HEAT_WATER));
        assert!(!text.contains(SQUEEZE_GRAPEFRUITS));
    }

    #[test]
    fn test_template_and_per_recipe_share_steps_until_enjoy() {
        for kind in ALL {
            let templated = capture(|out| template_method_example(kind, out));
            let repeated = capture(|out| per_recipe_example(kind, out));

            let shared = repeated.strip_suffix(&format!("{RUIDITO}\n")).unwrap();
            assert!(templated.starts_with(shared), "{kind}");
        }
    }
}
