use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::PatternError;

/// Anything that can tell you what it is made of.
pub trait Cake {
    fn describe(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCake {
    pub base: String,
}

impl SimpleCake {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Cake for SimpleCake {
    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.base)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FancyCake {
    pub base: String,
    pub filling: String,
    pub frosting: String,
}

impl FancyCake {
    pub fn new(
        base: impl Into<String>,
        filling: impl Into<String>,
        frosting: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            filling: filling.into(),
            frosting: frosting.into(),
        }
    }
}

impl Cake for FancyCake {
    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.base)?;
        writeln!(out, "{}", self.filling)?;
        writeln!(out, "{}", self.frosting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CakeType {
    Simple,
    Fancy,
}

impl FromStr for CakeType {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(CakeType::Simple),
            "fancy" => Ok(CakeType::Fancy),
            other => Err(PatternError::UnknownCakeType(other.to_string())),
        }
    }
}

impl fmt::Display for CakeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CakeType::Simple => write!(f, "simple"),
            CakeType::Fancy => write!(f, "fancy"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavour {
    Vanilla,
    Chocolate,
}

impl FromStr for Flavour {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vanilla" => Ok(Flavour::Vanilla),
            "chocolate" => Ok(Flavour::Chocolate),
            other => Err(PatternError::UnknownFlavour(other.to_string())),
        }
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavour::Vanilla => write!(f, "vanilla"),
            Flavour::Chocolate => write!(f, "chocolate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn described(cake: &dyn Cake) -> String {
        let mut out = Vec::new();
        cake.describe(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_simple_cake_describes_base_only() {
        let cake = SimpleCake::new("A simple vanilla cake.");
        assert_eq!(described(&cake), "A simple vanilla cake.\n");
    }

    #[test]
    fn test_fancy_cake_describes_in_field_order() {
        let cake = FancyCake::new("Vanilla cake.", "Marmalade", "Buttercream");
        assert_eq!(described(&cake), "Vanilla cake.\nMarmalade\nButtercream\n");
    }

    #[test]
    fn test_discriminators_parse() {
        assert_eq!("simple".parse::<CakeType>().unwrap(), CakeType::Simple);
        assert_eq!("fancy".parse::<CakeType>().unwrap(), CakeType::Fancy);
        assert_eq!("vanilla".parse::<Flavour>().unwrap(), Flavour::Vanilla);
        assert_eq!("chocolate".parse::<Flavour>().unwrap(), Flavour::Chocolate);
    }

    #[test]
    fn test_discriminators_are_case_sensitive() {
        assert!(matches!(
            "Fancy".parse::<CakeType>(),
            Err(PatternError::UnknownCakeType(s)) if s == "Fancy"
        ));
    }

    proptest! {
        #[test]
        fn test_unknown_flavours_rejected(s in "[a-z]{1,12}") {
            prop_assume!(s != "vanilla" && s != "chocolate");
            let is_unknown = matches!(s.parse::<Flavour>(), Err(PatternError::UnknownFlavour(_)));
            prop_assert!(is_unknown);
        }
    }
}
