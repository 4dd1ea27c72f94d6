use std::io::{self, Write};

use super::{COFFEE_TREATMENT, WASH_CYCLE, WINE_TREATMENT};

/// One implementor per stain, each repeating the wash cycle.
pub trait ClothesCleaner {
    fn clean(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct NoSpotCleaner;

impl ClothesCleaner for NoSpotCleaner {
    fn clean(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{WASH_CYCLE}")
    }
}

pub struct CoffeeSpotCleaner;

impl ClothesCleaner for CoffeeSpotCleaner {
    fn clean(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{COFFEE_TREATMENT}")?;
        writeln!(out, "{WASH_CYCLE}")
    }
}

pub struct WineSpotCleaner;

impl ClothesCleaner for WineSpotCleaner {
    fn clean(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{WINE_TREATMENT}")?;
        writeln!(out, "{WASH_CYCLE}")
    }
}
