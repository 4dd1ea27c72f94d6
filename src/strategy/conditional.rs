use std::io::{self, Write};

use tracing::debug;

use super::{COFFEE_TREATMENT, WASH_CYCLE, WINE_TREATMENT};

/// Every stain is another `if` arm inside the one `clean` method.
#[derive(Debug, Default)]
pub struct ClothesCleaner;

impl ClothesCleaner {
    /// Stains it does not recognize get no pretreatment, only the wash.
    pub fn clean(&self, stain: &str, out: &mut dyn Write) -> io::Result<()> {
        // Remove stains
        if stain == "coffee" {
            writeln!(out, "{COFFEE_TREATMENT}")?;
        } else if stain == "wine" {
            writeln!(out, "{WINE_TREATMENT}")?;
        } else {
            debug!(stain, "no pretreatment for stain");
        }

        writeln!(out, "{WASH_CYCLE}")
    }
}
