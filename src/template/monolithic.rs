use std::io::{self, Write};

use tracing::debug;

use super::{
    step, ADD_HERBS, CLASSIC_INGREDIENTS, CORDOBES_INGREDIENTS, FILL_WITH_YERBA, HEAT_WATER,
    POUR_WATER, RUIDITO, TERERE_INGREDIENTS,
};

/// Every kind of mate handled inline by one method.
#[derive(Debug, Default)]
pub struct Mate;

impl Mate {
    pub fn make_mate(&self, kind: &str, out: &mut dyn Write) -> io::Result<()> {
        // Get ingredients
        match kind {
            "classic" => step(out, CLASSIC_INGREDIENTS)?,
            "cordobés" => step(out, CORDOBES_INGREDIENTS)?,
            "tereré" => step(out, TERERE_INGREDIENTS)?,
            _ => debug!(kind, "no ingredients for mate kind"),
        }

        // Prepare water
        step(out, HEAT_WATER)?;

        // Fill with yerba
        step(out, FILL_WITH_YERBA)?;

        // Add herbs
        if kind == "cordobés" {
            step(out, ADD_HERBS)?;
        }

        // Pour water
        step(out, POUR_WATER)?;

        // Enjoy
        writeln!(out, "{RUIDITO}")
    }
}
