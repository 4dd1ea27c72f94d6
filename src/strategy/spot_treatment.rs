use std::io::{self, Write};

use tracing::debug;

use super::{COFFEE_TREATMENT, WASH_CYCLE, WINE_TREATMENT};

/// The part of cleaning that varies with the stain.
pub trait SpotTreatmentStrategy {
    fn clean(&self, out: &mut dyn Write) -> io::Result<()>;

    fn name(&self) -> &str;
}

pub struct NoSpotTreatment;

impl SpotTreatmentStrategy for NoSpotTreatment {
    fn clean(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "none"
    }
}

pub struct CoffeeSpotTreatment;

impl SpotTreatmentStrategy for CoffeeSpotTreatment {
    fn clean(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{COFFEE_TREATMENT}")
    }

    fn name(&self) -> &str {
        "coffee"
    }
}

pub struct WineSpotTreatment;

impl SpotTreatmentStrategy for WineSpotTreatment {
    fn clean(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{WINE_TREATMENT}")
    }

    fn name(&self) -> &str {
        "wine"
    }
}

/// Owns the wash cycle and delegates stain removal to its strategy.
pub struct ClothesCleaner {
    spot_treatment_strategy: Box<dyn SpotTreatmentStrategy>,
}

impl ClothesCleaner {
    /// A cleaner with its own `NoSpotTreatment`.
    pub fn new() -> Self {
        Self::with_strategy(Box::new(NoSpotTreatment))
    }

    pub fn with_strategy(spot_treatment_strategy: Box<dyn SpotTreatmentStrategy>) -> Self {
        Self {
            spot_treatment_strategy,
        }
    }

    pub fn set_spot_treatment_strategy(&mut self, spot_treatment_strategy: Box<dyn SpotTreatmentStrategy>) {
        debug!(
            from = self.spot_treatment_strategy.name(),
            to = spot_treatment_strategy.name(),
            "switching spot treatment"
        );
        self.spot_treatment_strategy = spot_treatment_strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.spot_treatment_strategy.name()
    }

    pub fn clean(&self, out: &mut dyn Write) -> io::Result<()> {
        // Remove stains
        self.spot_treatment_strategy.clean(out)?;

        // Proceed with washing cycle
        writeln!(out, "{WASH_CYCLE}")
    }
}

impl Default for ClothesCleaner {
    fn default() -> Self {
        Self::new()
    }
}
