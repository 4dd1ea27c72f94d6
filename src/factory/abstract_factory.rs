use std::collections::HashMap;

use tracing::debug;

use super::cake::{Cake, CakeType, FancyCake, SimpleCake};
use crate::{PatternError, Result};

/// One factory per product family. Swapping the factory swaps every cake it bakes.
pub trait CakeFactory {
    fn bake_cake(&self, cake_type: CakeType) -> Box<dyn Cake>;
}

pub struct VanillaCakeFactory;

impl CakeFactory for VanillaCakeFactory {
    fn bake_cake(&self, cake_type: CakeType) -> Box<dyn Cake> {
        match cake_type {
            CakeType::Simple => Box::new(SimpleCake::new("A simple vanilla cake.")),
            CakeType::Fancy => Box::new(FancyCake::new("Vanilla cake.", "Marmalade", "Buttercream")),
        }
    }
}

pub struct ChocolateCakeFactory;

impl CakeFactory for ChocolateCakeFactory {
    fn bake_cake(&self, cake_type: CakeType) -> Box<dyn Cake> {
        match cake_type {
            CakeType::Simple => Box::new(SimpleCake::new("A simple chocolate cake.")),
            CakeType::Fancy => Box::new(FancyCake::new(
                "Chocolate cake.",
                "Chocolate mousse.",
                "Chocolate glaze.",
            )),
        }
    }
}

type FactoryConstructor = fn() -> Box<dyn CakeFactory>;

/// Maps a flavour name to the factory for that family.
#[derive(Debug, Default)]
pub struct CakeFactoryProducer;

impl CakeFactoryProducer {
    pub fn new() -> Self {
        Self
    }

    /// Looks `flavour` up in a table built for this call.
    ///
    /// Unknown flavours are an error, never a default factory.
    pub fn get_factory(&self, flavour: &str) -> Result<Box<dyn CakeFactory>> {
        let entries: [(&str, FactoryConstructor); 2] = [
            ("vanilla", || Box::new(VanillaCakeFactory)),
            ("chocolate", || Box::new(ChocolateCakeFactory)),
        ];
        let factories: HashMap<&str, FactoryConstructor> = HashMap::from(entries);

        let constructor = factories
            .get(flavour)
            .ok_or_else(|| PatternError::UnknownFlavour(flavour.to_string()))?;
        debug!(flavour, "selected cake factory");
        Ok(constructor())
    }
}
