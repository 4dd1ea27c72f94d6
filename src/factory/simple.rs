use tracing::debug;

use super::cake::{Cake, CakeType, FancyCake, SimpleCake};

/// Factory method: one static function decides which cake to build.
pub struct SimpleCakeFactory;

impl SimpleCakeFactory {
    pub fn bake_cake(cake_type: CakeType) -> Box<dyn Cake> {
        debug!(%cake_type, "baking cake");
        match cake_type {
            CakeType::Simple => Box::new(SimpleCake::new("A simple vanilla cake.")),
            CakeType::Fancy => Box::new(FancyCake::new("Vanilla cake.", "Marmalade", "Buttercream")),
        }
    }
}
