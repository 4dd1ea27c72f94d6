//! Pattern 1: Factory Method and Abstract Factory
//!
//! Baking cakes four ways: constructing them by hand, through a factory
//! method, through a factory parameterized by flavour, and through one
//! factory per flavour picked by a producer.

use std::io::Write;

pub mod abstract_factory;
pub mod cake;
pub mod flavoured;
pub mod simple;

pub use abstract_factory::{CakeFactory, CakeFactoryProducer, ChocolateCakeFactory, VanillaCakeFactory};
pub use cake::{Cake, CakeType, FancyCake, Flavour, SimpleCake};
pub use flavoured::FlavouredCakeFactory;
pub use simple::SimpleCakeFactory;

use crate::Result;

/// Client builds every field itself, twice.
pub fn no_factory_method_example(out: &mut dyn Write) -> Result<()> {
    let fancy_cake = FancyCake::new("A simple vanilla base.", "Marmalade", "Buttercream");
    fancy_cake.describe(out)?;

    let another_fancy_cake = FancyCake::new("A simple vanilla base.", "Marmalade", "Buttercream");
    another_fancy_cake.describe(out)?;
    Ok(())
}

pub fn factory_method_example(cake_type: CakeType, out: &mut dyn Write) -> Result<()> {
    let fancy_cake = SimpleCakeFactory::bake_cake(cake_type);
    fancy_cake.describe(out)?;

    let another_fancy_cake = SimpleCakeFactory::bake_cake(cake_type);
    another_fancy_cake.describe(out)?;
    Ok(())
}

pub fn no_abstract_factory_example(flavour: Flavour, cake_type: CakeType, out: &mut dyn Write) -> Result<()> {
    let bakery = FlavouredCakeFactory::new(flavour);
    bakery.bake_cake(cake_type).describe(out)?;
    Ok(())
}

pub fn abstract_factory_example(flavour: &str, cake_type: CakeType, out: &mut dyn Write) -> Result<()> {
    let bakery = CakeFactoryProducer::new().get_factory(flavour)?;
    bakery.bake_cake(cake_type).describe(out)?;
    Ok(())
}
