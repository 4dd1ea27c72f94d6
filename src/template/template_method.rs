use std::io::{self, Write};

use tracing::trace;

use super::{
    step, ADD_HERBS, CLASSIC_INGREDIENTS, CORDOBES_INGREDIENTS, FILL_WITH_YERBA, HEAT_WATER,
    POUR_WATER, SQUEEZE_GRAPEFRUITS, TERERE_INGREDIENTS,
};

pub const VERSE: [&str; 5] = [
    "Ay, qué rico está este mate",
    "¡Pero qué rico este mate!",
    "Y la temperatura justa",
    "y el sabor yerbateril",
    "acariciando mis papilas.",
];

/// The steps a recipe may customize.
///
/// `get_ingredients` is required. `prepare_water` and `add_herbs` have
/// defaults; `add_herbs` does nothing unless overridden. Filling, pouring and
/// enjoying are not part of the trait, so no recipe can change them.
pub trait Mate {
    fn get_ingredients(&self, out: &mut dyn Write) -> io::Result<()>;

    fn prepare_water(&self, out: &mut dyn Write) -> io::Result<()> {
        step(out, HEAT_WATER)
    }

    fn add_herbs(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// The orchestration. Blanket-implemented for every [`Mate`], so the order of
/// steps cannot be overridden by a recipe.
pub trait MakeMate {
    fn make_mate(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<T: Mate + ?Sized> MakeMate for T {
    fn make_mate(&self, out: &mut dyn Write) -> io::Result<()> {
        trace!("get_ingredients");
        self.get_ingredients(out)?;
        trace!("prepare_water");
        self.prepare_water(out)?;
        fill_with_yerba(out)?;
        trace!("add_herbs");
        self.add_herbs(out)?;
        pour_water(out)?;
        enjoy(out)
    }
}

fn fill_with_yerba(out: &mut dyn Write) -> io::Result<()> {
    step(out, FILL_WITH_YERBA)
}

fn pour_water(out: &mut dyn Write) -> io::Result<()> {
    step(out, POUR_WATER)
}

fn enjoy(out: &mut dyn Write) -> io::Result<()> {
    for line in VERSE {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub struct ClassicMate;

impl Mate for ClassicMate {
    fn get_ingredients(&self, out: &mut dyn Write) -> io::Result<()> {
        step(out, CLASSIC_INGREDIENTS)
    }
}

pub struct MateCordobes;

impl Mate for MateCordobes {
    fn get_ingredients(&self, out: &mut dyn Write) -> io::Result<()> {
        step(out, CORDOBES_INGREDIENTS)
    }

    fn add_herbs(&self, out: &mut dyn Write) -> io::Result<()> {
        step(out, ADD_HERBS)
    }
}

pub struct Terere;

impl Mate for Terere {
    fn get_ingredients(&self, out: &mut dyn Write) -> io::Result<()> {
        step(out, TERERE_INGREDIENTS)
    }

    fn prepare_water(&self, out: &mut dyn Write) -> io::Result<()> {
        step(out, SQUEEZE_GRAPEFRUITS)
    }
}
