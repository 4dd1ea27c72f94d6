// One struct per recipe. Only the commented steps differ; the rest is copied.

use std::io::{self, Write};

use super::{
    step, ADD_HERBS, CLASSIC_INGREDIENTS, CORDOBES_INGREDIENTS, FILL_WITH_YERBA, HEAT_WATER,
    POUR_WATER, RUIDITO, SQUEEZE_GRAPEFRUITS, TERERE_INGREDIENTS,
};

pub struct ClassicMate;

impl ClassicMate {
    pub fn make_mate(&self, out: &mut dyn Write) -> io::Result<()> {
        step(out, CLASSIC_INGREDIENTS)?; // customized
        step(out, HEAT_WATER)?;
        step(out, FILL_WITH_YERBA)?;
        step(out, POUR_WATER)?;
        writeln!(out, "{RUIDITO}")
    }
}

pub struct MateCordobes;

impl MateCordobes {
    pub fn make_mate(&self, out: &mut dyn Write) -> io::Result<()> {
        step(out, CORDOBES_INGREDIENTS)?; // customized
        step(out, HEAT_WATER)?;
        step(out, FILL_WITH_YERBA)?;
        step(out, ADD_HERBS)?; // extra
        step(out, POUR_WATER)?;
        writeln!(out, "{RUIDITO}")
    }
}

pub struct Terere;

impl Terere {
    pub fn make_mate(&self, out: &mut dyn Write) -> io::Result<()> {
        step(out, TERERE_INGREDIENTS)?; // customized
        step(out, SQUEEZE_GRAPEFRUITS)?; // customized
        step(out, FILL_WITH_YERBA)?;
        step(out, POUR_WATER)?;
        writeln!(out, "{RUIDITO}")
    }
}
