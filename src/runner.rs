//! Runs the demos by name, one approach or all of them.

use std::io::Write;

use clap::ValueEnum;
use tracing::info;

use crate::config::{AdapterScenario, FactoryScenario, ObserverScenario, Scenario, StrategyScenario, TemplateScenario};
use crate::strategy::Stain;
use crate::template::MateKind;
use crate::{adapter, factory, observer, strategy, template, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FactoryApproach {
    NoFactoryMethod,
    FactoryMethod,
    NoAbstractFactory,
    AbstractFactory,
}

impl FactoryApproach {
    pub const ALL: [FactoryApproach; 4] = [
        FactoryApproach::NoFactoryMethod,
        FactoryApproach::FactoryMethod,
        FactoryApproach::NoAbstractFactory,
        FactoryApproach::AbstractFactory,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FactoryApproach::NoFactoryMethod => "Factory: Direct Construction",
            FactoryApproach::FactoryMethod => "Factory: Factory Method",
            FactoryApproach::NoAbstractFactory => "Factory: Flavoured Factory",
            FactoryApproach::AbstractFactory => "Factory: Abstract Factory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyApproach {
    Conditional,
    Inheritance,
    Strategy,
}

impl StrategyApproach {
    pub const ALL: [StrategyApproach; 3] = [
        StrategyApproach::Conditional,
        StrategyApproach::Inheritance,
        StrategyApproach::Strategy,
    ];

    pub fn title(self) -> &'static str {
        match self {
            StrategyApproach::Conditional => "Strategy: Conditionals",
            StrategyApproach::Inheritance => "Strategy: Subclass per Stain",
            StrategyApproach::Strategy => "Strategy: Spot Treatment Strategy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdapterApproach {
    NoAdapter,
    Adapter,
}

impl AdapterApproach {
    pub const ALL: [AdapterApproach; 2] = [AdapterApproach::NoAdapter, AdapterApproach::Adapter];

    pub fn title(self) -> &'static str {
        match self {
            AdapterApproach::NoAdapter => "Adapter: Incompatible Players",
            AdapterApproach::Adapter => "Adapter: Turntable Adapter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateApproach {
    Monolithic,
    PerRecipe,
    TemplateMethod,
}

impl TemplateApproach {
    pub const ALL: [TemplateApproach; 3] = [
        TemplateApproach::Monolithic,
        TemplateApproach::PerRecipe,
        TemplateApproach::TemplateMethod,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TemplateApproach::Monolithic => "Template: Monolithic Recipe",
            TemplateApproach::PerRecipe => "Template: Struct per Recipe",
            TemplateApproach::TemplateMethod => "Template: Template Method",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ObserverApproach {
    Pull,
    Push,
}

impl ObserverApproach {
    pub const ALL: [ObserverApproach; 2] = [ObserverApproach::Pull, ObserverApproach::Push];

    pub fn title(self) -> &'static str {
        match self {
            ObserverApproach::Pull => "Observer: Pull Model",
            ObserverApproach::Push => "Observer: Push Model",
        }
    }
}

pub fn run_factory(approach: FactoryApproach, scenario: &FactoryScenario, out: &mut dyn Write) -> Result<()> {
    info!(?approach, "running factory demo");
    match approach {
        FactoryApproach::NoFactoryMethod => factory::no_factory_method_example(out),
        FactoryApproach::FactoryMethod => factory::factory_method_example(scenario.cake.parse()?, out),
        FactoryApproach::NoAbstractFactory => factory::no_abstract_factory_example(
            scenario.flavour.parse()?,
            scenario.cake.parse()?,
            out,
        ),
        FactoryApproach::AbstractFactory => {
            factory::abstract_factory_example(&scenario.flavour, scenario.cake.parse()?, out)
        }
    }
}

pub fn run_strategy(approach: StrategyApproach, scenario: &StrategyScenario, out: &mut dyn Write) -> Result<()> {
    info!(?approach, "running strategy demo");
    let stain: Stain = scenario.stain.parse()?;
    match approach {
        StrategyApproach::Conditional => strategy::conditional_example(stain, out),
        StrategyApproach::Inheritance => strategy::inheritance_example(stain, out),
        StrategyApproach::Strategy => strategy::strategy_example(stain, out),
    }
}

pub fn run_adapter(approach: AdapterApproach, scenario: &AdapterScenario, out: &mut dyn Write) -> Result<()> {
    info!(?approach, "running adapter demo");
    match approach {
        AdapterApproach::NoAdapter => adapter::no_adapter_example(&scenario.catalog, &scenario.title, out),
        AdapterApproach::Adapter => adapter::adapter_example(&scenario.catalog, &scenario.title, out),
    }
}

pub fn run_template(approach: TemplateApproach, scenario: &TemplateScenario, out: &mut dyn Write) -> Result<()> {
    info!(?approach, "running template demo");
    let kind: MateKind = scenario.mate.parse()?;
    match approach {
        TemplateApproach::Monolithic => template::monolithic_example(kind, out),
        TemplateApproach::PerRecipe => template::per_recipe_example(kind, out),
        TemplateApproach::TemplateMethod => template::template_method_example(kind, out),
    }
}

pub fn run_observer(approach: ObserverApproach, scenario: &ObserverScenario, out: &mut dyn Write) -> Result<()> {
    info!(?approach, "running observer demo");
    let ObserverScenario {
        employees,
        office_message,
        funny_message,
    } = scenario;
    match approach {
        ObserverApproach::Pull => observer::pull_example(employees, office_message, funny_message, out),
        ObserverApproach::Push => observer::push_example(employees, office_message, funny_message, out),
    }
}

fn section(title: &str, out: &mut dyn Write, body: impl FnOnce(&mut dyn Write) -> Result<()>) -> Result<()> {
    writeln!(out, "=== {title} ===")?;
    body(&mut *out)?;
    writeln!(out)?;
    Ok(())
}

/// Every approach of every pattern, each under its own header.
pub fn run_all(scenario: &Scenario, out: &mut dyn Write) -> Result<()> {
    for approach in FactoryApproach::ALL {
        section(approach.title(), out, |out| run_factory(approach, &scenario.factory, out))?;
    }
    for approach in StrategyApproach::ALL {
        section(approach.title(), out, |out| run_strategy(approach, &scenario.strategy, out))?;
    }
    for approach in AdapterApproach::ALL {
        section(approach.title(), out, |out| run_adapter(approach, &scenario.adapter, out))?;
    }
    for approach in TemplateApproach::ALL {
        section(approach.title(), out, |out| run_template(approach, &scenario.template, out))?;
    }
    for approach in ObserverApproach::ALL {
        section(approach.title(), out, |out| run_observer(approach, &scenario.observer, out))?;
    }
    Ok(())
}
