//! Command-line arguments for the `patterns` binary.
//!
//! Lives in the library so tests can drive [`Cli::try_parse_from`] without
//! spawning a process.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::Scenario;
use crate::runner::{AdapterApproach, FactoryApproach, ObserverApproach, StrategyApproach, TemplateApproach};

/// Classic design patterns, each shown without and with the pattern.
#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(version)]
#[command(about = "Run naive and pattern-applied versions of classic design pattern demos", long_about = None)]
#[command(after_help = "\
EXAMPLES:
  patterns all                                          Run every demo
  patterns factory --approach abstract-factory --flavour vanilla --cake simple
  patterns strategy --approach inheritance --stain coffee
  patterns template --mate terere
  patterns observer --approach pull
  patterns --scenario office.toml observer")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML file overriding the demo inputs
    #[arg(long, value_name = "FILE", global = true)]
    pub scenario: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Bake cakes: direct construction, factory method, flavoured and abstract factories
    Factory {
        #[arg(long, value_enum, default_value_t = FactoryApproach::AbstractFactory)]
        approach: FactoryApproach,

        /// vanilla or chocolate
        #[arg(long)]
        flavour: Option<String>,

        /// simple or fancy
        #[arg(long)]
        cake: Option<String>,
    },

    /// Clean clothes: conditionals, one cleaner per stain, swappable strategy
    Strategy {
        #[arg(long, value_enum, default_value_t = StrategyApproach::Strategy)]
        approach: StrategyApproach,

        /// coffee or wine
        #[arg(long)]
        stain: Option<String>,
    },

    /// Play albums on a streamer and on a turntable
    Adapter {
        #[arg(long, value_enum, default_value_t = AdapterApproach::Adapter)]
        approach: AdapterApproach,

        /// Album title to search for
        #[arg(long)]
        title: Option<String>,
    },

    /// Make mate: monolithic, struct per recipe, template method
    Template {
        #[arg(long, value_enum, default_value_t = TemplateApproach::TemplateMethod)]
        approach: TemplateApproach,

        /// classic, cordobés or tereré
        #[arg(long)]
        mate: Option<String>,
    },

    /// Publish office news: pull model or push (observer) model
    Observer {
        #[arg(long, value_enum, default_value_t = ObserverApproach::Push)]
        approach: ObserverApproach,
    },

    /// Run every approach of every pattern
    All,
}

impl Command {
    /// Writes the flags that were given over the scenario values.
    pub fn apply_overrides(&self, scenario: &mut Scenario) {
        match self {
            Command::Factory { flavour, cake, .. } => {
                if let Some(flavour) = flavour {
                    scenario.factory.flavour = flavour.clone();
                }
                if let Some(cake) = cake {
                    scenario.factory.cake = cake.clone();
                }
            }
            Command::Strategy {
                stain: Some(stain), ..
            } => scenario.strategy.stain = stain.clone(),
            Command::Adapter {
                title: Some(title), ..
            } => scenario.adapter.title = title.clone(),
            Command::Template {
                mate: Some(mate), ..
            } => scenario.template.mate = mate.clone(),
            _ => {}
        }
    }
}
