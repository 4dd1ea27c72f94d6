//! Scenario files: the literal inputs each demo runs with.
//!
//! Every field is optional and falls back to the values the demos were
//! written around, so an empty file is a valid scenario.
//!
//! ```toml
//! [factory]
//! flavour = "vanilla"
//! cake = "simple"
//!
//! [adapter]
//! title = "Violator"
//!
//! [[adapter.catalog]]
//! title = "Violator"
//! artist = "Depeche Mode"
//! year = 1990
//!
//! [observer]
//! employees = ["BILLY", "MANDY"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::adapter::{default_catalog, Album};
use crate::observer::{default_employees, FUNNY_MESSAGE, OFFICE_MESSAGE};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read scenario file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub factory: FactoryScenario,
    pub strategy: StrategyScenario,
    pub adapter: AdapterScenario,
    pub template: TemplateScenario,
    pub observer: ObserverScenario,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryScenario {
    pub flavour: String,
    pub cake: String,
}

impl Default for FactoryScenario {
    fn default() -> Self {
        Self {
            flavour: "chocolate".to_string(),
            cake: "fancy".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategyScenario {
    pub stain: String,
}

impl Default for StrategyScenario {
    fn default() -> Self {
        Self {
            stain: "wine".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterScenario {
    pub title: String,
    pub catalog: Vec<Album>,
}

impl Default for AdapterScenario {
    fn default() -> Self {
        Self {
            title: "Autobahn".to_string(),
            catalog: default_catalog(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateScenario {
    pub mate: String,
}

impl Default for TemplateScenario {
    fn default() -> Self {
        Self {
            mate: "cordobés".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverScenario {
    pub employees: Vec<String>,
    pub office_message: String,
    pub funny_message: String,
}

impl Default for ObserverScenario {
    fn default() -> Self {
        Self {
            employees: default_employees(),
            office_message: OFFICE_MESSAGE.to_string(),
            funny_message: FUNNY_MESSAGE.to_string(),
        }
    }
}
