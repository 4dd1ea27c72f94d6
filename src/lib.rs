//! # Design Patterns: Naive vs. Pattern-Applied
//!
//! Each module takes one toy scenario and shows it twice (or more): first the
//! way it tends to get written without a pattern, then with the pattern applied.
//!
//! ## 1. Factory (`factory`)
//! - Direct construction
//! - Factory method
//! - Parameterized factory (flavour x cake type)
//! - Abstract factory + producer
//!
//! ## 2. Strategy (`strategy`)
//! - Conditional branches
//! - One subclass per stain
//! - Swappable spot-treatment strategy
//!
//! ## 3. Adapter (`adapter`)
//! - Incompatible players called by their own names
//! - Turntable adapted to the streamer interface
//!
//! ## 4. Template Method (`template`)
//! - Monolithic recipe
//! - One struct per recipe
//! - Fixed orchestration with override points
//!
//! ## 5. Observer (`observer`)
//! - Pull model (consumers read the channel history)
//! - Push model (channel notifies subscribers)
//!
//! Every operation writes to a caller-supplied [`std::io::Write`], so the
//! `patterns` binary prints to stdout and tests read back a `Vec<u8>`.
//!
//! ```bash
//! cargo run --bin patterns -- all
//! cargo run --bin patterns -- factory --approach abstract-factory --flavour vanilla
//! cargo run --bin patterns -- observer --approach pull
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod observer;
pub mod runner;
pub mod strategy;
pub mod template;

pub use error::{PatternError, Result};
