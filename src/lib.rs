pub mod aggregator;
pub mod boundary;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod reader;
pub mod render;
pub mod tree;
pub mod ui;

pub use error::{ReleaseNotesError, Result};
