// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod log;
pub mod pipeline;
pub mod report;
pub mod runner;
pub mod specs;

pub use error::{Error, Result};
