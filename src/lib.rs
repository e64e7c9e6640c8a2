pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git_ops;
pub mod manifest;
pub mod npm;
pub mod process;
pub mod ui;

pub use error::{BumpError, Result};
