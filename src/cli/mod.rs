//! Command-line interface module.

mod args;
pub mod check;
pub mod links;
pub mod redirect;
pub mod table;
pub mod translate;

pub use args::{Cli, Commands, OutputArgs};
