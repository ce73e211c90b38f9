//! `electrovault-cli`
//!
//! **Responsibility:** thin command-line front end over the inventory store.
//!
//! Every command loads the inventory, calls one store operation and renders
//! the result. The store remains the authority; nothing is kept between runs
//! except the data file.

pub mod args;
pub mod commands;
pub mod render;

pub use args::{Cli, Command};
pub use commands::run;
