//! Builder module for `clargs`.
//! See [documentation root](https://docs.rs/clargs/latest/clargs/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{Action, ConfigError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
