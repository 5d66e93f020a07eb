mod base;
mod interface;
mod printer;

pub use base::{Action, ConfigError, ParseError};
pub(crate) use base::{validate, Arity, Parser};
pub(crate) use interface::*;
pub(crate) use printer::*;
