//! Traits which, typically, may be imported without concern: `use clargs::prelude::*`.

pub use crate::api::ArgValue;
