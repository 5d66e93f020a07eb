mod capture;
mod core;
mod parameter;

pub use self::core::{CommandLineArguments, LookupError, Registry};
pub use capture::{ArgValue, InvalidCapture};
pub use parameter::{Arg, ArgDescriptor, ArgSpec, Name};
pub(crate) use parameter::{ConsumeError, Consumption};
