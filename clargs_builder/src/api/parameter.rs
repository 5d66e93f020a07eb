use crate::api::capture::{ArgValue, InvalidCapture};
use crate::constant::HELP_SEPARATOR;
use crate::model::{ArgType, Behaviour, Value};

/// The name by which a switch is matched or looked up.
///
/// Matching is exact: no prefix matching, no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Name<'n> {
    /// A single character name, as in `-i`.
    Short(char),
    /// A full name, as in `--int`.
    Long(&'n str),
}

impl<'n> From<char> for Name<'n> {
    fn from(value: char) -> Self {
        Name::Short(value)
    }
}

impl<'n> From<&'n str> for Name<'n> {
    fn from(value: &'n str) -> Self {
        Name::Long(value)
    }
}

impl<'n> From<&'n String> for Name<'n> {
    fn from(value: &'n String) -> Self {
        Name::Long(value.as_str())
    }
}

impl<'n> std::fmt::Display for Name<'n> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Name::Short(s) => write!(f, "-{s}"),
            Name::Long(l) => write!(f, "--{l}"),
        }
    }
}

/// A switch declaration of type `T`, added to a [`CommandLineArguments`](crate::CommandLineArguments).
///
/// Every switch has a short name, a long name, or both.
/// Its value starts as the declared default, or `T::default()` when none is given.
///
/// ### Example
/// ```
/// # use clargs_builder as clargs;
/// use clargs::{Arg, Count, PrintHelp};
///
/// Arg::<i32>::new('i', "int").default(7).help("An integer.");
/// Arg::<String>::long("name");
/// Arg::<Count>::short('v');
/// Arg::<PrintHelp>::new('h', "help").help("Show this help message.");
/// ```
pub struct Arg<T> {
    short: Option<char>,
    long: Option<String>,
    default: T,
    help: Option<String>,
}

impl<T: ArgValue> Arg<T> {
    /// Declare a switch with both a short and a long name.
    pub fn new(short: char, long: impl Into<String>) -> Self {
        Self {
            short: Some(short),
            long: Some(long.into()),
            default: T::default(),
            help: None,
        }
    }

    /// Declare a switch with only a short name.
    pub fn short(short: char) -> Self {
        Self {
            short: Some(short),
            long: None,
            default: T::default(),
            help: None,
        }
    }

    /// Declare a switch with only a long name.
    pub fn long(long: impl Into<String>) -> Self {
        Self {
            short: None,
            long: Some(long.into()),
            default: T::default(),
            help: None,
        }
    }

    /// Set the initial value of this switch.
    /// If repeated, only the final value applies.
    pub fn default(mut self, value: T) -> Self {
        self.default = value;
        self
    }

    /// Document the help message for this switch.
    /// If repeated, only the final message applies.
    pub fn help(mut self, message: impl Into<String>) -> Self {
        self.help.replace(message.into());
        self
    }
}

impl<T: ArgValue> From<Arg<T>> for ArgSpec {
    fn from(value: Arg<T>) -> Self {
        let Arg {
            short,
            long,
            default,
            help,
        } = value;

        ArgSpec {
            descriptor: ArgDescriptor {
                short,
                long,
                arg_type: T::ARG_TYPE,
                help,
            },
            value: default.into_value(),
        }
    }
}

/// The immutable identity of a declared switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDescriptor {
    short: Option<char>,
    long: Option<String>,
    arg_type: ArgType,
    help: Option<String>,
}

impl ArgDescriptor {
    /// The short name, if declared.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long name, if declared.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The type tag.
    pub fn arg_type(&self) -> ArgType {
        self.arg_type
    }

    /// The help message, if documented.
    ///
    /// A blank message counts as undocumented.
    pub fn help_message(&self) -> Option<&str> {
        self.help
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }

    /// Whether `name` refers to this switch.
    pub fn matches(&self, name: &Name) -> bool {
        match name {
            Name::Short(s) => self.short == Some(*s),
            Name::Long(l) => self.long.as_deref() == Some(*l),
        }
    }

    /// The name used in reports: the long name, otherwise the short name.
    pub fn display_name(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => unreachable!("internal error - a switch must have at least one name"),
        }
    }

    /// Render the help line for this switch, ex: `-i <i32> --int=<i32>  -- An integer.`
    ///
    /// The type is omitted for toggle types, as is any absent name or help message.
    pub fn help_line(&self) -> String {
        match self.help_message() {
            Some(message) => format!("{}{HELP_SEPARATOR}{message}", self.flags())
                .trim_end()
                .to_string(),
            None => self.flags(),
        }
    }

    /// The names part of the help line, ex: `-i <i32> --int=<i32>`.
    pub(crate) fn flags(&self) -> String {
        let type_name = self.arg_type.help_name();
        let mut parts = Vec::default();

        if let Some(short) = self.short {
            parts.push(format!("-{short}"));

            if let Some(t) = type_name {
                parts.push(format!("<{t}>"));
            }
        }

        if let Some(long) = &self.long {
            match type_name {
                Some(t) => parts.push(format!("--{long}=<{t}>")),
                None => parts.push(format!("--{long}")),
            }
        }

        parts.join(" ")
    }
}

/// What happened when a switch consumed its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Consumption {
    /// A toggle type switch was applied, the next token was left alone.
    Toggled,
    /// The next token was coerced and stored.
    Consumed,
    /// The help switch was matched.
    HelpRequested,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ConsumeError {
    MissingValue,
    Invalid(InvalidCapture),
}

/// A declared switch: its [`ArgDescriptor`] plus the mutable value cell.
///
/// Only the value changes during a parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSpec {
    descriptor: ArgDescriptor,
    value: Value,
}

impl ArgSpec {
    /// The identity of this switch.
    pub fn descriptor(&self) -> &ArgDescriptor {
        &self.descriptor
    }

    /// The current value of this switch.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn behaviour(&self) -> Behaviour {
        self.descriptor.arg_type.behaviour()
    }

    /// Apply a toggle type switch.
    pub(crate) fn toggle(&mut self) {
        match &mut self.value {
            Value::Bool(flag) => *flag = !*flag,
            Value::Count(count) => count.increment(),
            _ => unreachable!("internal error - only bool and Count switches may toggle"),
        }
    }

    /// Store a value already coerced to this switch's type.
    pub(crate) fn assign(&mut self, value: Value) {
        assert_eq!(
            value.arg_type(),
            self.descriptor.arg_type,
            "internal error - assigned value must match the switch type"
        );
        self.value = value;
    }

    /// Consume the candidate `next` token according to this switch's behaviour.
    ///
    /// Toggle types never consume `next`.
    /// Nothing is mutated when an error is returned.
    pub(crate) fn consume(&mut self, next: Option<&str>) -> Result<Consumption, ConsumeError> {
        match self.behaviour() {
            Behaviour::Help => Ok(Consumption::HelpRequested),
            Behaviour::Flip | Behaviour::Increment => {
                self.toggle();
                Ok(Consumption::Toggled)
            }
            Behaviour::Consuming => {
                let token = next.ok_or(ConsumeError::MissingValue)?;
                let value = self
                    .descriptor
                    .arg_type
                    .coerce(token)
                    .map_err(ConsumeError::Invalid)?;
                self.assign(value);
                Ok(Consumption::Consumed)
            }
        }
    }
}
