/// A switch value which counts how many times its switch appears on the command line.
///
/// ### Example
/// ```
/// # use clargs_builder as clargs;
/// use clargs::{Arg, CommandLineArguments, Count};
///
/// let mut registry = CommandLineArguments::new()
///     .add(Arg::<Count>::new('v', "verbose"))
///     .build();
///
/// registry.parse_tokens(vec!["-vvv"].as_slice()).unwrap();
/// assert_eq!(registry.get::<Count>('v').unwrap().value(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(usize);

impl Count {
    /// Create a count starting at `value`.
    pub fn new(value: usize) -> Self {
        Count(value)
    }

    /// The number of occurrences counted.
    pub fn value(&self) -> usize {
        self.0
    }

    pub(crate) fn increment(&mut self) {
        self.0 += 1;
    }
}

impl From<Count> for usize {
    fn from(value: Count) -> Self {
        value.0
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Count({})", self.0)
    }
}

/// The switch value which requests the help message.
///
/// Matching a `PrintHelp` switch interrupts the parse; see [`Action::PrintHelp`](crate::Action::PrintHelp).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PrintHelp;

impl std::fmt::Display for PrintHelp {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

/// The type tag of a declared switch.
///
/// Fixed when the switch is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    /// `String`
    String,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `bool`
    Bool,
    /// [`Count`]
    Count,
    /// [`PrintHelp`]
    Help,
}

/// How a matched switch treats the token that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    /// Needs a value, which gets coerced into the switch's type.
    Consuming,
    /// Flips a `bool`.
    Flip,
    /// Increments a [`Count`].
    Increment,
    /// Interrupts the parse to print help.
    Help,
}

impl Behaviour {
    /// Whether this behaviour never takes a value.
    pub fn is_toggle(&self) -> bool {
        !matches!(self, Behaviour::Consuming)
    }
}

impl ArgType {
    /// The switch behaviour of this type.
    pub fn behaviour(&self) -> Behaviour {
        match self {
            ArgType::Bool => Behaviour::Flip,
            ArgType::Count => Behaviour::Increment,
            ArgType::Help => Behaviour::Help,
            _ => Behaviour::Consuming,
        }
    }

    /// The name shown in help messages, absent for toggle types.
    pub fn help_name(&self) -> Option<&'static str> {
        match self.behaviour() {
            Behaviour::Consuming => Some(self.name()),
            _ => None,
        }
    }

    /// The Rust facing name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::I32 => "i32",
            ArgType::I64 => "i64",
            ArgType::Isize => "isize",
            ArgType::U32 => "u32",
            ArgType::U64 => "u64",
            ArgType::Usize => "usize",
            ArgType::F32 => "f32",
            ArgType::F64 => "f64",
            ArgType::Bool => "bool",
            ArgType::Count => "Count",
            ArgType::Help => "PrintHelp",
        }
    }
}

impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The stored value of a switch.
///
/// The variant always agrees with the switch's [`ArgType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    #[allow(missing_docs)]
    String(String),
    #[allow(missing_docs)]
    I32(i32),
    #[allow(missing_docs)]
    I64(i64),
    #[allow(missing_docs)]
    Isize(isize),
    #[allow(missing_docs)]
    U32(u32),
    #[allow(missing_docs)]
    U64(u64),
    #[allow(missing_docs)]
    Usize(usize),
    #[allow(missing_docs)]
    F32(f32),
    #[allow(missing_docs)]
    F64(f64),
    #[allow(missing_docs)]
    Bool(bool),
    #[allow(missing_docs)]
    Count(Count),
    #[allow(missing_docs)]
    Help(PrintHelp),
}

impl Value {
    /// The type tag of this value.
    pub fn arg_type(&self) -> ArgType {
        match self {
            Value::String(_) => ArgType::String,
            Value::I32(_) => ArgType::I32,
            Value::I64(_) => ArgType::I64,
            Value::Isize(_) => ArgType::Isize,
            Value::U32(_) => ArgType::U32,
            Value::U64(_) => ArgType::U64,
            Value::Usize(_) => ArgType::Usize,
            Value::F32(_) => ArgType::F32,
            Value::F64(_) => ArgType::F64,
            Value::Bool(_) => ArgType::Bool,
            Value::Count(_) => ArgType::Count,
            Value::Help(_) => ArgType::Help,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::Isize(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Usize(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Count(v) => write!(f, "{v}"),
            Value::Help(v) => write!(f, "{v}"),
        }
    }
}
