use std::env;
use thiserror::Error;

use crate::api::{Arg, ArgSpec, ArgValue, Name};
use crate::constant::DEFAULT_USAGE;
use crate::model::ArgType;
use crate::parser::{
    report, validate, Action, Arity, ConfigError, ConsoleInterface, ErrorContext, ParseError,
    Parser, Printer, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line switches builder.
///
/// ### Example
/// ```
/// # use clargs_builder as clargs;
/// use clargs::CommandLineArguments;
///
/// let mut registry = CommandLineArguments::new()
///     // Configure with CommandLineArguments::add.
///     .build();
/// registry.parse_tokens(&[]).unwrap();
/// ```
pub struct CommandLineArguments {
    specs: Vec<ArgSpec>,
    arity: Arity,
    usage: String,
}

impl Default for CommandLineArguments {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLineArguments {
    /// Create an empty builder: no switches, any number of positional arguments.
    pub fn new() -> Self {
        Self {
            specs: Vec::default(),
            arity: Arity::default(),
            usage: DEFAULT_USAGE.to_string(),
        }
    }

    /// Add a switch.
    ///
    /// Declaration order is the order of the help lines and of the report.
    ///
    /// ### Example
    /// ```
    /// # use clargs_builder as clargs;
    /// use clargs::{Arg, CommandLineArguments};
    ///
    /// let mut registry = CommandLineArguments::new()
    ///     .add(Arg::<String>::long("aa"))
    ///     .add(Arg::<String>::long("bb").default("cc".to_string()))
    ///     .build();
    ///
    /// registry.parse_tokens(vec!["--aa", "aaaa"].as_slice()).unwrap();
    ///
    /// assert_eq!(registry.get::<String>("aa").unwrap(), "aaaa");
    /// assert_eq!(registry.get::<String>("bb").unwrap(), "cc");
    /// ```
    pub fn add<T: ArgValue>(mut self, arg: Arg<T>) -> Self {
        self.specs.push(ArgSpec::from(arg));
        self
    }

    /// Require at least `minimum` positional arguments.
    /// Defaults to `0`.
    pub fn min_positional(mut self, minimum: usize) -> Self {
        self.arity.minimum = minimum;
        self
    }

    /// Allow at most `maximum` positional arguments.
    /// Defaults to unbounded.
    pub fn max_positional(mut self, maximum: usize) -> Self {
        self.arity.maximum.replace(maximum);
        self
    }

    /// Set the usage template, where `{progname}` is replaced by the program name.
    /// Defaults to `Usage: {progname} [options]`.
    ///
    /// ### Example
    /// ```
    /// # use clargs_builder as clargs;
    /// use clargs::{Arg, CommandLineArguments};
    ///
    /// let registry = CommandLineArguments::new()
    ///     .usage("{progname} [-t] FILE")
    ///     .add(Arg::<bool>::short('t'))
    ///     .build();
    ///
    /// assert_eq!(registry.usage("program"), "program [-t] FILE\nOptions:\n  -t");
    /// ```
    pub fn usage(mut self, template: impl Into<String>) -> Self {
        self.usage = template.into();
        self
    }

    /// Build the registry as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated switch name).
    pub fn build_registry(self) -> Result<Registry, ConfigError> {
        let CommandLineArguments {
            specs,
            arity,
            usage,
        } = self;
        validate(&specs, &arity)?;

        Ok(Registry {
            specs,
            arity,
            usage,
            positional: Vec::default(),
            program: None,
        })
    }

    /// Build the registry.
    /// This finalizes the configuration and checks for errors (ex: a repeated switch name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> Registry {
        match self.build_registry() {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// An error in looking up a switch by name.
///
/// These indicate a mistake in the calling program, rather than in the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// No switch is declared with the name.
    #[error("Cannot find switch '{0}'.")]
    NotFound(String),

    /// The switch is declared with a different type than the one requested.
    #[error("Cannot get switch '{name}' as {requested}, since it is declared as {actual}.")]
    TypeMismatch {
        /// The switch as looked up, ex: `--int`.
        name: String,
        /// The type asked for.
        requested: ArgType,
        /// The declared type.
        actual: ArgType,
    },
}

#[derive(Debug, PartialEq, Eq)]
enum ParseResult {
    Complete,
    Exit(i32),
}

/// The configured command line switches, along with their parsed values.
/// Built via [`CommandLineArguments::build`].
///
/// A registry is meant to be parsed once.
pub struct Registry {
    specs: Vec<ArgSpec>,
    arity: Arity,
    usage: String,
    positional: Vec<String>,
    program: Option<String>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("specs", &self.specs)
            .field("positional", &self.positional)
            .field("program", &self.program)
            .finish()
    }
}

impl Registry {
    /// The declared switches, in declaration order.
    pub fn specs(&self) -> &[ArgSpec] {
        &self.specs
    }

    /// The positional arguments, in the order they appeared.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// The program name, once known from [`Registry::parse_args`] or [`Registry::parse`].
    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// Get the value of the switch `name` by its type `T`.
    ///
    /// Use a `char` to look up the short name, or a `&str` for the long name.
    /// Before parsing, this is the switch's default.
    ///
    /// ### Example
    /// ```
    /// # use clargs_builder as clargs;
    /// use clargs::{Arg, CommandLineArguments, LookupError};
    ///
    /// let mut registry = CommandLineArguments::new()
    ///     .add(Arg::<i32>::new('i', "int").default(1))
    ///     .build();
    ///
    /// assert_eq!(registry.get::<i32>('i'), Ok(&1));
    /// registry.parse_tokens(vec!["-i", "2"].as_slice()).unwrap();
    /// assert_eq!(registry.get::<i32>("int"), Ok(&2));
    /// assert!(matches!(registry.get::<u32>("int"), Err(LookupError::TypeMismatch { .. })));
    /// assert!(matches!(registry.get::<i32>("integer"), Err(LookupError::NotFound(_))));
    /// ```
    pub fn get<'n, T: ArgValue>(&self, name: impl Into<Name<'n>>) -> Result<&T, LookupError> {
        let name = name.into();
        let spec = self
            .specs
            .iter()
            .find(|spec| spec.descriptor().matches(&name))
            .ok_or_else(|| LookupError::NotFound(name.to_string()))?;

        T::from_value(spec.value()).ok_or_else(|| LookupError::TypeMismatch {
            name: name.to_string(),
            requested: T::ARG_TYPE,
            actual: spec.descriptor().arg_type(),
        })
    }

    /// The help line of each switch, in declaration order.
    ///
    /// ### Example
    /// ```
    /// # use clargs_builder as clargs;
    /// use clargs::{Arg, CommandLineArguments};
    ///
    /// let registry = CommandLineArguments::new()
    ///     .add(Arg::<i32>::new('i', "int").help("An integer."))
    ///     .add(Arg::<bool>::long("flag"))
    ///     .build();
    ///
    /// assert_eq!(registry.help(), vec!["-i <i32> --int=<i32>  -- An integer.", "--flag"]);
    /// ```
    pub fn help(&self) -> Vec<String> {
        self.specs
            .iter()
            .map(|spec| spec.descriptor().help_line())
            .collect()
    }

    /// The full usage text for `program`, without any line wrapping.
    pub fn usage(&self, program: &str) -> String {
        Printer::new(self.usage.as_str(), &self.specs, None)
            .render(program)
            .join("\n")
    }

    /// Every switch as `name=value`, followed by the positional arguments.
    ///
    /// ### Example
    /// ```
    /// # use clargs_builder as clargs;
    /// use clargs::{Arg, CommandLineArguments, Count};
    ///
    /// let mut registry = CommandLineArguments::new()
    ///     .add(Arg::<String>::long("aa"))
    ///     .add(Arg::<Count>::short('v'))
    ///     .build();
    ///
    /// registry.parse_tokens(vec!["-vv", "x"].as_slice()).unwrap();
    /// assert_eq!(registry.report(), "aa= v=Count(2)\nARGS (1): x");
    /// ```
    pub fn report(&self) -> String {
        report(&self.specs, &self.positional)
    }

    /// Run the parse against the input tokens, which exclude the program name.
    ///
    /// Tokens are processed left to right.
    /// On success, returns whether every token was processed ([`Action::Complete`]) or a help switch was encountered ([`Action::PrintHelp`]).
    /// The caller decides what to do about the help request; nothing is printed.
    ///
    /// If a token cannot be matched or its value cannot be coerced, the parse stops with a [`ParseError`].
    /// The switches touched by earlier tokens keep their new values, but the failing token itself changes nothing.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<Action, ParseError> {
        self.consume(tokens).map_err(|(_, e)| e)
    }

    /// Run the parse against the process style arguments, where the first item is the program name.
    ///
    /// If a help switch is encountered, the usage is printed to stderr and the process exits with error code `1` (via [`std::process::exit`]).
    /// Otherwise, any [`ParseError`] is returned to the caller.
    pub fn parse_args<I, S>(&mut self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        match self.invoke(&args, &ConsoleInterface::default()) {
            Ok(ParseResult::Complete) => Ok(()),
            Ok(ParseResult::Exit(code)) => std::process::exit(code),
            Err((_, e)) => Err(e),
        }
    }

    /// Run the parse against the Cli [`env::args`].
    ///
    /// If a help switch is encountered, the usage is printed to stderr and the process exits with error code `1`.
    /// If a parse error is encountered, it is printed to stderr (along with where it happened) and the process exits with error code `1`.
    pub fn parse(&mut self) {
        let args: Vec<String> = env::args().collect();

        match self.run(&args, &ConsoleInterface::default()) {
            ParseResult::Complete => {}
            ParseResult::Exit(code) => std::process::exit(code),
        }
    }

    fn consume(&mut self, tokens: &[&str]) -> Result<Action, (usize, ParseError)> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing {} tokens against {} switches.", tokens.len(), self.specs.len());
        }

        Parser::new(&mut self.specs, &mut self.positional, self.arity).consume(tokens)
    }

    fn invoke(
        &mut self,
        args: &[String],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<ParseResult, (usize, ParseError)> {
        let (program, tokens) = split_program(args);
        self.program = program.map(str::to_string);

        match self.consume(tokens.as_slice())? {
            Action::Complete => Ok(ParseResult::Complete),
            Action::PrintHelp => {
                Printer::terminal(self.usage.as_str(), &self.specs)
                    .print_help(program.unwrap_or_default(), user_interface);
                Ok(ParseResult::Exit(1))
            }
        }
    }

    fn run(&mut self, args: &[String], user_interface: &(impl UserInterface + ?Sized)) -> ParseResult {
        match self.invoke(args, user_interface) {
            Ok(result) => result,
            Err((offset, parse_error)) => {
                let (_, tokens) = split_program(args);
                user_interface.print_error(parse_error);
                user_interface.print_error_context(ErrorContext::new(offset, tokens.as_slice()));
                ParseResult::Exit(1)
            }
        }
    }
}

fn split_program(args: &[String]) -> (Option<&str>, Vec<&str>) {
    match args.split_first() {
        Some((program, tokens)) => (
            Some(program.as_str()),
            tokens.iter().map(AsRef::as_ref).collect(),
        ),
        None => (None, Vec::default()),
    }
}
