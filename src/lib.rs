//! `clargs` is a small, typed command line switch parser for Rust.
//!
//! A program declares its switches up front, each with a fixed type, then parses the command line once and reads the values back by name.
//! `clargs` prioritizes the following design concerns:
//! * *Type safe retrieval*:
//! Each switch is declared with a type `T`, and is only ever read back as that same `T` (see [`Registry::get`]).
//! * *Familiar syntax*:
//! Long switches (`--name`, `--name=value`), short switches (`-n`, `-n value`, `-nvalue`) and short clusters (`-xyz`).
//! * *No surprises*:
//! There is no prefix matching, no case folding and no value guessing.
//! An unknown switch, a missing value, or a value of the wrong type stops the parse.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/greeter.rs")]
//! ```
//!
//! ```console
//! $ greeter -h
//! Usage: greeter [options] NAME
//! Options:
//!   -g <string> --greeting=<string>  -- The greeting to use.
//!   -n <u32> --times=<u32>  -- How many times to greet.
//!   --shout  -- Greet in upper case.
//!   -v  -- Explain what is going on.
//!   -h --help  -- Show this help message.
//!
//! $ greeter -n2 --shout world
//! HELLO, WORLD!
//! HELLO, WORLD!
//!
//! $ greeter --times two world
//! Parse error: Switch '--times' cannot parse 'two' as u32.
//! --times two world
//! ^
//! ```
//!
//! # Switches
//! Configure `clargs` by starting with a [`CommandLineArguments`] and `add`ing switches, each of which is an [`Arg<T>`].
//! Every switch has a short name, a long name, or both, plus an optional default and help message.
//! The type `T` decides how the switch behaves on the command line:
//!
//! ```console
//! Type                      | Syntax                    | Behaviour
//! ----------------------------------------------------------------------------------------
//! String                    | --name VALUE, -n VALUE    | stores VALUE as is
//! i32, i64, isize           | --name VALUE, -n VALUE    | stores VALUE as a signed integer
//! u32, u64, usize           | --name VALUE, -n VALUE    | stores VALUE as an unsigned integer
//! f32, f64                  | --name VALUE, -n VALUE    | stores VALUE as a float
//! bool                      | --name, -n                | flips the value on each occurrence
//! Count                     | --name, -n                | counts each occurrence
//! PrintHelp                 | --name, -n                | stops the parse to request help
//! ```
//!
//! Integers are read the way C's `strtol` reads them with base `0`: `0x` prefixes hexadecimal, and a leading `0` prefixes octal.
//! The whole token must be used; `5x` is not an integer.
//!
//! Names are checked when building, via [`CommandLineArguments::build_registry`] (or [`CommandLineArguments::build`]).
//! A repeated short or long name is a [`ConfigError`].
//!
//! # Cli Semantics
//! `clargs` walks the tokens from left to right.
//!
//! * A token starting with `--` is a long switch.
//! Its value is the text after the first `=`, otherwise the next token (whatever it looks like).
//! For example, `--key=1=2` gives `key` the value `1=2`, and `--key -5` gives `key` the value `-5`.
//! * A token starting with a single `-` is a cluster of short switches.
//! Toggle switches (`bool`, `Count`) may be combined, as in `-vvt`.
//! The first value switch in the cluster takes the rest of the token as its value, or the next token if there is nothing left.
//! For example, `-tgfoo` is equivalent to `-t -g foo`, and `-g=foo` gives `g` the value `=foo`.
//! * Anything else, including `-` by itself, is a positional argument.
//! Positional arguments are collected in order (see [`Registry::positional`]), and may be bounded with [`CommandLineArguments::min_positional`] and [`CommandLineArguments::max_positional`].
//! * A toggle switch ignores any `--name=value` value.
//! * A help switch stops the parse immediately; later tokens are not looked at, and the positional bounds are not checked.
//!
//! There are three ways to run the parse:
//! * [`Registry::parse_tokens`] is the plain engine: it returns the [`Action`] or the [`ParseError`], and prints nothing.
//! * [`Registry::parse_args`] takes the program name first, prints the usage and exits on a help request, and returns any [`ParseError`].
//! * [`Registry::parse`] runs over [`std::env::args`], printing and exiting for both help requests and errors.
//!
//! # Reports
//! [`Registry::help`], [`Registry::usage`] and [`Registry::report`] render the configured switches.
//!
//! ```
//! use clargs::{Arg, CommandLineArguments};
//!
//! let mut registry = CommandLineArguments::new()
//!     .add(Arg::<String>::long("aa"))
//!     .add(Arg::<String>::long("bb").default("cc".to_string()))
//!     .add(Arg::<i32>::new('i', "int").help("An integer."))
//!     .add(Arg::<i32>::long("ii").default(666))
//!     .build();
//!
//! registry
//!     .parse_tokens(vec!["--aa", "aaaa", "arg1", "--ii=5", "arg2"].as_slice())
//!     .unwrap();
//!
//! assert_eq!(registry.report(), "aa=aaaa bb=cc int=0 ii=5\nARGS (2): arg1 arg2");
//! assert_eq!(registry.help()[2], "-i <i32> --int=<i32>  -- An integer.");
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while parsing.
pub use clargs_builder::*;
