use std::collections::HashSet;
use thiserror::Error;

use crate::api::{ArgSpec, Consumption, ConsumeError, InvalidCapture, Name};
use crate::matcher::{ShortCluster, ShortSwitch, Token};
use crate::model::{Behaviour, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the configuration of the switches (ex: a repeated name).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// An error in the tokens supplied to the parse.
///
/// Every variant is fatal: the parse stops at the first error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `--name` or `-c` which no switch declares.
    #[error("Unrecognized switch '{0}'.")]
    UnrecognizedSwitch(String),

    /// A value-consuming switch at the end of the tokens.
    #[error("Switch '{0}' requires a value, but the end of the command line was reached.")]
    MissingValue(String),

    /// A value which cannot be coerced into the switch's type.
    #[error("Switch '{switch}' cannot parse '{token}' as {type_name}.")]
    InvalidConversion {
        /// The switch as written, ex: `--int`.
        switch: String,
        /// The offending value.
        token: String,
        /// The expected type.
        type_name: &'static str,
    },

    /// Fewer positional arguments than the declared minimum.
    #[error("Too few positional arguments (provided={provided}, expected at least {minimum}).")]
    TooFewPositional {
        #[allow(missing_docs)]
        provided: usize,
        #[allow(missing_docs)]
        minimum: usize,
    },

    /// More positional arguments than the declared maximum.
    #[error("Too many positional arguments (provided={provided}, expected at most {maximum}).")]
    TooManyPositional {
        #[allow(missing_docs)]
        provided: usize,
        #[allow(missing_docs)]
        maximum: usize,
    },
}

impl ParseError {
    fn from_consume(switch: Name, error: ConsumeError) -> Self {
        match error {
            ConsumeError::MissingValue => ParseError::MissingValue(switch.to_string()),
            ConsumeError::Invalid(capture) => ParseError::from_capture(switch, capture),
        }
    }

    fn from_capture(switch: Name, error: InvalidCapture) -> Self {
        match error {
            InvalidCapture::InvalidConversion { token, type_name } => {
                ParseError::InvalidConversion {
                    switch: switch.to_string(),
                    token,
                    type_name,
                }
            }
            InvalidCapture::NotCapturable { .. } => {
                unreachable!("internal error - toggle switches never capture a value")
            }
        }
    }
}

/// The outcome of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Every token was processed and the positional arguments are within bounds.
    Complete,
    /// A help switch was matched.
    /// The parse stopped there: later tokens were not processed, and the positional bounds were not checked.
    /// Toggles ahead of the help switch in the same short cluster (ex: the `t` in `-th`) still apply.
    PrintHelp,
}

/// The bounds on the number of positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Arity {
    pub(crate) minimum: usize,
    pub(crate) maximum: Option<usize>,
}

impl Default for Arity {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: None,
        }
    }
}

impl Arity {
    fn check(&self, provided: usize) -> Result<(), ParseError> {
        if provided < self.minimum {
            return Err(ParseError::TooFewPositional {
                provided,
                minimum: self.minimum,
            });
        }

        match self.maximum {
            Some(maximum) if provided > maximum => {
                Err(ParseError::TooManyPositional { provided, maximum })
            }
            _ => Ok(()),
        }
    }
}

/// Check the switch declarations before any parsing happens.
pub(crate) fn validate(specs: &[ArgSpec], arity: &Arity) -> Result<(), ConfigError> {
    let mut shorts = HashSet::new();
    let mut longs = HashSet::new();

    for spec in specs {
        let descriptor = spec.descriptor();

        if let Some(short) = descriptor.short() {
            if short == '-' || short.is_whitespace() {
                return Err(ConfigError(format!(
                    "Cannot use '{short}' as a short name."
                )));
            }

            if !shorts.insert(short) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the short name '{short}'."
                )));
            }
        }

        if let Some(long) = descriptor.long() {
            if long.is_empty() || long.starts_with('-') || long.contains('=') {
                return Err(ConfigError(format!("Cannot use '{long}' as a long name.")));
            }

            if !longs.insert(long) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the long name '{long}'."
                )));
            }
        }
    }

    if let Some(maximum) = arity.maximum {
        if arity.minimum > maximum {
            return Err(ConfigError(format!(
                "Cannot require at least {} positional arguments, but allow at most {maximum}.",
                arity.minimum
            )));
        }
    }

    Ok(())
}

enum Step {
    Continue { consumed_next: bool },
    PrintHelp,
}

/// A single parse pass over the switches of a registry.
pub(crate) struct Parser<'r> {
    specs: &'r mut [ArgSpec],
    positional: &'r mut Vec<String>,
    arity: Arity,
}

impl<'r> std::fmt::Debug for Parser<'r> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'r> Parser<'r> {
    pub(crate) fn new(
        specs: &'r mut [ArgSpec],
        positional: &'r mut Vec<String>,
        arity: Arity,
    ) -> Self {
        Self {
            specs,
            positional,
            arity,
        }
    }

    /// Find the first declared switch for `name`.
    pub(crate) fn position(&self, name: &Name) -> Option<usize> {
        self.specs
            .iter()
            .position(|spec| spec.descriptor().matches(name))
    }

    /// Match `name` and let the switch consume the candidate `next` token.
    ///
    /// Returns `None` when no switch matches.
    pub(crate) fn match_consume(
        &mut self,
        name: &Name,
        next: Option<&str>,
    ) -> Result<Option<Consumption>, ConsumeError> {
        match self.position(name) {
            Some(index) => self.specs[index].consume(next).map(Some),
            None => Ok(None),
        }
    }

    /// Walk the tokens left to right, returning the byte offset of the failing token on error.
    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<Action, (usize, ParseError)> {
        let mut index = 0;
        let mut fed = 0;

        while index < tokens.len() {
            let token = tokens[index];
            let next = tokens.get(index + 1).copied();

            let step = match Token::classify(token) {
                Token::Positional(value) => {
                    self.positional.push(value.to_string());
                    Ok(Step::Continue {
                        consumed_next: false,
                    })
                }
                Token::Long { name, inline_value } => self.match_long(name, inline_value, next),
                Token::ShortCluster(cluster) => self.match_short_cluster(cluster, next),
            }
            .map_err(|e| (fed, e))?;

            match step {
                Step::PrintHelp => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Help requested by '{token}', skipping the remaining tokens.");
                    }

                    return Ok(Action::PrintHelp);
                }
                Step::Continue { consumed_next } => {
                    fed += token.len();
                    index += 1;

                    if consumed_next {
                        fed += next.map_or(0, str::len);
                        index += 1;
                    }
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Checking {} positional arguments against {:?}.",
                self.positional.len(),
                self.arity
            );
        }

        self.arity
            .check(self.positional.len())
            .map_err(|e| (fed, e))?;
        Ok(Action::Complete)
    }

    fn match_long(
        &mut self,
        name: &str,
        inline_value: Option<&str>,
        next: Option<&str>,
    ) -> Result<Step, ParseError> {
        let name = Name::Long(name);
        // A '--name=value' value never reaches past its own token.
        let (candidate, from_next) = match inline_value {
            Some(value) => (Some(value), false),
            None => (next, true),
        };

        match self
            .match_consume(&name, candidate)
            .map_err(|e| ParseError::from_consume(name, e))?
        {
            None => Err(ParseError::UnrecognizedSwitch(name.to_string())),
            Some(Consumption::HelpRequested) => Ok(Step::PrintHelp),
            Some(Consumption::Toggled) => Ok(Step::Continue {
                consumed_next: false,
            }),
            Some(Consumption::Consumed) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Switch '{name}' consumed {candidate:?}.");
                }

                Ok(Step::Continue {
                    consumed_next: from_next,
                })
            }
        }
    }

    // The whole cluster is resolved and coerced before any switch is mutated,
    // so a failing cluster leaves every switch untouched.
    fn match_short_cluster(
        &mut self,
        cluster: ShortCluster,
        next: Option<&str>,
    ) -> Result<Step, ParseError> {
        let mut toggles: Vec<usize> = Vec::default();
        let mut assignment: Option<(usize, Value, bool)> = None;
        let mut help = false;

        for ShortSwitch { short, remainder } in cluster.switches() {
            let name = Name::Short(short);
            let index = self
                .position(&name)
                .ok_or_else(|| ParseError::UnrecognizedSwitch(name.to_string()))?;
            let spec = &self.specs[index];

            match spec.behaviour() {
                Behaviour::Help => {
                    help = true;
                    break;
                }
                Behaviour::Flip | Behaviour::Increment => toggles.push(index),
                Behaviour::Consuming => {
                    // The rest of the cluster is this switch's value, if there is any.
                    let (token, from_next) = match remainder {
                        Some(value) => (value, false),
                        None => (
                            next.ok_or_else(|| ParseError::MissingValue(name.to_string()))?,
                            true,
                        ),
                    };
                    let value = spec
                        .descriptor()
                        .arg_type()
                        .coerce(token)
                        .map_err(|e| ParseError::from_capture(name, e))?;

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Switch '{name}' consumed '{token}'.");
                    }

                    assignment.replace((index, value, from_next));
                    break;
                }
            }
        }

        for index in toggles {
            self.specs[index].toggle();
        }

        // Toggles ahead of the help switch keep their effect, as in '-t -h'.
        if help {
            return Ok(Step::PrintHelp);
        }

        let consumed_next = match assignment {
            Some((index, value, from_next)) => {
                self.specs[index].assign(value);
                from_next
            }
            None => false,
        };

        Ok(Step::Continue { consumed_next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Arg;
    use crate::model::{Count, PrintHelp};
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn specs() -> Vec<ArgSpec> {
        vec![
            ArgSpec::from(Arg::<bool>::new('t', "true")),
            ArgSpec::from(Arg::<bool>::new('f', "false").default(true)),
            ArgSpec::from(Arg::<Count>::new('v', "verbose")),
            ArgSpec::from(Arg::<String>::new('g', "hh")),
            ArgSpec::from(Arg::<i32>::new('i', "int")),
            ArgSpec::from(Arg::<i32>::long("ii").default(666)),
            ArgSpec::from(Arg::<f64>::long("dd")),
            ArgSpec::from(Arg::<PrintHelp>::new('h', "help")),
        ]
    }

    fn value<'s>(specs: &'s [ArgSpec], name: Name) -> &'s Value {
        specs
            .iter()
            .find(|spec| spec.descriptor().matches(&name))
            .unwrap()
            .value()
    }

    fn consume(
        specs: &mut [ArgSpec],
        arity: Arity,
        tokens: &[&str],
    ) -> (Result<Action, (usize, ParseError)>, Vec<String>) {
        let mut positional = Vec::default();
        let result = Parser::new(specs, &mut positional, arity).consume(tokens);
        (result, positional)
    }

    #[test]
    fn parser_empty() {
        let mut specs = specs();
        let (result, positional) = consume(&mut specs, Arity::default(), &[]);
        assert_eq!(result, Ok(Action::Complete));
        assert!(positional.is_empty());
        assert_eq!(specs, self::specs());
    }

    #[rstest]
    #[case(vec!["--int", "5"])]
    #[case(vec!["--int=5"])]
    #[case(vec!["-i", "5"])]
    #[case(vec!["-i5"])]
    #[case(vec!["--int", "05"])]
    #[case(vec!["--int=0x5"])]
    fn parser_value(#[case] tokens: Vec<&str>) {
        let mut specs = specs();
        let (result, positional) = consume(&mut specs, Arity::default(), tokens.as_slice());
        assert_eq!(result, Ok(Action::Complete));
        assert!(positional.is_empty());
        assert_eq!(value(&specs, Name::Short('i')), &Value::I32(5));
    }

    #[rstest]
    #[case(ArgSpec::from(Arg::<String>::long("ss")), "--ss", "a b".to_string(), |v: &String| Value::String(v.clone()))]
    #[case(ArgSpec::from(Arg::<String>::long("ss")), "--ss", "-x".to_string(), |v: &String| Value::String(v.clone()))]
    #[case(ArgSpec::from(Arg::<u64>::long("uu")), "--uu", thread_rng().gen::<u64>().to_string(), |v: &String| Value::U64(v.parse().unwrap()))]
    #[case(ArgSpec::from(Arg::<i64>::long("ll")), "--ll", thread_rng().gen::<i64>().to_string(), |v: &String| Value::I64(v.parse().unwrap()))]
    #[case(ArgSpec::from(Arg::<i32>::long("ii")), "--ii", thread_rng().gen::<i32>().to_string(), |v: &String| Value::I32(v.parse().unwrap()))]
    #[case(ArgSpec::from(Arg::<f64>::long("dd")), "--dd", thread_rng().gen::<f64>().to_string(), |v: &String| Value::F64(v.parse().unwrap()))]
    #[case(ArgSpec::from(Arg::<f64>::long("dd")), "--dd", "-1.5e3".to_string(), |v: &String| Value::F64(v.parse().unwrap()))]
    fn parser_value_separate_equals_inline(
        #[case] spec: ArgSpec,
        #[case] switch: &str,
        #[case] raw: String,
        #[case] expected: fn(&String) -> Value,
    ) {
        // Setup
        let separate = vec![switch.to_string(), raw.clone()];
        let inline = vec![format!("{switch}={raw}")];

        for tokens in [separate, inline] {
            let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
            let mut specs = vec![spec.clone()];

            // Execute
            let (result, positional) = consume(&mut specs, Arity::default(), tokens.as_slice());

            // Verify
            assert_eq!(result, Ok(Action::Complete));
            assert!(positional.is_empty());
            assert_eq!(specs[0].value(), &expected(&raw));
        }
    }

    #[rstest]
    #[case(vec!["--true"], true, true)]
    #[case(vec!["--true", "--true"], false, true)]
    #[case(vec!["-t", "-f"], true, false)]
    #[case(vec!["-tf"], true, false)]
    #[case(vec!["-ttt"], true, true)]
    #[case(vec!["--false", "-f", "--false"], false, false)]
    #[case(vec!["--true=ignored"], true, true)]
    fn parser_bool(#[case] tokens: Vec<&str>, #[case] t: bool, #[case] f: bool) {
        let mut specs = specs();
        let (result, positional) = consume(&mut specs, Arity::default(), tokens.as_slice());
        assert_eq!(result, Ok(Action::Complete));
        assert!(positional.is_empty());
        assert_eq!(value(&specs, Name::Short('t')), &Value::Bool(t));
        assert_eq!(value(&specs, Name::Short('f')), &Value::Bool(f));
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec!["-v"], 1)]
    #[case(vec!["-vvv"], 3)]
    #[case(vec!["-vv", "--verbose", "-tv"], 4)]
    fn parser_count(#[case] tokens: Vec<&str>, #[case] expected: usize) {
        let mut specs = specs();
        let (result, _) = consume(&mut specs, Arity::default(), tokens.as_slice());
        assert_eq!(result, Ok(Action::Complete));
        assert_eq!(
            value(&specs, Name::Short('v')),
            &Value::Count(Count::new(expected))
        );
    }

    #[rstest]
    #[case(vec!["-tvgV"], "V", vec![])]
    #[case(vec!["-tvg", "V"], "V", vec![])]
    #[case(vec!["-tvg", "V", "W"], "V", vec!["W"])]
    #[case(vec!["-tvgV", "W"], "V", vec!["W"])]
    #[case(vec!["-tvgi5"], "i5", vec![])]
    #[case(vec!["-tvg=foo"], "=foo", vec![])]
    #[case(vec!["-tvg", "-f"], "-f", vec![])]
    fn parser_short_cluster(
        #[case] tokens: Vec<&str>,
        #[case] expected: &str,
        #[case] expected_positional: Vec<&str>,
    ) {
        let mut specs = specs();
        let (result, positional) = consume(&mut specs, Arity::default(), tokens.as_slice());
        assert_eq!(result, Ok(Action::Complete));
        assert_eq!(positional, expected_positional);
        assert_eq!(value(&specs, Name::Short('t')), &Value::Bool(true));
        assert_eq!(value(&specs, Name::Short('f')), &Value::Bool(true));
        assert_eq!(
            value(&specs, Name::Short('v')),
            &Value::Count(Count::new(1))
        );
        assert_eq!(
            value(&specs, Name::Short('g')),
            &Value::String(expected.to_string())
        );
        assert_eq!(value(&specs, Name::Short('i')), &Value::I32(0));
    }

    #[rstest]
    #[case(vec!["-"], vec!["-"])]
    #[case(vec![""], vec![""])]
    #[case(vec!["a", "-", "b"], vec!["a", "-", "b"])]
    #[case(vec!["a", "--hh", "b", "c"], vec!["a", "c"])]
    #[case(vec!["a", "--hh=b", "c"], vec!["a", "c"])]
    #[case(vec!["--int", "-5", "a"], vec!["a"])]
    fn parser_positional(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        let mut specs = specs();
        let (result, positional) = consume(&mut specs, Arity::default(), tokens.as_slice());
        assert_eq!(result, Ok(Action::Complete));
        assert_eq!(positional, expected);
    }

    #[rstest]
    #[case(vec!["--unknown"], 0, "--unknown")]
    #[case(vec!["--unknown=1"], 0, "--unknown")]
    #[case(vec!["--"], 0, "--")]
    #[case(vec!["--INT", "1"], 0, "--INT")]
    #[case(vec!["--in", "1"], 0, "--in")]
    #[case(vec!["-x"], 0, "-x")]
    #[case(vec!["abc", "-tx"], 3, "-x")]
    #[case(vec!["--int", "1", "-vtx"], 6, "-x")]
    #[case(vec!["-tvxg", "V"], 0, "-x")]
    fn parser_unrecognized(
        #[case] tokens: Vec<&str>,
        #[case] offset: usize,
        #[case] switch: &str,
    ) {
        let mut specs = specs();
        let (result, _) = consume(&mut specs, Arity::default(), tokens.as_slice());
        assert_eq!(
            result,
            Err((offset, ParseError::UnrecognizedSwitch(switch.to_string())))
        );
        // The failing token leaves every switch untouched.
        assert_eq!(value(&specs, Name::Short('t')), &Value::Bool(false));
        assert_eq!(
            value(&specs, Name::Short('v')),
            &Value::Count(Count::default())
        );
        assert_eq!(value(&specs, Name::Short('g')), &Value::String("".to_string()));
    }

    #[rstest]
    #[case(vec!["--int"], 0, "--int")]
    #[case(vec!["-i"], 0, "-i")]
    #[case(vec!["-tvi"], 0, "-i")]
    #[case(vec!["a", "--hh"], 1, "--hh")]
    fn parser_missing_value(
        #[case] tokens: Vec<&str>,
        #[case] offset: usize,
        #[case] switch: &str,
    ) {
        let mut specs = specs();
        let (result, _) = consume(&mut specs, Arity::default(), tokens.as_slice());
        assert_eq!(
            result,
            Err((offset, ParseError::MissingValue(switch.to_string())))
        );
        assert_eq!(value(&specs, Name::Short('t')), &Value::Bool(false));
    }

    #[rstest]
    #[case(vec!["--int", "abc"], "--int", "abc")]
    #[case(vec!["--int=5x"], "--int", "5x")]
    #[case(vec!["--int="], "--int", "")]
    #[case(vec!["-i", "1.5"], "-i", "1.5")]
    #[case(vec!["-ti1.5"], "-i", "1.5")]
    #[case(vec!["-i=5"], "-i", "=5")]
    fn parser_invalid_conversion(
        #[case] tokens: Vec<&str>,
        #[case] switch: &str,
        #[case] token: &str,
    ) {
        let mut specs = specs();
        let (result, _) = consume(&mut specs, Arity::default(), tokens.as_slice());
        assert_eq!(
            result,
            Err((
                0,
                ParseError::InvalidConversion {
                    switch: switch.to_string(),
                    token: token.to_string(),
                    type_name: "i32",
                }
            ))
        );
        assert_eq!(value(&specs, Name::Short('t')), &Value::Bool(false));
        assert_eq!(value(&specs, Name::Short('i')), &Value::I32(0));
    }

    #[rstest]
    #[case(vec!["--help"])]
    #[case(vec!["-h"])]
    #[case(vec!["--help=1"])]
    #[case(vec!["--help", "1"])]
    #[case(vec!["-th"])]
    #[case(vec!["-hx"])]
    #[case(vec!["a", "b", "c", "-h"])]
    #[case(vec!["-h", "--unknown"])]
    #[case(vec!["-h", "--int", "not-an-i32"])]
    fn parser_help(#[case] tokens: Vec<&str>) {
        let mut specs = specs();
        let arity = Arity {
            minimum: 1,
            maximum: Some(1),
        };
        let (result, _) = consume(&mut specs, arity, tokens.as_slice());
        assert_eq!(result, Ok(Action::PrintHelp));
        assert_eq!(value(&specs, Name::Short('i')), &Value::I32(0));
    }

    #[test]
    fn parser_help_stops_processing() {
        let mut specs = specs();
        let (result, positional) = consume(
            &mut specs,
            Arity::default(),
            vec!["a", "-t", "--help", "-t", "b"].as_slice(),
        );
        assert_eq!(result, Ok(Action::PrintHelp));
        assert_eq!(positional, vec!["a"]);
        assert_eq!(value(&specs, Name::Short('t')), &Value::Bool(true));
    }

    #[rstest]
    #[case(vec!["-th"], true, 0)]
    #[case(vec!["-t", "-h"], true, 0)]
    #[case(vec!["-vvh"], false, 2)]
    #[case(vec!["-tvhv"], true, 1)]
    #[case(vec!["-t", "-th"], false, 0)]
    #[case(vec!["-hvt"], false, 0)]
    fn parser_help_cluster_applies_toggles(
        #[case] tokens: Vec<&str>,
        #[case] t: bool,
        #[case] v: usize,
    ) {
        // Setup
        let mut specs = specs();

        // Execute
        let (result, _) = consume(&mut specs, Arity::default(), tokens.as_slice());

        // Verify
        assert_eq!(result, Ok(Action::PrintHelp));
        assert_eq!(value(&specs, Name::Short('t')), &Value::Bool(t));
        assert_eq!(value(&specs, Name::Short('v')), &Value::Count(Count::new(v)));
    }

    #[rstest]
    #[case(vec![], Ok(()))]
    #[case(vec!["a"], Ok(()))]
    #[case(vec!["a", "b"], Ok(()))]
    #[case(vec!["a", "b", "c"], Ok(()))]
    #[case(vec!["-t", "a", "b", "c", "d"], Err(ParseError::TooManyPositional { provided: 4, maximum: 3 }))]
    fn parser_arity_maximum(#[case] tokens: Vec<&str>, #[case] expected: Result<(), ParseError>) {
        let mut specs = specs();
        let arity = Arity {
            minimum: 0,
            maximum: Some(3),
        };
        let (result, _) = consume(&mut specs, arity, tokens.as_slice());
        assert_eq!(
            result.map(|_| ()).map_err(|(_, e)| e),
            expected
        );
    }

    #[rstest]
    #[case(vec![], Err(ParseError::TooFewPositional { provided: 0, minimum: 1 }))]
    #[case(vec!["-t"], Err(ParseError::TooFewPositional { provided: 0, minimum: 1 }))]
    #[case(vec!["a"], Ok(vec!["a"]))]
    #[case(vec!["a", "-t", "b"], Ok(vec!["a", "b"]))]
    #[case(vec!["a", "b", "c"], Err(ParseError::TooManyPositional { provided: 3, maximum: 2 }))]
    fn parser_arity_range(
        #[case] tokens: Vec<&str>,
        #[case] expected: Result<Vec<&str>, ParseError>,
    ) {
        let mut specs = specs();
        let arity = Arity {
            minimum: 1,
            maximum: Some(2),
        };
        let (result, positional) = consume(&mut specs, arity, tokens.as_slice());

        match expected {
            Ok(expected_positional) => {
                assert_eq!(result, Ok(Action::Complete));
                assert_eq!(positional, expected_positional);
            }
            Err(error) => {
                let total: usize = tokens.iter().map(|t| t.len()).sum();
                assert_eq!(result, Err((total, error)));
            }
        }
    }

    #[test]
    fn match_consume() {
        let mut specs = specs();
        let mut positional = Vec::default();
        let mut parser = Parser::new(&mut specs, &mut positional, Arity::default());

        assert_eq!(parser.match_consume(&Name::Long("nope"), Some("1")), Ok(None));
        assert_eq!(
            parser.match_consume(&Name::Short('t'), Some("1")),
            Ok(Some(Consumption::Toggled))
        );
        assert_eq!(
            parser.match_consume(&Name::Long("int"), Some("1")),
            Ok(Some(Consumption::Consumed))
        );
        assert_eq!(
            parser.match_consume(&Name::Long("int"), None),
            Err(ConsumeError::MissingValue)
        );
        assert_eq!(
            parser.match_consume(&Name::Short('h'), None),
            Ok(Some(Consumption::HelpRequested))
        );
    }

    #[test]
    fn validate_ok() {
        assert_eq!(validate(&specs(), &Arity::default()), Ok(()));
        assert_eq!(validate(&[], &Arity { minimum: 2, maximum: Some(2) }), Ok(()));
    }

    #[rstest]
    #[case(vec![ArgSpec::from(Arg::<i32>::short('a')), ArgSpec::from(Arg::<bool>::new('a', "b"))])]
    #[case(vec![ArgSpec::from(Arg::<i32>::long("a")), ArgSpec::from(Arg::<bool>::new('b', "a"))])]
    #[case(vec![ArgSpec::from(Arg::<i32>::long(""))])]
    #[case(vec![ArgSpec::from(Arg::<i32>::long("-a"))])]
    #[case(vec![ArgSpec::from(Arg::<i32>::long("a=b"))])]
    #[case(vec![ArgSpec::from(Arg::<i32>::short('-'))])]
    #[case(vec![ArgSpec::from(Arg::<i32>::short(' '))])]
    fn validate_invalid_names(#[case] specs: Vec<ArgSpec>) {
        assert_matches!(validate(&specs, &Arity::default()), Err(ConfigError(_)));
    }

    #[test]
    fn validate_invalid_arity() {
        let result = validate(
            &specs(),
            &Arity {
                minimum: 3,
                maximum: Some(2),
            },
        );
        assert_matches!(result, Err(ConfigError(message)) => {
            assert_eq!(message, "Cannot require at least 3 positional arguments, but allow at most 2.");
        });
    }

    #[test]
    fn parse_error_messages() {
        assert_eq!(
            ParseError::UnrecognizedSwitch("--abc".to_string()).to_string(),
            "Unrecognized switch '--abc'."
        );
        assert_eq!(
            ParseError::InvalidConversion {
                switch: "-i".to_string(),
                token: "x".to_string(),
                type_name: "i32",
            }
            .to_string(),
            "Switch '-i' cannot parse 'x' as i32."
        );
        assert_ne!(
            ParseError::TooFewPositional {
                provided: 1,
                minimum: 2
            }
            .to_string(),
            ParseError::TooManyPositional {
                provided: 1,
                maximum: 0
            }
            .to_string()
        );
    }
}
