use terminal_size::{terminal_size, Width};

use crate::api::ArgSpec;
use crate::constant::*;
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the help doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

struct HelpEntry {
    flags: String,
    description: Option<String>,
}

pub(crate) struct Printer {
    usage: String,
    entries: Vec<HelpEntry>,
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal(usage: impl Into<String>, specs: &[ArgSpec]) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(usage, specs, terminal_width)
    }

    pub(crate) fn new(
        usage: impl Into<String>,
        specs: &[ArgSpec],
        terminal_width: Option<usize>,
    ) -> Self {
        let entries = specs
            .iter()
            .map(|spec| HelpEntry {
                flags: spec.descriptor().flags(),
                description: spec.descriptor().help_message().map(str::to_string),
            })
            .collect();

        Self {
            usage: usage.into(),
            entries,
            terminal_width,
        }
    }

    /// Render the usage text for `program`, one line per element.
    pub(crate) fn render(&self, program: &str) -> Vec<String> {
        let mut lines = vec![
            self.usage.replace(PROGNAME_PLACEHOLDER, program),
            OPTIONS_HEADING.to_string(),
        ];

        for HelpEntry { flags, description } in &self.entries {
            let prefix = format!("{HELP_INDENT}{flags}");

            match description {
                Some(description) => {
                    lines.extend(self.wrap(&format!("{prefix}{HELP_SEPARATOR}"), description))
                }
                None => lines.push(prefix),
            }
        }

        lines
    }

    pub(crate) fn print_help(&self, program: &str, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.render(program) {
            user_interface.print(line);
        }
    }

    // Continuation lines are aligned under the start of the description.
    fn wrap(&self, head: &str, description: &str) -> Vec<String> {
        let head_width = head.chars().count();
        let target_width = self
            .terminal_width
            .map(|tw| (tw as f64 * TARGET_TOTAL_FACTOR) as usize);

        match target_width {
            Some(target)
                if head_width + description.chars().count() > target
                    && head_width + MINIMUM_DESCRIPTION_WIDTH <= target
                    && !description.trim().is_empty() =>
            {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Wrapping '{head}' description to width {}.", target - head_width);
                }

                chunk(description, target - head_width)
                    .into_iter()
                    .enumerate()
                    .map(|(i, part)| {
                        if i == 0 {
                            format!("{head}{part}")
                        } else {
                            format!("{:head_width$}{part}", "")
                        }
                    })
                    .collect()
            }
            _ => vec![format!("{head}{description}").trim_end().to_string()],
        }
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Width must be at least 2, to leave room for the hyphen.
fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let mut rest = characters.as_slice();

    while rest.len() > width {
        let (head, tail) = rest.split_at(width - 1);
        lines.push(format!("{}-", head.iter().collect::<String>()));
        rest = tail;
    }

    current.extend(rest.iter());
}

/// Render the `name=value` report of every switch followed by the positional arguments.
pub(crate) fn report(specs: &[ArgSpec], positional: &[String]) -> String {
    let values: Vec<String> = specs
        .iter()
        .map(|spec| format!("{}={}", spec.descriptor().display_name(), spec.value()))
        .collect();
    let mut out = format!(
        "{}\n{POSITIONAL_HEADING} ({}):",
        values.join(" "),
        positional.len()
    );

    for argument in positional {
        out.push(' ');
        out.push_str(argument);
    }

    out
}

/// The tokens of a failed parse, with a caret under the offending token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.tokens.join(" ");
        // The offset counts token bytes only, so add back the joining spaces it has passed.
        let mut fed = 0;
        let mut spaces = 0;

        for token in self.tokens.iter().take(self.tokens.len().saturating_sub(1)) {
            fed += token.len();

            if fed > self.offset {
                break;
            }

            spaces += 1;
        }

        let column = std::cmp::min(self.offset + spaces, line.len().saturating_sub(1));
        let width = line
            .char_indices()
            .take_while(|(index, _)| *index < column)
            .count();
        write!(f, "{line}\n{:width$}^", "")
    }
}
