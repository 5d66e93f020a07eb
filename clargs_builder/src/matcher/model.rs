#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The classification of a single raw command line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// Anything that is not a switch, including the lone `-` (conventionally stdin/stdout).
    Positional(&'t str),
    /// `--name` or `--name=value`.
    Long {
        name: &'t str,
        inline_value: Option<&'t str>,
    },
    /// `-xyz`, without the leading `-`.
    ShortCluster(ShortCluster<'t>),
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        // 1. Find a 'long' switch, such as:
        //  --initial
        //  --initial ..
        //  --initial=..
        // 2. Find 'short' switch(es), such as (both -i and -v are example short switches):
        //  -i
        //  -i ..
        //  -i..
        //  -iv
        //  -iv..
        // 3. Otherwise, a positional (including "-" by itself).
        let classification = if let Some(long) = token.strip_prefix("--") {
            let (name, inline_value) = split_equals_delimiter(long);
            Token::Long { name, inline_value }
        } else if let Some(cluster) = token.strip_prefix('-').filter(|c| !c.is_empty()) {
            Token::ShortCluster(ShortCluster { cluster })
        } else {
            Token::Positional(token)
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Classified '{token}' as {classification:?}.");
        }

        classification
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}

/// The characters of a short switch cluster, such as `xyz` from `-xyz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShortCluster<'t> {
    cluster: &'t str,
}

/// One character of a [`ShortCluster`] along with the rest of the token after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShortSwitch<'t> {
    pub(crate) short: char,
    /// The rest of the token following `short`, absent when `short` is the final character.
    pub(crate) remainder: Option<&'t str>,
}

impl<'t> ShortCluster<'t> {
    pub(crate) fn switches(&self) -> impl Iterator<Item = ShortSwitch<'t>> + 't {
        let cluster = self.cluster;

        cluster.char_indices().map(move |(index, short)| {
            let remainder = &cluster[index + short.len_utf8()..];

            ShortSwitch {
                short,
                remainder: if remainder.is_empty() {
                    None
                } else {
                    Some(remainder)
                },
            }
        })
    }
}
