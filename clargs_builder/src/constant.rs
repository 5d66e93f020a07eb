pub(crate) const PROGNAME_PLACEHOLDER: &str = "{progname}";
pub(crate) const DEFAULT_USAGE: &str = "Usage: {progname} [options]";
pub(crate) const OPTIONS_HEADING: &str = "Options:";
pub(crate) const HELP_INDENT: &str = "  ";
pub(crate) const HELP_SEPARATOR: &str = "  -- ";
pub(crate) const POSITIONAL_HEADING: &str = "ARGS";
