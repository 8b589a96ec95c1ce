use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::render::RenderConfig;
use crate::tree::TreeConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treepager",
    version,
    about = "Show a directory tree in a scrollable pager",
    after_help = "Examples:\n  treepager\n  treepager -d 2 src\n  treepager --show-hidden ~/.config\n  treepager --no-pager . | less"
)]
pub struct Args {
    /// Root directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Maximum depth to display (0 = unlimited)
    #[arg(short = 'd', long = "depth", default_value_t = 0)]
    pub max_depth: usize,

    /// Show hidden entries (names starting with '.')
    #[arg(long = "show-hidden")]
    pub show_hidden: bool,

    /// Follow symbolic links
    #[arg(short = 'f', long = "follow-symlinks")]
    pub follow_symlinks: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print the tree to stdout instead of opening the pager
    #[arg(long = "no-pager")]
    pub no_pager: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Long options also accepted with a single leading dash (`-depth 2`,
/// `-show-hidden`).
const SINGLE_DASH_LONGS: &[&str] = &["depth", "show-hidden"];

/// Rewrite single-dash long options to their `--` form. Arguments after a
/// bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut options_done = false;
    for arg in args.into_iter().map(Into::into) {
        if options_done {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                options_done = true;
                return None;
            }
            let long = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = long.split_once('=').map_or(long, |(name, _)| name);
            SINGLE_DASH_LONGS
                .contains(&name)
                .then(|| OsString::from(format!("-{s}")))
        });
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

impl Args {
    /// Parse the process arguments, exiting on `--help`, `--version`, or a
    /// usage error.
    pub fn parse_normalized() -> Self {
        Self::try_parse_normalized(std::env::args_os()).unwrap_or_else(|e| exit_with_usage(e))
    }

    /// Parse `args` (program name first) after [`normalize_args`].
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        self
    }

    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            max_depth: self.max_depth,
            show_hidden: self.show_hidden,
            follow_symlinks: self.follow_symlinks,
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        if self.no_color {
            RenderConfig::plain()
        } else {
            RenderConfig::default()
        }
    }

    /// Default log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Report a parse failure. Help and version requests go to stdout with
/// status 0; anything else prints the error and the full usage to stderr
/// and exits with status 2.
fn exit_with_usage(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
        _ => {
            let _ = err.print();
            eprintln!("\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

/// Program name, synopsis, and flag descriptions.
pub fn usage_text() -> String {
    Args::command().render_help().to_string()
}
