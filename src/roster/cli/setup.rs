use clap::{Parser, Subcommand};
use roster::ordering::SortKey;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "In-memory student roster with switchable ordering", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Initial ordering: id, name or age (overrides config)
    #[arg(short, long, global = true, value_name = "KEY", help_heading = "Options")]
    pub order: Option<SortKey>,

    /// Print listings and lookups as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Read roster commands from stdin, one per line
    #[command(alias = "sh")]
    Shell,

    /// Create three students and list them under every ordering
    Demo,
}
