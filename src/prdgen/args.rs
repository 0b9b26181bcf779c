use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Version string, with the git hash appended for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "prdgen", version = get_version())]
#[command(about = "Frontend planning PRD generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the document file (overrides the default location)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Operate on the per-user document instead of the project one
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set a scalar field
    Set {
        /// Field key (camelCase, see `prdgen fields`)
        field: String,

        /// New value
        value: String,
    },

    /// Edit list fields
    #[command(subcommand)]
    Item(ItemCmd),

    /// Enable, disable, or list document sections
    #[command(subcommand)]
    Section(SectionCmd),

    /// Get or set configuration (format, phrasing)
    Config {
        /// Configuration key (e.g. format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Render the document to stdout
    #[command(alias = "r")]
    Render {
        /// Output format (markdown, notion, gdocs, text)
        #[arg(short = 'F', long)]
        format: Option<String>,
    },

    /// Render the document and copy it to the clipboard
    #[command(alias = "cp")]
    Copy {
        /// Output format (markdown, notion, gdocs, text)
        #[arg(short = 'F', long)]
        format: Option<String>,
    },

    /// Render the document and write it to a file
    Export {
        /// Output format (markdown, notion, gdocs, text)
        #[arg(short = 'F', long)]
        format: Option<String>,

        /// Output path (defaults to prd-YYYY-MM-DD with a format-specific extension)
        path: Option<PathBuf>,
    },

    /// List every field with its current value
    Fields,

    /// Show settings, section toggles, and fill progress
    Status,

    /// Reset the document to its defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemCmd {
    /// Overwrite an entry of a list field
    Set {
        /// List field key (e.g. keyFeatures)
        field: String,

        /// Zero-based index of the entry
        index: usize,

        /// New value
        value: String,
    },

    /// Append an entry to a list field
    Add {
        /// List field key (e.g. keyFeatures)
        field: String,

        /// Value of the new entry (empty if omitted)
        value: Option<String>,
    },

    /// Remove an entry of a list field
    Rm {
        /// List field key (e.g. keyFeatures)
        field: String,

        /// Zero-based index of the entry
        index: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum SectionCmd {
    /// List sections with their enablement
    #[command(alias = "ls")]
    List,

    /// Enable a section
    On {
        /// Section key (e.g. coreFlow)
        key: String,
    },

    /// Disable a section
    Off {
        /// Section key (e.g. coreFlow)
        key: String,
    },

    /// Flip a section's enablement
    Toggle {
        /// Section key (e.g. coreFlow)
        key: String,
    },
}
