// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length
        #[arg(long, default_value_t = 16)]
        length: usize,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude digits
        #[arg(long)]
        no_numbers: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// Compose from pronounceable syllables
        #[arg(long)]
        pronounceable: bool,

        /// Number of passwords to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// Check generated passwords against the breach corpus
        #[arg(long)]
        check: bool,
    },

    /// Show password history
    History {
        /// Maximum entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Clear password history
    ClearHistory,

    /// Export password history
    Export {
        /// Export format: csv or txt
        #[arg(long, default_value = "csv")]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<std::path::PathBuf>,
    },

    /// Check a password against the breach corpus
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,
    },
}
