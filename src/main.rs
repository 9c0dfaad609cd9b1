// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use assdiff::app_config::{Config, LogLevel};
use assdiff::dictionary::{self, DictionaryProvider};
use assdiff::errors::AppError;
use assdiff::file_utils::FileManager;
use assdiff::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for DictionaryProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliDictionary {
    Vivy,
    Skarnik,
    Verbum,
}

impl From<CliDictionary> for DictionaryProvider {
    fn from(cli_dictionary: CliDictionary) -> Self {
        match cli_dictionary {
            CliDictionary::Vivy => DictionaryProvider::Vivy,
            CliDictionary::Skarnik => DictionaryProvider::Skarnik,
            CliDictionary::Verbum => DictionaryProvider::Verbum,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a translated script with its edited revision
    Compare(CompareArgs),

    /// Print a dictionary search link for a word
    Link {
        /// Word or selection to look up
        #[arg(value_name = "WORD")]
        word: String,

        /// Dictionary to search (defaults to the configured one)
        #[arg(short, long, value_enum)]
        dictionary: Option<CliDictionary>,

        /// Configuration file path
        #[arg(short, long, default_value = "assdiff.json")]
        config_path: String,
    },

    /// Generate shell completions for assdiff
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CompareArgs {
    /// Translated (baseline) script
    #[arg(value_name = "TRANSLATED")]
    translated: PathBuf,

    /// Edited (revised) script
    #[arg(value_name = "EDITED")]
    edited: PathBuf,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "assdiff.json")]
    config_path: String,

    /// Report cues that only exist in the edited script
    #[arg(long)]
    show_added: bool,

    /// Report cues that only exist in the translated script
    #[arg(long)]
    show_deleted: bool,

    /// Prefix changes with their time range
    #[arg(long)]
    show_timecodes: bool,

    /// Do not print comments of edited cues
    #[arg(long)]
    hide_comments: bool,

    /// Do not prefix changes with their approximate index
    #[arg(long)]
    hide_indexes: bool,

    /// Do not underline changed words
    #[arg(long)]
    no_underline: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// assdiff - change reports for ASS/SSA subtitle scripts
///
/// Compares a translated subtitle script with its edited revision and lists
/// added, deleted and modified cues, underlining the words that changed.
#[derive(Parser, Debug)]
#[command(name = "assdiff")]
#[command(version)]
#[command(about = "Change reports for ASS/SSA subtitle scripts")]
#[command(long_about = "assdiff compares a translated subtitle script with its edited revision.

EXAMPLES:
    assdiff compare translated.ass edited.ass                 # Modified cues only
    assdiff compare --show-added --show-deleted a.ass b.ass   # Include added and deleted cues
    assdiff compare -o report.txt a.ass b.ass                 # Write the report to a file
    assdiff link -d skarnik Слова                             # Dictionary link for a word
    assdiff completions bash > assdiff.bash                   # Generate bash completions

CONFIGURATION:
    Report toggles are stored in assdiff.json by default. You can specify a
    different file with --config-path. If the file doesn't exist, a default one
    will be created automatically. Command line flags override the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and label for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, label) = Self::style_for_level(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set through log::set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Compare(args) => run_compare(args),
        Commands::Link { word, dictionary, config_path } => run_link(&word, dictionary, &config_path),
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "assdiff", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn run_compare(options: CompareArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = load_config(&options.config_path)
        .with_context(|| format!("Failed to load config file: {}", options.config_path))?;

    // Override config with CLI options if provided
    let report = &mut config.report;
    report.show_added |= options.show_added;
    report.show_deleted |= options.show_deleted;
    report.show_timecodes |= options.show_timecodes;
    report.show_comments &= !options.hide_comments;
    report.show_indexes &= !options.hide_indexes;
    report.underline_changes &= !options.no_underline;

    match &options.log_level {
        Some(log_level) => config.log_level = log_level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    for path in [&options.translated, &options.edited] {
        if !FileManager::file_exists(path) {
            return Err(anyhow!("Input file does not exist: {:?}", path));
        }
    }

    let controller = Controller::with_config(config);
    let comparison = controller.compare_files(&options.translated, &options.edited)?;

    match &options.output {
        Some(output) => {
            FileManager::write_to_file(output, &comparison.report)?;
            info!("Report written to {:?}", output);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(comparison.report.as_bytes())
                .context("Failed to write report to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

// @loads: Config file, creating a default one when missing
fn load_config(path: &str) -> Result<Config, AppError> {
    Ok(Config::load_or_default(path)?)
}

fn run_link(word: &str, choice: Option<CliDictionary>, config_path: &str) -> Result<()> {
    let provider = match choice {
        Some(choice) => choice.into(),
        None => load_config(config_path)
            .with_context(|| format!("Failed to load config file: {}", config_path))?
            .report
            .dictionary,
    };

    let word = dictionary::lookup_word(word)
        .ok_or_else(|| anyhow!("Nothing to look up: '{}' contains no letters", word))?;

    println!("{}{}", word, dictionary::search_link(provider, &word));
    Ok(())
}
