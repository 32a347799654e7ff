// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, error, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use srt_translator::app_config::{self, Config, DecodeMode};
use srt_translator::app_controller::Controller;
use srt_translator::language_utils::{GoogleLanguageCatalog, LanguageCatalog};
use srt_translator::providers::google::GoogleTranslate;
use srt_translator::translation::StreamChooser;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the language codes accepted by --dest and --src
    Languages,

    /// Generate shell completions for srt-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// srt-translator - translate .srt subtitle files
///
/// Reads a subtitle file, sends it to Google Translate in chunks of lines
/// and writes the result next to the input with the destination language
/// code inserted before the extension.
#[derive(Parser, Debug)]
#[command(name = "srt-translator")]
#[command(version)]
#[command(about = "Translate .srt subtitle files through Google Translate")]
#[command(long_about = "Translates .srt subtitle files chunk by chunk through Google Translate.

EXAMPLES:
    srt-translator -d fr -f movie.srt              # Detect the source language, write movie_fr.srt
    srt-translator -s en -d de -f movie.srt        # Translate from English to German
    srt-translator -d es -f movie.srt -c 500       # Send 500 lines per request
    srt-translator languages                       # List supported language codes
    srt-translator completions bash > srt.bash     # Generate bash completions

CONFIGURATION:
    Defaults are read from srt-translator.json when it exists. Use --config to
    point to another file. Command line flags win over the file.

KNOWN LIMITATION:
    The service may merge or split lines inside a chunk. When that happens the
    caption lines after it no longer sit under their timing lines; a warning
    names the affected chunk.")]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Destination language code (e.g., 'fr', 'de', 'zh-cn')
    #[arg(short, long, required = true)]
    dest: Option<String>,

    /// Subtitle file to translate, must end in .srt
    #[arg(short, long, value_name = "FILE", required = true)]
    file: Option<PathBuf>,

    /// Source language code, detected from the file when omitted
    #[arg(short, long)]
    src: Option<String>,

    /// Number of lines per translation request
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    chunk: Option<u64>,

    /// Fail on bytes that are not valid UTF-8 instead of dropping them
    #[arg(long)]
    strict_utf8: bool,

    /// Configuration file path
    #[arg(long, default_value = "srt-translator.json")]
    config: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: Emoji and ANSI color for log level
    fn get_style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
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
            let (emoji, color) = Self::get_style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // The logger filters on the global max level, which is adjusted once the config is known
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    let result = match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(*shell, &mut cmd, "srt-translator", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages) => {
            list_languages(&GoogleLanguageCatalog);
            Ok(())
        }
        None => run_translate(&cli).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn list_languages(catalog: &dyn LanguageCatalog) {
    for (code, name) in catalog.list_all() {
        println!("{:<6} {}", code, name);
    }
}

/// Merge the config file with command line flags
fn build_config(options: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_default(&options.config)?;

    if let Some(dest) = &options.dest {
        config.target_language = Some(dest.clone());
    }

    if let Some(src) = &options.src {
        config.source_language = Some(src.clone());
    }

    if let Some(chunk) = options.chunk {
        config.chunk_size = usize::try_from(chunk).context("Chunk size is too large")?;
    }

    if options.strict_utf8 {
        config.invalid_utf8 = DecodeMode::Strict;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

async fn run_translate(options: &CommandLineOptions) -> Result<()> {
    // Apply a command line log level before the config file is read
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let config = build_config(options)?;
    log::set_max_level(level_filter(&config.log_level));

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;
    debug!("Chunk size: {}, undecodable bytes: {}", config.chunk_size, config.invalid_utf8);

    let input_file = options.file.as_deref()
        .context("A subtitle file is required (--file)")?;

    let backend = GoogleTranslate::new(&config.translation);
    let catalog = GoogleLanguageCatalog;
    let mut chooser = StreamChooser::console();

    let controller = Controller::with_config(config);
    let output_path = controller
        .run(input_file, &catalog, &backend, &mut chooser)
        .await?;

    println!("Success: {}", output_path.display());

    Ok(())
}
