//! whois-fields CLI - Command-line interface for structured WHOIS lookups
//!
//! CDD Principle: Application Layer - CLI coordinates user interactions with domain services
//! - Translates user commands to lookup, parse and registry queries
//! - Handles external concerns like stdin, process exit codes, and terminal output
//! - Provides clean separation between user interface and extraction logic

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use whois_fields::{
    registry, tld_of, OutputFormat, ReportFormatter, ReportOptions, WhoisConfig, WhoisError,
    WhoisLookup, WhoisResult,
};

/// whois-fields - Structured fields from WHOIS responses
#[derive(Parser)]
#[command(name = "whois-fields")]
#[command(version = "0.1.0")]
#[command(about = "Look up a domain with whois and extract registration fields as JSON")]
#[command(long_about = "whois-fields runs the system whois client for a domain, selects a field table by the domain's top-level label, and prints every matched field as JSON or readable text.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a domain and print its fields
    Lookup {
        /// Fully-qualified domain name
        domain: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract fields from a saved WHOIS response
    Parse {
        /// Domain the response belongs to (selects the field table)
        domain: String,

        /// Response file (reads stdin when omitted)
        file: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List supported top-level domains
    Tlds,

    /// Show the fields and patterns used for a top-level domain
    Fields {
        /// TLD label, e.g. com
        tld: String,
    },

    /// Validate configuration file
    ValidateConfig {
        /// Configuration file to validate
        config_file: Option<PathBuf>,
    },
}

#[derive(clap::Args, Clone)]
struct OutputArgs {
    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormatArg>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Omit fields that matched nothing (human format)
    #[arg(long)]
    hide_empty: bool,
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Json,
    Report,
    Human,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Report => OutputFormat::Report,
            OutputFormatArg::Human => OutputFormat::Human,
        }
    }
}

const DEFAULT_CONFIGS: [&str; 3] = ["whois_fields.yaml", "whois_fields.yml", ".whois_fields.yaml"];

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run_command(cli) {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> WhoisResult<i32> {
    let use_colors = colors_enabled(
        cli.no_color,
        io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );
    match cli.command {
        Commands::Lookup { domain, output } => {
            let config = load_config(cli.config.as_deref())?;
            run_lookup(config, &domain, &output, use_colors)
        }
        Commands::Parse { domain, file, output } => {
            let config = load_config(cli.config.as_deref())?;
            let text = read_response(file.as_deref())?;
            run_parse(config, &domain, &text, &output, use_colors)
        }
        Commands::Tlds => run_list_tlds(),
        Commands::Fields { tld } => run_fields(&tld),
        Commands::ValidateConfig { config_file } => run_validate_config(config_file.or(cli.config)),
    }
}

/// Explicit config file, else the first default name that exists, else built-in defaults
fn load_config(config_path: Option<&Path>) -> WhoisResult<WhoisConfig> {
    if let Some(path) = config_path {
        return WhoisConfig::load_from_file(path);
    }

    for config_name in &DEFAULT_CONFIGS {
        if Path::new(config_name).exists() {
            return WhoisConfig::load_from_file(config_name);
        }
    }

    Ok(WhoisConfig::default())
}

fn read_response(file: Option<&Path>) -> WhoisResult<String> {
    let bytes = match file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn build_lookup(
    config: WhoisConfig,
    output: &OutputArgs,
    use_colors: bool,
) -> WhoisResult<(WhoisLookup, OutputFormat)> {
    let format = match output.format {
        Some(arg) => arg.into(),
        None => OutputFormat::from_str(&config.output.format).ok_or_else(|| {
            WhoisError::config(format!("Unknown output format '{}'", config.output.format))
        })?,
    };

    let formatter = ReportFormatter::new(ReportOptions {
        use_colors,
        pretty: output.pretty || config.output.pretty,
        show_empty: !output.hide_empty,
    });

    let lookup = WhoisLookup::new_with_config(config)?.with_report_formatter(formatter);
    Ok((lookup, format))
}

fn run_lookup(
    config: WhoisConfig,
    domain: &str,
    output: &OutputArgs,
    use_colors: bool,
) -> WhoisResult<i32> {
    let (lookup, format) = build_lookup(config, output, use_colors)?;
    let report = lookup.lookup(domain)?;
    println!("{}", lookup.format_report(&report, format)?);
    Ok(0)
}

fn run_parse(
    config: WhoisConfig,
    domain: &str,
    text: &str,
    output: &OutputArgs,
    use_colors: bool,
) -> WhoisResult<i32> {
    let (lookup, format) = build_lookup(config, output, use_colors)?;
    let report = lookup.parse(domain, text)?;
    println!("{}", lookup.format_report(&report, format)?);
    Ok(0)
}

fn run_list_tlds() -> WhoisResult<i32> {
    let registry = registry();

    println!("Supported TLDs\n");
    for tld in registry.tlds() {
        let ruleset = registry.ruleset_for(tld)?;
        match registry.alias_target(tld) {
            Some(target) => println!("  .{:<6} {} fields (alias of .{})", tld, ruleset.len(), target),
            None => println!("  .{:<6} {} fields", tld, ruleset.len()),
        }
    }

    Ok(0)
}

fn run_fields(tld: &str) -> WhoisResult<i32> {
    let registry = registry();
    let tld = tld_of(tld);

    let ruleset = match registry.ruleset_for(&tld) {
        Ok(ruleset) => ruleset,
        Err(e) => {
            eprintln!("{}", e);
            println!();
            println!("Supported TLDs: {}", registry.tlds().join(", "));
            return Ok(1);
        }
    };

    println!("Fields for .{} ({} total)\n", tld, ruleset.len());
    for rule in ruleset.iter() {
        let mode = if rule.pattern.has_capture() { "" } else { " [whole match]" };
        println!("  {:<32} {}{}", rule.name, rule.pattern.as_str(), mode);
    }

    Ok(0)
}

fn run_validate_config(config_path: Option<PathBuf>) -> WhoisResult<i32> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIGS[0]));

    println!("Validating configuration: {}", config_path.display());

    match WhoisConfig::load_from_file(&config_path) {
        Ok(config) => {
            println!("Configuration is valid");
            println!("  Command: {} {}", config.lookup.command, config.lookup.args.join(" "));
            println!("  Output: {} (pretty: {})", config.output.format, config.output.pretty);
            Ok(0)
        }
        Err(e) => {
            eprintln!("Configuration validation failed: {}", e);
            Ok(1)
        }
    }
}

/// ANSI colours only when stdout is a terminal and nobody opted out
fn colors_enabled(no_color_flag: bool, stdout_is_terminal: bool, no_color_env: bool) -> bool {
    !no_color_flag && stdout_is_terminal && !no_color_env
}

/// `--verbose` forces debug output, otherwise `RUST_LOG` applies with a `warn` default
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
