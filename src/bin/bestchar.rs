//! Bestchar CLI
//!
//! Command-line interface for scoring a single categorical character.

use bestchar::coefficient::DegeneratePolicy;
use bestchar::data::CharacterData;
use bestchar::error::Result;
use bestchar::pipeline::{Analysis, AnalysisConfig};
use bestchar::profile::profile_states;
use bestchar::report::{write_details_file, write_summary_file, DETAILS_FILE, SUMMARY_FILE};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

/// CLI-friendly degenerate policy enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliPolicy {
    /// Coefficients with an undefined logarithm base are reported as 0
    Zero,
    /// Fail when a logarithm base is undefined
    Reject,
}

impl From<CliPolicy> for DegeneratePolicy {
    fn from(policy: CliPolicy) -> Self {
        match policy {
            CliPolicy::Zero => DegeneratePolicy::Zero,
            CliPolicy::Reject => DegeneratePolicy::Reject,
        }
    }
}

/// Best-character coefficients for a single categorical character
#[derive(Parser)]
#[command(name = "bestchar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a character and write the summary and detail reports
    Score {
        /// Path to the character file (name on the first line, one taxon per line)
        #[arg(short, long)]
        input: PathBuf,

        /// Path to an analysis configuration YAML
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Separator between states of a polymorphic taxon (overrides config)
        #[arg(short, long)]
        separator: Option<char>,

        /// Handling of undefined logarithm bases (overrides config)
        #[arg(long, value_enum)]
        policy: Option<CliPolicy>,

        /// Output path for the summary report
        #[arg(long, default_value = SUMMARY_FILE)]
        summary: PathBuf,

        /// Output path for the detail report
        #[arg(long, default_value = DETAILS_FILE)]
        details: PathBuf,

        /// Output format on stdout: text, json, or yaml
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Profile the state frequencies of a character
    Profile {
        /// Path to the character file
        #[arg(short, long)]
        input: PathBuf,

        /// Separator between states of a polymorphic taxon
        #[arg(short, long, default_value = "/")]
        separator: char,

        /// Output format: text, json, or yaml
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Generate an example analysis configuration
    Example {
        /// Output path for the example YAML
        #[arg(short, long, default_value = "bestchar.yaml")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Score {
            input,
            config,
            separator,
            policy,
            summary,
            details,
            format,
        } => cmd_score(
            &input,
            config.as_deref(),
            separator,
            policy,
            &summary,
            &details,
            &format,
        ),

        Commands::Profile {
            input,
            separator,
            format,
        } => cmd_profile(&input, separator, &format),

        Commands::Example { output } => cmd_example(&output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Score a character
fn cmd_score(
    input_path: &Path,
    config_path: Option<&Path>,
    separator: Option<char>,
    policy: Option<CliPolicy>,
    summary_path: &Path,
    details_path: &Path,
    format: &str,
) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            eprintln!("Loading analysis configuration from {:?}...", path);
            AnalysisConfig::from_yaml_file(path)?
        }
        None => AnalysisConfig::default(),
    };

    let mut analysis = Analysis::from_config(&config);
    if let Some(separator) = separator {
        analysis = analysis.separator(separator);
    }
    if let Some(policy) = policy {
        analysis = analysis.degenerate_policy(policy.into());
    }

    eprintln!("Loading character from {:?}...", input_path);
    let character = analysis.load(input_path)?;
    eprintln!(
        "Loaded character '{}' with {} taxa",
        character.name().trim(),
        character.n_taxa()
    );

    let score = analysis.run(&character)?;

    write_summary_file(summary_path, &character, &score)?;
    write_details_file(details_path, &character, &score)?;
    eprintln!("Wrote {:?} and {:?}", summary_path, details_path);

    match format {
        "json" => println!("{}", score.to_json()?),
        "yaml" => println!("{}", score.to_yaml()?),
        _ => print!("{}", score),
    }

    Ok(())
}

/// Profile state frequencies
fn cmd_profile(input_path: &Path, separator: char, format: &str) -> Result<()> {
    let character = CharacterData::from_path(input_path, separator)?;
    let profile = profile_states(character.taxa());

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&profile)?),
        "yaml" => println!("{}", serde_yaml::to_string(&profile)?),
        _ => {
            println!("{}", character.name().trim());
            print!("{}", profile);
        }
    }

    Ok(())
}

/// Generate example configuration
fn cmd_example(output_path: &Path) -> Result<()> {
    let analysis = Analysis::new()
        .name("petal-colour")
        .separator('/')
        .degenerate_policy(DegeneratePolicy::Zero);

    let config = analysis.to_config(Some(
        "Score a single character; taxa with several states are separated by '/'",
    ));
    let yaml = config.to_yaml()?;

    std::fs::write(output_path, &yaml)?;
    eprintln!("Wrote example configuration to {:?}", output_path);
    eprintln!();
    eprintln!("Contents:");
    println!("{}", yaml);

    Ok(())
}
