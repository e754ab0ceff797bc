//! umlsketch CLI - PlantUML diagrams from SQL schemas and Python modules

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use umlsketch::config::{self, UmlConfig};
use umlsketch::source::{Macro, SourceText};
use umlsketch::{output, ui, OutputFormat, TracingHook, UmlBuilder};

/// Exit status when the input file does not exist
const EXIT_NOT_FOUND: u8 = 2;
/// Exit status for every other failure
const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(name = "umlsketch")]
#[command(version)]
#[command(about = "Generate PlantUML code from a given source file")]
#[command(long_about = r#"
Generate PlantUML code from a given source file.

The input kind is chosen by extension:
  .sql        CREATE TABLE statements become entities
  .py, .pyi   top-level classes become classes with inheritance/composition

Example usage:
  umlsketch schema.sql
  umlsketch models.py --output models.puml
  umlsketch schema.sql -D '${SCHEMA}=public' --format json
"#)]
struct Cli {
    /// Path to the source code file
    filename: PathBuf,

    /// Logging level (eg OFF, INFO, DEBUG, WARNING, ERROR)
    #[arg(long)]
    log_level: Option<String>,

    /// Output format (plantuml, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ./umlsketch.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Substitute TOKEN with VALUE in the source before parsing (repeatable)
    #[arg(short = 'D', long = "define", value_name = "TOKEN=VALUE")]
    defines: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let not_found = matches!(
                err.downcast_ref::<umlsketch::Error>(),
                Some(umlsketch::Error::SourceNotFound(_))
            );
            if not_found {
                ui::error(&format!("Error: {}", err));
                ExitCode::from(EXIT_NOT_FOUND)
            } else {
                ui::error(&format!("Error while generating UML. {:#}", err));
                ExitCode::from(EXIT_FAILURE)
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config(cli.config.as_deref())?.unwrap_or_default();
    init_logging(cli.log_level.as_deref().or(config.log_level.as_deref()));

    let macros = collect_macros(&config, &cli.defines)?;
    let format = cli.format.or(config.format).unwrap_or_default();

    let builder = UmlBuilder::for_path(&cli.filename)?
        .with_format(format)
        .with_hook(Arc::new(TracingHook));
    tracing::info!(
        "Building {} diagram from {} ({})",
        builder.kind(),
        cli.filename.display(),
        format
    );

    let source = SourceText::load(&cli.filename, &macros)?;
    let extraction = builder.extract(&source.content)?;
    if extraction.is_empty() && !output::is_quiet() {
        ui::warn(&format!("No classes found in {}", source.path.display()));
    }
    let rendered = builder.render(&extraction)?;
    output::emit(&rendered, cli.output.as_deref())?;

    if let Some(path) = &cli.output {
        tracing::info!("Wrote {} bytes to {}", rendered.len(), path.display());
        if !output::is_quiet() {
            ui::success(&format!("Diagram written to {}", path.display()));
        }
    }
    Ok(())
}

/// Configured macros first, then `--define` ones in command-line order
fn collect_macros(config: &UmlConfig, defines: &[String]) -> anyhow::Result<Vec<Macro>> {
    let mut macros = config.macros.clone();
    for definition in defines {
        let Some(m) = Macro::parse_definition(definition) else {
            ui::hint("Macros are written TOKEN=VALUE, e.g. -D '${SCHEMA}=public'");
            anyhow::bail!("invalid macro definition '{}' (expected TOKEN=VALUE)", definition);
        };
        macros.push(m);
    }
    Ok(macros)
}

/// Map a level name to a filter directive; unknown names disable logging
fn level_directive(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => "off",
    }
}

fn init_logging(level: Option<&str>) {
    let directive = level.map(level_directive).unwrap_or("warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
