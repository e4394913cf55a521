//! Command dispatch

use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{self, run_demo};
use crate::cli::args::{CategoryArg, Cli, Commands, CompositeCommands, ConfigCommands, LayerArg};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::creational::{Category, Pattern, PatternCatalog};
use crate::domain::{DomainError, NodeSpec};
use crate::structural::{stack, Layer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::List { category }) => _list(*category),
        Some(Commands::Run { pattern }) => _run(*pattern),
        Some(Commands::Composite { command }) => match command {
            CompositeCommands::Price { file, node } => _price(file.as_deref(), node.as_deref()),
            CompositeCommands::Tree { file } => _tree(file.as_deref()),
            CompositeCommands::Sample => _sample(),
        },
        Some(Commands::Notify { message, via }) => _notify(message, via),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, try `patterns --help`".to_string(),
        )),
    }
}

#[instrument]
fn _list(category: Option<CategoryArg>) -> CliResult<()> {
    let catalog = PatternCatalog::instance();
    let categories: Vec<Category> = match category {
        Some(c) => vec![c.into()],
        None => vec![Category::Creational, Category::Structural],
    };
    for category in categories {
        output::header(&category);
        for entry in catalog.by_category(category) {
            output::detail(&format!("{:<18} {}", entry.pattern.name(), entry.summary));
        }
    }
    Ok(())
}

#[instrument]
fn _run(pattern: Pattern) -> CliResult<()> {
    let settings = Settings::load()?;
    for line in run_demo(pattern, &settings)? {
        output::info(&line);
    }
    Ok(())
}

fn load_spec(file: Option<&Path>) -> CliResult<NodeSpec> {
    match file {
        Some(path) => {
            debug!("loading tree from {}", path.display());
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("read {}", path.display()), e))?;
            NodeSpec::from_toml(&content).map_err(|e| -> CliError {
                match e {
                    DomainError::InvalidSpec { reason, .. } => DomainError::InvalidSpec {
                        label: path.display().to_string(),
                        reason,
                    }
                    .into(),
                    other => other.into(),
                }
            })
        }
        None => Ok(NodeSpec::sample()),
    }
}

#[instrument]
fn _price(file: Option<&Path>, node: Option<&str>) -> CliResult<()> {
    let settings = Settings::load()?;
    let spec = load_spec(file)?;
    let report = application::price(&spec, &settings, node)?;
    output::info(&report.formatted(settings.precision));
    Ok(())
}

#[instrument]
fn _tree(file: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load()?;
    let spec = load_spec(file)?;
    output::info(&application::render(&spec, &settings)?);
    Ok(())
}

fn _sample() -> CliResult<()> {
    let toml = toml::to_string_pretty(&NodeSpec::sample())
        .map_err(|e| CliError::Usage(format!("serialize sample: {e}")))?;
    output::info(&toml);
    Ok(())
}

#[instrument]
fn _notify(message: &str, via: &[LayerArg]) -> CliResult<()> {
    let layers: Vec<Layer> = via.iter().map(|&l| l.into()).collect();
    debug!("layers: {}", layers.iter().map(|l| format!("{l:?}")).join(" -> "));
    for line in stack(&layers).send(message) {
        output::info(&line);
    }
    Ok(())
}

fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                let state = if path.exists() { "found" } else { "not found" };
                output::action("global", &format!("{} ({})", path.display(), state));
            }
            None => output::info(&"no config directory available"),
        },
    }
    Ok(())
}
