use crate::config::{self, FnParamsConfig, OptionsConfig, OutputFormat};
use crate::core::Dialect;
use crate::extraction::extract_params_with;
use crate::output::{render, FunctionParams};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "fn-params")]
#[command(about = "Print the parameter list of named functions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Function names to look up
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Source file to search (defaults to stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Source dialect: js, coffee, ts (aliases: function, arrow, typed)
    #[arg(short, long)]
    pub dialect: Option<String>,

    /// Custom regex whose first capture group is the parameter text
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Include type annotations (TypeScript only)
    #[arg(short = 't', long = "types")]
    pub include_types: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to the nearest .fn-params.toml)
    #[arg(short, long, env = "FN_PARAMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    fn option_overrides(&self) -> OptionsConfig {
        OptionsConfig {
            dialect: self.dialect.clone(),
            pattern: self.pattern.clone(),
            include_types: self.include_types.then_some(true),
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`
pub fn init_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve options from flags, config, and file extension
pub fn resolve_options(cli: &Cli, config: &FnParamsConfig) -> OptionsConfig {
    let mut options = config.extract_options().merge(cli.option_overrides());

    if options.dialect.is_none() {
        if let Some(dialect) = cli.file.as_deref().and_then(Dialect::from_path) {
            debug!(%dialect, "dialect detected from file extension");
            options.dialect = Some(dialect.token().to_string());
        }
    }

    options
}

fn read_source(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Run the command and return the rendered output
pub fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };
    let options = resolve_options(cli, &config);
    let format = cli
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();

    let source = read_source(cli.file.as_ref())?;

    let results = cli
        .names
        .iter()
        .map(|name| {
            extract_params_with(source.as_slice(), name.as_str(), &options)
                .map(|params| FunctionParams {
                    name: name.clone(),
                    params,
                })
                .with_context(|| format!("Failed to extract parameters of {}", name))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(render(&results, format)?)
}
