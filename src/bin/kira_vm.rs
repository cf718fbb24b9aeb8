use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use kira_variant_merge::app::{App, LoadedInputs};
use kira_variant_merge::config::{ConfigLoader, Inputs, ResolvedConfig};
use kira_variant_merge::cosmic::CountHttpClient;
use kira_variant_merge::error::KiraError;
use kira_variant_merge::output::JsonOutput;

#[derive(Parser)]
#[command(name = "kira-vm")]
#[command(about = "Merge called and uncalled mutation calls into deduplicated groups")]
#[command(version, author)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Group called and uncalled records by gene and event")]
    Merge(InputArgs),
    #[command(about = "Fetch COSMIC counts for keyword-bearing records")]
    Enrich(InputArgs),
    #[command(about = "Map study ids to cancer type names")]
    Studies(StudiesArgs),
}

#[derive(Args, Clone)]
struct InputArgs {
    #[arg(long)]
    called: Option<Utf8PathBuf>,

    #[arg(long)]
    uncalled: Option<Utf8PathBuf>,
}

#[derive(Args, Clone)]
struct StudiesArgs {
    #[arg(long)]
    studies: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(kira) = report.downcast_ref::<KiraError>() {
            return ExitCode::from(kira.exit_code());
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let counts =
        CountHttpClient::new(config.enrichment.endpoint.clone(), config.enrichment.timeout)?;
    let app = App::new(counts);

    match cli.command {
        Commands::Merge(args) => {
            let inputs = LoadedInputs::load(&args.into_inputs().overlay(config.inputs))?;
            let result = app.merge(&inputs)?;
            JsonOutput::print_merge(&result).into_diagnostic()
        }
        Commands::Enrich(args) => {
            let inputs = LoadedInputs::load(&args.into_inputs().overlay(config.inputs))?;
            let result = app.enrich(&inputs)?;
            JsonOutput::print_enrich(&result).into_diagnostic()
        }
        Commands::Studies(args) => {
            let inputs = Inputs {
                studies: args.studies,
                ..Inputs::default()
            };
            let result = app.studies(&inputs.overlay(config.inputs))?;
            JsonOutput::print_studies(&result).into_diagnostic()
        }
    }
}

/// An explicit `--config` must load; the implicit kira-vm.json is optional.
fn load_config(path: Option<&str>) -> Result<ResolvedConfig, KiraError> {
    match ConfigLoader::resolve(path) {
        Ok(config) => Ok(config),
        Err(KiraError::MissingConfig) if path.is_none() => Ok(ResolvedConfig::default()),
        Err(err) => Err(err),
    }
}

impl InputArgs {
    fn into_inputs(self) -> Inputs {
        Inputs {
            called: self.called,
            uncalled: self.uncalled,
            studies: None,
        }
    }
}
