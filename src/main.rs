//! Dataset generator entry point: CLI wiring and config-driven generation.

use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use evc_datagen::cli::{self, CliCommand, CliOptions};
use evc_datagen::config::GeneratorConfig;
use evc_datagen::error::GenError;
use evc_datagen::generator::{BucketSizes, DatasetSummary, Generator};
use evc_datagen::io::export::export_csv;

fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves the effective configuration: `--config` takes priority, then
/// `--preset`, then the demo preset; explicit flags override either.
fn load_config(cli: &CliOptions) -> Result<GeneratorConfig, GenError> {
    let mut cfg = if let Some(ref path) = cli.config {
        GeneratorConfig::from_toml_file(path)?
    } else if let Some(ref name) = cli.preset {
        GeneratorConfig::from_preset(name)?
    } else {
        GeneratorConfig::demo()
    };

    if let Some(m) = cli.morning {
        cfg.buckets.morning = m;
    }
    if let Some(a) = cli.afternoon {
        cfg.buckets.afternoon = a;
    }
    if let Some(e) = cli.evening {
        cfg.buckets.evening = e;
    }
    if let Some(ref out) = cli.out {
        cfg.output.path = out.clone();
    }
    if let Some(seed) = cli.seed {
        cfg.generator.seed = seed;
    }

    Ok(cfg)
}

fn run(cli: &CliOptions) -> Result<DatasetSummary, GenError> {
    let cfg = load_config(cli)?;

    let errors = cfg.validate();
    if let Some(first) = errors.first() {
        for e in &errors {
            error!("{e}");
        }
        return Err(GenError::Config(format!("{} invalid field(s), first: {first}", errors.len())));
    }

    let buckets: BucketSizes = cfg.bucket_sizes()?;
    let records = Generator::new(cfg.generator.seed).generate(&buckets);

    export_csv(&records, &cfg.output.path)?;
    info!(path = %cfg.output.path.display(), rows = records.len(), "dataset written");

    Ok(DatasetSummary::from_records(&records))
}

fn main() {
    let cli = match cli::parse_args() {
        Ok(CliCommand::Run(opts)) => opts,
        Ok(CliCommand::Help) => {
            cli::print_usage();
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(2);
        }
    };

    init_logging(cli.quiet);

    match run(&cli) {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
