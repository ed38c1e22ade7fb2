use std::env;
use std::path::PathBuf;

/// Options parsed from the command line.
///
/// Bucket, output, and seed flags override whatever the config file or
/// preset provides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub preset: Option<String>,
    pub morning: Option<i64>,
    pub afternoon: Option<i64>,
    pub evening: Option<i64>,
    pub out: Option<PathBuf>,
    pub seed: Option<u64>,
    pub quiet: bool,
}

/// What the binary should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(CliOptions),
    Help,
}

pub fn parse_args() -> Result<CliCommand, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

pub fn parse_args_from(args: Vec<String>) -> Result<CliCommand, String> {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(CliCommand::Help);
    }
    parse_options(&args).map(CliCommand::Run)
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --config (expected a TOML file path)")?;
                if opts.config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name = args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            flag @ ("--morning" | "--afternoon" | "--evening") => {
                i += 1;
                let raw = args.next_or_err(i, &format!("missing value for {flag} (expected an integer)"))?;
                let count = raw
                    .parse::<i64>()
                    .map_err(|_| format!("{flag} value \"{raw}\" is not a valid integer"))?;
                let slot = match flag {
                    "--morning" => &mut opts.morning,
                    "--afternoon" => &mut opts.afternoon,
                    _ => &mut opts.evening,
                };
                *slot = Some(count);
            }
            "--out" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --out (expected a file path)")?;
                opts.out = Some(PathBuf::from(path));
            }
            "--seed" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --seed (expected a u64)")?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| format!("--seed value \"{raw}\" is not a valid u64"))?;
                opts.seed = Some(seed);
            }
            "--quiet" | "-q" => opts.quiet = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.config.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--config` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    Ok(opts)
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("evc-datagen: synthetic EV charger power readings for one day");
    eprintln!();
    eprintln!("Usage: evc-datagen [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>     Load settings from a TOML file");
    eprintln!("  --preset <name>     Use a built-in preset (demo, balanced, evening_peak)");
    eprintln!("  --morning <n>       Arrivals around 9am");
    eprintln!("  --afternoon <n>     Arrivals around 1pm");
    eprintln!("  --evening <n>       Arrivals around 6pm");
    eprintln!("  --out <path>        CSV output path (overwritten)");
    eprintln!("  --seed <u64>        Override random seed");
    eprintln!("  -q, --quiet         Only log warnings and errors");
    eprintln!("  -h, --help          Show this help message");
    eprintln!();
    eprintln!("If neither --config nor --preset is given, the demo preset is used.");
}
