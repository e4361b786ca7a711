//! SigLab CLI — sample, preset listing, and config validation commands.
//!
//! Commands:
//! - `sample` — sample a signal tree from a TOML config file or named preset
//! - `presets` — list the built-in presets and their expressions
//! - `validate` — build a config's tree and check its sampling window

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use siglab_core::export::export;
use siglab_core::{
    build_signal, DType, OutputFormat, SamplingConfig, SignalConfig, SignalPreset, SynthConfig,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "siglab",
    about = "SigLab CLI — composable synthetic time-series signals"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a signal from a TOML config file or named preset.
    Sample {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Named preset (see `siglab presets`).
        #[arg(long)]
        preset: Option<String>,

        /// Interval start, RFC 3339 or YYYY-MM-DD (required with --preset).
        #[arg(long)]
        start: Option<String>,

        /// Interval end, exclusive (required with --preset).
        #[arg(long)]
        end: Option<String>,

        /// Tick width, e.g. 1d, 12h, 15m (required with --preset).
        #[arg(long)]
        granularity: Option<String>,

        /// Seed for noise leaves. Overrides the config.
        #[arg(long)]
        seed: Option<u64>,

        /// Numeric precision: float32 or int32. Overrides the config.
        #[arg(long)]
        dtype: Option<DType>,

        /// Output format: csv or json.
        #[arg(long, default_value = "csv")]
        format: OutputFormat,

        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List built-in presets.
    Presets,
    /// Build a config's signal tree and check its sampling window.
    Validate {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Sample {
            config,
            preset,
            start,
            end,
            granularity,
            seed,
            dtype,
            format,
            output,
        } => {
            let window = WindowArgs {
                start,
                end,
                granularity,
            };
            run_sample(config, preset, window, seed, dtype, format, output)
        }
        Commands::Presets => run_presets(),
        Commands::Validate { config } => run_validate(&config),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Sampling window given on the command line.
struct WindowArgs {
    start: Option<String>,
    end: Option<String>,
    granularity: Option<String>,
}

fn run_sample(
    config_path: Option<PathBuf>,
    preset_name: Option<String>,
    window: WindowArgs,
    seed: Option<u64>,
    dtype: Option<DType>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = match (config_path, preset_name) {
        (Some(_), Some(_)) => bail!("--config and --preset are mutually exclusive"),
        (None, None) => bail!("one of --config or --preset is required"),
        (Some(path), None) => load_config(&path)?,
        (None, Some(name)) => config_from_preset(&name, window)?,
    };

    // Command-line overrides
    if let Some(seed) = seed {
        config.sampling.seed = Some(seed);
    }
    if let Some(dtype) = dtype {
        config.sampling.dtype = dtype;
    }

    let signal = config.build_signal()?;
    let interval = config.sampling.interval()?;
    let granularity = config.sampling.granularity()?;
    let run_id = config
        .full_hash()
        .context("failed to fingerprint config")?;
    info!(
        run_id = %run_id.short(),
        signal = %signal,
        "sampling"
    );

    let samples = signal
        .sample_with(
            &interval,
            granularity,
            config.sampling.dtype,
            config.sampling.seed,
        )
        .with_context(|| format!("failed to sample {signal}"))?;
    let rendered = export(&samples, format)?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "Wrote {} samples to {} (run {})",
                samples.len(),
                path.display(),
                run_id.short()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<SynthConfig> {
    let config = SynthConfig::from_file(path)?;
    debug!(path = %path.display(), shape = %config.signal.shape(), "loaded config");
    Ok(config)
}

fn config_from_preset(name: &str, window: WindowArgs) -> Result<SynthConfig> {
    if SignalPreset::from_name(name).is_none() {
        let valid: Vec<&str> = SignalPreset::ALL.iter().map(|p| p.name()).collect();
        bail!("unknown preset '{name}'. Valid: {}", valid.join(", "));
    }
    let (Some(start), Some(end), Some(granularity)) = (window.start, window.end, window.granularity)
    else {
        bail!("--preset requires --start, --end and --granularity");
    };

    Ok(SynthConfig {
        sampling: SamplingConfig {
            start,
            end,
            granularity,
            dtype: DType::default(),
            seed: None,
        },
        signal: SignalConfig::Preset {
            name: name.to_string(),
        },
    })
}

fn run_presets() -> Result<()> {
    for preset in SignalPreset::ALL {
        let signal = build_signal(&preset.to_config())?;
        println!("{:<20} {signal}", preset.name());
    }
    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    let signal = config.build_signal()?;
    let ticks = config
        .sampling
        .interval()?
        .tick_count(config.sampling.granularity()?)
        .context("invalid sampling window")?;
    let run_id = config
        .full_hash()
        .context("failed to fingerprint config")?;

    println!("Config:      {}", path.display());
    println!("Signal:      {signal}");
    println!("Shape:       {}", config.shape_hash().short());
    println!("Run id:      {}", run_id.short());
    println!("Ticks:       {ticks}");
    println!("Dtype:       {}", config.sampling.dtype);
    match config.sampling.seed {
        Some(seed) => println!("Seed:        {seed}"),
        None => println!("Seed:        (unseeded)"),
    }
    Ok(())
}
