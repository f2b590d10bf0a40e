mod config;
mod error;

use clap::{Parser, Subcommand, ValueEnum};
use rc_core::units::{self, si};
use rc_sim::{RcCircuit, Sample, SimRecord, run_sim_with_progress};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::{CircuitConfig, Overrides, load_config};
use error::CliResult;

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(about = "rcflow CLI - transient response of a current-driven RC circuit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a fixed-step transient simulation
    Run {
        /// Path to a YAML config file (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the effective configuration as YAML
    ShowConfig {
        /// Path to a YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: OverrideArgs,
    },
}

#[derive(clap::Args, Clone, Debug, Default)]
struct OverrideArgs {
    /// Time step in seconds
    #[arg(long)]
    dt: Option<f64>,
    /// End time in seconds
    #[arg(long)]
    t_end: Option<f64>,
    /// Print a trace line every N steps
    #[arg(long)]
    report_every: Option<usize>,
    /// Initial capacitor voltage in volts
    #[arg(long, allow_hyphen_values = true)]
    v0: Option<f64>,
    /// Source current in amperes
    #[arg(long, allow_hyphen_values = true)]
    i0: Option<f64>,
    /// Capacitance in farads
    #[arg(long, allow_hyphen_values = true)]
    capacitance: Option<f64>,
    /// Resistance in ohms
    #[arg(long, allow_hyphen_values = true)]
    resistance: Option<f64>,
}

impl From<OverrideArgs> for Overrides {
    fn from(a: OverrideArgs) -> Self {
        Overrides {
            dt: a.dt,
            t_end: a.t_end,
            report_every: a.report_every,
            v0: a.v0,
            i0: a.i0,
            capacitance: a.capacitance,
            resistance: a.resistance,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One human-readable trace line per reported step
    Text,
    /// The full run record as JSON
    Json,
}

fn main() -> CliResult<()> {
    // Diagnostics go to stderr so the trace on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            overrides,
            format,
        } => {
            let cfg = effective_config(config, overrides)?;
            cmd_run(&cfg, format)
        }
        Commands::ShowConfig { config, overrides } => {
            let cfg = effective_config(config, overrides)?;
            print!("{}", cfg.to_yaml()?);
            Ok(())
        }
    }
}

fn effective_config(path: Option<PathBuf>, overrides: OverrideArgs) -> CliResult<CircuitConfig> {
    let mut cfg = load_config(path.as_deref())?;
    cfg.apply(&overrides.into());
    Ok(cfg)
}

fn cmd_run(cfg: &CircuitConfig, format: Format) -> CliResult<()> {
    cfg.warn_degenerate();

    let mut circuit = RcCircuit::new(&cfg.circuit);
    let opts = cfg.sim.to_options();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let record = match format {
        Format::Text => {
            let mut write_err = None;
            let record = run_sim_with_progress(
                &mut circuit,
                &opts,
                Some(&mut |sample: &Sample| {
                    if write_err.is_none() {
                        if let Err(e) = writeln!(out, "{}", trace_line(sample)) {
                            write_err = Some(e);
                        }
                    }
                }),
            )?;
            if let Some(e) = write_err {
                return Err(e.into());
            }
            record
        }
        Format::Json => run_sim_with_progress(&mut circuit, &opts, None)?,
    };

    match format {
        Format::Text => print_summary(&mut out, cfg, &record)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &record)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn trace_line(sample: &Sample) -> String {
    format!(
        "Time: {:e} s | Voltage: {} V | Current: {} A",
        sample.time,
        fmt_opt(sample.voltage),
        fmt_opt(sample.current)
    )
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:e}", v),
        None => "unset".to_string(),
    }
}

fn print_summary<W: Write>(out: &mut W, cfg: &CircuitConfig, record: &SimRecord) -> io::Result<()> {
    let tau = units::time_constant(
        units::ohms(cfg.circuit.resistance),
        units::farads(cfg.circuit.capacitance),
    );
    let t_final = units::s(record.steps as f64 * cfg.sim.dt);

    writeln!(out, "Steps: {} ({} skipped)", record.steps, record.skipped)?;
    writeln!(out, "Final time: {:e} s", si::seconds(t_final))?;
    writeln!(out, "Time constant r*C: {:.3e} s", si::seconds(tau))?;
    if let Some(last) = record.samples.last() {
        writeln!(out, "Last report: {}", trace_line(last))?;
    }
    Ok(())
}
