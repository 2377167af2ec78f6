use clap::{Parser, Subcommand};
use function_plotter::{FunctionFamily, PlotSession, constants, sample};
use log::info;
use std::process;

#[derive(Parser)]
#[command(author, version, about = "Tabulate parameterized functions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every function family with its parameters and defaults
    List,
    /// Print a sampled function as an x/y table
    Sample {
        /// Family to evaluate, e.g. `sine` or `abs-logarithmic`
        family: FunctionFamily,
        /// Range as `min,max`; unusable text falls back to the default range
        #[arg(short, long, default_value = constants::DEFAULT_RANGE, allow_hyphen_values = true)]
        range: String,
        /// Number of evenly spaced points
        #[arg(short = 'n', long, default_value_t = constants::DEFAULT_SAMPLE_COUNT)]
        samples: usize,
        /// Parameter override, may be repeated
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => list(),
        Commands::Sample {
            family,
            range,
            samples,
            params,
        } => {
            if let Err(message) = tabulate(family, &range, samples, &params) {
                eprintln!("Error: {message}");
                process::exit(1);
            }
        }
    }
}

fn list() {
    for family in FunctionFamily::ALL {
        let defaults = family
            .defaults()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:<16} {:<24} {}", family.key(), family.formula(), defaults);
    }
}

fn tabulate(
    family: FunctionFamily,
    range: &str,
    samples: usize,
    params: &[String],
) -> Result<(), String> {
    let mut session = PlotSession::new(family);
    session.set_range_text(range);
    session.set_sample_count(samples);
    for param in params {
        let (name, text) = param
            .split_once('=')
            .ok_or_else(|| format!("parameter `{param}` is not NAME=VALUE"))?;
        session
            .set_parameter_text(name.trim(), text)
            .map_err(|e| e.to_string())?;
    }

    let domain = session.domain();
    info!(
        "Sample {} over [{}, {}] at {} points",
        session.title(),
        domain.x_min,
        domain.x_max,
        domain.samples
    );
    let sample =
        sample(session.family(), session.parameters(), &domain).map_err(|e| e.to_string())?;

    let (x_label, y_label) = session.axis_labels();
    println!("{x_label}\t{y_label}");
    for (x, y) in &sample {
        println!("{x:.6}\t{y:.6}");
    }
    Ok(())
}
