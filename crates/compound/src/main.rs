#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use compound::{App, ParameterOverrides, Settings, init_logging, platform::FileExporter};
#[cfg(feature = "native")]
use compound_core::{CompoundingFrequency, Direction};
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "compound")]
#[command(about = "A terminal calculator for compound growth and decay")]
struct Args {
    /// Starting value
    #[arg(short, long)]
    initial: Option<f64>,

    /// Rate per year, in percent
    #[arg(short, long, allow_hyphen_values = true)]
    rate: Option<f64>,

    /// Number of years to project
    #[arg(short, long)]
    years: Option<u32>,

    /// Compounding frequency (annually, semi-annually, quarterly, monthly)
    #[arg(short, long, value_parser = compound::util::common::parse_frequency)]
    frequency: Option<CompoundingFrequency>,

    /// Start in decay mode
    #[arg(long)]
    decay: bool,

    /// Directory CSV exports are written to (default: current directory)
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Path to the data directory (default: ~/.compound/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[cfg(feature = "native")]
impl Args {
    fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            initial_value: self.initial,
            rate_percent: self.rate,
            years: self.years,
            frequency: self.frequency,
            direction: self.decay.then_some(Direction::Decay),
        }
    }
}

#[cfg(feature = "native")]
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".compound")
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let settings = Settings::load_or_default(&data_dir);
    let params = args.overrides().apply(settings.initial_parameters());
    let export_dir = args
        .export_dir
        .clone()
        .or(settings.export_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    tracing::info!(
        initial = params.initial_value,
        rate = params.rate_percent,
        years = params.years,
        frequency = params.compounding_frequency,
        direction = ?params.direction,
        export_dir = %export_dir.display(),
        "Starting calculator"
    );

    let mut app = App::new(&params, Box::new(FileExporter::new(export_dir)));

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // The web build starts from the wasm_bindgen entry point in web.rs
    panic!(
        "This binary requires the 'native' feature. For web, use trunk to build the WASM target."
    );
}
