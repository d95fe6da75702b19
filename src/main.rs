use anyhow::{Context, Result};
use clap::Parser;
use colony_lib::app::App;
use colony_lib::cli::{Mode, Overrides};
use colony_lib::headless::run_headless;
use colony_lib::model::metrics::{init_logging, RunMetrics};
use colony_lib::model::{AppConfig, Simulation};
use colony_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "interactive")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Generations to advance in headless mode
    #[arg(short, long, default_value_t = 100)]
    generations: u64,

    #[command(flatten)]
    overrides: Overrides,
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::load(&args.config)?;
    args.overrides
        .apply(&mut config)
        .context("Invalid command-line override")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.mode {
        Mode::Headless => {
            init_logging();
            let config = load_config(&args)?;
            tracing::info!(fingerprint = %config.fingerprint(), "Configuration loaded");

            let mut sim = Simulation::from_config(&config)?;
            let mut metrics = RunMetrics::default();
            let stats = run_headless(&mut sim, args.generations, &mut metrics)?;
            tracing::info!(
                cooperators = stats.cooperators,
                defectors = stats.defectors,
                "Final population"
            );
            println!("{}", sim.grid());
        }
        Mode::Interactive => {
            let config = load_config(&args)?;
            let mut app = App::new(config)?;

            let mut tui = Tui::new()?;
            let res = app.run(&mut tui);
            // Restore the terminal before printing.
            drop(tui);

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}
