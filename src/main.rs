//! SenseLogger: menu-driven sensor data logger for an LED-matrix board.
//!
//! The joystick is the only input and the 8x8 matrix the only display:
//! pick sensors in the menu, set the delay and sample count, and each run
//! streams readings into a timestamped CSV file. This binary wires the
//! controller to the simulated terminal board; real hardware backends
//! implement the same capability traits.

mod board;
mod cli;
mod collector;
mod editor;
mod error;
mod menu;
mod sensors;
mod storage;

use board::sim::{SimDisplay, SimJoystick, SimPower, SimSensors};
use cli::Cli;
use error::Result;
use menu::{DataCollector, RunParameters};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.to_filter_string()),
    )
    .init();
    log::info!("sense-logger starting, output dir {}", cli.output_dir.display());

    let display = SimDisplay::new()?;
    let mut collector = DataCollector::new(
        SimJoystick,
        display,
        SimSensors::new(),
        SimPower,
        RunParameters {
            delay_secs: cli.delay,
            sample_count: cli.count,
            scroll_speed: cli.scroll_speed,
            output_dir: cli.output_dir,
        },
    );
    collector.run()
}
