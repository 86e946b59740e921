//! Selection menu and top-level controller.
//!
//! [`DataCollector`] owns the four board capabilities and the current
//! selection, and runs the event loop that everything else hangs off:
//! cycle through the sensor codes plus the Shutdown/Quit sentinels, toggle
//! sensors up/down, and on a center press either run a full collection
//! cycle, shut the host down, or quit. The loop is infinite except for the
//! Quit path, which is the program's one normal exit.

use crate::board::{glyphs, Action, Direction, Display, Joystick, Power, Sensors};
use crate::collector::run_collection;
use crate::editor::edit_parameter;
use crate::error::{AppError, Result};
use crate::sensors::{SensorKind, SensorSelection};
use crate::storage::RunLog;
use std::path::PathBuf;

/// Default step size for the delay editor, seconds.
const DELAY_STEP: f64 = 0.1;
/// Default step size for the sample count editor.
const COUNT_STEP: f64 = 10.0;

/// One entry in the menu traversal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Sensor(SensorKind),
    Shutdown,
    Quit,
}

impl MenuEntry {
    /// Letter rendered on the matrix for this entry.
    pub fn letter(&self) -> char {
        match self {
            MenuEntry::Sensor(kind) => kind.code(),
            MenuEntry::Shutdown => 'S',
            MenuEntry::Quit => 'Q',
        }
    }
}

/// The fixed traversal list: all sensor codes, then the two sentinels.
pub const MENU: [MenuEntry; 9] = [
    MenuEntry::Sensor(SensorKind::Accelerometer),
    MenuEntry::Sensor(SensorKind::Temperature),
    MenuEntry::Sensor(SensorKind::Pressure),
    MenuEntry::Sensor(SensorKind::Humidity),
    MenuEntry::Sensor(SensorKind::Gyroscope),
    MenuEntry::Sensor(SensorKind::Orientation),
    MenuEntry::Sensor(SensorKind::Magnetometer),
    MenuEntry::Shutdown,
    MenuEntry::Quit,
];

/// Initial parameters for the controller, normally taken from the CLI.
#[derive(Debug, Clone)]
pub struct RunParameters {
    pub delay_secs: f64,
    pub sample_count: u32,
    pub scroll_speed: f32,
    pub output_dir: PathBuf,
}

/// The interactive data collector.
pub struct DataCollector<J, D, S, P> {
    joystick: J,
    display: D,
    sensors: S,
    power: P,
    selection: SensorSelection,
    menu_index: usize,
    delay_secs: f64,
    sample_count: u32,
    scroll_speed: f32,
    output_dir: PathBuf,
}

impl<J, D, S, P> DataCollector<J, D, S, P>
where
    J: Joystick + Send,
    D: Display,
    S: Sensors + Send,
    P: Power,
{
    pub fn new(joystick: J, display: D, sensors: S, power: P, params: RunParameters) -> Self {
        Self {
            joystick,
            display,
            sensors,
            power,
            selection: SensorSelection::new(),
            menu_index: 0,
            delay_secs: params.delay_secs,
            sample_count: params.sample_count,
            scroll_speed: params.scroll_speed,
            output_dir: params.output_dir,
        }
    }

    /// Run the menu loop until the user quits.
    ///
    /// Sensor read failures abort the run in progress and drop back to the
    /// menu; file and display errors propagate to the caller.
    pub fn run(&mut self) -> Result<()> {
        self.display
            .show_message("Welcome to SenseLogger", self.scroll_speed)?;
        loop {
            self.draw_menu()?;
            let event = self.joystick.wait_for_event()?;
            if event.action != Action::Pressed {
                continue;
            }
            match event.direction {
                Direction::Right => self.next_entry(),
                Direction::Left => self.prev_entry(),
                Direction::Up => self.set_current(true),
                Direction::Down => self.set_current(false),
                Direction::Center => match MENU[self.menu_index] {
                    MenuEntry::Quit => {
                        self.display
                            .show_message("Quitting SenseLogger", self.scroll_speed)?;
                        self.display.set_pixels(&glyphs::FAREWELL)?;
                        return Ok(());
                    }
                    MenuEntry::Shutdown => {
                        self.display
                            .show_message("Shutting down", self.scroll_speed)?;
                        self.display.clear()?;
                        // Fire-and-forget: on real hardware this never
                        // returns, so a failure is only worth a log line.
                        if let Err(e) = self.power.shutdown() {
                            log::error!("shutdown failed: {}", e);
                        }
                    }
                    MenuEntry::Sensor(_) => {
                        if self.selection.any_enabled() {
                            match self.run_cycle() {
                                Ok(()) => {}
                                Err(AppError::Sensor(e)) => {
                                    log::error!("run aborted: {}", e);
                                    self.display
                                        .show_message("Sensor error", self.scroll_speed)?;
                                }
                                Err(e) => return Err(e),
                            }
                        } else {
                            self.display
                                .show_message("No sensors enabled", self.scroll_speed)?;
                        }
                    }
                },
            }
        }
    }

    /// One full collection cycle: edit parameters, create the run file,
    /// collect, flush, confirm.
    fn run_cycle(&mut self) -> Result<()> {
        self.delay_secs = edit_parameter(
            &mut self.joystick,
            &mut self.display,
            self.delay_secs,
            "dt",
            DELAY_STEP,
            self.scroll_speed,
        )?;
        let count = edit_parameter(
            &mut self.joystick,
            &mut self.display,
            self.sample_count as f64,
            "freq",
            COUNT_STEP,
            self.scroll_speed,
        )?;
        self.sample_count = count as u32;

        let run_log = RunLog::create(&self.selection, &self.output_dir)?;
        self.display
            .show_message("Collecting data", self.scroll_speed)?;
        let rows = run_collection(
            &mut self.joystick,
            &mut self.display,
            &mut self.sensors,
            &self.selection,
            self.delay_secs,
            self.sample_count,
        )?;
        run_log.append(&rows)?;
        self.display.show_message("Finished", self.scroll_speed)?;
        Ok(())
    }

    /// Render the highlighted entry: enabled sensors in red, everything
    /// else in the default color.
    fn draw_menu(&mut self) -> Result<()> {
        let entry = MENU[self.menu_index];
        let color = match entry {
            MenuEntry::Sensor(kind) if self.selection.is_enabled(kind) => Some(glyphs::RED),
            _ => None,
        };
        self.display.show_letter(entry.letter(), color)?;
        Ok(())
    }

    pub fn current_entry(&self) -> MenuEntry {
        MENU[self.menu_index]
    }

    fn next_entry(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU.len();
    }

    fn prev_entry(&mut self) {
        self.menu_index = if self.menu_index == 0 {
            MENU.len() - 1
        } else {
            self.menu_index - 1
        };
    }

    /// Enable or disable the highlighted sensor; no-op on the sentinels.
    fn set_current(&mut self, enabled: bool) {
        if let MenuEntry::Sensor(kind) = MENU[self.menu_index] {
            self.selection.set(kind, enabled);
        }
    }
}
