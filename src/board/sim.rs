//! Simulated board backend for development off-hardware.
//!
//! Renders the 8x8 matrix as colored blocks in an alternate terminal
//! screen, maps the arrow keys and Enter to the joystick, and synthesizes
//! slowly varying sensor values. Esc (or `q`) closes the event source,
//! which ends the program the way unplugging the joystick would.

use super::{Action, Direction, Display, Frame, Joystick, JoystickEvent, Power, Rgb, Sensors};
use crate::error::{DisplayError, InputError, PowerError, SensorError};
use crossterm::{
    cursor, event,
    event::{Event, KeyCode, KeyEventKind},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Terminal column where the matrix starts.
const GRID_X: u16 = 2;
/// Terminal row where the matrix starts.
const GRID_Y: u16 = 1;
/// Terminal row used for messages and letters.
const STATUS_Y: u16 = GRID_Y + 9;

/// LED matrix rendered into an alternate terminal screen.
pub struct SimDisplay {
    stdout: io::Stdout,
}

impl SimDisplay {
    pub fn new() -> Result<Self, DisplayError> {
        let mut stdout = io::stdout();
        stdout
            .execute(terminal::EnterAlternateScreen)
            .and_then(|s| s.execute(cursor::Hide))
            .map_err(|e| DisplayError::InitializationError(e.to_string()))?;
        terminal::enable_raw_mode()
            .map_err(|e| DisplayError::InitializationError(e.to_string()))?;
        Ok(Self { stdout })
    }

    fn blank_status(&mut self) -> io::Result<()> {
        self.stdout.queue(cursor::MoveTo(0, STATUS_Y))?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        Ok(())
    }

    fn draw_frame(&mut self, frame: &Frame) -> io::Result<()> {
        for row in 0..8 {
            self.stdout
                .queue(cursor::MoveTo(GRID_X, GRID_Y + row as u16))?;
            for col in 0..8 {
                let (r, g, b) = frame[row * 8 + col];
                self.stdout
                    .queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                // Unlit pixels still get a dim placeholder so the grid
                // keeps its shape.
                let block = if (r, g, b) == (0, 0, 0) { "··" } else { "██" };
                self.stdout.queue(Print(block))?;
            }
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()
    }
}

impl Display for SimDisplay {
    fn set_pixels(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        self.draw_frame(frame)
            .map_err(|e| DisplayError::RenderError(e.to_string()))
    }

    fn show_letter(&mut self, letter: char, color: Option<Rgb>) -> Result<(), DisplayError> {
        let render = |display: &mut Self| -> io::Result<()> {
            display.draw_frame(&[(0, 0, 0); 64])?;
            display.blank_status()?;
            let (r, g, b) = color.unwrap_or((255, 255, 255));
            display.stdout.queue(cursor::MoveTo(GRID_X, STATUS_Y))?;
            display
                .stdout
                .queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
            display.stdout.queue(Print(format!("[{}]", letter)))?;
            display.stdout.queue(ResetColor)?;
            display.stdout.flush()
        };
        render(self).map_err(|e| DisplayError::RenderError(e.to_string()))
    }

    fn show_message(&mut self, text: &str, scroll_speed: f32) -> Result<(), DisplayError> {
        let render = |display: &mut Self| -> io::Result<()> {
            display.blank_status()?;
            display.stdout.queue(cursor::MoveTo(GRID_X, STATUS_Y))?;
            display.stdout.queue(Print(text))?;
            display.stdout.flush()
        };
        render(self).map_err(|e| DisplayError::RenderError(e.to_string()))?;

        // A real matrix blocks while the text scrolls past: one letter is
        // roughly six columns wide plus a lead-in of one blank frame.
        let columns = text.chars().count() as f32 * 6.0 + 8.0;
        thread::sleep(Duration::from_secs_f32(
            (scroll_speed * columns).max(0.0),
        ));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        let render = |display: &mut Self| -> io::Result<()> {
            display.draw_frame(&[(0, 0, 0); 64])?;
            display.blank_status()?;
            display.stdout.flush()
        };
        render(self).map_err(|e| DisplayError::RenderError(e.to_string()))
    }
}

impl Drop for SimDisplay {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.execute(terminal::LeaveAlternateScreen);
        let _ = self.stdout.execute(cursor::Show);
    }
}

/// Arrow keys and Enter as the five joystick directions.
pub struct SimJoystick;

impl Joystick for SimJoystick {
    fn wait_for_event(&mut self) -> Result<JoystickEvent, InputError> {
        loop {
            let event = event::read().map_err(|e| InputError::EventError(e.to_string()))?;
            let Event::Key(key) = event else { continue };
            let action = match key.kind {
                KeyEventKind::Release => Action::Released,
                _ => Action::Pressed,
            };
            let direction = match key.code {
                KeyCode::Up => Direction::Up,
                KeyCode::Down => Direction::Down,
                KeyCode::Left => Direction::Left,
                KeyCode::Right => Direction::Right,
                KeyCode::Enter => Direction::Center,
                KeyCode::Esc | KeyCode::Char('q') => {
                    log::info!("event source closed from keyboard");
                    return Err(InputError::Closed);
                }
                _ => continue,
            };
            return Ok(JoystickEvent { direction, action });
        }
    }
}

/// Synthetic sensor values: smooth functions of elapsed time, so logged
/// runs show plausible motion instead of constants.
pub struct SimSensors {
    start: Instant,
}

impl SimSensors {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    fn t(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for SimSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensors for SimSensors {
    fn accelerometer(&mut self) -> Result<[f64; 3], SensorError> {
        let t = self.t();
        Ok([0.02 * (t * 1.3).sin(), 0.02 * (t * 0.9).cos(), 1.0 + 0.01 * t.sin()])
    }

    fn temperature(&mut self) -> Result<f64, SensorError> {
        Ok(24.0 + 0.5 * (self.t() * 0.05).sin())
    }

    fn pressure(&mut self) -> Result<f64, SensorError> {
        Ok(1013.25 + 0.8 * (self.t() * 0.02).sin())
    }

    fn humidity(&mut self) -> Result<f64, SensorError> {
        Ok(45.0 + 2.0 * (self.t() * 0.03).cos())
    }

    fn gyroscope(&mut self) -> Result<[f64; 3], SensorError> {
        let t = self.t();
        Ok([0.1 * (t * 2.0).sin(), 0.1 * (t * 1.7).cos(), 0.05 * t.sin()])
    }

    fn orientation(&mut self) -> Result<[f64; 3], SensorError> {
        let t = self.t();
        Ok([
            5.0 * (t * 0.2).sin(),
            5.0 * (t * 0.15).cos(),
            (t * 3.0) % 360.0,
        ])
    }

    fn magnetometer(&mut self) -> Result<[f64; 3], SensorError> {
        let t = self.t();
        Ok([22.0 + (t * 0.1).sin(), -8.0 + (t * 0.1).cos(), 40.0])
    }
}

/// Power interface that only logs; the development host stays up.
pub struct SimPower;

impl Power for SimPower {
    fn shutdown(&mut self) -> Result<(), PowerError> {
        log::warn!("shutdown requested; ignored by the simulated board");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_sensors_shapes() {
        let mut sensors = SimSensors::new();
        assert_eq!(sensors.accelerometer().unwrap().len(), 3);
        assert_eq!(sensors.orientation().unwrap().len(), 3);
        let temp = sensors.temperature().unwrap();
        assert!((20.0..30.0).contains(&temp));
    }

    #[test]
    fn test_sim_power_is_noop() {
        assert!(SimPower.shutdown().is_ok());
    }
}
