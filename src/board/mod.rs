//! Capability traits for the board hardware.
//!
//! The controller never talks to hardware directly: it is composed from the
//! four capabilities below (joystick events in, LED matrix out, sensor reads,
//! host power), injected at construction. This keeps the core testable with
//! doubles and leaves real drivers to backend implementations; the crate
//! ships one simulated backend in [`sim`].

use crate::error::{DisplayError, InputError, PowerError, SensorError};

pub mod glyphs;
pub mod sim;

#[cfg(test)]
pub mod testing;

/// One LED color as (r, g, b).
pub type Rgb = (u8, u8, u8);

/// A full 8x8 frame in row-major order.
pub type Frame = [Rgb; 64];

/// Joystick direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Center,
}

/// Joystick action; the core reacts only to `Pressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pressed,
    Released,
}

/// One discrete joystick event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoystickEvent {
    pub direction: Direction,
    pub action: Action,
}

impl JoystickEvent {
    pub fn press(direction: Direction) -> Self {
        Self {
            direction,
            action: Action::Pressed,
        }
    }

    pub fn release(direction: Direction) -> Self {
        Self {
            direction,
            action: Action::Released,
        }
    }
}

/// Blocking joystick event source.
#[cfg_attr(test, mockall::automock)]
pub trait Joystick {
    /// Block until the next joystick event arrives.
    fn wait_for_event(&mut self) -> Result<JoystickEvent, InputError>;
}

/// 8x8 LED matrix display sink.
#[cfg_attr(test, mockall::automock)]
pub trait Display {
    /// Render a full frame.
    fn set_pixels(&mut self, frame: &Frame) -> Result<(), DisplayError>;

    /// Render a single character glyph, optionally colored.
    fn show_letter(&mut self, letter: char, color: Option<Rgb>) -> Result<(), DisplayError>;

    /// Scroll a text message; blocks until the scroll completes.
    fn show_message(&mut self, text: &str, scroll_speed: f32) -> Result<(), DisplayError>;

    /// Blank the matrix.
    fn clear(&mut self) -> Result<(), DisplayError>;
}

/// Raw reads for each sensor class on the board.
///
/// Triple-valued sensors return values in x,y,z order (pitch,roll,yaw for
/// orientation).
#[cfg_attr(test, mockall::automock)]
pub trait Sensors {
    fn accelerometer(&mut self) -> Result<[f64; 3], SensorError>;
    fn temperature(&mut self) -> Result<f64, SensorError>;
    fn pressure(&mut self) -> Result<f64, SensorError>;
    fn humidity(&mut self) -> Result<f64, SensorError>;
    fn gyroscope(&mut self) -> Result<[f64; 3], SensorError>;
    fn orientation(&mut self) -> Result<[f64; 3], SensorError>;
    fn magnetometer(&mut self) -> Result<[f64; 3], SensorError>;
}

/// Host power interface. Shutdown is fire-and-forget: on real hardware the
/// call does not return.
#[cfg_attr(test, mockall::automock)]
pub trait Power {
    fn shutdown(&mut self) -> Result<(), PowerError>;
}
