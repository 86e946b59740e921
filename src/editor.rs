//! Numeric parameter editor.
//!
//! One joystick-driven adjustment loop, reused for both the inter-sample
//! delay and the sample count. Up/down add or subtract the current step,
//! left/right shrink or grow the step by a factor of ten, center confirms.
//! The step size is local to one editing session; it resets to its default
//! the next time the editor is entered.

use crate::board::{glyphs, Action, Direction, Display, Joystick};
use crate::error::Result;

/// Run the editing loop and return the confirmed value.
///
/// A decrement is applied only while `step <= value`, so the value can
/// never go negative; a too-large step silently skips the decrement rather
/// than clamping to zero. There is no upper bound.
pub fn edit_parameter<J, D>(
    joystick: &mut J,
    display: &mut D,
    initial: f64,
    label: &str,
    initial_step: f64,
    scroll_speed: f32,
) -> Result<f64>
where
    J: Joystick + ?Sized,
    D: Display + ?Sized,
{
    let mut value = initial;
    let mut step = initial_step;

    display.show_message(&format!("{}: {:.3}", label, value), scroll_speed)?;
    loop {
        display.set_pixels(&glyphs::NAVIGATION)?;
        let event = joystick.wait_for_event()?;
        if event.action != Action::Pressed {
            continue;
        }
        match event.direction {
            Direction::Center => break,
            Direction::Up => {
                value += step;
                display.show_message(&format!("{}: {:.3}", label, value), scroll_speed)?;
            }
            Direction::Down => {
                if step <= value {
                    value -= step;
                }
                display.show_message(&format!("{}: {:.3}", label, value), scroll_speed)?;
            }
            Direction::Left => {
                step /= 10.0;
                display.show_message(&format!("increment size: {}", step), scroll_speed)?;
            }
            Direction::Right => {
                step *= 10.0;
                display.show_message(&format!("increment size: {}", step), scroll_speed)?;
            }
        }
    }

    log::debug!("{} set to {}", label, value);
    Ok(value)
}
