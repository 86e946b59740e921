//! Hand-rolled doubles for driving the core from scripted event sequences.
//!
//! The mockall mocks in the parent module cover expectation-style tests;
//! these doubles cover the menu/editor loops, where a queue of joystick
//! events and a record of display calls read better than expectations.

use super::{Display, Frame, Joystick, JoystickEvent, Rgb};
use crate::error::{DisplayError, InputError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Joystick double that replays a fixed event sequence, then reports the
/// event source as closed.
pub struct ScriptedJoystick {
    events: VecDeque<JoystickEvent>,
}

impl ScriptedJoystick {
    pub fn new(events: impl IntoIterator<Item = JoystickEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl Joystick for ScriptedJoystick {
    fn wait_for_event(&mut self) -> Result<JoystickEvent, InputError> {
        self.events.pop_front().ok_or(InputError::Closed)
    }
}

/// One recorded display call.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Pixels(Box<Frame>),
    Letter(char, Option<Rgb>),
    Message(String),
    Clear,
}

/// Display double that records every call; the log handle stays valid after
/// the double is moved into the code under test.
#[derive(Default)]
pub struct RecordingDisplay {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Arc<Mutex<Vec<DisplayCall>>> {
        self.calls.clone()
    }
}

impl Display for RecordingDisplay {
    fn set_pixels(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        self.calls
            .lock()
            .unwrap()
            .push(DisplayCall::Pixels(Box::new(*frame)));
        Ok(())
    }

    fn show_letter(&mut self, letter: char, color: Option<Rgb>) -> Result<(), DisplayError> {
        self.calls
            .lock()
            .unwrap()
            .push(DisplayCall::Letter(letter, color));
        Ok(())
    }

    fn show_message(&mut self, text: &str, _scroll_speed: f32) -> Result<(), DisplayError> {
        self.calls
            .lock()
            .unwrap()
            .push(DisplayCall::Message(text.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.calls.lock().unwrap().push(DisplayCall::Clear);
        Ok(())
    }
}

/// Collect all scrolled messages from a recording log.
pub fn messages(log: &Arc<Mutex<Vec<DisplayCall>>>) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|call| match call {
            DisplayCall::Message(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}
