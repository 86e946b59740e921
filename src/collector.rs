//! Sampling engine: the timed collection loop behind a run.
//!
//! A run uses exactly two threads. In bounded mode a background task samples
//! the board while the foreground animates progress; in unbounded mode the
//! roles flip and the background task only waits for the center press that
//! ends the run. The batch has a single producer; the other thread observes
//! nothing but an atomic progress counter and a one-shot completion flag, so
//! the two sides share no locks. The background task is always joined before
//! control returns, no work survives a run.

use crate::board::{glyphs, Action, Direction, Display, Joystick, Sensors};
use crate::error::{InputError, Result, SensorError};
use crate::sensors::{read_row, SampleRow, SensorSelection};
use anyhow::anyhow;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Collect one batch of samples.
///
/// `sample_count > 0` collects exactly that many rows; `sample_count == 0`
/// collects until the user presses center. A `delay` of zero degenerates to
/// best-effort tight looping. Any sensor read failure aborts the batch and
/// propagates; there is no retry and no partial row.
pub fn run_collection<J, D, S>(
    joystick: &mut J,
    display: &mut D,
    sensors: &mut S,
    selection: &SensorSelection,
    delay_secs: f64,
    sample_count: u32,
) -> Result<Vec<SampleRow>>
where
    J: Joystick + Send,
    D: Display,
    S: Sensors + Send,
{
    let delay = Duration::from_secs_f64(delay_secs);
    if sample_count == 0 {
        run_unbounded(joystick, display, sensors, selection, delay)
    } else {
        run_bounded(display, sensors, selection, delay, sample_count)
    }
}

/// Background sampler, foreground progress animation.
fn run_bounded<D, S>(
    display: &mut D,
    sensors: &mut S,
    selection: &SensorSelection,
    delay: Duration,
    sample_count: u32,
) -> Result<Vec<SampleRow>>
where
    D: Display,
    S: Sensors + Send,
{
    log::info!("starting bounded run: {} samples", sample_count);
    let progress = AtomicUsize::new(0);
    let done = AtomicBool::new(false);
    let start = Instant::now();

    thread::scope(|scope| {
        let sampler = scope.spawn(|| {
            let result = sample_batch(sensors, selection, delay, sample_count, &progress, start);
            done.store(true, Ordering::SeqCst);
            result
        });

        let mut column = 0;
        while !done.load(Ordering::SeqCst) {
            let sampled = progress.load(Ordering::SeqCst) as u32;
            let remaining = sample_count.saturating_sub(sampled);
            render_progress(display, remaining, column)?;
            column = (column + 1) % 8;
            thread::sleep(delay);
        }

        let batch = sampler
            .join()
            .map_err(|_| anyhow!("sampler thread panicked"))?;
        Ok(batch?)
    })
}

/// Foreground sampler; background task blocks until a center press.
fn run_unbounded<J, D, S>(
    joystick: &mut J,
    display: &mut D,
    sensors: &mut S,
    selection: &SensorSelection,
    delay: Duration,
) -> Result<Vec<SampleRow>>
where
    J: Joystick + Send,
    D: Display,
    S: Sensors,
{
    log::info!("starting unbounded run");
    display.set_pixels(&glyphs::NAVIGATION)?;

    let done = AtomicBool::new(false);
    let start = Instant::now();
    let mut rows = Vec::new();

    thread::scope(|scope| -> Result<()> {
        let waiter = scope.spawn(|| {
            let result = wait_for_center(joystick);
            done.store(true, Ordering::SeqCst);
            result
        });

        while !done.load(Ordering::SeqCst) {
            let row = read_row(sensors, selection, start.elapsed().as_secs_f64())?;
            rows.push(row);
            thread::sleep(delay);
        }

        waiter
            .join()
            .map_err(|_| anyhow!("joystick thread panicked"))??;
        Ok(())
    })?;

    Ok(rows)
}

/// The sole producer of the batch: sample, append, publish the new length,
/// sleep, until the batch is full.
fn sample_batch<S: Sensors>(
    sensors: &mut S,
    selection: &SensorSelection,
    delay: Duration,
    sample_count: u32,
    progress: &AtomicUsize,
    start: Instant,
) -> std::result::Result<Vec<SampleRow>, SensorError> {
    let mut rows = Vec::with_capacity(sample_count as usize);
    loop {
        let row = read_row(sensors, selection, start.elapsed().as_secs_f64())?;
        rows.push(row);
        progress.store(rows.len(), Ordering::SeqCst);
        if rows.len() >= sample_count as usize {
            return Ok(rows);
        }
        thread::sleep(delay);
    }
}

/// One animation tick: a white pixel sweeping row 4 while more than 9
/// samples remain, then the remaining count as a digit glyph.
fn render_progress<D: Display + ?Sized>(
    display: &mut D,
    remaining: u32,
    column: usize,
) -> Result<()> {
    if remaining > 9 {
        display.set_pixels(&glyphs::single_pixel(column, 4, glyphs::WHITE))?;
    } else if let Some(digit) = char::from_digit(remaining, 10) {
        display.show_letter(digit, None)?;
    }
    Ok(())
}

/// Block until the next center press, swallowing every other event.
fn wait_for_center<J: Joystick>(joystick: &mut J) -> std::result::Result<(), InputError> {
    loop {
        let event = joystick.wait_for_event()?;
        if event.action == Action::Pressed && event.direction == Direction::Center {
            return Ok(());
        }
    }
}
