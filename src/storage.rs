//! Run file writing.
//!
//! A run log is created once per collection run: the filename is derived
//! from the enabled sensor codes plus a seconds-resolution timestamp, the
//! header is written, and the file is closed again. Rows are appended in a
//! second open/close at the end of the run. No handle is held across the
//! run, so an interrupted process never leaves a half-written row behind.

use crate::error::Result;
use crate::sensors::{SampleRow, SensorSelection};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// The output file of one collection run.
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// Derive the run filename, write the header line, and close the file.
    pub fn create(selection: &SensorSelection, dir: &Path) -> Result<Self> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = format!("{}-{}.csv", selection.codes(), timestamp);
        let path = dir.join(file_name);

        let mut file = File::create(&path)?;
        writeln!(file, "{}", selection.header_columns().join(" , "))?;
        log::info!("created run file {}", path.display());

        Ok(Self { path })
    }

    /// Append the collected rows, one line each, then close the file.
    pub fn append(&self, rows: &[SampleRow]) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        for row in rows {
            writeln!(file, "{}", row.to_csv_line())?;
        }
        log::info!("wrote {} rows to {}", rows.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::SensorKind;
    use tempfile::tempdir;

    fn th_selection() -> SensorSelection {
        let mut selection = SensorSelection::new();
        selection.set(SensorKind::Temperature, true);
        selection.set(SensorKind::Humidity, true);
        selection
    }

    #[test]
    fn test_create_writes_header() {
        let dir = tempdir().unwrap();
        let run = RunLog::create(&th_selection(), dir.path()).unwrap();

        let contents = std::fs::read_to_string(run.path()).unwrap();
        assert_eq!(contents, "time , temp , humidity\n");
    }

    #[test]
    fn test_filename_pattern() {
        let dir = tempdir().unwrap();
        let run = RunLog::create(&th_selection(), dir.path()).unwrap();

        let name = run.path().file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("TH-"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_append_rows() {
        let dir = tempdir().unwrap();
        let run = RunLog::create(&th_selection(), dir.path()).unwrap();

        let rows = vec![
            SampleRow {
                elapsed_secs: 0.0,
                values: vec![20.5, 45.0],
            },
            SampleRow {
                elapsed_secs: 0.3,
                values: vec![20.6, 45.0],
            },
        ];
        run.append(&rows).unwrap();

        let contents = std::fs::read_to_string(run.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0.0,20.5,45.0");
        assert_eq!(lines[2], "0.3,20.6,45.0");
    }

    #[test]
    fn test_create_fails_in_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(RunLog::create(&th_selection(), &missing).is_err());
    }
}
