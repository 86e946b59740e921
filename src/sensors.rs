//! Sensor model: the fixed sensor set, the user's selection, and sample rows.
//!
//! The seven sensor classes have a fixed order that defines both menu
//! traversal and the column order of the output file. A selection is just
//! the subset of classes currently enabled.

use crate::board::Sensors;
use crate::error::SensorError;

/// One of the seven sensor classes on the board, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Accelerometer,
    Temperature,
    Pressure,
    Humidity,
    Gyroscope,
    Orientation,
    Magnetometer,
}

impl SensorKind {
    /// All sensor classes in canonical (menu and column) order.
    pub const ALL: [SensorKind; 7] = [
        SensorKind::Accelerometer,
        SensorKind::Temperature,
        SensorKind::Pressure,
        SensorKind::Humidity,
        SensorKind::Gyroscope,
        SensorKind::Orientation,
        SensorKind::Magnetometer,
    ];

    /// One-letter code shown in the menu and used in run filenames.
    pub fn code(&self) -> char {
        match self {
            SensorKind::Accelerometer => 'A',
            SensorKind::Temperature => 'T',
            SensorKind::Pressure => 'P',
            SensorKind::Humidity => 'H',
            SensorKind::Gyroscope => 'G',
            SensorKind::Orientation => 'O',
            SensorKind::Magnetometer => 'M',
        }
    }

    /// Column names this class contributes to the file header.
    pub fn column_names(&self) -> &'static [&'static str] {
        match self {
            SensorKind::Accelerometer => &["accel_x", "accel_y", "accel_z"],
            SensorKind::Temperature => &["temp"],
            SensorKind::Pressure => &["pressure"],
            SensorKind::Humidity => &["humidity"],
            SensorKind::Gyroscope => &["gyro_x", "gyro_y", "gyro_z"],
            SensorKind::Orientation => &["pitch", "roll", "yaw"],
            SensorKind::Magnetometer => &["mag_x", "mag_y", "mag_z"],
        }
    }

    /// Read this class from the board, appending its values to `out`.
    pub fn read<S: Sensors + ?Sized>(
        &self,
        sensors: &mut S,
        out: &mut Vec<f64>,
    ) -> Result<(), SensorError> {
        match self {
            SensorKind::Accelerometer => out.extend(sensors.accelerometer()?),
            SensorKind::Temperature => out.push(sensors.temperature()?),
            SensorKind::Pressure => out.push(sensors.pressure()?),
            SensorKind::Humidity => out.push(sensors.humidity()?),
            SensorKind::Gyroscope => out.extend(sensors.gyroscope()?),
            SensorKind::Orientation => out.extend(sensors.orientation()?),
            SensorKind::Magnetometer => out.extend(sensors.magnetometer()?),
        }
        Ok(())
    }
}

/// The set of currently enabled sensor classes, ordered like
/// [`SensorKind::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorSelection {
    enabled: [bool; 7],
}

impl SensorSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, kind: SensorKind, enabled: bool) {
        self.enabled[kind as usize] = enabled;
    }

    pub fn is_enabled(&self, kind: SensorKind) -> bool {
        self.enabled[kind as usize]
    }

    pub fn any_enabled(&self) -> bool {
        self.enabled.iter().any(|e| *e)
    }

    /// Enabled classes in canonical order.
    pub fn enabled_kinds(&self) -> impl Iterator<Item = SensorKind> + '_ {
        SensorKind::ALL
            .iter()
            .zip(self.enabled.iter())
            .filter(|(_, e)| **e)
            .map(|(k, _)| *k)
    }

    /// Concatenated codes of the enabled classes, e.g. "ATH".
    pub fn codes(&self) -> String {
        self.enabled_kinds().map(|k| k.code()).collect()
    }

    /// File header columns: `time` followed by each enabled class's group.
    pub fn header_columns(&self) -> Vec<&'static str> {
        let mut columns = vec!["time"];
        for kind in self.enabled_kinds() {
            columns.extend(kind.column_names());
        }
        columns
    }
}

/// One logged observation: elapsed seconds since collection start followed
/// by the enabled sensors' values in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub elapsed_secs: f64,
    pub values: Vec<f64>,
}

impl SampleRow {
    /// Comma-joined numeric text, no spaces. Debug float formatting keeps a
    /// trailing `.0` on integral values.
    pub fn to_csv_line(&self) -> String {
        let mut line = format!("{:?}", self.elapsed_secs);
        for value in &self.values {
            line.push(',');
            line.push_str(&format!("{:?}", value));
        }
        line
    }
}

/// Read one row from the board for the given selection.
///
/// Any failing read aborts the whole row; a gap would corrupt column
/// alignment against the elapsed timestamp.
pub fn read_row<S: Sensors + ?Sized>(
    sensors: &mut S,
    selection: &SensorSelection,
    elapsed_secs: f64,
) -> Result<SampleRow, SensorError> {
    let mut values = Vec::new();
    for kind in selection.enabled_kinds() {
        kind.read(sensors, &mut values)?;
    }
    Ok(SampleRow {
        elapsed_secs,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MockSensors;

    #[test]
    fn test_header_columns_follow_canonical_order() {
        let mut selection = SensorSelection::new();
        selection.set(SensorKind::Magnetometer, true);
        selection.set(SensorKind::Temperature, true);
        selection.set(SensorKind::Accelerometer, true);

        // Enabling out of order must not change the column order.
        assert_eq!(
            selection.header_columns(),
            vec!["time", "accel_x", "accel_y", "accel_z", "temp", "mag_x", "mag_y", "mag_z"]
        );
        assert_eq!(selection.codes(), "ATM");
    }

    #[test]
    fn test_header_column_count() {
        for kind in SensorKind::ALL {
            let mut selection = SensorSelection::new();
            selection.set(kind, true);
            assert_eq!(
                selection.header_columns().len(),
                1 + kind.column_names().len()
            );
        }
    }

    #[test]
    fn test_toggle_last_action_wins() {
        let mut selection = SensorSelection::new();
        selection.set(SensorKind::Humidity, true);
        selection.set(SensorKind::Humidity, false);
        assert!(!selection.is_enabled(SensorKind::Humidity));

        selection.set(SensorKind::Humidity, false);
        selection.set(SensorKind::Humidity, true);
        assert!(selection.is_enabled(SensorKind::Humidity));
    }

    #[test]
    fn test_read_row_orders_values() {
        let mut sensors = MockSensors::new();
        sensors.expect_temperature().returning(|| Ok(20.5));
        sensors
            .expect_gyroscope()
            .returning(|| Ok([0.1, 0.2, 0.3]));

        let mut selection = SensorSelection::new();
        selection.set(SensorKind::Gyroscope, true);
        selection.set(SensorKind::Temperature, true);

        let row = read_row(&mut sensors, &selection, 1.5).unwrap();
        assert_eq!(row.values, vec![20.5, 0.1, 0.2, 0.3]);
        assert_eq!(row.elapsed_secs, 1.5);
    }

    #[test]
    fn test_read_row_propagates_failure() {
        let mut sensors = MockSensors::new();
        sensors
            .expect_pressure()
            .returning(|| Err(SensorError::ReadError("bus timeout".into())));

        let mut selection = SensorSelection::new();
        selection.set(SensorKind::Pressure, true);

        assert!(read_row(&mut sensors, &selection, 0.0).is_err());
    }

    #[test]
    fn test_csv_line_keeps_trailing_zero() {
        let row = SampleRow {
            elapsed_secs: 0.5,
            values: vec![20.5, 45.0],
        };
        assert_eq!(row.to_csv_line(), "0.5,20.5,45.0");
    }
}
