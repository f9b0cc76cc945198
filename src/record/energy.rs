//! Energy measurement records, one per delimited CSV line.

use chrono::NaiveDateTime;

use crate::{
    error::RecordError,
    quantity::{
        energy::{KilowattHours, WattHours},
        temperature::Celsius,
    },
    record::{ParseRecord, fields},
};

/// One interval of three-phase consumption and production, in watt-hours.
#[derive(Clone, Debug)]
pub struct PhaseReading {
    pub timestamp: NaiveDateTime,
    pub consumption: [WattHours; 3],
    pub production: [WattHours; 3],
}

impl ParseRecord for PhaseReading {
    const FIELD_COUNT: usize = 7;

    fn parse_record(fields: &[&str]) -> Result<Self, RecordError> {
        Ok(Self {
            timestamp: fields::timestamp(fields, 0)?,
            consumption: [
                WattHours(fields::integer(fields, 1)?),
                WattHours(fields::integer(fields, 2)?),
                WattHours(fields::integer(fields, 3)?),
            ],
            production: [
                WattHours(fields::integer(fields, 4)?),
                WattHours(fields::integer(fields, 5)?),
                WattHours(fields::integer(fields, 6)?),
            ],
        })
    }
}

/// One day's netted consumption and production in kilowatt-hours, with the
/// daily mean temperature.
#[derive(Clone, Debug)]
pub struct NetReading {
    pub timestamp: NaiveDateTime,
    pub consumption: KilowattHours,
    pub production: KilowattHours,
    pub temperature: Celsius,
}

impl ParseRecord for NetReading {
    const FIELD_COUNT: usize = 4;

    fn parse_record(fields: &[&str]) -> Result<Self, RecordError> {
        Ok(Self {
            timestamp: fields::timestamp(fields, 0)?,
            consumption: KilowattHours(fields::decimal(fields, 1)?),
            production: KilowattHours(fields::decimal(fields, 2)?),
            temperature: Celsius(fields::decimal(fields, 3)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_phase_reading() {
        let reading =
            PhaseReading::parse_record(&["2025-10-13T12:00:00", "100", "200", "300", "50", "150", "250"])
                .unwrap();
        assert_eq!(reading.timestamp.date(), NaiveDate::from_ymd_opt(2025, 10, 13).unwrap());
        assert_eq!(reading.consumption, [WattHours(100), WattHours(200), WattHours(300)]);
        assert_eq!(reading.production, [WattHours(50), WattHours(150), WattHours(250)]);
    }

    #[test]
    fn test_phase_reading_rejects_fractional_watt_hours() {
        let error = PhaseReading::parse_record(&[
            "2025-10-13T12:00:00",
            "100",
            "2.5",
            "300",
            "50",
            "150",
            "250",
        ])
        .unwrap_err();
        assert_eq!(error.to_string(), "field 2 (`2.5`): not an integer");
    }

    #[test]
    fn test_net_reading_with_comma_decimals_and_offset() {
        let reading =
            NetReading::parse_record(&["2025-01-01T00:00:00.000+02:00", "1,569", "0,0", "-5,2"])
                .unwrap();
        assert_eq!(reading.timestamp.date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_abs_diff_eq!(reading.consumption.0, 1.569);
        assert_abs_diff_eq!(reading.production.0, 0.0);
        assert_abs_diff_eq!(reading.temperature.0, -5.2);
    }

    #[test]
    fn test_net_reading_separator_equivalence() {
        let comma = NetReading::parse_record(&["2025-01-01T00:00:00", "1,569", "0,5", "2,0"]).unwrap();
        let period = NetReading::parse_record(&["2025-01-01T00:00:00", "1.569", "0.5", "2.0"]).unwrap();
        assert_eq!(comma.consumption, period.consumption);
        assert_eq!(comma.production, period.production);
        assert_eq!(comma.temperature, period.temperature);
    }
}
