//! Finnish-locale display helpers shared by all reports.

use std::fmt::{Debug, Display, Formatter};

use chrono::{NaiveDate, NaiveTime};

use crate::error::InvalidSelection;

/// Finnish weekday names, Monday first.
pub const WEEKDAYS: [&str; 7] =
    ["maanantai", "tiistai", "keskiviikko", "torstai", "perjantai", "lauantai", "sunnuntai"];

/// Finnish month names, January first.
pub const MONTHS: [&str; 12] = [
    "Tammikuu",
    "Helmikuu",
    "Maaliskuu",
    "Huhtikuu",
    "Toukokuu",
    "Kesäkuu",
    "Heinäkuu",
    "Elokuu",
    "Syyskuu",
    "Lokakuu",
    "Marraskuu",
    "Joulukuu",
];

/// Two-decimal number with a comma as the decimal separator: `39.9` → `39,90`.
pub struct DecimalComma(pub f64);

impl Display for DecimalComma {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = format!("{:.2}", self.0);
        f.write_str(&rendered.replace('.', ","))
    }
}

impl Debug for DecimalComma {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// `pv.kk.vvvv` date, e.g. `13.10.2025`.
pub struct FinnishDate(pub NaiveDate);

impl Display for FinnishDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

/// `HH.MM` time of day; a period, not a colon, separates the parts.
pub struct ClockTime(pub NaiveTime);

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H.%M"))
    }
}

/// Parse a user-supplied `pv.kk.vvvv` date, e.g. `1.10.2025` or `01.10.2025`.
pub fn parse_finnish_date(input: &str) -> Result<NaiveDate, InvalidSelection> {
    NaiveDate::parse_from_str(input.trim(), "%d.%m.%Y").map_err(|_| {
        InvalidSelection(format!("`{input}` is not a valid date (expected pv.kk.vvvv)"))
    })
}
