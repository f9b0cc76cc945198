//! Bordered net-consumption summaries for a date range, one calendar
//! month, or a whole year of readings.

use chrono::NaiveDate;

use crate::{
    aggregate::{NetSummary, Period},
    error::InvalidSelection,
    fmt::{FinnishDate, MONTHS},
    quantity::temperature::Celsius,
    record::NetReading,
    store::RecordStore,
};

const RULE_WIDTH: usize = 50;

/// Day-granular summary over an inclusive date range.
pub struct RangeReport<'a> {
    first: NaiveDate,
    last: NaiveDate,
    store: &'a RecordStore<NetReading>,
}

impl<'a> RangeReport<'a> {
    pub fn try_new(
        first: NaiveDate,
        last: NaiveDate,
        store: &'a RecordStore<NetReading>,
    ) -> Result<Self, InvalidSelection> {
        Period::range(first, last)?;
        Ok(Self { first, last, store })
    }

    #[must_use]
    pub fn render(&self) -> String {
        let summary =
            NetSummary::over(self.store, Period::Range { first: self.first, last: self.last });
        framed(
            &format!(
                "Raportti aikaväliltä: {}-{}",
                FinnishDate(self.first),
                FinnishDate(self.last),
            ),
            [
                "Aikavälin kokonaiskulutus:",
                "Aikavälin kokonaistuotanto:",
                "Aikavälin keskilämpötila:",
            ],
            &summary,
        )
    }
}

/// Summary for one calendar month across the whole store.
pub struct MonthReport<'a> {
    month: u32,
    store: &'a RecordStore<NetReading>,
}

impl<'a> MonthReport<'a> {
    pub fn try_new(
        month: u32,
        store: &'a RecordStore<NetReading>,
    ) -> Result<Self, InvalidSelection> {
        Period::month(month)?;
        Ok(Self { month, store })
    }

    #[must_use]
    pub fn render(&self) -> String {
        let summary = NetSummary::over(self.store, Period::Month(self.month));
        framed(
            &format!("Raportti kuukaudelta: {}", MONTHS[self.month as usize - 1]),
            ["- kokonaiskulutus:", "- kokonaistuotanto:", "- keskilämpötila:"],
            &summary,
        )
    }
}

/// Whole-store summary titled with the report year.
pub struct YearReport<'a> {
    pub year: i32,
    pub store: &'a RecordStore<NetReading>,
}

impl YearReport<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        let summary = NetSummary::over(self.store, Period::All);
        framed(
            &format!("Raportti vuodelta {}", self.year),
            ["- kokonaiskulutus:", "- kokonaistuotanto:", "- keskilämpötila:"],
            &summary,
        )
    }
}

/// A zero-match mean temperature renders as `0,00 °C`, matching the
/// all-zero sums.
fn framed(title: &str, labels: [&str; 3], summary: &NetSummary) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mean = summary.mean_temperature().unwrap_or(Celsius::ZERO);
    format!(
        "{rule}\n{title}\n{} {}\n{} {}\n{} {}\n{rule}\n",
        labels[0], summary.consumption, labels[1], summary.production, labels[2], mean,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::quantity::energy::KilowattHours;

    fn reading(timestamp: &str, consumption: f64, production: f64, temperature: f64) -> NetReading {
        NetReading {
            timestamp: timestamp.parse::<NaiveDateTime>().unwrap(),
            consumption: KilowattHours(consumption),
            production: KilowattHours(production),
            temperature: Celsius(temperature),
        }
    }

    fn store() -> RecordStore<NetReading> {
        [
            reading("2025-01-01T00:00:00", 10.5, 0.25, -6.0),
            reading("2025-01-02T00:00:00", 9.5, 0.5, -2.0),
            reading("2025-06-01T00:00:00", 4.0, 7.25, 18.5),
        ]
        .into_iter()
        .collect()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_range_report() {
        let store = store();
        let report = RangeReport::try_new(date(2025, 1, 1), date(2025, 1, 31), &store)
            .unwrap()
            .render();
        assert!(report.contains("Raportti aikaväliltä: 01.01.2025-31.01.2025"));
        assert!(report.contains("Aikavälin kokonaiskulutus: 20,00 kWh"));
        assert!(report.contains("Aikavälin kokonaistuotanto: 0,75 kWh"));
        assert!(report.contains("Aikavälin keskilämpötila: -4,00 °C"));
    }

    #[test]
    fn test_range_report_rejects_reversed_dates() {
        let store = store();
        assert!(RangeReport::try_new(date(2025, 2, 1), date(2025, 1, 1), &store).is_err());
    }

    #[test]
    fn test_month_report_names_the_month() {
        let store = store();
        let report = MonthReport::try_new(6, &store).unwrap().render();
        assert!(report.contains("Raportti kuukaudelta: Kesäkuu"));
        assert!(report.contains("- kokonaiskulutus: 4,00 kWh"));
        assert!(report.contains("- keskilämpötila: 18,50 °C"));
    }

    #[test]
    fn test_month_without_readings_is_all_zeros() {
        let store = store();
        let report = MonthReport::try_new(3, &store).unwrap().render();
        assert!(report.contains("- kokonaiskulutus: 0,00 kWh"));
        assert!(report.contains("- kokonaistuotanto: 0,00 kWh"));
        assert!(report.contains("- keskilämpötila: 0,00 °C"));
    }

    #[test]
    fn test_month_out_of_domain_is_rejected() {
        let store = store();
        assert!(MonthReport::try_new(13, &store).is_err());
    }

    #[test]
    fn test_year_report_covers_the_whole_store() {
        let store = store();
        let report = YearReport { year: 2025, store: &store }.render();
        assert!(report.contains("Raportti vuodelta 2025"));
        assert!(report.contains("- kokonaiskulutus: 24,00 kWh"));
        assert!(report.contains("- kokonaistuotanto: 8,00 kWh"));
        assert!(report.contains("- keskilämpötila: 3,50 °C"));
    }

    #[test]
    fn test_rules_frame_the_report() {
        let store = store();
        let report = YearReport { year: 2025, store: &store }.render();
        let rule = "-".repeat(RULE_WIDTH);
        assert!(report.starts_with(&format!("{rule}\n")));
        assert!(report.ends_with(&format!("{rule}\n")));
    }
}
