//! Fixed-width weekly three-phase report.

use chrono::{Days, NaiveDate};
use itertools::Itertools;

use crate::{
    aggregate::{Period, PhaseSums},
    fmt::{DecimalComma, FinnishDate, WEEKDAYS},
    record::PhaseReading,
    store::RecordStore,
};

/// Column widths shared between the header and data rows so columns line up.
const WEEKDAY_WIDTH: usize = 13;
const DATE_WIDTH: usize = 13;
const NUMBER_WIDTH: usize = 8;
const GROUP_WIDTH: usize = 3 * NUMBER_WIDTH;
const ROW_WIDTH: usize = WEEKDAY_WIDTH + DATE_WIDTH + 6 * NUMBER_WIDTH;

/// One week's consumption and production, phase by phase, one row per
/// weekday from the given Monday on.
#[derive(bon::Builder)]
pub struct WeeklyReport<'a> {
    pub week_number: u32,
    /// Monday of the reported week.
    pub monday: NaiveDate,
    pub store: &'a RecordStore<PhaseReading>,
}

/// Concatenate rendered weekly reports in the given order.
///
/// Each report already carries a leading blank line and a trailing newline,
/// so nothing is inserted between them.
#[must_use]
pub fn compose(reports: &[String]) -> String {
    reports.concat()
}

impl WeeklyReport<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!(
            "\nViikon {} sähkönkulutus ja -tuotanto (kWh, vaiheittain)\n",
            self.week_number,
        ));
        lines.push(format!(
            "{:<weekday$}{:<date$}{:<group$}{:<group$}",
            "Viikonpäivä",
            "Päivämäärä",
            "Kulutus [kWh]",
            "Tuotanto [kWh]",
            weekday = WEEKDAY_WIDTH,
            date = DATE_WIDTH,
            group = GROUP_WIDTH,
        ));
        lines.push(format!(
            "{:<text$}{}",
            "",
            ["v1", "v2", "v3"]
                .iter()
                .cycle()
                .take(6)
                .map(|label| format!("{label:<width$}", width = NUMBER_WIDTH))
                .join(""),
            text = WEEKDAY_WIDTH + DATE_WIDTH,
        ));
        lines.push("-".repeat(ROW_WIDTH));
        for (offset, weekday) in WEEKDAYS.iter().enumerate() {
            lines.push(self.day_row(weekday, self.monday + Days::new(offset as u64)));
        }
        lines.push("-".repeat(ROW_WIDTH));
        lines.push(String::new());
        lines.join("\n")
    }

    fn day_row(&self, weekday: &str, day: NaiveDate) -> String {
        let sums = PhaseSums::over(self.store, Period::Day(day));
        let cells = sums
            .consumption_kwh()
            .into_iter()
            .chain(sums.production_kwh())
            .map(|value| {
                format!("{:<width$}", DecimalComma(value.0).to_string(), width = NUMBER_WIDTH)
            })
            .join("");
        format!(
            "{weekday:<weekday_width$}{:<date_width$}{cells}",
            FinnishDate(day).to_string(),
            weekday_width = WEEKDAY_WIDTH,
            date_width = DATE_WIDTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::quantity::energy::WattHours;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 13).unwrap()
    }

    fn store() -> RecordStore<PhaseReading> {
        [
            PhaseReading {
                timestamp: "2025-10-13T06:00:00".parse::<NaiveDateTime>().unwrap(),
                consumption: [WattHours(400), WattHours(900), WattHours(1300)],
                production: [WattHours(100), WattHours(700), WattHours(1100)],
            },
            PhaseReading {
                timestamp: "2025-10-13T18:00:00".parse::<NaiveDateTime>().unwrap(),
                consumption: [WattHours(600), WattHours(1100), WattHours(1700)],
                production: [WattHours(400), WattHours(800), WattHours(1400)],
            },
        ]
        .into_iter()
        .collect()
    }

    fn report() -> String {
        WeeklyReport::builder().week_number(42).monday(monday()).store(&store()).build().render()
    }

    #[test]
    fn test_title_names_the_week() {
        assert!(report().starts_with("\nViikon 42 sähkönkulutus ja -tuotanto (kWh, vaiheittain)\n"));
    }

    #[test]
    fn test_monday_row_sums_phases_in_watt_hours_before_conversion() {
        let row = format!(
            "{:<13}{:<13}{:<8}{:<8}{:<8}{:<8}{:<8}{:<8}",
            "maanantai", "13.10.2025", "1,00", "2,00", "3,00", "0,50", "1,50", "2,50",
        );
        assert!(report().contains(&row), "missing row in:\n{}", report());
    }

    #[test]
    fn test_days_without_readings_render_zeros() {
        let row = format!(
            "{:<13}{:<13}{:<8}{:<8}{:<8}{:<8}{:<8}{:<8}",
            "sunnuntai", "19.10.2025", "0,00", "0,00", "0,00", "0,00", "0,00", "0,00",
        );
        assert!(report().contains(&row));
    }

    #[test]
    fn test_rules_span_the_exact_row_width() {
        let report = report();
        let rules: Vec<&str> =
            report.lines().filter(|line| line.starts_with('-')).collect();
        assert_eq!(rules.len(), 2);
        for rule in rules {
            assert_eq!(rule.len(), ROW_WIDTH);
            assert!(rule.chars().all(|c| c == '-'));
        }
    }

    #[test]
    fn test_has_one_row_per_weekday_in_order() {
        let report = report();
        let mut position = 0;
        for weekday in WEEKDAYS {
            let found = report[position..].find(weekday).expect("weekday row missing");
            position += found;
        }
    }

    #[test]
    fn test_ends_with_closing_rule_and_newline() {
        assert!(report().ends_with(&format!("{}\n", "-".repeat(ROW_WIDTH))));
    }

    #[test]
    fn test_composed_weeks_keep_their_order_back_to_back() {
        let store = store();
        let next_monday = monday() + Days::new(7);
        let composed = compose(&[
            WeeklyReport::builder()
                .week_number(42)
                .monday(monday())
                .store(&store)
                .build()
                .render(),
            WeeklyReport::builder()
                .week_number(43)
                .monday(next_monday)
                .store(&store)
                .build()
                .render(),
        ]);
        let first = composed.find("Viikon 42").unwrap();
        let second = composed.find("Viikon 43").unwrap();
        assert!(first < second);
        // The junction is the first report's closing rule followed by the
        // second report's own leading blank line, nothing more.
        assert!(composed.contains(&format!("{}\n\nViikon 43", "-".repeat(ROW_WIDTH))));
        assert!(!composed.contains("\n\n\n"));
    }
}
