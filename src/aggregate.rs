//! Period predicates and sum/mean aggregation over record stores.

use chrono::{Datelike, NaiveDate};

use crate::{
    error::InvalidSelection,
    quantity::{
        energy::{KilowattHours, WattHours},
        temperature::Celsius,
    },
    record::{NetReading, PhaseReading},
    store::RecordStore,
};

/// Selects records by the calendar date of their timestamp.
#[derive(Clone, Copy, Debug)]
pub enum Period {
    Day(NaiveDate),
    Month(u32),
    Range { first: NaiveDate, last: NaiveDate },
    All,
}

impl Period {
    /// Calendar-month selection; the month number must be 1–12.
    pub fn month(month: u32) -> Result<Self, InvalidSelection> {
        if (1..=12).contains(&month) {
            Ok(Self::Month(month))
        } else {
            Err(InvalidSelection(format!("month number {month} is outside 1–12")))
        }
    }

    /// Inclusive date range; both end days contribute.
    pub fn range(first: NaiveDate, last: NaiveDate) -> Result<Self, InvalidSelection> {
        if first <= last {
            Ok(Self::Range { first, last })
        } else {
            Err(InvalidSelection(format!(
                "range start {first} is after its end {last}"
            )))
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Day(day) => date == day,
            Self::Month(month) => date.month() == month,
            Self::Range { first, last } => first <= date && date <= last,
            Self::All => true,
        }
    }
}

/// Per-phase consumption and production sums over one period.
///
/// Sums stay in integer watt-hours until display so repeated fractional
/// additions cannot drift; a period with no matching readings sums to zero.
#[derive(Clone, Copy, Debug)]
pub struct PhaseSums {
    pub consumption: [WattHours; 3],
    pub production: [WattHours; 3],
    pub count: usize,
}

impl Default for PhaseSums {
    fn default() -> Self {
        Self {
            consumption: [WattHours::ZERO; 3],
            production: [WattHours::ZERO; 3],
            count: 0,
        }
    }
}

impl PhaseSums {
    #[must_use]
    pub fn over(store: &RecordStore<PhaseReading>, period: Period) -> Self {
        let mut sums = Self::default();
        for reading in store.iter().filter(|reading| period.contains(reading.timestamp.date())) {
            for (sum, value) in sums.consumption.iter_mut().zip(&reading.consumption) {
                *sum += *value;
            }
            for (sum, value) in sums.production.iter_mut().zip(&reading.production) {
                *sum += *value;
            }
            sums.count += 1;
        }
        sums
    }

    #[must_use]
    pub fn consumption_kwh(&self) -> [KilowattHours; 3] {
        self.consumption.map(KilowattHours::from)
    }

    #[must_use]
    pub fn production_kwh(&self) -> [KilowattHours; 3] {
        self.production.map(KilowattHours::from)
    }
}

/// Netted kWh sums with the mean of the contributing daily temperatures.
#[derive(Clone, Copy, Debug)]
pub struct NetSummary {
    pub consumption: KilowattHours,
    pub production: KilowattHours,
    temperature_sum: Celsius,
    pub count: usize,
}

impl NetSummary {
    #[must_use]
    pub fn over(store: &RecordStore<NetReading>, period: Period) -> Self {
        let mut summary = Self {
            consumption: KilowattHours::ZERO,
            production: KilowattHours::ZERO,
            temperature_sum: Celsius::ZERO,
            count: 0,
        };
        for reading in store.iter().filter(|reading| period.contains(reading.timestamp.date())) {
            summary.consumption += reading.consumption;
            summary.production += reading.production;
            summary.temperature_sum += reading.temperature;
            summary.count += 1;
        }
        summary
    }

    /// Arithmetic mean of the contributing temperatures, or `None` when the
    /// period matched nothing. Reports render the latter as `0,00`.
    #[must_use]
    pub fn mean_temperature(&self) -> Option<Celsius> {
        (self.count > 0).then(|| {
            #[allow(clippy::cast_precision_loss)]
            Celsius(self.temperature_sum.0 / self.count as f64)
        })
    }
}
