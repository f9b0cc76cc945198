//! Facility reservation records, one per pipe-delimited line.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::{
    error::RecordError,
    quantity::cost::Euros,
    record::{ParseRecord, fields},
};

#[derive(Clone, Debug)]
pub struct Reservation {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: u32,
    pub hourly_rate: Euros,
    pub confirmed: bool,
    pub venue: String,
    pub created_at: NaiveDateTime,
}

impl Reservation {
    /// Start time plus duration; wraps past midnight.
    #[must_use]
    pub fn end_time(&self) -> NaiveTime {
        self.start_time + TimeDelta::hours(i64::from(self.duration_hours))
    }

    #[must_use]
    pub fn total_price(&self) -> Euros {
        self.hourly_rate * self.duration_hours
    }
}

impl ParseRecord for Reservation {
    const FIELD_COUNT: usize = 11;

    fn parse_record(fields: &[&str]) -> Result<Self, RecordError> {
        Ok(Self {
            id: fields::unsigned(fields, 0)?,
            name: fields::text(fields, 1),
            email: fields::text(fields, 2),
            phone: fields::text(fields, 3),
            date: fields::date(fields, 4)?,
            start_time: fields::time(fields, 5)?,
            duration_hours: fields::unsigned(fields, 6)?,
            hourly_rate: Euros(fields::decimal(fields, 7)?),
            confirmed: fields::boolean(fields, 8)?,
            venue: fields::text(fields, 9),
            created_at: fields::date_time(fields, 10)?,
        })
    }
}
