use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    config::SummaryJob,
    prelude::*,
    record::{NetReading, PhaseReading, Reservation},
    report::{
        period::{MonthReport, RangeReport, YearReport},
        reservations::{self, ReservationReport},
        weekly::{self, WeeklyReport},
    },
    sink,
    store::{RecordStore, Source},
    tables,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the weekly phase report for one readings file.
    Week(WeekArgs),

    /// Render weekly reports for many weeks into a single file, per a TOML job.
    Summary(SummaryArgs),

    /// Summarize net readings over an inclusive date range.
    Range(RangeArgs),

    /// Summarize net readings for one calendar month.
    Month(MonthArgs),

    /// Summarize net readings for the whole year.
    Year(YearArgs),

    /// Render reservation listings, or one reservation's details.
    Reservations(ReservationArgs),

    /// Development tools: dump a readings file as a table.
    Inspect(InspectArgs),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Week(args) => args.run(),
            Self::Summary(args) => args.run(),
            Self::Range(args) => args.run(),
            Self::Month(args) => args.run(),
            Self::Year(args) => args.run(),
            Self::Reservations(args) => args.run(),
            Self::Inspect(args) => args.run(),
        }
    }
}

#[derive(Parser)]
pub struct OutputArgs {
    /// Write the report to the file instead of standard output.
    #[clap(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct WeekArgs {
    /// Phase readings file, `;`-delimited with a header.
    #[clap(long, short = 'i', env = "KOONTI_ENERGY_FILE")]
    pub input: PathBuf,

    /// ISO week number used in the report title.
    #[clap(long)]
    pub week: u32,

    /// Monday of the week.
    #[clap(long)]
    pub monday: NaiveDate,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl WeekArgs {
    fn run(self) -> Result {
        let store: RecordStore<PhaseReading> = Source::energy_csv(self.input).load()?;
        info!(n_readings = store.len(), "loaded the readings");
        let report = WeeklyReport::builder()
            .week_number(self.week)
            .monday(self.monday)
            .store(&store)
            .build()
            .render();
        sink::deliver(&report, self.output.output.as_deref())
    }
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// TOML job file listing the weeks and the output path.
    #[clap(long, short = 'j', env = "KOONTI_SUMMARY_JOB")]
    pub job: PathBuf,
}

impl SummaryArgs {
    fn run(self) -> Result {
        let job = SummaryJob::read_from(&self.job)?;
        let mut reports = Vec::with_capacity(job.weeks.len());
        for week in &job.weeks {
            let store: RecordStore<PhaseReading> =
                Source::energy_csv(week.input.clone()).load()?;
            info!(week = week.number, n_readings = store.len(), "loaded the readings");
            reports.push(
                WeeklyReport::builder()
                    .week_number(week.number)
                    .monday(week.monday)
                    .store(&store)
                    .build()
                    .render(),
            );
        }
        sink::deliver(&weekly::compose(&reports), Some(&job.output))
    }
}

#[derive(Parser)]
pub struct RangeArgs {
    /// Net readings file, `;`-delimited with a header.
    #[clap(long, short = 'i', env = "KOONTI_ENERGY_FILE")]
    pub input: PathBuf,

    /// First day of the range, `pv.kk.vvvv`.
    #[clap(long, value_parser = crate::fmt::parse_finnish_date)]
    pub first: NaiveDate,

    /// Last day of the range, inclusive, `pv.kk.vvvv`.
    #[clap(long, value_parser = crate::fmt::parse_finnish_date)]
    pub last: NaiveDate,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl RangeArgs {
    fn run(self) -> Result {
        let store: RecordStore<NetReading> = Source::energy_csv(self.input).load()?;
        let report = RangeReport::try_new(self.first, self.last, &store)?;
        sink::deliver(&report.render(), self.output.output.as_deref())
    }
}

#[derive(Parser)]
pub struct MonthArgs {
    /// Net readings file, `;`-delimited with a header.
    #[clap(long, short = 'i', env = "KOONTI_ENERGY_FILE")]
    pub input: PathBuf,

    /// Calendar month, 1 through 12.
    #[clap(long)]
    pub month: u32,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl MonthArgs {
    fn run(self) -> Result {
        let store: RecordStore<NetReading> = Source::energy_csv(self.input).load()?;
        let report = MonthReport::try_new(self.month, &store)?;
        sink::deliver(&report.render(), self.output.output.as_deref())
    }
}

#[derive(Parser)]
pub struct YearArgs {
    /// Net readings file, `;`-delimited with a header.
    #[clap(long, short = 'i', env = "KOONTI_ENERGY_FILE")]
    pub input: PathBuf,

    /// Year printed in the report title.
    #[clap(long, default_value = "2025")]
    pub year: i32,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl YearArgs {
    fn run(self) -> Result {
        let store: RecordStore<NetReading> = Source::energy_csv(self.input).load()?;
        let report = YearReport { year: self.year, store: &store };
        sink::deliver(&report.render(), self.output.output.as_deref())
    }
}

#[derive(Parser)]
pub struct ReservationArgs {
    /// Reservations file, `|`-delimited without a header.
    #[clap(long, short = 'i', env = "KOONTI_RESERVATION_FILE")]
    pub input: PathBuf,

    /// Render the details of one reservation instead of the listings.
    #[clap(long)]
    pub id: Option<u32>,

    /// Minimum duration, in hours, to count as a long reservation.
    #[clap(long, default_value = "3")]
    pub long_threshold: u32,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl ReservationArgs {
    fn run(self) -> Result {
        let store: RecordStore<Reservation> = Source::reservation_file(self.input).load()?;
        info!(n_reservations = store.len(), "loaded the reservations");
        let report = match self.id {
            Some(id) => reservations::detail_for(&store, id)?,
            None => ReservationReport::builder()
                .store(&store)
                .long_threshold_hours(self.long_threshold)
                .build()
                .render(),
        };
        sink::deliver(&report, self.output.output.as_deref())
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub enum InspectKind {
    /// Per-phase readings, 7 fields.
    Phase,

    /// Net readings with temperature, 4 fields.
    Net,

    /// Reservations, 11 `|`-separated fields.
    Reservations,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// File to inspect.
    #[clap(long, short = 'i')]
    pub input: PathBuf,

    /// How to interpret the file.
    #[clap(long, value_enum)]
    pub kind: InspectKind,
}

impl InspectArgs {
    fn run(self) -> Result {
        match self.kind {
            InspectKind::Phase => {
                let store: RecordStore<PhaseReading> = Source::energy_csv(self.input).load()?;
                println!("{}", tables::phase_table(&store));
            }
            InspectKind::Net => {
                let store: RecordStore<NetReading> = Source::energy_csv(self.input).load()?;
                println!("{}", tables::net_table(&store));
            }
            InspectKind::Reservations => {
                let store: RecordStore<Reservation> =
                    Source::reservation_file(self.input).load()?;
                println!("{}", tables::reservation_table(&store));
            }
        }
        Ok(())
    }
}
