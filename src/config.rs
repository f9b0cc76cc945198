//! Batch job description for the summary command.

use std::{fs, path::PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::prelude::*;

/// One week's worth of readings to report on.
#[derive(Debug, Deserialize)]
pub struct WeekJob {
    /// ISO week number used in the report title.
    pub number: u32,

    /// Monday of the week, anchors the seven report rows.
    pub monday: NaiveDate,

    /// Phase readings file for the week.
    pub input: PathBuf,
}

/// Summary job: render a weekly report per listed week and concatenate
/// them into a single output file.
#[derive(Debug, Deserialize)]
pub struct SummaryJob {
    pub output: PathBuf,
    pub weeks: Vec<WeekJob>,
}

impl SummaryJob {
    pub fn read_from(path: &PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the job file `{}`", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse the job file `{}`", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_from() -> Result {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"
            output = "yhteenveto.txt"

            [[weeks]]
            number = 42
            monday = "2025-10-13"
            input = "viikko42.csv"

            [[weeks]]
            number = 43
            monday = "2025-10-20"
            input = "viikko43.csv"
            "#,
        )?;
        let job = SummaryJob::read_from(&file.path().to_path_buf())?;
        assert_eq!(job.output, PathBuf::from("yhteenveto.txt"));
        assert_eq!(job.weeks.len(), 2);
        assert_eq!(job.weeks[0].number, 42);
        assert_eq!(job.weeks[0].monday, NaiveDate::from_ymd_opt(2025, 10, 13).unwrap());
        assert_eq!(job.weeks[1].input, PathBuf::from("viikko43.csv"));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        assert!(SummaryJob::read_from(&PathBuf::from("/nonexistent/job.toml")).is_err());
    }
}
