//! Report delivery: standard output, or a file when one is requested.

use std::{fs, path::Path};

use crate::prelude::*;

/// Write the rendered report to `path`, or print it when no path is given.
pub fn deliver(report: &str, path: Option<&Path>) -> Result {
    match path {
        Some(path) => {
            fs::write(path, report)
                .with_context(|| format!("failed to write the report to `{}`", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{report}"),
    }
    Ok(())
}
