#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod aggregate;
mod cli;
mod config;
mod error;
mod fmt;
mod prelude;
mod quantity;
mod record;
mod report;
mod sink;
mod store;
mod tables;

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    Args::parse().command.run()
}
