use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use cwm_core::usecases;
use std::{fs, path::PathBuf};
use time::OffsetDateTime;

use crate::{
    adapters::csv::load_listings,
    config::Config,
    flows::{self, ReportSettings},
    gateways,
};

#[derive(Debug, Parser)]
#[command(name = "coworkmap", version, about = "Map and statistics of coworking spaces")]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Geocode all listings and write the HTML report
    Report {
        /// CSV file with the coworking spaces
        input: PathBuf,
        /// HTML file to write
        #[arg(long, short, default_value = "report.html")]
        output: PathBuf,
    },
    /// Print the details of all listings
    Details {
        /// CSV file with the coworking spaces
        input: PathBuf,
    },
    /// Resolve the position of a single address
    Geocode { address: String },
}

pub fn run(args: Args) -> Result<()> {
    let Args { config, command } = args;
    let cfg = Config::try_load_from_file_or_default(config.as_ref())?;
    match command {
        Command::Report { input, output } => {
            let listings = load_listings(&input, &cfg.input.sentinel, cfg.input.delimiter)
                .with_context(|| format!("Could not load listings from {}", input.display()))?;
            let gateway = gateways::geocoding_gateway(&cfg.geocoding)?;
            let settings = ReportSettings {
                title: &cfg.report.title,
                sentinel: &cfg.input.sentinel,
                map: cfg.report.map,
                retry: cfg.geocoding.retry,
            };
            let report = flows::build_report(
                &listings,
                &gateway,
                &settings,
                OffsetDateTime::now_utc(),
            );
            fs::write(&output, report.html)
                .with_context(|| format!("Could not write report to {}", output.display()))?;
            log::info!(
                "Wrote report with {} markers to {}",
                report.markers,
                output.display()
            );
            if !report.unresolved.is_empty() {
                print!("{}", cwm_report::text::unresolved_addresses(&report.unresolved)?);
            }
        }
        Command::Details { input } => {
            let listings = load_listings(&input, &cfg.input.sentinel, cfg.input.delimiter)
                .with_context(|| format!("Could not load listings from {}", input.display()))?;
            print!(
                "{}",
                cwm_report::text::listing_details(&listings, &cfg.input.sentinel)?
            );
        }
        Command::Geocode { address } => {
            let gateway = gateways::geocoding_gateway(&cfg.geocoding)?;
            match usecases::resolve_address(&gateway, &address, &cfg.geocoding.retry) {
                Some(pos) => println!("{pos}"),
                None => return Err(anyhow!("Could not resolve address '{address}'")),
            }
        }
    }
    Ok(())
}
