//! Hotel Analytics Dashboard CLI
//!
//! Prints the occupancy, revenue and booking-pattern report for a snapshot.

use anyhow::Result;
use clap::Parser;
use tracing::error;

use hotel_dashboard::{Args, Config, init_tracing, run};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_args(args, chrono::Local::now().date_naive())?;
    init_tracing(&config);

    match run(&config).await {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "Dashboard generation failed");
            Err(err)
        }
    }
}
