//! # Hotel Analytics Dashboard
//!
//! Loads a record snapshot, runs occupancy, revenue and booking-pattern
//! analytics, and renders the results as a report plus optional chart
//! series.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod output;

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hotel_analytics::charts::{self, ChartRenderer};
use hotel_analytics::{AnalyticsEngine, DashboardReport, JsonPrinter, MarkdownPrinter, ReportPrinter};
use hotel_store::InMemoryRecordStore;

pub use config::{Args, Config, OutputFormat};
pub use output::JsonChartRenderer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the global tracing subscriber; logs go to stderr.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Render every non-empty chart of the report.
pub fn render_charts<R: ChartRenderer>(renderer: &R, report: &DashboardReport) -> Result<usize, R::Error> {
    let charts = [
        ("occupancy", charts::occupancy_trend(&report.occupancy)),
        (
            "revenue",
            charts::monthly_revenue(report.revenue.year, &report.revenue.monthly),
        ),
        ("booking patterns", charts::booking_patterns(&report.weekday_patterns)),
    ];

    let mut rendered = 0;
    for (section, chart) in charts {
        match chart {
            Some(chart) => {
                renderer.render(&chart)?;
                rendered += 1;
            }
            None => warn!(section, "No data available, chart skipped"),
        }
    }
    Ok(rendered)
}

/// Run the dashboard and return the rendered report.
pub async fn run(config: &Config) -> anyhow::Result<String> {
    info!(
        snapshot = %config.snapshot_path.display(),
        year = config.year,
        start = %config.occupancy_range.start(),
        end = %config.occupancy_range.end(),
        "Generating analytics dashboard"
    );

    let store = InMemoryRecordStore::from_path(&config.snapshot_path)
        .with_context(|| format!("failed to load snapshot {}", config.snapshot_path.display()))?;
    let engine = AnalyticsEngine::new(Arc::new(store));

    let report = engine
        .dashboard(config.occupancy_range, config.year)
        .await
        .context("analytics failed")?;

    if let Some(dir) = &config.charts_dir {
        let renderer = JsonChartRenderer::new(dir)
            .with_context(|| format!("failed to create charts directory {}", dir.display()))?;
        let count = render_charts(&renderer, &report).context("failed to write charts")?;
        info!(count, dir = %dir.display(), "Charts written");
    }

    let rendered = match config.format {
        OutputFormat::Markdown => MarkdownPrinter.print(&report)?,
        OutputFormat::Json => JsonPrinter.print(&report)?,
    };

    info!("All reports generated successfully");
    Ok(rendered)
}
