//! Chart output: each chart is written as a JSON document named after it.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::info;

use hotel_analytics::charts::{Chart, ChartRenderer};

/// Writes `<dir>/<chart name>.json` for every rendered chart.
#[derive(Debug, Clone)]
pub struct JsonChartRenderer {
    dir: PathBuf,
}

impl JsonChartRenderer {
    /// Create the renderer, creating `dir` if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    pub fn path_for(&self, chart: &Chart) -> PathBuf {
        self.dir.join(format!("{}.json", chart.name))
    }
}

impl ChartRenderer for JsonChartRenderer {
    type Error = std::io::Error;

    fn render(&self, chart: &Chart) -> Result<(), Self::Error> {
        let path = self.path_for(chart);
        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, chart)?;
        info!(path = %path.display(), "Chart series saved");
        Ok(())
    }
}
