// file: src/report/mod.rs
// description: report rendering module exports and file output
// reference: internal module structure

pub mod html;
pub mod markdown;

pub use html::render_html;
pub use markdown::render_markdown;

use crate::error::{ForensicsError, Result};
use crate::models::Summary;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const MARKDOWN_FILE: &str = "report.md";
pub const HTML_FILE: &str = "report.html";

pub struct ReportWriter {
    reports_dir: PathBuf,
    top_n: usize,
}

impl ReportWriter {
    pub fn new(reports_dir: impl Into<PathBuf>, top_n: usize) -> Result<Self> {
        let reports_dir = reports_dir.into();
        fs::create_dir_all(&reports_dir).map_err(|e| ForensicsError::file(&reports_dir, e))?;
        Ok(Self { reports_dir, top_n })
    }

    pub fn write_markdown(&self, root: &str, summary: &Summary) -> Result<PathBuf> {
        let path = self.reports_dir.join(MARKDOWN_FILE);
        let content = render_markdown(root, summary, self.top_n);
        fs::write(&path, content).map_err(|e| ForensicsError::file(&path, e))?;
        info!("Markdown report written to {}", path.display());
        Ok(path)
    }

    /// Converts an already written markdown report.
    ///
    /// Errors come back as `Render`; the markdown report stays valid either way.
    pub fn write_html(&self, markdown_path: &Path) -> Result<PathBuf> {
        let markdown = fs::read_to_string(markdown_path).map_err(|e| {
            ForensicsError::Render(format!("cannot read {}: {}", markdown_path.display(), e))
        })?;

        let path = self.reports_dir.join(HTML_FILE);
        fs::write(&path, render_html(&markdown)).map_err(|e| {
            ForensicsError::Render(format!("cannot write {}: {}", path.display(), e))
        })?;
        info!("HTML report written to {}", path.display());
        Ok(path)
    }
}
