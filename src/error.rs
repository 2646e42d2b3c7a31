use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by the csv store and the chart renderer.
/// A failed load never returns a partial series.
#[derive(Debug, Error)]
pub enum VoltError {
    #[error("csv file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("malformed row at {}:{line}: {row}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        row: String,
    },
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render chart: {0}")]
    Plot(String),
}

impl VoltError {
    pub fn io(path: &Path, source: std::io::Error) -> VoltError {
        VoltError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for VoltError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        VoltError::Plot(value.to_string())
    }
}
