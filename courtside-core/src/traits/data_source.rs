use crate::domain::Record;

/// Errors a data source can signal.
///
/// Failure is distinct from an empty collection so a view can render an
/// error state instead of a false "zero records" state.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DataSourceError {
    #[error("Data source unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Supplies the initial ordered sequence of records for one view session.
pub trait DataSource<R: Record> {
    fn fetch(&self) -> Result<Vec<R>, DataSourceError>;
}
