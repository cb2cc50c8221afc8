use tokio::task::JoinError;

/// Failures surfaced by table operations.
///
/// Mutations never fail; only the asynchronous lookup and query paths can.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("operation cancelled")]
    Cancelled,
    #[error("source does not support asynchronous queries")]
    AsyncQueryUnsupported,
    #[error("lookup task failed")]
    Task(#[from] JoinError),
}

impl TableError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cancelled => "CANCELLED",
            Self::AsyncQueryUnsupported => "ASYNC_QUERY_UNSUPPORTED",
            Self::Task(_) => "TASK",
        }
    }
}
