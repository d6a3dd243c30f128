use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Result channel closed after {received} of {expected} probe results.")]
    MissingResults { expected: usize, received: usize },
    #[error("Probe worker failed: {source}")]
    WorkerFailed {
        #[source]
        source: tokio::task::JoinError,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
