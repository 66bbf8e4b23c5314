use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Corpus list must not be empty.")]
    EmptyCorpora,
    #[error("Request map must not be empty.")]
    EmptyRequests,
    #[error("Config name must not be empty.")]
    EmptyConfigName,
    #[error("Endpoint name must not be empty.")]
    EmptySelector,
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
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
