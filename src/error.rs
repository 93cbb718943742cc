use thiserror::Error;

#[derive(Error, Debug)]
pub enum CounterError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Logging Error: {0}")]
    Logging(String),
}

pub type CounterResult<T> = Result<T, CounterError>;
