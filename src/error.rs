#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Line too long: {length} > {max_length}")]
    LineTooLong { length: usize, max_length: usize },
}
