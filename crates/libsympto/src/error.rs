#[derive(Debug, thiserror::Error)]
pub enum SymptoError {
  #[error("invalid dataset: {0}")]
  DatasetError(String),
  #[error("invalid dictionary: {0}")]
  DictionaryError(String),
  #[error(transparent)]
  CsvError(#[from] csv::Error),
  #[error(transparent)]
  IoError(#[from] std::io::Error),
}
