mod dataset;
mod error;
mod matching;
mod model;
mod normalize;
mod resolver;
mod sympto;

pub fn init() {
  let _ = *crate::resolver::MESSAGES;
}

pub mod prelude {
  pub use crate::dataset::Dataset;
  pub use crate::error::SymptoError;
  pub use crate::model::{DescriptionRecord, Diagnosis, SymptomRecord};
  pub use crate::normalize::corrector::{Corrector, DictionaryCorrector, Passthrough};
  pub use crate::sympto::Sympto;
}
