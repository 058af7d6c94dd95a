use serde::Deserialize;
use serde_inline_default::serde_inline_default;
use validator::Validate;

#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct AnalyzePayload {
  #[serde(default)]
  #[validate(length(max = 64, message = "too many symptoms were provided"))]
  pub symptoms: Vec<String>,

  #[serde_inline_default(String::from("en"))]
  pub language: String,
}

impl AnalyzePayload {
  // Blank language codes fall back to the default instead of failing resolution
  pub fn language(&self) -> &str {
    match self.language.trim() {
      "" => "en",
      language => language,
    }
  }
}

#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct GetDiseaseParams {
  #[serde_inline_default(String::from("en"))]
  pub language: String,
}
