use std::{collections::HashMap, sync::LazyLock};

use ahash::RandomState;
use rust_embed::Embed;
use serde::Deserialize;

use crate::dataset::Dataset;

#[derive(Embed)]
#[folder = "../../assets/i18n"]
struct Messages;

pub(crate) const DEFAULT_LANGUAGE: &str = "en";

pub(crate) static MESSAGES: LazyLock<MessageTable> = LazyLock::new(|| {
  let file = Messages::get("messages.yml").expect("could not read fallback messages");
  let table = serde_yaml::from_slice::<MessageTable>(&file.data).expect("could not unmarshal fallback messages");

  assert!(
    table.no_match.contains_key(DEFAULT_LANGUAGE) && table.no_description.contains_key(DEFAULT_LANGUAGE),
    "fallback messages must cover English"
  );

  table
});

#[derive(Deserialize)]
pub(crate) struct MessageTable {
  #[serde(rename = "NO_MATCH")]
  no_match: HashMap<String, String, RandomState>,
  #[serde(rename = "NO_DESCRIPTION")]
  no_description: HashMap<String, String, RandomState>,
}

/// Find the description of `disease` in `language`. Disease names are
/// compared case-insensitively, language codes must match exactly.
pub(crate) fn describe<'d>(dataset: &'d Dataset, disease: &str, language: &str) -> Option<&'d str> {
  dataset
    .descriptions()
    .iter()
    .find(|record| record.disease.eq_ignore_ascii_case(disease) && record.language == language)
    .map(|record| record.description.as_str())
}

/// The message served when no disease could be identified.
pub(crate) fn no_match_message(language: &str) -> &'static str {
  lookup(&MESSAGES.no_match, language)
}

/// The message served when a disease has no description in the requested
/// language.
pub(crate) fn no_description_message(language: &str) -> &'static str {
  lookup(&MESSAGES.no_description, language)
}

fn lookup(table: &'static HashMap<String, String, RandomState>, language: &str) -> &'static str {
  table
    .get(language)
    .or_else(|| table.get(DEFAULT_LANGUAGE))
    .map(String::as_str)
    .expect("fallback messages do not cover English")
}
