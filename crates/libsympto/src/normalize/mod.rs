pub(crate) mod corrector;
pub(crate) mod phrases;

use itertools::Itertools;

use crate::normalize::{corrector::Corrector, phrases::PhraseSet};

/// Clean a free-text value into its canonical matching form: ASCII-folded,
/// lower-cased, punctuation mapped to spaces and whitespace collapsed.
pub(crate) fn clean(value: &str) -> String {
  any_ascii::any_ascii(value)
    .to_lowercase()
    .chars()
    .map(|c| if c.is_alphanumeric() { c } else { ' ' })
    .collect::<String>()
    .split_whitespace()
    .join(" ")
}

/// Turn free-text symptoms into the canonical token list used for matching.
///
/// Words unknown to the corrector are kept as reported, multi-word symptoms
/// known to the reference table are appended as single tokens, and duplicates
/// are dropped while preserving first-occurrence order.
pub(crate) fn normalize<C: Corrector>(corrector: &C, phrases: &PhraseSet, input: &str) -> Vec<String> {
  let corrected = clean(input)
    .split_whitespace()
    .map(|word| corrector.correct(word).unwrap_or_else(|| word.to_string()))
    .join(" ");

  let mut tokens = corrected.split_whitespace().map(str::to_string).collect::<Vec<_>>();

  phrases::augment(phrases, &mut tokens);

  let tokens = tokens.into_iter().unique().collect::<Vec<_>>();

  tracing::debug!(tokens = tokens.len(), "normalized reported symptoms");

  tokens
}
