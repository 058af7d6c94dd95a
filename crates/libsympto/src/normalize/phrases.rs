use std::collections::HashSet;

use ahash::RandomState;

use crate::model::SymptomRecord;

/// Multi-word symptoms known to the reference table, in canonical form.
pub(crate) type PhraseSet = HashSet<String, RandomState>;

/// Window sizes scanned for known multi-word symptoms.
const WINDOW_SIZES: [usize; 2] = [2, 3];

/// Collect every multi-word symptom of the reference table.
pub(crate) fn extract(records: &[SymptomRecord]) -> PhraseSet {
  records
    .iter()
    .flat_map(|record| record.symptom_set().iter())
    .filter(|symptom| symptom.contains(' '))
    .cloned()
    .collect()
}

/// Append every known phrase found in `tokens` through a sliding window scan.
///
/// Windows are only formed over the tokens present on entry, an appended
/// phrase can never seed another window.
pub(crate) fn augment(phrases: &PhraseSet, tokens: &mut Vec<String>) {
  let mut found = Vec::new();

  for size in WINDOW_SIZES {
    for window in tokens.windows(size) {
      let phrase = window.join(" ");

      if phrases.contains(&phrase) {
        found.push(phrase);
      }
    }
  }

  tokens.extend(found);
}
