use std::{cmp::Reverse, collections::HashMap, path::Path, sync::Arc};

use ahash::RandomState;
use rust_embed::Embed;
use strsim::levenshtein;

use crate::error::SymptoError;

#[derive(Embed)]
#[folder = "../../assets/dictionary"]
struct Dictionaries;

/// Words shorter than this are never corrected, an edit there is more likely
/// to turn one valid word into another.
const MIN_WORD_LENGTH: usize = 4;

/// Frequency assigned to words learned from the reference table.
const LEARNED_FREQUENCY: u32 = 1;

/// A spelling capability applied to every reported word before matching.
pub trait Corrector: Clone + Send + Sync + 'static {
  /// Return the corrected form of `word`, or `None` when the word is already
  /// known or no plausible correction exists.
  fn correct(&self, word: &str) -> Option<String>;
}

/// Corrects reported words against a word frequency dictionary.
///
/// An unknown word is corrected to the dictionary entry with the smallest
/// edit distance within a length-scaled budget, the most frequent entry
/// winning ties. Known words are left untouched.
#[derive(Clone, Debug)]
pub struct DictionaryCorrector {
  words: Arc<HashMap<String, u32, RandomState>>,
}

impl DictionaryCorrector {
  /// Build a corrector from the bundled English dictionary.
  pub fn embedded() -> Result<DictionaryCorrector, SymptoError> {
    let file = Dictionaries::get("en.txt").ok_or_else(|| SymptoError::DictionaryError("missing bundled dictionary".to_string()))?;

    Self::parse(&file.data)
  }

  /// Build a corrector from a word frequency file, one `word count` pair per
  /// line. Lines starting with `#` are ignored, missing counts default to 1.
  pub fn from_path(path: &Path) -> Result<DictionaryCorrector, SymptoError> {
    Self::parse(&std::fs::read(path)?)
  }

  fn parse(data: &[u8]) -> Result<DictionaryCorrector, SymptoError> {
    let data = std::str::from_utf8(data).map_err(|_| SymptoError::DictionaryError("dictionary is not valid UTF-8".to_string()))?;
    let mut words: HashMap<String, u32, RandomState> = HashMap::default();

    for line in data.lines() {
      let line = line.trim();

      if line.is_empty() || line.starts_with('#') {
        continue;
      }

      let mut fields = line.split_whitespace();

      if let Some(word) = fields.next() {
        let frequency = fields.next().and_then(|count| count.parse().ok()).unwrap_or(1);

        words.insert(word.to_lowercase(), frequency);
      }
    }

    if words.is_empty() {
      return Err(SymptoError::DictionaryError("dictionary contains no words".to_string()));
    }

    Ok(DictionaryCorrector { words: Arc::new(words) })
  }

  /// Absorb extra vocabulary, usually the words making up the reference
  /// table's symptoms, so they are never corrected away.
  pub fn learn<'w>(self, words: impl IntoIterator<Item = &'w str>) -> DictionaryCorrector {
    let mut known = Arc::unwrap_or_clone(self.words);

    for word in words {
      known.entry(word.to_lowercase()).or_insert(LEARNED_FREQUENCY);
    }

    DictionaryCorrector { words: Arc::new(known) }
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  fn candidate(&self, word: &str) -> Option<&str> {
    let budget = max_edits(word.len());

    if budget == 0 {
      return None;
    }

    self
      .words
      .iter()
      .filter(|(known, _)| known.len().abs_diff(word.len()) <= budget)
      .filter_map(|(known, frequency)| {
        let distance = levenshtein(word, known);

        (distance <= budget).then_some((distance, Reverse(*frequency), known.as_str()))
      })
      .min()
      .map(|(_, _, known)| known)
  }
}

impl Corrector for DictionaryCorrector {
  fn correct(&self, word: &str) -> Option<String> {
    if word.len() < MIN_WORD_LENGTH || self.words.contains_key(word) {
      return None;
    }

    self.candidate(word).map(str::to_string)
  }
}

/// Edit budget scaled to word length, a fifth of its characters, capped at
/// two edits.
fn max_edits(length: usize) -> usize {
  2.min((length as f32 * 0.2).ceil() as usize)
}

/// A corrector that never corrects anything, used when no dictionary is
/// available or spelling correction is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl Corrector for Passthrough {
  fn correct(&self, _word: &str) -> Option<String> {
    None
  }
}
