use std::sync::Arc;

use crate::{
  dataset::Dataset,
  matching,
  model::{Diagnosis, SymptomRecord},
  normalize::{self, corrector::Corrector},
  resolver,
};

/// The main entrypoint for symptom analysis.
///
/// `Sympto` owns the reference dataset and a spelling [`Corrector`], and
/// turns free-text symptoms into a [`Diagnosis`]. The dataset is immutable
/// once loaded, so an instance is cheap to clone and safe to share across
/// threads.
///
/// # Examples
///
/// ```rust
/// use libsympto::prelude::*;
///
/// let dataset = Dataset::from_records(
///   vec![SymptomRecord::builder("Flu").symptoms(&["fever", "cough", "fatigue", "sore throat"]).build()],
///   vec![DescriptionRecord::new("Flu", "en", "A viral infection of the airways.")],
/// );
///
/// let sympto = Sympto::new(dataset, Passthrough);
/// let diagnosis = sympto.analyze(&["fever".to_string(), "cough".to_string(), "fatigue".to_string()], "en");
///
/// assert_eq!(diagnosis.disease.as_deref(), Some("Flu"));
/// ```
#[derive(Clone, Debug)]
pub struct Sympto<C: Corrector> {
  dataset: Arc<Dataset>,
  corrector: C,
}

impl<C: Corrector> Sympto<C> {
  /// Wrap a loaded dataset and a corrector into an analysis context.
  pub fn new(dataset: Dataset, corrector: C) -> Sympto<C> {
    crate::init();

    Sympto {
      dataset: Arc::new(dataset),
      corrector,
    }
  }

  pub fn dataset(&self) -> &Dataset {
    &self.dataset
  }

  /// Normalize free-text symptoms into the canonical token list used for
  /// matching: cleaned, spell-corrected, augmented with the multi-word
  /// symptoms of the reference table, and deduplicated in order.
  pub fn normalize(&self, input: &str) -> Vec<String> {
    normalize::normalize(&self.corrector, self.dataset.phrases(), input)
  }

  /// Return the first disease of the table sharing at least three distinct
  /// symptoms with the given, already normalized, list.
  pub fn match_disease(&self, symptoms: &[String]) -> Option<&SymptomRecord> {
    matching::find_disease(&self.dataset, symptoms)
  }

  /// Return the description of a disease in the given language, if the table
  /// carries one.
  pub fn describe(&self, disease: &str, language: &str) -> Option<&str> {
    resolver::describe(&self.dataset, disease, language)
  }

  /// Look a disease up by name and return its diagnosis, `None` when the
  /// disease is not part of the symptom table.
  pub fn lookup(&self, disease: &str, language: &str) -> Option<Diagnosis> {
    let record = self.dataset.disease(disease)?;

    Some(Diagnosis {
      disease: Some(record.disease.clone()),
      description: self.description_or_fallback(&record.disease, language),
      language: language.to_string(),
    })
  }

  /// Run the whole pipeline over raw reported symptoms: normalization, table
  /// matching and description resolution.
  pub fn analyze(&self, symptoms: &[String], language: &str) -> Diagnosis {
    let normalized = self.normalize(&symptoms.join(" "));

    match matching::find_disease(&self.dataset, &normalized) {
      Some(record) => Diagnosis {
        disease: Some(record.disease.clone()),
        description: self.description_or_fallback(&record.disease, language),
        language: language.to_string(),
      },

      None => Diagnosis {
        disease: None,
        description: resolver::no_match_message(language).to_string(),
        language: language.to_string(),
      },
    }
  }

  fn description_or_fallback(&self, disease: &str, language: &str) -> String {
    match resolver::describe(&self.dataset, disease, language) {
      Some(description) => description.to_string(),
      None => resolver::no_description_message(language).to_string(),
    }
  }
}
