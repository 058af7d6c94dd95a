use std::collections::HashSet;

use ahash::RandomState;
use bon::bon;
use serde::Serialize;

use crate::normalize;

pub const SYMPTOM_SLOTS: usize = 4;

/// A single row of the symptom table: a disease and up to four symptoms
/// characterizing it.
#[derive(Clone, Debug)]
pub struct SymptomRecord {
  pub disease: String,
  pub symptoms: [Option<String>; SYMPTOM_SLOTS],

  // Precomputed at load time so the table scan does not re-clean every slot
  // on every request.
  symptom_set: HashSet<String, RandomState>,
}

impl SymptomRecord {
  pub(crate) fn new(disease: String, symptoms: [Option<String>; SYMPTOM_SLOTS]) -> SymptomRecord {
    let symptom_set = symptoms.iter().flatten().map(|slot| normalize::clean(slot)).filter(|slot| !slot.is_empty()).collect();

    SymptomRecord { disease, symptoms, symptom_set }
  }

  /// The canonical (cleaned, lower-cased) forms of this record's symptoms.
  pub fn symptom_set(&self) -> &HashSet<String, RandomState> {
    &self.symptom_set
  }
}

#[bon]
impl SymptomRecord {
  #[builder]
  pub fn builder(#[builder(start_fn)] disease: &str, symptoms: &[&str]) -> SymptomRecord {
    let mut slots: [Option<String>; SYMPTOM_SLOTS] = Default::default();

    for (slot, symptom) in slots.iter_mut().zip(symptoms) {
      *slot = Some(symptom.to_string());
    }

    SymptomRecord::new(disease.to_string(), slots)
  }
}

/// A description of a disease in a single language.
#[derive(Clone, Debug)]
pub struct DescriptionRecord {
  pub disease: String,
  pub language: String,
  pub description: String,
}

impl DescriptionRecord {
  pub fn new(disease: &str, language: &str, description: &str) -> DescriptionRecord {
    DescriptionRecord {
      disease: disease.to_string(),
      language: language.to_string(),
      description: description.to_string(),
    }
  }
}

/// The outcome of analyzing a set of reported symptoms.
///
/// When no disease could be identified, `disease` is absent and the
/// description carries a localized advisory message instead.
#[derive(Clone, Debug, Serialize)]
pub struct Diagnosis {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disease: Option<String>,
  pub description: String,
  pub language: String,
}
