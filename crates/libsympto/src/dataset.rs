use std::{
  fs::File,
  io::{Cursor, Read},
  path::Path,
};

use csv::{ReaderBuilder, StringRecord};
use rust_embed::Embed;

use crate::{
  error::SymptoError,
  model::{DescriptionRecord, SYMPTOM_SLOTS, SymptomRecord},
  normalize::phrases::{self, PhraseSet},
};

#[derive(Embed)]
#[folder = "../../assets/data"]
struct ReferenceData;

/// The reference tables the service answers from, loaded once at startup.
///
/// Row order is preserved from the source files, the matcher depends on it to
/// break ties between diseases.
#[derive(Clone, Debug)]
pub struct Dataset {
  symptoms: Vec<SymptomRecord>,
  descriptions: Vec<DescriptionRecord>,
  phrases: PhraseSet,
}

impl Dataset {
  /// Load the reference tables, from the given paths when set, from the
  /// bundled tables otherwise. Fails when a table cannot be read or the
  /// symptom table contains no usable row.
  pub fn load(symptoms: Option<&Path>, descriptions: Option<&Path>) -> Result<Dataset, SymptoError> {
    let dataset = Dataset::from_readers(open(symptoms, "symptoms.csv")?, open(descriptions, "descriptions.csv")?)?;

    if dataset.symptoms.is_empty() {
      return Err(SymptoError::DatasetError("symptom table contains no usable rows".to_string()));
    }
    if dataset.descriptions.is_empty() {
      tracing::warn!("description table contains no usable rows");
    }

    tracing::info!(
      diseases = dataset.symptoms.len(),
      descriptions = dataset.descriptions.len(),
      phrases = dataset.phrases.len(),
      "loaded reference dataset"
    );

    Ok(dataset)
  }

  /// Load the bundled reference tables.
  pub fn embedded() -> Result<Dataset, SymptoError> {
    Self::load(None, None)
  }

  /// Build a dataset from already constructed records.
  pub fn from_records(symptoms: Vec<SymptomRecord>, descriptions: Vec<DescriptionRecord>) -> Dataset {
    let phrases = phrases::extract(&symptoms);

    Dataset { symptoms, descriptions, phrases }
  }

  pub(crate) fn from_readers(symptoms: impl Read, descriptions: impl Read) -> Result<Dataset, SymptoError> {
    Ok(Dataset::from_records(parse_symptoms(symptoms)?, parse_descriptions(descriptions)?))
  }

  pub fn symptoms(&self) -> &[SymptomRecord] {
    &self.symptoms
  }

  pub fn descriptions(&self) -> &[DescriptionRecord] {
    &self.descriptions
  }

  pub fn is_empty(&self) -> bool {
    self.symptoms.is_empty()
  }

  /// Find a disease of the symptom table by name, case-insensitively.
  pub fn disease(&self, name: &str) -> Option<&SymptomRecord> {
    self.symptoms.iter().find(|record| record.disease.eq_ignore_ascii_case(name))
  }

  /// Every single word appearing in the symptom table, in canonical form.
  pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
    self
      .symptoms
      .iter()
      .flat_map(|record| record.symptom_set().iter())
      .flat_map(|symptom| symptom.split_whitespace())
  }

  pub(crate) fn phrases(&self) -> &PhraseSet {
    &self.phrases
  }
}

fn open(path: Option<&Path>, bundled: &str) -> Result<Box<dyn Read>, SymptoError> {
  match path {
    Some(path) => Ok(Box::new(File::open(path)?)),

    None => {
      let file = ReferenceData::get(bundled).ok_or_else(|| SymptoError::DatasetError(format!("missing bundled table {bundled}")))?;

      Ok(Box::new(Cursor::new(file.data)))
    }
  }
}

fn parse_symptoms(reader: impl Read) -> Result<Vec<SymptomRecord>, SymptoError> {
  let mut records = Vec::new();
  let mut skipped = 0;

  for row in ReaderBuilder::new().flexible(true).from_reader(reader).records() {
    let Some(row) = usable(row, &mut skipped)? else {
      continue;
    };

    let Some(disease) = field(&row, 0) else {
      skipped += 1;
      continue;
    };

    let mut slots: [Option<String>; SYMPTOM_SLOTS] = Default::default();

    for (index, slot) in slots.iter_mut().enumerate() {
      *slot = field(&row, index + 1).map(str::to_string);
    }

    records.push(SymptomRecord::new(disease.to_string(), slots));
  }

  if skipped > 0 {
    tracing::warn!(skipped, "skipped unusable symptom rows");
  }

  Ok(records)
}

fn parse_descriptions(reader: impl Read) -> Result<Vec<DescriptionRecord>, SymptoError> {
  let mut records = Vec::new();
  let mut skipped = 0;

  for row in ReaderBuilder::new().flexible(true).from_reader(reader).records() {
    let Some(row) = usable(row, &mut skipped)? else {
      continue;
    };

    match (field(&row, 0), field(&row, 1), field(&row, 2)) {
      (Some(disease), Some(language), Some(description)) => records.push(DescriptionRecord::new(disease, language, description)),
      _ => skipped += 1,
    }
  }

  if skipped > 0 {
    tracing::warn!(skipped, "skipped unusable description rows");
  }

  Ok(records)
}

// Rows the parser cannot make sense of are skipped, I/O errors abort the load.
fn usable(row: Result<StringRecord, csv::Error>, skipped: &mut usize) -> Result<Option<StringRecord>, SymptoError> {
  match row {
    Ok(row) => Ok(Some(row)),
    Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => Err(err.into()),

    Err(err) => {
      tracing::debug!(error = err.to_string(), "skipping unparseable row");
      *skipped += 1;

      Ok(None)
    }
  }
}

fn field<'r>(row: &'r StringRecord, index: usize) -> Option<&'r str> {
  row.get(index).map(str::trim).filter(|value| !value.is_empty())
}
