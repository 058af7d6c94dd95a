use std::{collections::HashSet, time::Instant};

use ahash::RandomState;
use metrics::histogram;
use tracing::instrument;

use crate::{dataset::Dataset, model::SymptomRecord};

/// Number of distinct symptoms a record must share with the input before its
/// disease is reported.
pub(crate) const MATCH_THRESHOLD: usize = 3;

/// Scan the symptom table in row order and return the first disease sharing
/// at least [`MATCH_THRESHOLD`] symptoms with the input.
#[instrument(name = "match_disease", skip_all)]
pub(crate) fn find_disease<'d>(dataset: &'d Dataset, symptoms: &[String]) -> Option<&'d SymptomRecord> {
  let then = Instant::now();
  let input = symptoms.iter().map(String::as_str).collect::<HashSet<&str, RandomState>>();

  let found = dataset.symptoms().iter().find(|record| {
    let overlap = record.symptom_set().iter().filter(|symptom| input.contains(symptom.as_str())).count();

    tracing::debug!(disease = record.disease, overlap, "scanned symptom record");

    overlap >= MATCH_THRESHOLD
  });

  histogram!("sympto_matching_latency_seconds").record(then.elapsed().as_secs_f64());

  found
}

#[cfg(test)]
mod tests {
  use super::find_disease;
  use crate::{dataset::Dataset, model::SymptomRecord};

  fn dataset() -> Dataset {
    Dataset::from_records(
      vec![
        SymptomRecord::builder("Common Cold").symptoms(&["runny nose", "sneezing", "sore throat", "mild cough"]).build(),
        SymptomRecord::builder("Flu").symptoms(&["fever", "cough", "fatigue", "sore throat"]).build(),
        SymptomRecord::builder("Pneumonia").symptoms(&["fever", "cough", "fatigue", "chest pain"]).build(),
      ],
      vec![],
    )
  }

  fn symptoms(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn requires_three_distinct_symptoms() {
    assert!(find_disease(&dataset(), &symptoms(&["fever", "cough"])).is_none());
    assert_eq!(
      find_disease(&dataset(), &symptoms(&["fever", "cough", "fatigue"])).map(|record| record.disease.as_str()),
      Some("Flu")
    );
  }

  #[test]
  fn first_qualifying_row_wins() {
    // Flu and Pneumonia both qualify, Flu comes first in the table.
    let dataset = dataset();
    let found = find_disease(&dataset, &symptoms(&["fever", "cough", "fatigue", "chest pain"]));

    assert_eq!(found.map(|record| record.disease.as_str()), Some("Flu"));
  }

  #[test]
  fn duplicated_input_symptoms_count_once() {
    assert!(find_disease(&dataset(), &symptoms(&["fever", "fever", "fever", "cough"])).is_none());
  }

  #[test]
  fn matches_mixed_case_table_entries() {
    let dataset = Dataset::from_records(vec![SymptomRecord::builder("Flu").symptoms(&["Fever", "COUGH", "Fatigue"]).build()], vec![]);

    assert!(find_disease(&dataset, &symptoms(&["fever", "cough", "fatigue"])).is_some());
  }

  #[test]
  fn empty_input_never_matches() {
    assert!(find_disease(&dataset(), &[]).is_none());
  }
}
