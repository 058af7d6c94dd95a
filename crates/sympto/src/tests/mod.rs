use libsympto::prelude::*;

use crate::api::{AppState, config::Config};

mod api;

pub fn sample_dataset() -> Dataset {
  Dataset::from_records(
    vec![
      SymptomRecord::builder("Common Cold").symptoms(&["runny nose", "sneezing", "sore throat", "mild cough"]).build(),
      SymptomRecord::builder("Influenza").symptoms(&["fever", "cough", "fatigue", "body aches"]).build(),
      SymptomRecord::builder("Angina").symptoms(&["chest pain", "shortness of breath", "fatigue", "dizziness"]).build(),
    ],
    vec![
      DescriptionRecord::new("Influenza", "en", "A viral infection of the airways."),
      DescriptionRecord::new("Influenza", "es", "Una infección vírica de las vías respiratorias."),
      DescriptionRecord::new("Angina", "en", "Chest pain caused by reduced blood flow to the heart."),
    ],
  )
}

pub fn app_state<C: Corrector>(dataset: Dataset, corrector: C) -> AppState<C> {
  AppState {
    config: Config::default(),
    prometheus: None,
    sympto: Sympto::new(dataset, corrector),
  }
}
