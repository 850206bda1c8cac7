use healthbot_artifacts::{LabelEncoder, ModelArtifacts};
use healthbot_model::{bmi::BmiResult, profile::UserProfile, Result};

/// Column order both classifiers were trained on.
pub const FEATURE_COLUMNS: [&str; 5] = [
    "Age",
    "BMI",
    "ActivityLevel_enc",
    "SleepHours",
    "DietType_enc",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedFeatureVector {
    pub age: u32,
    pub bmi: f64,
    pub activity_code: usize,
    pub sleep_hours: u32,
    pub diet_code: usize,
}

impl EncodedFeatureVector {
    /// Values laid out in `FEATURE_COLUMNS` order.
    pub fn to_row(&self) -> [f64; 5] {
        [
            self.age as f64,
            self.bmi,
            self.activity_code as f64,
            self.sleep_hours as f64,
            self.diet_code as f64,
        ]
    }
}

pub struct FeatureEncoder<'a> {
    activity: &'a LabelEncoder,
    diet: &'a LabelEncoder,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(artifacts: &'a ModelArtifacts) -> Self {
        Self {
            activity: &artifacts.activity_encoder,
            diet: &artifacts.diet_encoder,
        }
    }

    pub fn encode_activity(&self, activity_level: &str) -> Result<usize> {
        self.activity.encode(activity_level)
    }

    pub fn encode_diet(&self, diet_type: &str) -> Result<usize> {
        self.diet.encode(diet_type)
    }

    pub fn encode(&self, profile: &UserProfile, bmi: &BmiResult) -> Result<EncodedFeatureVector> {
        Ok(EncodedFeatureVector {
            age: profile.age(),
            bmi: bmi.value(),
            activity_code: self.encode_activity(&profile.activity_level().to_string())?,
            sleep_hours: profile.sleep_hours(),
            diet_code: self.encode_diet(&profile.diet_type().to_string())?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use healthbot_artifacts::MockClassifier;
    use healthbot_model::{
        profile::{ActivityLevel, DietType},
        Error,
    };
    use strum::IntoEnumIterator;

    use super::*;

    fn encoder(name: &str, classes: &[&str]) -> LabelEncoder {
        LabelEncoder::new(name, classes.iter().map(|c| c.to_string()).collect()).unwrap()
    }

    pub(crate) fn artifacts_with(
        diet_model: MockClassifier,
        activity_model: MockClassifier,
    ) -> ModelArtifacts {
        ModelArtifacts {
            diet_model: Box::new(diet_model),
            activity_model: Box::new(activity_model),
            activity_encoder: encoder("le_activity", &["High", "Low", "Moderate"]),
            diet_encoder: encoder("le_diet", &["Mixed", "Non-Vegetarian", "Vegan", "Vegetarian"]),
            diet_labels: encoder("le_rec_diet", &["Balanced Diet", "Low-Carb Diet"]),
            activity_labels: encoder("le_rec_activity", &["Moderate Cardio", "Yoga"]),
        }
    }

    #[test]
    fn encodes_profile_in_column_order() {
        let artifacts = artifacts_with(MockClassifier::new(), MockClassifier::new());
        let profile = UserProfile::new(
            25,
            170,
            65,
            ActivityLevel::Moderate,
            DietType::NonVegetarian,
            7,
        )
        .unwrap();
        let bmi = BmiResult::from_profile(&profile).unwrap();

        let vector = FeatureEncoder::new(&artifacts).encode(&profile, &bmi).unwrap();

        assert_eq!(
            vector,
            EncodedFeatureVector {
                age: 25,
                bmi: 22.49,
                activity_code: 2,
                sleep_hours: 7,
                diet_code: 1,
            }
        );
        assert_eq!(vector.to_row(), [25.0, 22.49, 2.0, 7.0, 1.0]);
    }

    #[test]
    fn every_form_option_is_in_the_vocabulary() {
        let artifacts = artifacts_with(MockClassifier::new(), MockClassifier::new());
        let encoder = FeatureEncoder::new(&artifacts);

        for activity in ActivityLevel::iter() {
            let code = encoder.encode_activity(&activity.to_string()).unwrap();
            assert_eq!(
                artifacts.activity_encoder.decode(code).unwrap(),
                activity.to_string()
            );
        }
        for diet in DietType::iter() {
            let code = encoder.encode_diet(&diet.to_string()).unwrap();
            assert_eq!(artifacts.diet_encoder.decode(code).unwrap(), diet.to_string());
        }
    }

    #[test]
    fn unknown_diet_is_rejected() {
        let artifacts = artifacts_with(MockClassifier::new(), MockClassifier::new());
        assert!(matches!(
            FeatureEncoder::new(&artifacts).encode_diet("Keto"),
            Err(Error::UnknownCategory { .. })
        ));
    }

    #[test]
    fn vocabulary_drift_is_reported() {
        let mut artifacts = artifacts_with(MockClassifier::new(), MockClassifier::new());
        artifacts.diet_encoder = encoder("le_diet", &["Mixed", "Vegan", "Vegetarian"]);
        let profile =
            UserProfile::new(30, 180, 80, ActivityLevel::High, DietType::NonVegetarian, 8)
                .unwrap();
        let bmi = BmiResult::from_profile(&profile).unwrap();

        match FeatureEncoder::new(&artifacts).encode(&profile, &bmi) {
            Err(Error::UnknownCategory { encoder, value }) => {
                assert_eq!(encoder, "le_diet");
                assert_eq!(value, "Non-Vegetarian");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
