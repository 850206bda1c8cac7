use healthbot_artifacts::{Classifier, LabelEncoder, ModelArtifacts};
use healthbot_model::{Error, Result};
use log::debug;

use crate::features::{EncodedFeatureVector, FEATURE_COLUMNS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub diet: String,
    pub activity: String,
}

/// Owns the loaded artifacts once their column layout has been checked.
pub struct Predictor {
    artifacts: ModelArtifacts,
}

fn check_columns(name: &str, model: &dyn Classifier) -> Result<()> {
    let expected = model.feature_names();
    if expected != FEATURE_COLUMNS {
        return Err(Error::PredictionError(format!(
            "{} expects columns {:?}, encoder produces {:?}",
            name, expected, FEATURE_COLUMNS
        )));
    }
    Ok(())
}

fn predict_label(
    model: &dyn Classifier,
    labels: &LabelEncoder,
    row: &[f64],
) -> Result<String> {
    let code = model.predict(row)?;
    debug!("{} predicted class {}", labels.name(), code);
    labels.decode(code).map(str::to_owned)
}

impl Predictor {
    /// Fails if either model was trained on a different column layout.
    pub fn new(artifacts: ModelArtifacts) -> Result<Self> {
        check_columns("diet model", artifacts.diet_model.as_ref())?;
        check_columns("activity model", artifacts.activity_model.as_ref())?;
        Ok(Self { artifacts })
    }

    pub fn artifacts(&self) -> &ModelArtifacts {
        &self.artifacts
    }

    pub fn predict(&self, features: &EncodedFeatureVector) -> Result<Recommendation> {
        let row = features.to_row();
        Ok(Recommendation {
            diet: predict_label(
                self.artifacts.diet_model.as_ref(),
                &self.artifacts.diet_labels,
                &row,
            )?,
            activity: predict_label(
                self.artifacts.activity_model.as_ref(),
                &self.artifacts.activity_labels,
                &row,
            )?,
        })
    }
}
