use std::{fs, path::Path};

use healthbot_model::{Error, Result};
use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::{
    artifact::Artifact,
    classifier::{Classifier, TreeEnsemble},
    encoder::{LabelEncoder, RawLabelEncoder},
};

/// Everything a prediction needs, loaded once at startup and read-only after.
pub struct ModelArtifacts {
    pub diet_model: Box<dyn Classifier>,
    pub activity_model: Box<dyn Classifier>,
    /// Activity level → feature code.
    pub activity_encoder: LabelEncoder,
    /// Diet type → feature code.
    pub diet_encoder: LabelEncoder,
    /// Diet model output → recommendation text.
    pub diet_labels: LabelEncoder,
    /// Activity model output → recommendation text.
    pub activity_labels: LabelEncoder,
}

fn unavailable(artifact: Artifact, reason: impl ToString) -> Error {
    Error::ArtifactUnavailable {
        artifact: artifact.file_name(),
        reason: reason.to_string(),
    }
}

fn read_ron<T: DeserializeOwned>(dir: &Path, artifact: Artifact) -> Result<T> {
    let path = dir.join(artifact.file_name());
    debug!("Loading {}", path.display());
    let contents = fs::read_to_string(&path).map_err(|e| unavailable(artifact, e))?;
    ron::from_str(&contents).map_err(|e| unavailable(artifact, e))
}

fn load_classifier(dir: &Path, artifact: Artifact) -> Result<Box<dyn Classifier>> {
    let model: TreeEnsemble = read_ron(dir, artifact)?;
    debug!(
        "{} expects features {:?}, predicts {} classes",
        artifact,
        model.feature_names(),
        model.n_classes()
    );
    Ok(Box::new(model))
}

fn load_encoder(dir: &Path, artifact: Artifact) -> Result<LabelEncoder> {
    let raw: RawLabelEncoder = read_ron(dir, artifact)?;
    let encoder =
        LabelEncoder::new(artifact.to_string(), raw.classes).map_err(|e| unavailable(artifact, e))?;
    debug!("{} classes: {:?}", artifact, encoder.classes());
    Ok(encoder)
}

impl ModelArtifacts {
    pub fn load(dir: &Path) -> Result<Self> {
        info!("Loading model artifacts from {}", dir.display());
        let artifacts = Self {
            diet_model: load_classifier(dir, Artifact::DietModel)?,
            activity_model: load_classifier(dir, Artifact::ActivityModel)?,
            activity_encoder: load_encoder(dir, Artifact::LeActivity)?,
            diet_encoder: load_encoder(dir, Artifact::LeDiet)?,
            diet_labels: load_encoder(dir, Artifact::LeRecDiet)?,
            activity_labels: load_encoder(dir, Artifact::LeRecActivity)?,
        };
        info!("Model artifacts loaded");
        Ok(artifacts)
    }
}
