use healthbot_artifacts::{Config, Fetcher, ModelArtifacts};
use healthbot_model::{bmi::BmiResult, profile::UserProfile, Result};
use log::{debug, info};

use crate::{
    features::FeatureEncoder,
    predictor::{Predictor, Recommendation},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub bmi: BmiResult,
    pub recommendation: Recommendation,
}

/// Runs a profile through BMI calculation, feature encoding and both models.
pub struct Advisor {
    predictor: Predictor,
}

impl Advisor {
    pub fn new(artifacts: ModelArtifacts) -> Result<Self> {
        Ok(Self {
            predictor: Predictor::new(artifacts)?,
        })
    }

    /// Downloads whatever artifacts are missing, then loads them all.
    pub async fn start(config: &Config) -> Result<Self> {
        info!("Checking artifacts in {}", config.artifact_dir.display());
        Fetcher::new(config.source(), config.artifact_dir.clone())
            .ensure_all()
            .await?;
        Self::new(ModelArtifacts::load(&config.artifact_dir)?)
    }

    pub fn advise(&self, profile: &UserProfile) -> Result<Advice> {
        let bmi = BmiResult::from_profile(profile)?;
        info!("BMI {}", bmi);

        let features = FeatureEncoder::new(self.predictor.artifacts()).encode(profile, &bmi)?;
        debug!("Encoded features: {:?}", features);

        let recommendation = self.predictor.predict(&features)?;
        info!(
            "Recommended diet \"{}\", activity \"{}\"",
            recommendation.diet, recommendation.activity
        );

        Ok(Advice {
            bmi,
            recommendation,
        })
    }
}
