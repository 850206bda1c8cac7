pub mod advisor;
pub mod features;
pub mod form;
pub mod predictor;

pub use advisor::{Advice, Advisor};
pub use features::{EncodedFeatureVector, FeatureEncoder, FEATURE_COLUMNS};
pub use predictor::{Predictor, Recommendation};
