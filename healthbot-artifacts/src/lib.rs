pub mod artifact;
pub mod classifier;
pub mod config;
pub mod encoder;
pub mod fetcher;
pub mod loader;
pub mod source;

pub use artifact::Artifact;
pub use classifier::{Classifier, MockClassifier, TreeEnsemble};
pub use config::Config;
pub use encoder::LabelEncoder;
pub use fetcher::{FetchReport, Fetcher};
pub use loader::ModelArtifacts;
pub use source::{ArtifactSource, MockArtifactSource};
