use healthbot_model::{Error, Result};
use serde::Deserialize;

/// A trained model mapping one feature row to a class code.
#[mockall::automock]
pub trait Classifier: Send + Sync {
    /// Column names, in the order the model expects its features.
    fn feature_names(&self) -> Vec<String>;
    fn predict(&self, features: &[f64]) -> Result<usize>;
}

#[derive(Debug, Clone, Deserialize)]
pub enum Node {
    /// Go to `left` when `features[feature] <= threshold`, otherwise to `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

/// A decision tree stored as a flat node list rooted at index 0. Children
/// always come after their parent, so evaluation cannot loop.
#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> std::result::Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_owned());
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    left,
                    right,
                    threshold,
                } => {
                    if feature >= n_features {
                        return Err(format!("node {} splits on unknown feature {}", index, feature));
                    }
                    if threshold.is_nan() {
                        return Err(format!("node {} has a NaN threshold", index));
                    }
                    for child in [left, right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(format!("node {} has invalid child {}", index, child));
                        }
                    }
                }
                Node::Leaf { class } => {
                    if class >= n_classes {
                        return Err(format!("leaf {} has unknown class {}", index, class));
                    }
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, features: &[f64]) -> usize {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => index = if features[feature] <= threshold { left } else { right },
                Node::Leaf { class } => return class,
            }
        }
    }
}

/// Majority vote over one or more decision trees; ties go to the lowest class code.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawTreeEnsemble")]
pub struct TreeEnsemble {
    feature_names: Vec<String>,
    n_classes: usize,
    trees: Vec<Tree>,
}

#[derive(Deserialize)]
struct RawTreeEnsemble {
    feature_names: Vec<String>,
    n_classes: usize,
    trees: Vec<Tree>,
}

impl TryFrom<RawTreeEnsemble> for TreeEnsemble {
    type Error = String;

    fn try_from(raw: RawTreeEnsemble) -> std::result::Result<Self, Self::Error> {
        TreeEnsemble::new(raw.feature_names, raw.n_classes, raw.trees)
    }
}

impl TreeEnsemble {
    pub fn new(
        feature_names: Vec<String>,
        n_classes: usize,
        trees: Vec<Tree>,
    ) -> std::result::Result<Self, String> {
        if feature_names.is_empty() {
            return Err("model declares no features".to_owned());
        }
        if n_classes == 0 {
            return Err("model declares no classes".to_owned());
        }
        if trees.is_empty() {
            return Err("model has no trees".to_owned());
        }
        for (i, tree) in trees.iter().enumerate() {
            tree.validate(feature_names.len(), n_classes)
                .map_err(|e| format!("tree {}: {}", i, e))?;
        }

        Ok(Self {
            feature_names,
            n_classes,
            trees,
        })
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }
}

impl Classifier for TreeEnsemble {
    fn feature_names(&self) -> Vec<String> {
        self.feature_names.clone()
    }

    fn predict(&self, features: &[f64]) -> Result<usize> {
        if features.len() != self.feature_names.len() {
            return Err(Error::PredictionError(format!(
                "model expects {} features, got {}",
                self.feature_names.len(),
                features.len()
            )));
        }

        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            votes[tree.evaluate(features)] += 1;
        }

        let (class, _) = votes
            .iter()
            .enumerate()
            .fold((0, 0), |(best, best_votes), (class, &count)| {
                if count > best_votes {
                    (class, count)
                } else {
                    (best, best_votes)
                }
            });
        Ok(class)
    }
}
