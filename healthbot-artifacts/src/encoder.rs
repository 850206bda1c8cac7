use std::collections::HashMap;

use healthbot_model::{Error, Result};
use serde::Deserialize;

/// On-disk form of a label encoder: the class list, where a label's code is its index.
#[derive(Debug, Deserialize)]
pub(crate) struct RawLabelEncoder {
    pub classes: Vec<String>,
}

/// Bidirectional mapping between category labels and the integer codes a
/// model was trained with.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    name: String,
    classes: Vec<String>,
    codes: HashMap<String, usize>,
}

impl LabelEncoder {
    pub fn new(name: impl Into<String>, classes: Vec<String>) -> std::result::Result<Self, String> {
        if classes.is_empty() {
            return Err("encoder has no classes".to_owned());
        }

        let mut codes = HashMap::with_capacity(classes.len());
        for (code, label) in classes.iter().enumerate() {
            if codes.insert(label.clone(), code).is_some() {
                return Err(format!("duplicate class \"{}\"", label));
            }
        }

        Ok(Self {
            name: name.into(),
            classes,
            codes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn encode(&self, label: &str) -> Result<usize> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownCategory {
                encoder: self.name.clone(),
                value: label.to_owned(),
            })
    }

    pub fn decode(&self, code: usize) -> Result<&str> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| {
                Error::PredictionError(format!(
                    "class code {} is outside the {} labels of {}",
                    code,
                    self.classes.len(),
                    self.name
                ))
            })
    }
}
