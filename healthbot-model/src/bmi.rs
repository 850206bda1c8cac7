use std::fmt;

use strum::{Display, EnumIter};

use crate::profile::UserProfile;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BmiCategory {
    Underweight,
    #[strum(serialize = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Orange,
    Red,
}

impl BmiCategory {
    pub fn from_value(value: f64) -> Self {
        if value < 18.5 {
            BmiCategory::Underweight
        } else if value < 25.0 {
            BmiCategory::NormalWeight
        } else if value < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            BmiCategory::Underweight => ColorTag::Blue,
            BmiCategory::NormalWeight => ColorTag::Green,
            BmiCategory::Overweight => ColorTag::Orange,
            BmiCategory::Obese => ColorTag::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    value: f64,
    category: BmiCategory,
}

impl BmiResult {
    pub fn from_profile(profile: &UserProfile) -> Result<Self> {
        calculate(profile.height_cm() as f64, profile.weight_kg() as f64)
    }

    /// BMI rounded to two decimal places.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn category(&self) -> BmiCategory {
        self.category
    }
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ({})", self.value, self.category)
    }
}

/// Rounds half away from zero, so 22.485 becomes 22.49.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// weight / height², with height given in centimetres.
pub fn calculate(height_cm: f64, weight_kg: f64) -> Result<BmiResult> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "height must be positive, got {}",
            height_cm
        )));
    }
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(Error::InvalidInput(format!(
            "weight must not be negative, got {}",
            weight_kg
        )));
    }

    let height_m = height_cm / 100.0;
    let value = round_to_hundredths(weight_kg / (height_m * height_m));
    Ok(BmiResult {
        value,
        category: BmiCategory::from_value(value),
    })
}
