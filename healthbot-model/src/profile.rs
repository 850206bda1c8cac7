use std::ops::RangeInclusive;

use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result};

pub const AGE_RANGE: RangeInclusive<u32> = 10..=100;
pub const HEIGHT_CM_RANGE: RangeInclusive<u32> = 100..=220;
pub const WEIGHT_KG_RANGE: RangeInclusive<u32> = 30..=150;
pub const SLEEP_HOURS_RANGE: RangeInclusive<u32> = 3..=12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ActivityLevel {
    #[default]
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DietType {
    #[default]
    Vegetarian,
    #[strum(serialize = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
    Mixed,
}

/// A single form submission. Only constructible with every field in range.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    age: u32,
    height_cm: u32,
    weight_kg: u32,
    activity_level: ActivityLevel,
    diet_type: DietType,
    sleep_hours: u32,
}

fn check_range(name: &str, value: u32, range: &RangeInclusive<u32>) -> Result<u32> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format!(
            "{} must be between {} and {}, got {}",
            name,
            range.start(),
            range.end(),
            value
        )))
    }
}

impl UserProfile {
    pub fn new(
        age: u32,
        height_cm: u32,
        weight_kg: u32,
        activity_level: ActivityLevel,
        diet_type: DietType,
        sleep_hours: u32,
    ) -> Result<Self> {
        Ok(Self {
            age: check_range("age", age, &AGE_RANGE)?,
            height_cm: check_range("height", height_cm, &HEIGHT_CM_RANGE)?,
            weight_kg: check_range("weight", weight_kg, &WEIGHT_KG_RANGE)?,
            activity_level,
            diet_type,
            sleep_hours: check_range("sleep hours", sleep_hours, &SLEEP_HOURS_RANGE)?,
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn height_cm(&self) -> u32 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> u32 {
        self.weight_kg
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    pub fn diet_type(&self) -> DietType {
        self.diet_type
    }

    pub fn sleep_hours(&self) -> u32 {
        self.sleep_hours
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 25,
            height_cm: 170,
            weight_kg: 65,
            activity_level: ActivityLevel::default(),
            diet_type: DietType::default(),
            sleep_hours: 7,
        }
    }
}
