//! Request profiles for plan generation and their validation.
//!
//! Ranges mirror the input widgets of the web front end. Text fields are free
//! form; the option lists are offered to clients but not enforced, so an
//! unknown goal simply gets the generic prompt instruction.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const AGE_RANGE: RangeInclusive<u32> = 14..=80;
pub const HEIGHT_CM_RANGE: RangeInclusive<u32> = 120..=230;
pub const WEIGHT_KG_RANGE: RangeInclusive<u32> = 35..=200;
pub const DAYS_PER_WEEK_RANGE: RangeInclusive<u32> = 3..=6;

pub const SEX_OPTIONS: &[&str] = &["Male", "Female", "Other"];
pub const EXPERIENCE_OPTIONS: &[&str] = &["Beginner", "Intermediate", "Advanced"];
pub const EQUIPMENT_OPTIONS: &[&str] = &["Bodyweight", "Dumbbells + Bench", "Full Gym"];
pub const GOAL_OPTIONS: &[&str] = &["Fat Loss", "Muscle Gain", "Recomposition", "Strength"];
pub const DIET_TYPE_OPTIONS: &[&str] = &["Vegetarian", "Eggetarian", "Non-Vegetarian"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutProfile {
    pub age: u32,
    pub sex: String,
    pub height_cm: u32,
    pub weight_kg: u32,
    pub experience: String,
    pub days_per_week: u32,
    pub equipment: String,
    pub goal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietProfile {
    pub age: u32,
    pub weight_kg: u32,
    pub goal: String,
    pub diet_type: String,
}

impl WorkoutProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        check_range("age", self.age, &AGE_RANGE)?;
        check_range("height_cm", self.height_cm, &HEIGHT_CM_RANGE)?;
        check_range("weight_kg", self.weight_kg, &WEIGHT_KG_RANGE)?;
        check_range("days_per_week", self.days_per_week, &DAYS_PER_WEEK_RANGE)?;
        check_present("sex", &self.sex)?;
        check_present("experience", &self.experience)?;
        check_present("equipment", &self.equipment)?;
        check_present("goal", &self.goal)
    }
}

impl DietProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        check_range("age", self.age, &AGE_RANGE)?;
        check_range("weight_kg", self.weight_kg, &WEIGHT_KG_RANGE)?;
        check_present("goal", &self.goal)?;
        check_present("diet_type", &self.diet_type)
    }
}

/// Option lists offered to clients for building their forms.
#[derive(Debug, Serialize)]
pub struct ProfileOptions {
    pub sex: &'static [&'static str],
    pub experience: &'static [&'static str],
    pub equipment: &'static [&'static str],
    pub goal: &'static [&'static str],
    pub diet_type: &'static [&'static str],
    pub days_per_week: Vec<u32>,
}

pub fn profile_options() -> ProfileOptions {
    ProfileOptions {
        sex: SEX_OPTIONS,
        experience: EXPERIENCE_OPTIONS,
        equipment: EQUIPMENT_OPTIONS,
        goal: GOAL_OPTIONS,
        diet_type: DIET_TYPE_OPTIONS,
        days_per_week: DAYS_PER_WEEK_RANGE.collect(),
    }
}

fn check_range(field: &str, value: u32, range: &RangeInclusive<u32>) -> Result<(), AppError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

fn check_present(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::Validation(format!("{field} cannot be empty")))
    } else {
        Ok(())
    }
}
