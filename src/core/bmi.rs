use crate::models::{BmiCategory, BmiResult};

/// Underweight below this BMI
const NORMAL_FLOOR: f64 = 18.5;
/// Overweight from this BMI
const OVERWEIGHT_FLOOR: f64 = 25.0;
/// Obese from this BMI
const OBESE_FLOOR: f64 = 30.0;

/// Calculate the Body Mass Index
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimetres
///
/// # Returns
/// weight / (height in metres)², unrounded. Callers must pass a positive
/// height; validation guarantees this for form input.
#[inline]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round to the single decimal the results panel shows
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Map a (rounded) BMI onto its band
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < NORMAL_FLOOR {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_FLOOR {
        BmiCategory::Normal
    } else if bmi < OBESE_FLOOR {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute the BMI and categorize the value as displayed
pub fn assess_bmi(weight_kg: f64, height_cm: f64) -> BmiResult {
    let value = round_to_tenth(body_mass_index(weight_kg, height_cm));

    BmiResult {
        value,
        category: categorize(value),
    }
}
