use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

use crate::core::bmi::body_mass_index;
use crate::core::questions::QUESTIONS;
use crate::models::{AnswerLevel, Answers, AssessmentForm, HealthProfile, QUESTION_COUNT};

/// Alert text shown when the form is incomplete
pub const INCOMPLETE_FORM_MESSAGE: &str = "Please answer all questions before submitting.";

/// A required form input, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Age,
    Gender,
    Height,
    Weight,
    /// Question group, 0-based (`Question(0)` is `q1`)
    Question(usize),
}

impl FormField {
    pub const PERSONAL: [FormField; 5] = [
        FormField::Name,
        FormField::Age,
        FormField::Gender,
        FormField::Height,
        FormField::Weight,
    ];

    /// Every required input: personal fields then `q1`..`q10`
    pub fn all() -> impl Iterator<Item = FormField> {
        Self::PERSONAL
            .into_iter()
            .chain((0..QUESTION_COUNT).map(FormField::Question))
    }

    /// Identifier used by the form and the API
    pub fn id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Gender => "gender",
            FormField::Height => "height",
            FormField::Weight => "weight",
            FormField::Question(index) => QUESTIONS.get(*index).map_or("", |q| q.id),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = Self::PERSONAL.into_iter().find(|f| f.id() == s) {
            return Ok(field);
        }

        QUESTIONS
            .iter()
            .position(|q| q.id == s)
            .map(FormField::Question)
            .ok_or_else(|| format!("unknown form field: {}", s))
    }
}

/// Visual state of an input after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMark {
    /// Never validated (fresh page)
    Untouched,
    /// Validated and fine; any earlier marking is reset
    Cleared,
    /// Missing or invalid
    Marked,
}

/// The form could not be scored; lists every offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please answer all questions before submitting.")]
pub struct ValidationFailure {
    invalid: Vec<FormField>,
}

impl ValidationFailure {
    pub fn new(mut invalid: Vec<FormField>) -> Self {
        invalid.sort();
        invalid.dedup();
        Self { invalid }
    }

    fn single(field: FormField) -> Self {
        Self::new(vec![field])
    }

    /// Offending fields in form order
    pub fn invalid_fields(&self) -> &[FormField] {
        &self.invalid
    }

    pub fn mark(&self, field: FormField) -> FieldMark {
        if self.invalid.contains(&field) {
            FieldMark::Marked
        } else {
            FieldMark::Cleared
        }
    }
}

/// Mark for `field`, given the outcome of the last validation (if any)
pub fn field_mark(failure: Option<&ValidationFailure>, field: FormField) -> FieldMark {
    failure.map_or(FieldMark::Untouched, |f| f.mark(field))
}

/// Validate a raw submission and convert it into a scoreable profile
///
/// Every required input must be present, height and weight must be
/// strictly positive and each answer must be within 0..=3. All offending
/// fields are reported at once. Height and weight that would yield a
/// non-finite BMI are rejected too.
pub fn validate_form(form: &AssessmentForm) -> Result<HealthProfile, ValidationFailure> {
    if let Err(errors) = form.validate() {
        let invalid: Vec<FormField> = errors
            .field_errors()
            .into_keys()
            .filter_map(|key| key.parse().ok())
            .collect();

        tracing::debug!("Form validation failed: {:?}", invalid);
        return Err(ValidationFailure::new(invalid));
    }

    let name = form
        .name
        .clone()
        .ok_or_else(|| ValidationFailure::single(FormField::Name))?;
    let age = form
        .age
        .ok_or_else(|| ValidationFailure::single(FormField::Age))?;
    let gender = form
        .gender
        .ok_or_else(|| ValidationFailure::single(FormField::Gender))?;
    let height_cm = form
        .height
        .ok_or_else(|| ValidationFailure::single(FormField::Height))?;
    let weight_kg = form
        .weight
        .ok_or_else(|| ValidationFailure::single(FormField::Weight))?;

    if !body_mass_index(weight_kg, height_cm).is_finite() {
        let height_m = height_cm / 100.0;
        let field = if height_m * height_m > 0.0 {
            FormField::Weight
        } else {
            FormField::Height
        };
        tracing::debug!("BMI out of range for height={} weight={}", height_cm, weight_kg);
        return Err(ValidationFailure::single(field));
    }

    let levels = form
        .answers()
        .into_iter()
        .enumerate()
        .map(|(index, answer)| {
            answer
                .and_then(|value| AnswerLevel::try_from(value).ok())
                .ok_or_else(|| ValidationFailure::single(FormField::Question(index)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let levels: [AnswerLevel; QUESTION_COUNT] = levels
        .try_into()
        .map_err(|_| ValidationFailure::single(FormField::Question(0)))?;

    Ok(HealthProfile {
        name,
        age,
        gender,
        height_cm,
        weight_kg,
        answers: Answers::new(levels),
    })
}
