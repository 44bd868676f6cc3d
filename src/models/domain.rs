use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of quiz questions (`q1`..`q10`)
pub const QUESTION_COUNT: usize = 10;

/// Questions `q1`..`q6` count towards the physical score
pub const PHYSICAL_QUESTIONS: usize = 6;

/// Highest value a single answer can take
pub const MAX_ANSWER: u8 = 3;

/// Gender as selected on the quiz form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Form value of the option
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(label)
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

/// A single quiz answer, always within 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AnswerLevel(u8);

impl AnswerLevel {
    pub const TOP: AnswerLevel = AnswerLevel(MAX_ANSWER);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AnswerLevel {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= MAX_ANSWER {
            Ok(AnswerLevel(value))
        } else {
            Err(value)
        }
    }
}

/// The ten answers of a fully completed quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers([AnswerLevel; QUESTION_COUNT]);

impl Answers {
    pub fn new(levels: [AnswerLevel; QUESTION_COUNT]) -> Self {
        Self(levels)
    }

    /// Answer to question `index` (0-based), `None` past `q10`
    pub fn get(&self, index: usize) -> Option<AnswerLevel> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = AnswerLevel> + '_ {
        self.0.iter().copied()
    }

    /// Sum of `q1`..`q6`
    pub fn physical_sum(&self) -> u8 {
        self.0[..PHYSICAL_QUESTIONS].iter().map(|a| a.value()).sum()
    }

    /// Sum of `q7`..`q10`
    pub fn mental_sum(&self) -> u8 {
        self.0[PHYSICAL_QUESTIONS..].iter().map(|a| a.value()).sum()
    }
}

/// Personal details plus answers, only constructible from a validated form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthProfile {
    pub name: String,
    pub age: u16,
    pub gender: Gender,
    #[serde(rename = "heightCm")]
    pub height_cm: f64,
    #[serde(rename = "weightKg")]
    pub weight_kg: f64,
    pub answers: Answers,
}

/// BMI bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "#87CEFA",
            BmiCategory::Normal => "#90EE90",
            BmiCategory::Overweight => "#FFA500",
            BmiCategory::Obese => "#FF6347",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Consider consulting a nutritionist to develop a healthy weight gain plan."
            }
            BmiCategory::Normal => "Great! Maintain your balanced diet and exercise routine.",
            BmiCategory::Overweight => {
                "Focus on gradual weight loss through diet and exercise. Small changes make big differences!"
            }
            BmiCategory::Obese => {
                "We recommend consulting a healthcare provider for personalized weight management advice."
            }
        }
    }
}

/// BMI rounded to one decimal, with its band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// Display form, always one decimal
    pub fn formatted(&self) -> String {
        format!("{:.1}", self.value)
    }
}

/// Physical, mental and total quiz scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreTally {
    pub physical: u8,
    pub mental: u8,
    pub total: u8,
}

impl ScoreTally {
    pub const PHYSICAL_MAX: u8 = MAX_ANSWER * PHYSICAL_QUESTIONS as u8;
    pub const MENTAL_MAX: u8 = MAX_ANSWER * (QUESTION_COUNT - PHYSICAL_QUESTIONS) as u8;
    pub const TOTAL_MAX: u8 = MAX_ANSWER * QUESTION_COUNT as u8;
}

/// Overall health bucket derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Excellent,
    Moderate,
    NeedsSupport,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent Overall Health! 🌟",
            HealthStatus::Moderate => "Moderate Health 🧭",
            HealthStatus::NeedsSupport => "Needs Support 💡",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "#3CB371",
            HealthStatus::Moderate => "#FFD700",
            HealthStatus::NeedsSupport => "#DC143C",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => {
                "You have great health habits! Keep up the good work and maintain regular check-ups."
            }
            HealthStatus::Moderate => {
                "You have some good habits, but there are areas for improvement. Focus on your weaker areas."
            }
            HealthStatus::NeedsSupport => {
                "Your health assessment suggests significant room for improvement. Consider consulting healthcare professionals."
            }
        }
    }
}

/// Everything the results panel shows for one submission
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Uuid,
    #[serde(rename = "assessedAt")]
    pub assessed_at: DateTime<Utc>,
    pub profile: HealthProfile,
    pub bmi: BmiResult,
    pub scores: ScoreTally,
    pub status: HealthStatus,
    pub recommendations: Vec<&'static str>,
}

/// A WGS84 position; x is longitude, y is latitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates(Point<f64>);

impl Coordinates {
    /// Returns `None` for non-finite or out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        valid.then(|| Self(Point::new(longitude, latitude)))
    }

    pub fn latitude(&self) -> f64 {
        self.0.y()
    }

    pub fn longitude(&self) -> f64 {
        self.0.x()
    }

    pub fn point(&self) -> Point<f64> {
        self.0
    }
}
