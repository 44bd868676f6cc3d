use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use validator::Validate;

use crate::models::domain::{Gender, QUESTION_COUNT};

/// Raw quiz submission, as posted by the HTML form or the JSON API
///
/// Every field is optional here: blank or unparsable values become `None`
/// so validation can mark them instead of rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AssessmentForm {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "non_blank_text")]
    pub name: Option<String>,
    #[validate(required)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub age: Option<u16>,
    #[validate(required)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub gender: Option<Gender>,
    #[validate(required, range(exclusive_min = 0.0))]
    #[serde(default, deserialize_with = "finite_number")]
    pub height: Option<f64>,
    #[validate(required, range(exclusive_min = 0.0))]
    #[serde(default, deserialize_with = "finite_number")]
    pub weight: Option<f64>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q1: Option<u8>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q2: Option<u8>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q3: Option<u8>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q4: Option<u8>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q5: Option<u8>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q6: Option<u8>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q7: Option<u8>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q8: Option<u8>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q9: Option<u8>,
    #[validate(required, range(max = 3))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub q10: Option<u8>,
}

impl AssessmentForm {
    /// Answers in question order, `None` where no option was picked
    pub fn answers(&self) -> [Option<u8>; QUESTION_COUNT] {
        [
            self.q1, self.q2, self.q3, self.q4, self.q5, self.q6, self.q7, self.q8, self.q9,
            self.q10,
        ]
    }

    /// Set answer `index` (0-based); out of range indexes are ignored
    pub fn set_answer(&mut self, index: usize, value: Option<u8>) {
        let slot = match index {
            0 => &mut self.q1,
            1 => &mut self.q2,
            2 => &mut self.q3,
            3 => &mut self.q4,
            4 => &mut self.q5,
            5 => &mut self.q6,
            6 => &mut self.q7,
            7 => &mut self.q8,
            8 => &mut self.q9,
            9 => &mut self.q10,
            _ => return,
        };
        *slot = value;
    }
}

/// Query string of the nearby lookup
///
/// `lat`/`lng` carry the browser position; `error` carries the browser's
/// geolocation error code when the position request failed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyQuery {
    #[serde(default, deserialize_with = "finite_number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "finite_number")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub error: Option<u8>,
}

/// Form posts send strings, JSON sends numbers: accept either
///
/// Anything else (out-of-range numbers, objects, arrays) lands in `Other`
/// and reads as absent.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOr<T> {
    Value(T),
    Text(String),
    Other(IgnoredAny),
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    let raw: Option<TextOr<T>> = Option::deserialize(deserializer)?;

    Ok(match raw {
        Some(TextOr::Value(value)) => Some(value),
        Some(TextOr::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                text.parse().ok()
            }
        }
        Some(TextOr::Other(_)) | None => None,
    })
}

fn finite_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(blank_as_none::<D, f64>(deserializer)?.filter(|v| v.is_finite()))
}

fn non_blank_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<TextOr<String>> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(TextOr::Value(text)) | Some(TextOr::Text(text)) => {
            Some(text.trim().to_string()).filter(|text| !text.is_empty())
        }
        Some(TextOr::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_numbers_and_strings() {
        let form: AssessmentForm = serde_json::from_str(
            r#"{"name": "Ada", "age": 36, "gender": "female", "height": "170", "weight": 60.5, "q1": 2, "q2": "3"}"#,
        )
        .unwrap();

        assert_eq!(form.name.as_deref(), Some("Ada"));
        assert_eq!(form.age, Some(36));
        assert_eq!(form.gender, Some(Gender::Female));
        assert_eq!(form.height, Some(170.0));
        assert_eq!(form.weight, Some(60.5));
        assert_eq!(form.q1, Some(2));
        assert_eq!(form.q2, Some(3));
        assert_eq!(form.q3, None);
    }

    #[test]
    fn test_blank_values_become_none() {
        let form: AssessmentForm =
            serde_json::from_str(r#"{"name": "   ", "age": "", "gender": null, "height": "abc"}"#)
                .unwrap();

        assert!(form.name.is_none());
        assert!(form.age.is_none());
        assert!(form.gender.is_none());
        assert!(form.height.is_none());
    }

    #[test]
    fn test_out_of_range_numbers_become_none() {
        let form: AssessmentForm = serde_json::from_str(
            r#"{"name": 42, "age": 70000, "gender": "robot", "weight": [70], "q1": 300, "q2": -1, "q3": 2}"#,
        )
        .unwrap();

        assert!(form.name.is_none());
        assert!(form.age.is_none());
        assert!(form.gender.is_none());
        assert!(form.weight.is_none());
        assert!(form.q1.is_none());
        assert!(form.q2.is_none());
        assert_eq!(form.q3, Some(2));
    }

    #[test]
    fn test_set_answer() {
        let mut form = AssessmentForm::default();
        form.set_answer(9, Some(1));
        form.set_answer(10, Some(1));
        assert_eq!(form.answers()[9], Some(1));
        assert_eq!(form.answers().iter().flatten().count(), 1);
    }
}
