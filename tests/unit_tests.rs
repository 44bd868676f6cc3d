// Unit tests for Wellcheck

use wellcheck::core::{
    assess_bmi, overall_status, recommendations, tally, validate_form, FormField,
};
use wellcheck::models::{
    AnswerLevel, Answers, AssessmentForm, BmiCategory, Gender, HealthStatus, QUESTION_COUNT,
};

fn answers(values: [u8; QUESTION_COUNT]) -> Answers {
    Answers::new(values.map(|v| AnswerLevel::try_from(v).unwrap()))
}

fn complete_form() -> AssessmentForm {
    let mut form = AssessmentForm {
        name: Some("Test User".to_string()),
        age: Some(33),
        gender: Some(Gender::Male),
        height: Some(180.0),
        weight: Some(80.0),
        ..Default::default()
    };
    for index in 0..QUESTION_COUNT {
        form.set_answer(index, Some(3));
    }
    form
}

#[test]
fn test_bmi_normal_weight() {
    let bmi = assess_bmi(70.0, 175.0);
    assert_eq!(bmi.formatted(), "22.9");
    assert_eq!(bmi.category.label(), "Normal weight");
    assert_eq!(bmi.category.color(), "#90EE90");
}

#[test]
fn test_bmi_underweight() {
    let bmi = assess_bmi(50.0, 175.0);
    assert_eq!(bmi.formatted(), "16.3");
    assert_eq!(bmi.category.label(), "Underweight");
    assert_eq!(bmi.category.color(), "#87CEFA");
}

#[test]
fn test_bmi_overweight() {
    let bmi = assess_bmi(85.0, 175.0);
    assert_eq!(bmi.category, BmiCategory::Overweight);
    assert_eq!(bmi.category.color(), "#FFA500");
}

#[test]
fn test_perfect_quiz() {
    let scores = tally(&answers([3; QUESTION_COUNT]));
    assert_eq!((scores.physical, scores.mental, scores.total), (18, 12, 30));

    let status = overall_status(scores.total);
    assert_eq!(status.label(), "Excellent Overall Health! 🌟");
    assert_eq!(status.color(), "#3CB371");
}

#[test]
fn test_total_of_ten_needs_support() {
    let scores = tally(&answers([1; QUESTION_COUNT]));
    assert_eq!(scores.total, 10);

    let status = overall_status(scores.total);
    assert_eq!(status, HealthStatus::NeedsSupport);
    assert_eq!(status.label(), "Needs Support 💡");
    assert_eq!(status.color(), "#DC143C");
}

#[test]
fn test_moderate_band() {
    let status = overall_status(tally(&answers([2, 2, 2, 2, 2, 2, 1, 1, 1, 1])).total);
    assert_eq!(status, HealthStatus::Moderate);
    assert_eq!(status.label(), "Moderate Health 🧭");
    assert_eq!(status.color(), "#FFD700");
}

#[test]
fn test_exercise_recommendation_iff_first_answer_below_three() {
    let exercise = "Try to exercise at least 3-4 times per week";

    for first in 0..=3u8 {
        for other in 0..=3u8 {
            let mut values = [other; QUESTION_COUNT];
            values[0] = first;
            let advice = recommendations(&answers(values));
            assert_eq!(advice.contains(&exercise), first < 3);
        }
    }
}

#[test]
fn test_recommendation_order() {
    let advice = recommendations(&answers([0; QUESTION_COUNT]));
    assert_eq!(
        advice,
        vec![
            "Try to exercise at least 3-4 times per week",
            "Increase your fruit/vegetable intake to at least 3 servings daily",
            "Aim for 7-8 hours of sleep nightly",
            "Practice mindfulness or meditation to reduce anxiety",
            "Strengthen your social connections with friends/family",
        ]
    );
}

#[test]
fn test_complete_form_validates() {
    let profile = validate_form(&complete_form()).unwrap();
    assert_eq!(profile.gender, Gender::Male);
    assert_eq!(profile.answers.iter().count(), QUESTION_COUNT);
}

#[test]
fn test_each_missing_field_is_marked() {
    for field in FormField::PERSONAL {
        let mut form = complete_form();
        match field {
            FormField::Name => form.name = None,
            FormField::Age => form.age = None,
            FormField::Gender => form.gender = None,
            FormField::Height => form.height = None,
            FormField::Weight => form.weight = None,
            FormField::Question(index) => form.set_answer(index, None),
        }
        let failure = validate_form(&form).unwrap_err();
        assert_eq!(failure.invalid_fields(), &[field]);
    }

    for index in 0..QUESTION_COUNT {
        let mut form = complete_form();
        form.set_answer(index, None);
        let failure = validate_form(&form).unwrap_err();
        assert_eq!(failure.invalid_fields(), &[FormField::Question(index)]);
    }
}

#[test]
fn test_zero_weight_is_rejected() {
    let mut form = complete_form();
    form.weight = Some(0.0);
    let failure = validate_form(&form).unwrap_err();
    assert_eq!(failure.invalid_fields(), &[FormField::Weight]);
}

#[test]
fn test_tiny_height_never_scores() {
    let mut form = complete_form();
    form.height = Some(1e-200);
    let failure = validate_form(&form).unwrap_err();
    assert_eq!(failure.invalid_fields(), &[FormField::Height]);
}
