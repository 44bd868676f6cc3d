use crate::models::{AnswerLevel, Answers};

/// A piece of advice shown when one answer falls short of the top level
#[derive(Debug, Clone, Copy)]
pub struct AdviceRule {
    /// 0-based question index
    pub question: usize,
    pub advice: &'static str,
}

/// Targeted advice, in display order
pub const ADVICE_RULES: [AdviceRule; 5] = [
    AdviceRule {
        question: 0,
        advice: "Try to exercise at least 3-4 times per week",
    },
    AdviceRule {
        question: 1,
        advice: "Increase your fruit/vegetable intake to at least 3 servings daily",
    },
    AdviceRule {
        question: 2,
        advice: "Aim for 7-8 hours of sleep nightly",
    },
    AdviceRule {
        question: 6,
        advice: "Practice mindfulness or meditation to reduce anxiety",
    },
    AdviceRule {
        question: 8,
        advice: "Strengthen your social connections with friends/family",
    },
];

/// Collect the advice lines triggered by the answers
///
/// A rule fires when its answer is below the top level (3); other answers
/// have no influence on it.
pub fn recommendations(answers: &Answers) -> Vec<&'static str> {
    ADVICE_RULES
        .iter()
        .filter(|rule| {
            answers
                .get(rule.question)
                .is_some_and(|answer| answer < AnswerLevel::TOP)
        })
        .map(|rule| rule.advice)
        .collect()
}
