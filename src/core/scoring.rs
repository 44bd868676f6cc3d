use crate::models::{Answers, HealthStatus, ScoreTally};

/// Lowest total for the "Excellent" bucket
const EXCELLENT_FLOOR: u8 = 24;
/// Lowest total for the "Moderate" bucket
const MODERATE_FLOOR: u8 = 15;

/// Tally the quiz answers
///
/// Scoring formula:
/// physical = q1 + .. + q6   (0-18)
/// mental   = q7 + .. + q10  (0-12)
/// total    = physical + mental (0-30)
pub fn tally(answers: &Answers) -> ScoreTally {
    let physical = answers.physical_sum();
    let mental = answers.mental_sum();

    ScoreTally {
        physical,
        mental,
        total: physical + mental,
    }
}

/// Bucket a total score into an overall status
#[inline]
pub fn overall_status(total: u8) -> HealthStatus {
    if total >= EXCELLENT_FLOOR {
        HealthStatus::Excellent
    } else if total >= MODERATE_FLOOR {
        HealthStatus::Moderate
    } else {
        HealthStatus::NeedsSupport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerLevel, QUESTION_COUNT};

    fn answers(values: [u8; QUESTION_COUNT]) -> Answers {
        Answers::new(values.map(|v| AnswerLevel::try_from(v).unwrap()))
    }

    #[test]
    fn test_perfect_score() {
        let scores = tally(&answers([3; QUESTION_COUNT]));

        assert_eq!(scores.physical, 18);
        assert_eq!(scores.mental, 12);
        assert_eq!(scores.total, 30);
        assert_eq!(overall_status(scores.total), HealthStatus::Excellent);
        assert_eq!(HealthStatus::Excellent.label(), "Excellent Overall Health! 🌟");
        assert_eq!(HealthStatus::Excellent.color(), "#3CB371");
    }

    #[test]
    fn test_low_score() {
        let scores = tally(&answers([1; QUESTION_COUNT]));

        assert_eq!(scores.total, 10);
        assert_eq!(overall_status(scores.total), HealthStatus::NeedsSupport);
        assert_eq!(HealthStatus::NeedsSupport.label(), "Needs Support 💡");
        assert_eq!(HealthStatus::NeedsSupport.color(), "#DC143C");
    }

    #[test]
    fn test_status_edges() {
        assert_eq!(overall_status(24), HealthStatus::Excellent);
        assert_eq!(overall_status(23), HealthStatus::Moderate);
        assert_eq!(overall_status(15), HealthStatus::Moderate);
        assert_eq!(overall_status(14), HealthStatus::NeedsSupport);
        assert_eq!(overall_status(0), HealthStatus::NeedsSupport);
    }

    #[test]
    fn test_split_between_domains() {
        let scores = tally(&answers([0, 0, 0, 0, 0, 0, 3, 3, 3, 3]));
        assert_eq!(scores.physical, 0);
        assert_eq!(scores.mental, 12);
    }
}
