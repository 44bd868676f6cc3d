use crate::models::QUESTION_COUNT;

/// Which partial score a question feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Physical,
    Mental,
}

/// A quiz question and its four answer labels, valued 0..=3 in order
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Form identifier (`q1`..`q10`)
    pub id: &'static str,
    pub domain: Domain,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: "q1",
        domain: Domain::Physical,
        prompt: "How often do you exercise for at least 30 minutes?",
        options: ["Rarely or never", "Once a week", "2 times a week", "3 or more times a week"],
    },
    Question {
        id: "q2",
        domain: Domain::Physical,
        prompt: "How many servings of fruit or vegetables do you eat per day?",
        options: ["None", "1 serving", "2 servings", "3 or more servings"],
    },
    Question {
        id: "q3",
        domain: Domain::Physical,
        prompt: "How many hours do you usually sleep per night?",
        options: ["Less than 5 hours", "5-6 hours", "6-7 hours", "7-8 hours"],
    },
    Question {
        id: "q4",
        domain: Domain::Physical,
        prompt: "How much water do you drink per day?",
        options: ["Less than 2 glasses", "2-4 glasses", "5-7 glasses", "8 glasses or more"],
    },
    Question {
        id: "q5",
        domain: Domain::Physical,
        prompt: "How often do you smoke or drink alcohol?",
        options: ["Daily", "Several times a week", "Occasionally", "Never"],
    },
    Question {
        id: "q6",
        domain: Domain::Physical,
        prompt: "How much energy do you have during a typical day?",
        options: ["Very low", "Low", "Moderate", "High"],
    },
    Question {
        id: "q7",
        domain: Domain::Mental,
        prompt: "How often do you feel anxious or stressed?",
        options: ["Almost always", "Often", "Sometimes", "Rarely"],
    },
    Question {
        id: "q8",
        domain: Domain::Mental,
        prompt: "How would you describe your mood over the past two weeks?",
        options: ["Mostly low", "Up and down", "Mostly good", "Consistently good"],
    },
    Question {
        id: "q9",
        domain: Domain::Mental,
        prompt: "How often do you spend quality time with friends or family?",
        options: ["Rarely", "Once a month", "Once a week", "Several times a week"],
    },
    Question {
        id: "q10",
        domain: Domain::Mental,
        prompt: "How well are you able to relax and enjoy your free time?",
        options: ["Not at all", "A little", "Fairly well", "Very well"],
    },
];
