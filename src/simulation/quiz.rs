use crate::atom::{AtomConfiguration, IonKind};
use crate::physics::electron::shell_count;

/// Fraction of correct answers needed for the "Great job!" verdict.
pub const PASS_RATIO: f32 = 0.7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: &'static str,
}

impl Question {
    fn new(prompt: &'static str, options: Vec<String>, explanation: &'static str) -> Self {
        Self {
            prompt,
            options,
            correct: 0,
            explanation,
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

/// Builds the question bank for the atom currently on screen.
pub fn questions_for(config: &AtomConfiguration) -> Vec<Question> {
    let p = i64::from(config.protons);
    let n = i64::from(config.neutrons);
    let e = i64::from(config.electrons);
    let ion = config.ion_kind();

    let charge_explanation = match ion {
        IonKind::Neutral => "Equal protons and electrons make the atom neutral.",
        IonKind::Cation => "More protons than electrons make it a positive ion (cation).",
        IonKind::Anion => "More electrons than protons make it a negative ion (anion).",
    };
    let charge_distractor = if ion == IonKind::Neutral {
        IonKind::Cation.label()
    } else {
        IonKind::Neutral.label()
    };

    vec![
        Question::new(
            "What is the atomic number of the current element?",
            numbers([p, p + 1, p - 1, n]),
            "The atomic number equals the number of protons in the nucleus.",
        ),
        Question::new(
            "What is the mass number of the current atom?",
            numbers([p + n, p, n, e]),
            "Mass number = protons + neutrons",
        ),
        Question::new(
            "Is this atom neutral, positive, or negative?",
            vec![
                ion.label().to_owned(),
                charge_distractor.to_owned(),
                "Always neutral".to_owned(),
                "Cannot determine".to_owned(),
            ],
            charge_explanation,
        ),
        Question::new(
            "How many electron shells does this atom have?",
            numbers([shell_count(config.electrons) as i64, 1, 2, 4]),
            "Electrons fill shells: K(2), L(8), M(8), etc.",
        ),
    ]
}

fn numbers<const N: usize>(values: [i64; N]) -> Vec<String> {
    values.iter().map(i64::to_string).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub selected: usize,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizState {
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    answered: Vec<bool>,
    score: usize,
}

impl QuizState {
    pub fn new(config: &AtomConfiguration) -> Self {
        let questions = questions_for(config);
        let answered = vec![false; questions.len()];
        Self {
            questions,
            current: 0,
            selected: None,
            answered,
            score: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_current_answered(&self) -> bool {
        self.answered[self.current]
    }

    /// Records an answer for the current question. A question can only be
    /// answered once; later picks return `None`.
    pub fn select(&mut self, option: usize) -> Option<AnswerOutcome> {
        if self.is_current_answered() || option >= self.current().options.len() {
            return None;
        }

        let correct = self.current().is_correct(option);
        self.selected = Some(option);
        self.answered[self.current] = true;
        if correct {
            self.score += 1;
        }

        Some(AnswerOutcome {
            selected: option,
            correct,
        })
    }

    /// Moves to the next question once the current one is answered.
    pub fn next(&mut self) -> bool {
        if !self.is_current_answered() || self.current + 1 >= self.questions.len() {
            return false;
        }
        self.current += 1;
        self.selected = None;
        true
    }

    pub fn reset(&mut self) {
        self.answered.iter_mut().for_each(|answered| *answered = false);
        self.current = 0;
        self.selected = None;
        self.score = 0;
    }

    pub fn is_complete(&self) -> bool {
        self.answered.iter().all(|&answered| answered)
    }

    pub fn passed(&self) -> bool {
        self.score as f32 >= self.questions.len() as f32 * PASS_RATIO
    }

    /// Position of the current question in `(0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / self.questions.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(question: &Question) -> Vec<&str> {
        question.options.iter().map(String::as_str).collect()
    }

    #[test]
    fn carbon_question_bank() {
        let questions = questions_for(&AtomConfiguration::new(6, 6, 6));
        assert_eq!(questions.len(), 4);
        assert!(questions.iter().all(|q| q.correct == 0 && q.options.len() == 4));
        assert_eq!(options(&questions[0]), ["6", "7", "5", "6"]);
        assert_eq!(options(&questions[1]), ["12", "6", "6", "6"]);
        assert_eq!(
            options(&questions[2]),
            ["Neutral", "Positive (Cation)", "Always neutral", "Cannot determine"]
        );
        assert_eq!(options(&questions[3]), ["2", "1", "2", "4"]);
    }

    #[test]
    fn ion_questions_follow_charge() {
        let cation = questions_for(&AtomConfiguration::new(11, 12, 10));
        assert_eq!(cation[2].options[0], "Positive (Cation)");
        assert_eq!(cation[2].options[1], "Neutral");
        assert!(cation[2].explanation.contains("cation"));

        let anion = questions_for(&AtomConfiguration::new(17, 18, 18));
        assert_eq!(anion[2].options[0], "Negative (Anion)");
        assert!(anion[2].explanation.contains("anion"));
    }

    #[test]
    fn empty_atom_has_negative_distractor_and_zero_shells() {
        let questions = questions_for(&AtomConfiguration::new(0, 0, 0));
        assert_eq!(questions[0].options[2], "-1");
        assert_eq!(questions[3].options[0], "0");
    }

    #[test]
    fn shell_answer_uses_capacity_table() {
        let questions = questions_for(&AtomConfiguration::new(11, 12, 11));
        assert_eq!(questions[3].options[0], "3");
        let questions = questions_for(&AtomConfiguration::new(20, 20, 20));
        assert_eq!(questions[3].options[0], "3");
    }

    #[test]
    fn scoring_and_single_answer_rule() {
        let mut quiz = QuizState::new(&AtomConfiguration::default());
        assert!(!quiz.next(), "cannot skip an unanswered question");

        let outcome = quiz.select(0).unwrap();
        assert!(outcome.correct);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.select(1), None);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.selected(), Some(0));

        assert!(quiz.next());
        assert_eq!(quiz.selected(), None);
        let outcome = quiz.select(3).unwrap();
        assert!(!outcome.correct);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.select(9), None);
    }

    #[test]
    fn completion_and_verdict() {
        let mut quiz = QuizState::new(&AtomConfiguration::default());
        for answer in [0, 0, 0, 2] {
            quiz.select(answer);
            quiz.next();
        }
        assert!(quiz.is_complete());
        assert_eq!(quiz.current_index(), 3);
        assert!(!quiz.next());
        assert_eq!(quiz.score(), 3);
        assert!(quiz.passed());
        assert_eq!(quiz.progress(), 1.0);

        quiz.reset();
        assert!(!quiz.is_complete());
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.progress(), 0.25);
    }

    #[test]
    fn two_of_four_is_not_a_pass() {
        let mut quiz = QuizState::new(&AtomConfiguration::default());
        for answer in [0, 1, 0, 1] {
            quiz.select(answer);
            quiz.next();
        }
        assert!(quiz.is_complete());
        assert!(!quiz.passed());
    }
}
