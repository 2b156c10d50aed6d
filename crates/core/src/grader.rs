//! Scoring of lesson exercises and practice activities.
//!
//! Both modes are pure: the same answers always produce the same score.

use std::collections::HashMap;

use crate::model::{Activity, ActivityKind, Exercise, ExerciseId, ExerciseKind, Lesson};

/// Points awarded for each correctly answered lesson exercise.
pub const POINTS_PER_EXERCISE: u32 = 10;

/// A learner's answer to one lesson exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Index of the selected option.
    Choice(usize),
    /// Typed text, compared verbatim.
    Text(String),
}

impl Answer {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }
}

/// Whether `answer` satisfies the exercise's answer key.
///
/// Matching is exact: option index equality for multiple choice and
/// byte-for-byte string equality (case and whitespace included) otherwise.
/// An answer of the wrong shape never matches.
#[must_use]
pub fn answer_matches(exercise: &Exercise, answer: &Answer) -> bool {
    match (exercise.kind(), answer) {
        (ExerciseKind::MultipleChoice { correct, .. }, Answer::Choice(selected)) => {
            selected == correct
        }
        (ExerciseKind::FillBlank { expected }, Answer::Text(given))
        | (ExerciseKind::Code { expected }, Answer::Text(given)) => given == expected,
        (ExerciseKind::MultipleChoice { .. }, Answer::Text(_))
        | (ExerciseKind::FillBlank { .. } | ExerciseKind::Code { .. }, Answer::Choice(_)) => false,
    }
}

//
// ─── LESSON MODE ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseResult {
    pub exercise_id: ExerciseId,
    pub correct: bool,
}

/// Outcome of grading all exercises of a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonGrade {
    pub score: u32,
    /// One entry per exercise, in lesson order.
    pub results: Vec<ExerciseResult>,
}

impl LessonGrade {
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.correct).count()
    }

    #[must_use]
    pub fn is_correct(&self, exercise_id: ExerciseId) -> bool {
        self.results
            .iter()
            .any(|r| r.exercise_id == exercise_id && r.correct)
    }
}

/// Grade a lesson: `POINTS_PER_EXERCISE` for every exercise answered correctly.
/// Unanswered exercises score nothing.
#[must_use]
pub fn grade_lesson(lesson: &Lesson, answers: &HashMap<ExerciseId, Answer>) -> LessonGrade {
    let mut score = 0_u32;
    let mut results = Vec::with_capacity(lesson.exercises().len());

    for exercise in lesson.exercises() {
        let correct = answers
            .get(&exercise.id())
            .is_some_and(|answer| answer_matches(exercise, answer));
        if correct {
            score = score.saturating_add(POINTS_PER_EXERCISE);
        }
        results.push(ExerciseResult {
            exercise_id: exercise.id(),
            correct,
        });
    }

    LessonGrade { score, results }
}

//
// ─── ACTIVITY MODE ─────────────────────────────────────────────────────────────
//

/// Outcome of grading a practice activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityGrade {
    pub score: u32,
    /// Correct quiz answers; equals `total` for ungraded kinds.
    pub correct: usize,
    pub total: usize,
}

/// Grade an activity.
///
/// Quizzes earn `points / N` per correct answer (answers keyed by question
/// index), summed as a fraction and rounded half-up once at the end. Coding,
/// debugging and project activities earn their full points: submissions are
/// never executed, so submitting counts as completing.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn grade_activity(activity: &Activity, answers: &HashMap<usize, usize>) -> ActivityGrade {
    match activity.kind() {
        ActivityKind::Quiz { questions } => {
            let total = questions.len();
            if total == 0 {
                return ActivityGrade {
                    score: 0,
                    correct: 0,
                    total,
                };
            }
            let per_question = f64::from(activity.points()) / total as f64;
            let mut earned = 0.0_f64;
            let mut correct = 0_usize;
            for (index, question) in questions.iter().enumerate() {
                if answers.get(&index) == Some(&question.correct()) {
                    earned += per_question;
                    correct += 1;
                }
            }
            ActivityGrade {
                score: earned.round() as u32,
                correct,
                total,
            }
        }
        ActivityKind::Coding | ActivityKind::Debugging | ActivityKind::Project => ActivityGrade {
            score: activity.points(),
            correct: 1,
            total: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ActivityDraft, ActivityId, Difficulty, LessonDraft, LessonId, QuizQuestion,
    };

    fn two_exercise_lesson() -> Lesson {
        LessonDraft {
            id: LessonId::new(3),
            title: "Strings and String Methods".into(),
            category: "Basics".into(),
            difficulty: Difficulty::Beginner,
            duration: "25 min".into(),
            description: "Working with text".into(),
            content: String::new(),
            code_example: None,
            exercises: vec![
                Exercise::multiple_choice(
                    ExerciseId::new(1),
                    "Which method converts to uppercase?",
                    ["lower()", "upper()", "title()"],
                    1,
                    "upper() returns an uppercase copy.",
                )
                .unwrap(),
                Exercise::fill_blank(
                    ExerciseId::new(2),
                    "Complete: text.____() removes surrounding whitespace",
                    "strip",
                    "strip() trims both ends.",
                )
                .unwrap(),
            ],
        }
        .validate()
        .unwrap()
    }

    fn quiz(points: u32, questions: usize) -> Activity {
        ActivityDraft {
            id: ActivityId::new(2),
            title: "Variable Basics Quiz".into(),
            description: String::new(),
            kind: ActivityKind::Quiz {
                questions: (0..questions)
                    .map(|i| QuizQuestion::new(format!("Q{i}"), ["a", "b", "c"], 1))
                    .collect(),
            },
            difficulty: Difficulty::Beginner,
            points,
            time_limit_secs: None,
            starter_code: None,
            expected_output: None,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn all_correct_lesson_scores_ten_each() {
        let lesson = two_exercise_lesson();
        let answers = HashMap::from([
            (ExerciseId::new(1), Answer::Choice(1)),
            (ExerciseId::new(2), Answer::text("strip")),
        ]);
        let grade = grade_lesson(&lesson, &answers);
        assert_eq!(grade.score, 20);
        assert_eq!(grade.correct_count(), 2);
    }

    #[test]
    fn one_correct_lesson_scores_ten() {
        let lesson = two_exercise_lesson();
        let answers = HashMap::from([
            (ExerciseId::new(1), Answer::Choice(1)),
            (ExerciseId::new(2), Answer::text("trim")),
        ]);
        let grade = grade_lesson(&lesson, &answers);
        assert_eq!(grade.score, 10);
        assert!(grade.is_correct(ExerciseId::new(1)));
        assert!(!grade.is_correct(ExerciseId::new(2)));
    }

    #[test]
    fn fill_blank_has_no_partial_credit() {
        let lesson = two_exercise_lesson();
        for near_miss in ["Strip", " strip", "strip ", "strip()"] {
            let answers = HashMap::from([(ExerciseId::new(2), Answer::text(near_miss))]);
            assert_eq!(grade_lesson(&lesson, &answers).score, 0, "{near_miss:?}");
        }
    }

    #[test]
    fn wrong_answer_shape_never_matches() {
        let lesson = two_exercise_lesson();
        let answers = HashMap::from([
            (ExerciseId::new(1), Answer::text("1")),
            (ExerciseId::new(2), Answer::Choice(0)),
        ]);
        assert_eq!(grade_lesson(&lesson, &answers).score, 0);
    }

    #[test]
    fn unanswered_lesson_scores_zero() {
        let grade = grade_lesson(&two_exercise_lesson(), &HashMap::new());
        assert_eq!(grade.score, 0);
        assert_eq!(grade.results.len(), 2);
    }

    #[test]
    fn half_point_rounds_up() {
        let activity = quiz(15, 2);
        let answers = HashMap::from([(0, 1), (1, 2)]);
        let grade = grade_activity(&activity, &answers);
        assert_eq!(grade.score, 8);
        assert_eq!(grade.correct, 1);
        assert_eq!(grade.total, 2);
    }

    #[test]
    fn fractions_accumulate_before_rounding() {
        // 35 / 3 = 11.67 per question; two correct = 23.33 -> 23.
        let activity = quiz(35, 3);
        let answers = HashMap::from([(0, 1), (2, 1)]);
        assert_eq!(grade_activity(&activity, &answers).score, 23);

        let all = HashMap::from([(0, 1), (1, 1), (2, 1)]);
        assert_eq!(grade_activity(&activity, &all).score, 35);
    }

    #[test]
    fn unanswered_quiz_questions_are_incorrect() {
        let activity = quiz(15, 2);
        assert_eq!(grade_activity(&activity, &HashMap::new()).score, 0);
    }

    #[test]
    fn non_quiz_activities_award_full_points() {
        for kind in [ActivityKind::Coding, ActivityKind::Debugging, ActivityKind::Project] {
            let activity = ActivityDraft {
                id: ActivityId::new(7),
                title: "Build a Calculator".into(),
                description: String::new(),
                kind,
                difficulty: Difficulty::Intermediate,
                points: 50,
                time_limit_secs: None,
                starter_code: Some("def add(a, b):\n    pass\n".into()),
                expected_output: None,
            }
            .validate()
            .unwrap();
            assert_eq!(grade_activity(&activity, &HashMap::new()).score, 50);
        }
    }
}
