//! In-memory attempt state for one lesson or activity.
//!
//! Sessions are transient: closing or resetting discards them and never
//! touches persisted progress.

use std::collections::HashMap;

use crate::grader::{self, ActivityGrade, Answer, LessonGrade};
use crate::model::{Activity, ExerciseId, Lesson};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    InProgress,
    /// Graded; results are showing.
    Submitted,
}

//
// ─── LESSON SESSION ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LessonSession {
    lesson: Lesson,
    phase: SessionPhase,
    answers: HashMap<ExerciseId, Answer>,
    grade: Option<LessonGrade>,
}

impl LessonSession {
    #[must_use]
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            phase: SessionPhase::NotStarted,
            answers: HashMap::new(),
            grade: None,
        }
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns false if the session was already started.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::NotStarted {
            return false;
        }
        self.phase = SessionPhase::InProgress;
        true
    }

    /// Record an answer, replacing any earlier one for the same exercise.
    ///
    /// Ignored unless the session is in progress and the exercise belongs to
    /// the lesson.
    pub fn select(&mut self, exercise_id: ExerciseId, answer: Answer) -> bool {
        if self.phase != SessionPhase::InProgress || self.lesson.exercise(exercise_id).is_none() {
            return false;
        }
        self.answers.insert(exercise_id, answer);
        true
    }

    #[must_use]
    pub fn answer(&self, exercise_id: ExerciseId) -> Option<&Answer> {
        self.answers.get(&exercise_id)
    }

    /// Grade the current answers and move to `Submitted`.
    ///
    /// Returns `None` when the session is not in progress, so each attempt
    /// is graded at most once.
    pub fn submit(&mut self) -> Option<LessonGrade> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        let grade = grader::grade_lesson(&self.lesson, &self.answers);
        self.grade = Some(grade.clone());
        self.phase = SessionPhase::Submitted;
        Some(grade)
    }

    #[must_use]
    pub fn grade(&self) -> Option<&LessonGrade> {
        self.grade.as_ref()
    }

    /// Start a fresh attempt after a submission.
    ///
    /// Returns false unless the session is `Submitted`.
    pub fn reset(&mut self) -> bool {
        if self.phase != SessionPhase::Submitted {
            return false;
        }
        self.answers.clear();
        self.grade = None;
        self.phase = SessionPhase::InProgress;
        true
    }

    pub fn close(&mut self) {
        self.answers.clear();
        self.grade = None;
        self.phase = SessionPhase::NotStarted;
    }
}

//
// ─── ACTIVITY SESSION ──────────────────────────────────────────────────────────
//

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to count down: not in progress or no time limit.
    Idle,
    Running { remaining_secs: u32 },
    /// The countdown hit zero and the session was submitted.
    Expired(ActivityGrade),
}

#[derive(Debug, Clone)]
pub struct ActivitySession {
    activity: Activity,
    phase: SessionPhase,
    answers: HashMap<usize, usize>,
    code: String,
    remaining_secs: Option<u32>,
    grade: Option<ActivityGrade>,
    attempt: u64,
}

impl ActivitySession {
    #[must_use]
    pub fn new(activity: Activity) -> Self {
        Self {
            activity,
            phase: SessionPhase::NotStarted,
            answers: HashMap::new(),
            code: String::new(),
            remaining_secs: None,
            grade: None,
            attempt: 0,
        }
    }

    #[must_use]
    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }

    #[must_use]
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    #[must_use]
    pub fn grade(&self) -> Option<ActivityGrade> {
        self.grade
    }

    /// Generation of the current attempt.
    ///
    /// Changes on every start, reset and close, so a countdown armed for one
    /// attempt can tell that the session has moved on.
    #[must_use]
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Open the activity: load starter code and arm the countdown.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::NotStarted {
            return false;
        }
        self.begin_attempt();
        true
    }

    /// Choose `option` for quiz question `question`.
    pub fn select(&mut self, question: usize, option: usize) -> bool {
        if self.phase != SessionPhase::InProgress {
            return false;
        }
        let Some(q) = self.activity.questions().get(question) else {
            return false;
        };
        if option >= q.options().len() {
            return false;
        }
        self.answers.insert(question, option);
        true
    }

    pub fn edit_code(&mut self, code: impl Into<String>) -> bool {
        if self.phase != SessionPhase::InProgress {
            return false;
        }
        self.code = code.into();
        true
    }

    /// Grade and move to `Submitted`; `None` if not in progress.
    pub fn submit(&mut self) -> Option<ActivityGrade> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        let grade = grader::grade_activity(&self.activity, &self.answers);
        self.grade = Some(grade);
        self.phase = SessionPhase::Submitted;
        self.remaining_secs = None;
        Some(grade)
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero submits with whatever answers are selected at that
    /// instant. Once submitted, further ticks are `Idle`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != SessionPhase::InProgress {
            return TickOutcome::Idle;
        }
        let Some(remaining) = self.remaining_secs else {
            return TickOutcome::Idle;
        };
        let remaining = remaining.saturating_sub(1);
        self.remaining_secs = Some(remaining);
        if remaining > 0 {
            return TickOutcome::Running {
                remaining_secs: remaining,
            };
        }
        match self.submit() {
            Some(grade) => TickOutcome::Expired(grade),
            None => TickOutcome::Idle,
        }
    }

    /// Start over after a submission: starter code restored, answers
    /// cleared, countdown rearmed.
    ///
    /// Returns false unless the session is `Submitted`.
    pub fn reset(&mut self) -> bool {
        if self.phase != SessionPhase::Submitted {
            return false;
        }
        self.begin_attempt();
        true
    }

    pub fn close(&mut self) {
        self.attempt = self.attempt.wrapping_add(1);
        self.phase = SessionPhase::NotStarted;
        self.answers.clear();
        self.code.clear();
        self.remaining_secs = None;
        self.grade = None;
    }

    fn begin_attempt(&mut self) {
        self.attempt = self.attempt.wrapping_add(1);
        self.phase = SessionPhase::InProgress;
        self.answers.clear();
        self.code = self.activity.starter_code().unwrap_or_default().to_owned();
        self.remaining_secs = self.activity.time_limit_secs();
        self.grade = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ActivityDraft, ActivityId, ActivityKind, Difficulty, Exercise, LessonDraft, LessonId,
        QuizQuestion,
    };

    fn lesson() -> Lesson {
        LessonDraft {
            id: LessonId::new(1),
            title: "Python Basics".into(),
            category: "Basics".into(),
            difficulty: Difficulty::Beginner,
            duration: "15 min".into(),
            description: String::new(),
            content: String::new(),
            code_example: None,
            exercises: vec![
                Exercise::multiple_choice(
                    ExerciseId::new(1),
                    "What prints text?",
                    ["print()", "echo()"],
                    0,
                    "",
                )
                .unwrap(),
            ],
        }
        .validate()
        .unwrap()
    }

    fn timed_quiz(limit: u32) -> Activity {
        ActivityDraft {
            id: ActivityId::new(2),
            title: "Variable Basics Quiz".into(),
            description: String::new(),
            kind: ActivityKind::Quiz {
                questions: vec![
                    QuizQuestion::new("Valid name?", ["2x", "my_var", "my-var"], 1),
                    QuizQuestion::new("type(3.14)?", ["int", "float", "str"], 1),
                ],
            },
            difficulty: Difficulty::Beginner,
            points: 15,
            time_limit_secs: Some(limit),
            starter_code: None,
            expected_output: None,
        }
        .validate()
        .unwrap()
    }

    fn coding() -> Activity {
        ActivityDraft {
            id: ActivityId::new(1),
            title: "Hello World".into(),
            description: String::new(),
            kind: ActivityKind::Coding,
            difficulty: Difficulty::Beginner,
            points: 10,
            time_limit_secs: None,
            starter_code: Some("# Write your code here\n".into()),
            expected_output: Some("Hello, World!".into()),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn lesson_session_grades_once_per_attempt() {
        let mut session = LessonSession::new(lesson());
        assert!(!session.select(ExerciseId::new(1), Answer::Choice(0)));

        assert!(session.start());
        assert!(session.select(ExerciseId::new(1), Answer::Choice(0)));
        assert!(!session.select(ExerciseId::new(9), Answer::Choice(0)));

        assert_eq!(session.submit().map(|g| g.score), Some(10));
        assert_eq!(session.phase(), SessionPhase::Submitted);
        assert!(session.submit().is_none());

        assert!(session.reset());
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert!(session.answer(ExerciseId::new(1)).is_none());
        assert_eq!(session.submit().map(|g| g.score), Some(0));

        session.close();
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(session.grade().is_none());
    }

    #[test]
    fn countdown_expiry_submits_selected_answers() {
        let mut session = ActivitySession::new(timed_quiz(3));
        assert_eq!(session.tick(), TickOutcome::Idle);

        session.start();
        assert_eq!(session.remaining_secs(), Some(3));
        assert!(session.select(0, 1));
        assert_eq!(session.tick(), TickOutcome::Running { remaining_secs: 2 });
        assert_eq!(session.tick(), TickOutcome::Running { remaining_secs: 1 });

        match session.tick() {
            TickOutcome::Expired(grade) => {
                assert_eq!(grade.score, 8);
                assert_eq!(grade.correct, 1);
            }
            other => panic!("expected expiry, got {other:?}"),
        }
        assert_eq!(session.phase(), SessionPhase::Submitted);
    }

    #[test]
    fn repeated_zero_ticks_submit_only_once() {
        let mut session = ActivitySession::new(timed_quiz(1));
        session.start();
        assert!(matches!(session.tick(), TickOutcome::Expired(_)));
        for _ in 0..3 {
            assert_eq!(session.tick(), TickOutcome::Idle);
        }
        assert!(session.submit().is_none());
    }

    #[test]
    fn manual_submit_stops_the_countdown() {
        let mut session = ActivitySession::new(timed_quiz(60));
        session.start();
        session.tick();
        assert!(session.submit().is_some());
        assert_eq!(session.remaining_secs(), None);
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn select_rejects_out_of_range_choices() {
        let mut session = ActivitySession::new(timed_quiz(60));
        session.start();
        assert!(!session.select(5, 0));
        assert!(!session.select(0, 3));
        assert_eq!(session.selected(0), None);
    }

    #[test]
    fn reset_restores_starter_code_and_countdown() {
        let mut session = ActivitySession::new(coding());
        session.start();
        assert_eq!(session.code(), "# Write your code here\n");
        assert!(session.edit_code("print('Hello, World!')"));
        assert_eq!(session.submit().map(|g| g.score), Some(10));

        assert!(session.reset());
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.code(), "# Write your code here\n");
        assert_eq!(session.tick(), TickOutcome::Idle);

        let mut timed = ActivitySession::new(timed_quiz(30));
        timed.start();
        timed.tick();
        timed.submit();
        assert!(timed.reset());
        assert_eq!(timed.remaining_secs(), Some(30));
    }

    #[test]
    fn reset_is_only_accepted_after_submission() {
        let mut lesson_session = LessonSession::new(lesson());
        assert!(!lesson_session.reset());
        assert_eq!(lesson_session.phase(), SessionPhase::NotStarted);
        lesson_session.start();
        assert!(lesson_session.select(ExerciseId::new(1), Answer::Choice(0)));
        assert!(!lesson_session.reset());
        assert!(lesson_session.answer(ExerciseId::new(1)).is_some());

        let mut session = ActivitySession::new(timed_quiz(30));
        assert!(!session.reset());
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        session.start();
        session.tick();
        assert!(!session.reset());
        assert_eq!(session.remaining_secs(), Some(29));
    }

    #[test]
    fn every_new_attempt_gets_a_new_generation() {
        let mut session = ActivitySession::new(timed_quiz(30));
        let initial = session.attempt();
        session.start();
        let first = session.attempt();
        assert_ne!(first, initial);

        session.submit();
        assert_eq!(session.attempt(), first);
        session.reset();
        let second = session.attempt();
        assert_ne!(second, first);

        session.close();
        assert_ne!(session.attempt(), second);
    }

    #[test]
    fn close_discards_attempt() {
        let mut session = ActivitySession::new(timed_quiz(30));
        session.start();
        session.select(1, 1);
        session.close();
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!(session.selected(1), None);
        assert_eq!(session.remaining_secs(), None);
        assert!(!session.edit_code("x = 1"));
    }
}
