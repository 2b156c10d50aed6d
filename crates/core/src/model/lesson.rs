use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::model::difficulty::Difficulty;
use crate::model::ids::{ExerciseId, LessonId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("exercise question cannot be empty")]
    EmptyQuestion,

    #[error("multiple-choice exercise needs at least one option")]
    NoOptions,

    #[error("correct option {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson id 0 is reserved")]
    ReservedId,

    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("lesson {lesson} has duplicate exercise id {exercise}")]
    DuplicateExerciseId {
        lesson: LessonId,
        exercise: ExerciseId,
    },
}

//
// ─── EXERCISES ─────────────────────────────────────────────────────────────────
//

/// What an exercise asks for and how its answer key is expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ExerciseKind {
    /// Pick one of `options`; `correct` indexes into it.
    MultipleChoice { options: Vec<String>, correct: usize },
    /// Type the literal `expected` string.
    FillBlank { expected: String },
    /// Write code whose text must equal `expected`; nothing is executed.
    Code { expected: String },
}

/// A single question attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    id: ExerciseId,
    question: String,
    kind: ExerciseKind,
    explanation: String,
}

impl Exercise {
    /// Build a multiple-choice exercise.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::NoOptions` for an empty option list and
    /// `ExerciseError::CorrectIndexOutOfRange` if `correct` does not index it.
    pub fn multiple_choice<S: Into<String>>(
        id: ExerciseId,
        question: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, ExerciseError> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(ExerciseError::NoOptions);
        }
        if correct >= options.len() {
            return Err(ExerciseError::CorrectIndexOutOfRange {
                index: correct,
                len: options.len(),
            });
        }
        Self::build(
            id,
            question.into(),
            ExerciseKind::MultipleChoice { options, correct },
            explanation.into(),
        )
    }

    /// Build a fill-in-the-blank exercise.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::EmptyQuestion` if the question is blank.
    pub fn fill_blank(
        id: ExerciseId,
        question: impl Into<String>,
        expected: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, ExerciseError> {
        Self::build(
            id,
            question.into(),
            ExerciseKind::FillBlank {
                expected: expected.into(),
            },
            explanation.into(),
        )
    }

    /// Build a code exercise.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::EmptyQuestion` if the question is blank.
    pub fn code(
        id: ExerciseId,
        question: impl Into<String>,
        expected: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, ExerciseError> {
        Self::build(
            id,
            question.into(),
            ExerciseKind::Code {
                expected: expected.into(),
            },
            explanation.into(),
        )
    }

    fn build(
        id: ExerciseId,
        question: String,
        kind: ExerciseKind,
        explanation: String,
    ) -> Result<Self, ExerciseError> {
        if question.trim().is_empty() {
            return Err(ExerciseError::EmptyQuestion);
        }
        Ok(Self {
            id,
            question,
            kind,
            explanation,
        })
    }

    #[must_use]
    pub fn id(&self) -> ExerciseId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn kind(&self) -> &ExerciseKind {
        &self.kind
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Human-readable form of the answer key, shown after an incorrect answer.
    #[must_use]
    pub fn correct_answer_text(&self) -> &str {
        match &self.kind {
            ExerciseKind::MultipleChoice { options, correct } => &options[*correct],
            ExerciseKind::FillBlank { expected } | ExerciseKind::Code { expected } => expected,
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// Unvalidated lesson fields, as authored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDraft {
    pub id: LessonId,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub description: String,
    pub content: String,
    pub code_example: Option<String>,
    pub exercises: Vec<Exercise>,
}

impl LessonDraft {
    /// Validate the draft into an immutable lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the id is the reserved `0`, the title is blank,
    /// or two exercises share an id.
    pub fn validate(self) -> Result<Lesson, LessonError> {
        if !self.id.is_tracked() {
            return Err(LessonError::ReservedId);
        }
        if self.title.trim().is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        let mut seen = HashSet::with_capacity(self.exercises.len());
        for exercise in &self.exercises {
            if !seen.insert(exercise.id()) {
                return Err(LessonError::DuplicateExerciseId {
                    lesson: self.id,
                    exercise: exercise.id(),
                });
            }
        }

        Ok(Lesson {
            id: self.id,
            title: self.title,
            category: self.category,
            difficulty: self.difficulty,
            duration: self.duration,
            description: self.description,
            content: self.content,
            code_example: self.code_example,
            exercises: self.exercises,
        })
    }
}

/// A lesson in the static catalog. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    id: LessonId,
    title: String,
    category: String,
    difficulty: Difficulty,
    duration: String,
    description: String,
    content: String,
    code_example: Option<String>,
    exercises: Vec<Exercise>,
}

impl Lesson {
    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Display label such as "15 min".
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn code_example(&self) -> Option<&str> {
        self.code_example.as_deref()
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn exercise(&self, id: ExerciseId) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id() == id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: u32, exercises: Vec<Exercise>) -> LessonDraft {
        LessonDraft {
            id: LessonId::new(id),
            title: "Lists".into(),
            category: "Data Structures".into(),
            difficulty: Difficulty::Beginner,
            duration: "20 min".into(),
            description: "Working with lists".into(),
            content: "Lists are ordered.".into(),
            code_example: None,
            exercises,
        }
    }

    #[test]
    fn multiple_choice_rejects_out_of_range_answer() {
        let err = Exercise::multiple_choice(ExerciseId::new(1), "Q?", ["a", "b"], 2, "")
            .unwrap_err();
        assert_eq!(err, ExerciseError::CorrectIndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn multiple_choice_requires_options() {
        let err = Exercise::multiple_choice(ExerciseId::new(1), "Q?", Vec::<String>::new(), 0, "")
            .unwrap_err();
        assert_eq!(err, ExerciseError::NoOptions);
    }

    #[test]
    fn blank_question_is_rejected() {
        let err = Exercise::fill_blank(ExerciseId::new(1), "  ", "x", "").unwrap_err();
        assert_eq!(err, ExerciseError::EmptyQuestion);
    }

    #[test]
    fn correct_answer_text_resolves_option() {
        let ex = Exercise::multiple_choice(ExerciseId::new(1), "Q?", ["str", "int"], 1, "")
            .unwrap();
        assert_eq!(ex.correct_answer_text(), "int");

        let ex = Exercise::fill_blank(ExerciseId::new(2), "Q?", "upper()", "").unwrap();
        assert_eq!(ex.correct_answer_text(), "upper()");
    }

    #[test]
    fn lesson_rejects_reserved_id() {
        assert_eq!(draft(0, vec![]).validate().unwrap_err(), LessonError::ReservedId);
    }

    #[test]
    fn lesson_rejects_duplicate_exercise_ids() {
        let a = Exercise::fill_blank(ExerciseId::new(1), "Q1", "a", "").unwrap();
        let b = Exercise::fill_blank(ExerciseId::new(1), "Q2", "b", "").unwrap();
        let err = draft(4, vec![a, b]).validate().unwrap_err();
        assert!(matches!(err, LessonError::DuplicateExerciseId { .. }));
    }

    #[test]
    fn exercise_ids_may_repeat_across_lessons() {
        let a = Exercise::fill_blank(ExerciseId::new(1), "Q1", "a", "").unwrap();
        let b = Exercise::fill_blank(ExerciseId::new(1), "Q2", "b", "").unwrap();
        let first = draft(1, vec![a]).validate().unwrap();
        let second = draft(2, vec![b]).validate().unwrap();
        assert_eq!(first.exercises()[0].id(), second.exercises()[0].id());
        assert!(first.exercise(ExerciseId::new(1)).is_some());
        assert!(first.exercise(ExerciseId::new(2)).is_none());
    }
}
