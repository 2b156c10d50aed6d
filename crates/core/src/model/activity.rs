use serde::Serialize;
use thiserror::Error;

use crate::model::difficulty::Difficulty;
use crate::model::ids::ActivityId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActivityError {
    #[error("activity title cannot be empty")]
    EmptyTitle,

    #[error("quiz activity needs at least one question")]
    EmptyQuiz,

    #[error("quiz question {question} has no options")]
    NoOptions { question: usize },

    #[error("quiz question {question}: correct option {index} is out of range for {len} options")]
    CorrectIndexOutOfRange {
        question: usize,
        index: usize,
        len: usize,
    },
}

/// One sub-question of a quiz activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl QuizQuestion {
    /// Unchecked constructor; the owning activity validates the index.
    #[must_use]
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }
}

/// Kind of practice activity. Only quizzes are graded question by question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActivityKind {
    Coding,
    Quiz { questions: Vec<QuizQuestion> },
    Debugging,
    Project,
}

impl ActivityKind {
    /// Label used by the type facet and by text search.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Coding => "coding",
            ActivityKind::Quiz { .. } => "quiz",
            ActivityKind::Debugging => "debugging",
            ActivityKind::Project => "project",
        }
    }

    /// Every kind label, in menu order.
    pub const LABELS: [&'static str; 4] = ["coding", "quiz", "debugging", "project"];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    pub id: ActivityId,
    pub title: String,
    pub description: String,
    pub kind: ActivityKind,
    pub difficulty: Difficulty,
    pub points: u32,
    pub time_limit_secs: Option<u32>,
    pub starter_code: Option<String>,
    pub expected_output: Option<String>,
}

impl ActivityDraft {
    /// Validate the draft into an activity.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError` for a blank title, an empty quiz, or a quiz
    /// question whose correct index does not point at one of its options.
    pub fn validate(self) -> Result<Activity, ActivityError> {
        if self.title.trim().is_empty() {
            return Err(ActivityError::EmptyTitle);
        }
        if let ActivityKind::Quiz { questions } = &self.kind {
            if questions.is_empty() {
                return Err(ActivityError::EmptyQuiz);
            }
            for (question, q) in questions.iter().enumerate() {
                if q.options.is_empty() {
                    return Err(ActivityError::NoOptions { question });
                }
                if q.correct >= q.options.len() {
                    return Err(ActivityError::CorrectIndexOutOfRange {
                        question,
                        index: q.correct,
                        len: q.options.len(),
                    });
                }
            }
        }

        Ok(Activity {
            id: self.id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            difficulty: self.difficulty,
            points: self.points,
            time_limit_secs: self.time_limit_secs.filter(|secs| *secs > 0),
            starter_code: self.starter_code,
            expected_output: self.expected_output,
        })
    }
}

/// A standalone practice item worth a fixed number of points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    id: ActivityId,
    title: String,
    description: String,
    kind: ActivityKind,
    difficulty: Difficulty,
    points: u32,
    time_limit_secs: Option<u32>,
    starter_code: Option<String>,
    expected_output: Option<String>,
}

impl Activity {
    #[must_use]
    pub fn id(&self) -> ActivityId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn kind(&self) -> &ActivityKind {
        &self.kind
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Countdown length; `None` means untimed.
    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u32> {
        self.time_limit_secs
    }

    #[must_use]
    pub fn starter_code(&self) -> Option<&str> {
        self.starter_code.as_deref()
    }

    #[must_use]
    pub fn expected_output(&self) -> Option<&str> {
        self.expected_output.as_deref()
    }

    /// Quiz sub-questions; empty for non-quiz kinds.
    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        match &self.kind {
            ActivityKind::Quiz { questions } => questions,
            ActivityKind::Coding | ActivityKind::Debugging | ActivityKind::Project => &[],
        }
    }
}
