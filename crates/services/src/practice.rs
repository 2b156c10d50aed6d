use std::sync::Arc;

use pylearn_core::Catalog;
use pylearn_core::CompletionOutcome;
use pylearn_core::grader::{ActivityGrade, LessonGrade};
use pylearn_core::model::{ActivityId, LessonId};
use pylearn_core::session::{ActivitySession, LessonSession};

use crate::error::PracticeError;
use crate::progress_service::ProgressService;

/// Result of submitting a lesson's exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonSubmission {
    pub grade: LessonGrade,
    /// `None` when the lesson had already been completed before.
    pub recorded: Option<CompletionOutcome>,
    pub next_lesson: Option<LessonId>,
}

/// Result of submitting an activity, manually or by countdown expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySubmission {
    pub grade: ActivityGrade,
    pub recorded: CompletionOutcome,
}

/// Starts lesson and activity attempts and feeds their scores into progress.
#[derive(Clone)]
pub struct PracticeService {
    catalog: Arc<Catalog>,
    progress: Arc<ProgressService>,
}

impl PracticeService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, progress: Arc<ProgressService>) -> Self {
        Self { catalog, progress }
    }

    /// Open a lesson's exercises.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::LessonNotFound` for an unknown id.
    pub fn start_lesson(&self, id: LessonId) -> Result<LessonSession, PracticeError> {
        let lesson = self
            .catalog
            .lesson(id)
            .ok_or(PracticeError::LessonNotFound(id))?;
        let mut session = LessonSession::new(lesson.clone());
        session.start();
        Ok(session)
    }

    /// Grade the session and record the score the first time the lesson is
    /// completed. Returns `None` if the session was not in progress.
    pub async fn submit_lesson(&self, session: &mut LessonSession) -> Option<LessonSubmission> {
        let grade = session.submit()?;
        let lesson_id = session.lesson().id();
        let recorded = self
            .progress
            .record_first_completion(lesson_id, grade.score)
            .await;
        let next_lesson = self.catalog.next_lesson(lesson_id).map(|l| l.id());
        Some(LessonSubmission {
            grade,
            recorded,
            next_lesson,
        })
    }

    /// Open an activity with its starter code and countdown armed.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::ActivityNotFound` for an unknown id.
    pub fn start_activity(&self, id: ActivityId) -> Result<ActivitySession, PracticeError> {
        let activity = self
            .catalog
            .activity(id)
            .ok_or(PracticeError::ActivityNotFound(id))?;
        let mut session = ActivitySession::new(activity.clone());
        session.start();
        Ok(session)
    }

    /// Grade and record the activity. Returns `None` if it was not in progress.
    pub async fn submit_activity(&self, session: &mut ActivitySession) -> Option<ActivitySubmission> {
        let grade = session.submit()?;
        Some(self.record_activity(session.activity().id(), grade).await)
    }

    /// Record an already graded activity attempt.
    ///
    /// Activity scores are not tied to a lesson and never join the completed set.
    pub async fn record_activity(&self, id: ActivityId, grade: ActivityGrade) -> ActivitySubmission {
        tracing::debug!(activity_id = %id, score = grade.score, "recording activity");
        let recorded = self
            .progress
            .record_completion(LessonId::UNTRACKED, Some(grade.score))
            .await;
        ActivitySubmission { grade, recorded }
    }

    #[must_use]
    pub fn progress(&self) -> &Arc<ProgressService> {
        &self.progress
    }
}
