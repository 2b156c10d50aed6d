use std::sync::Arc;

use serde::Serialize;

use pylearn_core::Catalog;
use pylearn_core::filter::{self, CompletionVisibility, Facet, RecordFilter};
use pylearn_core::model::{
    Activity, ActivityId, Difficulty, Lesson, LessonId, QaId, QaItem, UserProgress,
};

/// Minutes budgeted per remaining lesson on the dashboard.
const MINUTES_PER_LESSON: usize = 25;

const DASHBOARD_LIST_LEN: usize = 3;

/// Progress overview computed from a snapshot and the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    pub completed_count: usize,
    pub total_lessons: usize,
    /// Rounded to the nearest whole percent.
    pub completion_percent: u32,
    pub total_score: u64,
    pub current_streak: u32,
    pub achievement_count: usize,
    pub minutes_remaining: usize,
    /// The last three completed lessons, in catalog order.
    pub recent: Vec<&'a Lesson>,
    /// The first three lessons not yet completed, in catalog order.
    pub up_next: Vec<&'a Lesson>,
}

/// Read-only access to the content catalog through the filter engine.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn lessons(
        &self,
        filter: &RecordFilter,
        visibility: CompletionVisibility,
        progress: &UserProgress,
    ) -> Vec<&Lesson> {
        filter::filter_records(self.catalog.lessons(), filter, |lesson| {
            visibility.allows(progress, lesson.id())
        })
    }

    /// Activities narrowed by kind (the filter's category facet) and difficulty.
    #[must_use]
    pub fn activities(&self, filter: &RecordFilter) -> Vec<&Activity> {
        filter::filter_records(self.catalog.activities(), filter, |_| true)
    }

    #[must_use]
    pub fn qa_items(&self, filter: &RecordFilter) -> Vec<&QaItem> {
        filter::filter_records(self.catalog.qa_items(), filter, |_| true)
    }

    #[must_use]
    pub fn lesson_categories(&self) -> Vec<Facet<String>> {
        self.catalog.lesson_categories()
    }

    #[must_use]
    pub fn activity_kinds(&self) -> Vec<Facet<String>> {
        self.catalog.activity_kinds()
    }

    #[must_use]
    pub fn qa_categories(&self) -> Vec<Facet<String>> {
        self.catalog.qa_categories()
    }

    #[must_use]
    pub fn difficulties(&self) -> [Facet<Difficulty>; 4] {
        filter::difficulty_facets()
    }

    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.catalog.lesson(id)
    }

    #[must_use]
    pub fn next_lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.catalog.next_lesson(id)
    }

    #[must_use]
    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.catalog.activity(id)
    }

    #[must_use]
    pub fn qa_item(&self, id: QaId) -> Option<&QaItem> {
        self.catalog.qa_item(id)
    }

    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn dashboard(&self, progress: &UserProgress) -> Dashboard<'_> {
        let lessons = self.catalog.lessons();
        let total_lessons = lessons.len();
        let completed_count = progress.completed_count();

        let completion_percent = if total_lessons == 0 {
            0
        } else {
            (completed_count as f64 / total_lessons as f64 * 100.0).round() as u32
        };

        let completed: Vec<&Lesson> = lessons
            .iter()
            .filter(|l| progress.is_completed(l.id()))
            .collect();
        let recent = completed[completed.len().saturating_sub(DASHBOARD_LIST_LEN)..].to_vec();
        let up_next = lessons
            .iter()
            .filter(|l| !progress.is_completed(l.id()))
            .take(DASHBOARD_LIST_LEN)
            .collect();

        Dashboard {
            completed_count,
            total_lessons,
            completion_percent,
            total_score: progress.total_score(),
            current_streak: progress.current_streak(),
            achievement_count: progress.achievements().len(),
            minutes_remaining: total_lessons.saturating_sub(completed_count) * MINUTES_PER_LESSON,
            recent,
            up_next,
        }
    }
}
