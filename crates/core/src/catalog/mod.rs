//! Read-only content: lessons, practice activities and the Q&A reference.

mod builtin;

use std::collections::HashSet;

use thiserror::Error;

use crate::filter::{self, Facet};
use crate::model::{Activity, ActivityId, Lesson, LessonId, QaId, QaItem};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate lesson id {0}")]
    DuplicateLesson(LessonId),

    #[error("duplicate activity id {0}")]
    DuplicateActivity(ActivityId),

    #[error("duplicate Q&A id {0}")]
    DuplicateQa(QaId),
}

/// Validated content set. Order of each list is presentation order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lessons: Vec<Lesson>,
    activities: Vec<Activity>,
    qa: Vec<QaItem>,
}

impl Catalog {
    /// Assemble a catalog.
    ///
    /// Positive lesson ids and per-lesson exercise uniqueness are already
    /// guaranteed by `Lesson`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for a duplicate id within the lessons, the
    /// activities or the Q&A items.
    pub fn new(
        lessons: Vec<Lesson>,
        activities: Vec<Activity>,
        qa: Vec<QaItem>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for lesson in &lessons {
            if !seen.insert(lesson.id()) {
                return Err(CatalogError::DuplicateLesson(lesson.id()));
            }
        }

        let mut seen = HashSet::new();
        for activity in &activities {
            if !seen.insert(activity.id()) {
                return Err(CatalogError::DuplicateActivity(activity.id()));
            }
        }

        let mut seen = HashSet::new();
        for item in &qa {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateQa(item.id()));
            }
        }

        Ok(Self {
            lessons,
            activities,
            qa,
        })
    }

    /// The shipped Python curriculum.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled content fails validation.
    pub fn builtin() -> Result<Self, crate::Error> {
        builtin::catalog()
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    #[must_use]
    pub fn qa_items(&self) -> &[QaItem] {
        &self.qa
    }

    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id() == id)
    }

    #[must_use]
    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id() == id)
    }

    #[must_use]
    pub fn qa_item(&self, id: QaId) -> Option<&QaItem> {
        self.qa.iter().find(|q| q.id() == id)
    }

    /// The lesson numbered directly after `id`, if there is one.
    #[must_use]
    pub fn next_lesson(&self, id: LessonId) -> Option<&Lesson> {
        id.next().and_then(|next| self.lesson(next))
    }

    #[must_use]
    pub fn lesson_categories(&self) -> Vec<Facet<String>> {
        filter::category_facets(&self.lessons)
    }

    #[must_use]
    pub fn activity_kinds(&self) -> Vec<Facet<String>> {
        filter::category_facets(&self.activities)
    }

    #[must_use]
    pub fn qa_categories(&self) -> Vec<Facet<String>> {
        filter::category_facets(&self.qa)
    }
}
