//! Search and facet filtering shared by the lesson, activity and Q&A lists.
//!
//! Everything here is a pure function of its inputs: the same records, query
//! and facets always produce the same subsequence, in catalog order.

use std::fmt;
use std::str::FromStr;

use crate::model::{
    Activity, Difficulty, Lesson, LessonId, ParseDifficultyError, QaItem, UserProgress,
};

/// Label of the wildcard facet entry.
pub const ALL_LABEL: &str = "All";

//
// ─── FACETS ────────────────────────────────────────────────────────────────────
//

/// A facet selection: either no constraint or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }
}

impl<T> Facet<T> {
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

fn is_wildcard(raw: &str) -> bool {
    raw.is_empty() || raw == ALL_LABEL || raw == "all"
}

impl Facet<String> {
    /// Interpret a raw menu value; `""`, `"All"` and `"all"` mean no constraint.
    #[must_use]
    pub fn label(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if is_wildcard(&raw) {
            Facet::All
        } else {
            Facet::Only(raw)
        }
    }

    fn matches_str(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }
}

impl FromStr for Facet<Difficulty> {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_wildcard(s) {
            return Ok(Facet::All);
        }
        s.parse().map(Facet::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str(ALL_LABEL),
            Facet::Only(value) => value.fmt(f),
        }
    }
}

//
// ─── SEARCHABLE RECORDS ────────────────────────────────────────────────────────
//

/// A catalog record the filter engine can match against.
pub trait Searchable {
    /// Text fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against the category facet.
    fn category(&self) -> &str;

    fn difficulty(&self) -> Difficulty;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }

    fn category(&self) -> &str {
        (**self).category()
    }

    fn difficulty(&self) -> Difficulty {
        (**self).difficulty()
    }
}

impl Searchable for Lesson {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title(), self.description(), self.category()]
    }

    fn category(&self) -> &str {
        Lesson::category(self)
    }

    fn difficulty(&self) -> Difficulty {
        Lesson::difficulty(self)
    }
}

/// Activities facet on their kind ("coding", "quiz", ...) instead of a category.
impl Searchable for Activity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title(), self.description(), self.kind().label()]
    }

    fn category(&self) -> &str {
        self.kind().label()
    }

    fn difficulty(&self) -> Difficulty {
        Activity::difficulty(self)
    }
}

impl Searchable for QaItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.question(), self.answer(), self.category()];
        fields.extend(self.tags().iter().map(String::as_str));
        fields
    }

    fn category(&self) -> &str {
        QaItem::category(self)
    }

    fn difficulty(&self) -> Difficulty {
        QaItem::difficulty(self)
    }
}

//
// ─── FILTER ────────────────────────────────────────────────────────────────────
//

/// Current query and facet selections of one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub query: String,
    pub category: Facet<String>,
    pub difficulty: Facet<Difficulty>,
}

impl RecordFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Facet<String>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Facet<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Query and facet check for a single record; visibility is not applied.
    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        self.matches_query(record)
            && self.category.matches_str(record.category())
            && self.difficulty.matches(&record.difficulty())
    }

    fn matches_query<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Return the records that match `filter` and the caller's `visible` predicate,
/// in their original order.
pub fn filter_records<'a, T, F>(records: &'a [T], filter: &RecordFilter, visible: F) -> Vec<&'a T>
where
    T: Searchable,
    F: Fn(&T) -> bool,
{
    records
        .iter()
        .filter(|record| filter.matches(*record) && visible(*record))
        .collect()
}

/// Category menu for a catalog: the wildcard followed by each distinct
/// category in first-seen order.
pub fn category_facets<T: Searchable>(records: &[T]) -> Vec<Facet<String>> {
    let mut facets = vec![Facet::All];
    for record in records {
        let category = record.category();
        let seen = facets
            .iter()
            .any(|facet| matches!(facet, Facet::Only(existing) if existing == category));
        if !seen {
            facets.push(Facet::Only(category.to_string()));
        }
    }
    facets
}

/// Difficulty menu, independent of which levels the data actually uses.
#[must_use]
pub fn difficulty_facets() -> [Facet<Difficulty>; 4] {
    [
        Facet::All,
        Facet::Only(Difficulty::Beginner),
        Facet::Only(Difficulty::Intermediate),
        Facet::Only(Difficulty::Advanced),
    ]
}

//
// ─── COMPLETION VISIBILITY ─────────────────────────────────────────────────────
//

/// "Show completed" toggle of the lesson list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionVisibility {
    #[default]
    ShowAll,
    HideCompleted,
}

impl CompletionVisibility {
    #[must_use]
    pub fn allows(self, progress: &UserProgress, lesson: LessonId) -> bool {
        match self {
            CompletionVisibility::ShowAll => true,
            CompletionVisibility::HideCompleted => !progress.is_completed(lesson),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
