use serde::Serialize;

use crate::model::difficulty::Difficulty;
use crate::model::ids::QaId;

/// An entry of the Q&A reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaItem {
    id: QaId,
    question: String,
    answer: String,
    category: String,
    difficulty: Difficulty,
    tags: Vec<String>,
}

impl QaItem {
    #[must_use]
    pub fn new<S: Into<String>>(
        id: QaId,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
        tags: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into();
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            difficulty,
            tags: unique,
        }
    }

    #[must_use]
    pub fn id(&self) -> QaId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_tags_collapse() {
        let item = QaItem::new(
            QaId::new(1),
            "What is Python?",
            "A language.",
            "Basics",
            Difficulty::Beginner,
            ["python", "basics", "python"],
        );
        assert_eq!(item.tags(), ["python", "basics"]);
    }
}
