use serde::Serialize;
use std::fmt;

use crate::model::ids::LessonId;

//
// ─── ACHIEVEMENTS ──────────────────────────────────────────────────────────────
//

/// Milestones unlocked by the number of distinct completed lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Achievement {
    #[serde(rename = "First Steps")]
    FirstSteps,
    #[serde(rename = "Python Explorer")]
    PythonExplorer,
    #[serde(rename = "Python Master")]
    PythonMaster,
}

impl Achievement {
    /// Evaluation order of the unlock rules.
    pub const ALL: [Achievement; 3] = [
        Achievement::FirstSteps,
        Achievement::PythonExplorer,
        Achievement::PythonMaster,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Achievement::FirstSteps => "First Steps",
            Achievement::PythonExplorer => "Python Explorer",
            Achievement::PythonMaster => "Python Master",
        }
    }

    /// Completed-lesson count at which the achievement unlocks.
    ///
    /// The count must be hit exactly; a jump past it never unlocks.
    #[must_use]
    pub fn threshold(self) -> usize {
        match self {
            Achievement::FirstSteps => 1,
            Achievement::PythonExplorer => 10,
            Achievement::PythonMaster => 25,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//
// ─── USER PROGRESS ─────────────────────────────────────────────────────────────
//

/// The learner's mutable aggregate.
///
/// Only `ProgressStore` mutates it; everything else receives snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    completed_lessons: Vec<LessonId>,
    total_score: u64,
    current_streak: u32,
    achievements: Vec<Achievement>,
}

impl UserProgress {
    /// Rehydrate progress from a stored snapshot.
    ///
    /// Duplicate ids and achievements collapse to their first occurrence and
    /// the untracked sentinel is dropped, so the invariants hold no matter
    /// what was written.
    #[must_use]
    pub fn from_persisted(
        completed_lessons: impl IntoIterator<Item = LessonId>,
        total_score: u64,
        current_streak: u32,
        achievements: impl IntoIterator<Item = Achievement>,
    ) -> Self {
        let mut progress = Self {
            total_score,
            current_streak,
            ..Self::default()
        };
        for id in completed_lessons {
            if id.is_tracked() && !progress.completed_lessons.contains(&id) {
                progress.completed_lessons.push(id);
            }
        }
        for achievement in achievements {
            if !progress.achievements.contains(&achievement) {
                progress.achievements.push(achievement);
            }
        }
        progress
    }

    /// Completed lesson ids in the order they were first completed.
    #[must_use]
    pub fn completed_lessons(&self) -> &[LessonId] {
        &self.completed_lessons
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_lessons.len()
    }

    #[must_use]
    pub fn is_completed(&self, id: LessonId) -> bool {
        self.completed_lessons.contains(&id)
    }

    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    #[must_use]
    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// Inserts a tracked id; returns true if it was not present before.
    pub(crate) fn insert_completed(&mut self, id: LessonId) -> bool {
        if !id.is_tracked() || self.completed_lessons.contains(&id) {
            return false;
        }
        self.completed_lessons.push(id);
        true
    }

    pub(crate) fn add_score(&mut self, score: u32) {
        self.total_score = self.total_score.saturating_add(u64::from(score));
    }

    pub(crate) fn bump_streak(&mut self) {
        self.current_streak = self.current_streak.saturating_add(1);
    }

    /// Unlocks the achievement; returns true if it was not unlocked before.
    pub(crate) fn unlock(&mut self, achievement: Achievement) -> bool {
        if self.achievements.contains(&achievement) {
            return false;
        }
        self.achievements.push(achievement);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achievement_names_round_trip() {
        for achievement in Achievement::ALL {
            assert_eq!(Achievement::from_name(achievement.name()), Some(achievement));
        }
        assert_eq!(Achievement::from_name("Speed Runner"), None);
    }

    #[test]
    fn from_persisted_normalizes_snapshot() {
        let progress = UserProgress::from_persisted(
            [LessonId::new(3), LessonId::UNTRACKED, LessonId::new(3), LessonId::new(1)],
            40,
            6,
            [Achievement::FirstSteps, Achievement::FirstSteps],
        );
        assert_eq!(progress.completed_lessons(), [LessonId::new(3), LessonId::new(1)]);
        assert_eq!(progress.achievements(), [Achievement::FirstSteps]);
        assert_eq!(progress.total_score(), 40);
        assert_eq!(progress.current_streak(), 6);
    }

    #[test]
    fn serializes_with_display_names() {
        let progress = UserProgress::from_persisted(
            [LessonId::new(1)],
            10,
            1,
            [Achievement::FirstSteps],
        );
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(
            json,
            r#"{"completedLessons":[1],"totalScore":10,"currentStreak":1,"achievements":["First Steps"]}"#
        );
    }
}
