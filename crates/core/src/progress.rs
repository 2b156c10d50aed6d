//! Progress state machine: the single place where `UserProgress` changes.

use crate::model::{Achievement, LessonId, UserProgress};

/// What a single `record_completion` call changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub lesson_id: LessonId,
    /// True when the lesson entered the completed set on this call.
    pub newly_completed: bool,
    pub score_added: u32,
    /// Achievements unlocked by this call, in rule order.
    pub unlocked: Vec<Achievement>,
}

/// Owns the learner's progress and applies completions to it.
#[derive(Debug, Clone, Default)]
pub struct ProgressStore {
    progress: UserProgress,
}

impl ProgressStore {
    #[must_use]
    pub fn new(progress: UserProgress) -> Self {
        Self { progress }
    }

    #[must_use]
    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Record a completion event.
    ///
    /// A tracked `lesson_id` joins the completed set once; `LessonId::UNTRACKED`
    /// never does. `score` is added and the streak bumped on every call, even
    /// for a lesson that was already completed. Achievements are checked
    /// against the new set size and only fire on the call that hits their
    /// threshold exactly.
    pub fn record_completion(&mut self, lesson_id: LessonId, score: u32) -> CompletionOutcome {
        let newly_completed = self.progress.insert_completed(lesson_id);
        self.progress.add_score(score);
        self.progress.bump_streak();

        let size = self.progress.completed_count();
        let mut unlocked = Vec::new();
        for achievement in Achievement::ALL {
            if size == achievement.threshold() && self.progress.unlock(achievement) {
                unlocked.push(achievement);
            }
        }

        CompletionOutcome {
            lesson_id,
            newly_completed,
            score_added: score,
            unlocked,
        }
    }

    #[must_use]
    pub fn into_progress(self) -> UserProgress {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: u32) -> LessonId {
        LessonId::new(id)
    }

    #[test]
    fn starts_from_zero_state() {
        let store = ProgressStore::default();
        let progress = store.progress();
        assert!(progress.completed_lessons().is_empty());
        assert_eq!(progress.total_score(), 0);
        assert_eq!(progress.current_streak(), 0);
        assert!(progress.achievements().is_empty());
    }

    #[test]
    fn recompleting_a_lesson_keeps_one_id_but_adds_score_twice() {
        let mut store = ProgressStore::default();
        let first = store.record_completion(lesson(5), 10);
        let second = store.record_completion(lesson(5), 10);

        assert!(first.newly_completed);
        assert!(!second.newly_completed);
        assert_eq!(store.progress().completed_lessons(), [lesson(5)]);
        assert_eq!(store.progress().total_score(), 20);
        assert_eq!(store.progress().current_streak(), 2);
    }

    #[test]
    fn first_completion_unlocks_first_steps_once() {
        let mut store = ProgressStore::default();
        let outcome = store.record_completion(lesson(1), 0);
        assert_eq!(outcome.unlocked, vec![Achievement::FirstSteps]);

        let again = store.record_completion(lesson(1), 0);
        assert!(again.unlocked.is_empty());
        assert_eq!(store.progress().achievements(), [Achievement::FirstSteps]);
    }

    #[test]
    fn untracked_completion_adds_score_without_completing() {
        let mut store = ProgressStore::default();
        let outcome = store.record_completion(LessonId::UNTRACKED, 15);

        assert!(!outcome.newly_completed);
        assert!(outcome.unlocked.is_empty());
        assert!(store.progress().completed_lessons().is_empty());
        assert_eq!(store.progress().total_score(), 15);
        assert_eq!(store.progress().current_streak(), 1);
    }

    #[test]
    fn tenth_and_twenty_fifth_lessons_unlock_milestones() {
        let mut store = ProgressStore::default();
        let mut unlocked = Vec::new();
        for id in 1..=25 {
            let outcome = store.record_completion(lesson(id), 10);
            if !outcome.unlocked.is_empty() {
                unlocked.push((id, outcome.unlocked));
            }
        }

        assert_eq!(
            unlocked,
            vec![
                (1, vec![Achievement::FirstSteps]),
                (10, vec![Achievement::PythonExplorer]),
                (25, vec![Achievement::PythonMaster]),
            ]
        );
        assert_eq!(store.progress().total_score(), 250);
    }

    #[test]
    fn skipped_threshold_is_not_granted_retroactively() {
        let snapshot = UserProgress::from_persisted((1..=9).map(lesson), 0, 0, []);
        let mut store = ProgressStore::new(snapshot);
        store.record_completion(lesson(100), 0);
        assert!(store.progress().has_achievement(Achievement::PythonExplorer));

        let jumped = UserProgress::from_persisted((1..=11).map(lesson), 0, 0, []);
        let mut store = ProgressStore::new(jumped);
        let outcome = store.record_completion(lesson(12), 0);
        assert!(outcome.unlocked.is_empty());
        assert!(!store.progress().has_achievement(Achievement::PythonExplorer));
    }

    #[test]
    fn completed_set_is_monotonic_and_bounded_by_distinct_ids() {
        let calls = [3, 0, 3, 7, 1, 7, 0, 2, 3, 9, 1];
        let mut store = ProgressStore::default();
        let mut previous = 0;
        let mut distinct = std::collections::HashSet::new();

        for id in calls {
            if id != 0 {
                distinct.insert(id);
            }
            store.record_completion(lesson(id), 1);
            let size = store.progress().completed_count();
            assert!(size >= previous);
            assert!(size <= distinct.len());
            previous = size;
        }
        assert_eq!(previous, 5);
        assert_eq!(store.progress().current_streak(), 11);
    }

    #[test]
    fn achievement_set_only_grows() {
        let mut store = ProgressStore::default();
        let mut previous = 0;
        for id in [1, 1, 2, 3, 2, 4, 5, 6, 7, 8, 9, 10, 10] {
            store.record_completion(lesson(id), 0);
            let count = store.progress().achievements().len();
            assert!(count >= previous);
            previous = count;
        }
        assert_eq!(
            store.into_progress().achievements(),
            [Achievement::FirstSteps, Achievement::PythonExplorer]
        );
    }
}
