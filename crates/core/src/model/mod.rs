mod activity;
mod difficulty;
mod ids;
mod lesson;
mod progress;
mod qa;
mod theme;

pub use activity::{Activity, ActivityDraft, ActivityError, ActivityKind, QuizQuestion};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use ids::{ActivityId, ExerciseId, LessonId, ParseIdError, QaId};
pub use lesson::{Exercise, ExerciseError, ExerciseKind, Lesson, LessonDraft, LessonError};
pub use progress::{Achievement, UserProgress};
pub use qa::QaItem;
pub use theme::Theme;
