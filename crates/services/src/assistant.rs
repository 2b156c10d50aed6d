use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::config::DEFAULT_ASSISTANT_DELAY;
use crate::error::AssistantError;

/// Stock answers returned by the assistant.
pub const CANNED_RESPONSES: [&str; 5] = [
    "Python is a versatile programming language that's great for beginners because of its readable syntax and extensive libraries. It's commonly used in web development, data science, automation, and artificial intelligence.",
    "To get started with Python, I recommend installing Python from python.org, then trying a simple 'Hello, World!' program. Focus on understanding variables, data types, and basic operations first.",
    "Python functions are defined using the 'def' keyword. They help organize code into reusable blocks. For example: def greet(name): return f'Hello, {name}!'",
    "Lists in Python are ordered collections that can hold different data types. You can create them with square brackets: [1, 2, 3] and modify them using methods like append(), remove(), and pop().",
    "Python's object-oriented programming allows you to create classes and objects. Classes are blueprints for objects, and objects are instances of classes with their own data and methods.",
];

/// Chooses which canned response to return.
pub trait ResponsePicker: Send + Sync {
    /// Return an index below `count`.
    fn pick(&self, count: usize) -> usize;
}

/// Uniform random choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl ResponsePicker for RandomPicker {
    fn pick(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        rand::rng().random_range(0..count)
    }
}

/// Stand-in assistant: no model is queried, it answers from a fixed set
/// after an artificial delay.
#[derive(Clone)]
pub struct AssistantService {
    delay: Duration,
    picker: Arc<dyn ResponsePicker>,
}

impl Default for AssistantService {
    fn default() -> Self {
        Self::new(DEFAULT_ASSISTANT_DELAY)
    }
}

impl AssistantService {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self::with_picker(delay, Arc::new(RandomPicker))
    }

    #[must_use]
    pub fn with_picker(delay: Duration, picker: Arc<dyn ResponsePicker>) -> Self {
        Self { delay, picker }
    }

    /// Answer a free-text question.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::EmptyQuestion` for a blank question, without
    /// waiting.
    pub async fn ask(&self, question: &str) -> Result<&'static str, AssistantError> {
        if question.trim().is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }
        tokio::time::sleep(self.delay).await;
        let index = self.picker.pick(CANNED_RESPONSES.len());
        let response = CANNED_RESPONSES
            .get(index)
            .copied()
            .unwrap_or(CANNED_RESPONSES[0]);
        tracing::debug!(response_index = index, "assistant answered");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    struct Fixed(usize);

    impl ResponsePicker for Fixed {
        fn pick(&self, _count: usize) -> usize {
            self.0
        }
    }

    #[tokio::test(start_paused = true)]
    async fn answers_after_the_configured_delay() {
        let assistant = AssistantService::with_picker(Duration::from_millis(1500), Arc::new(Fixed(2)));
        let started = Instant::now();
        let answer = assistant.ask("How do I define a function?").await.unwrap();
        assert_eq!(answer, CANNED_RESPONSES[2]);
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn blank_questions_are_rejected() {
        let assistant = AssistantService::new(Duration::ZERO);
        assert_eq!(assistant.ask("   \n").await, Err(AssistantError::EmptyQuestion));
    }

    #[tokio::test]
    async fn out_of_range_pick_falls_back_to_first_response() {
        let assistant = AssistantService::with_picker(Duration::ZERO, Arc::new(Fixed(42)));
        assert_eq!(assistant.ask("What is Python?").await, Ok(CANNED_RESPONSES[0]));
    }

    #[test]
    fn random_picker_stays_in_range() {
        for _ in 0..100 {
            assert!(RandomPicker.pick(CANNED_RESPONSES.len()) < CANNED_RESPONSES.len());
        }
        assert_eq!(RandomPicker.pick(0), 0);
    }
}
