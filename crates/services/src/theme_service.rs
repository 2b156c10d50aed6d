use std::sync::Arc;

use tokio::sync::Mutex;

use pylearn_core::model::Theme;
use storage::repository::{SlotKey, SlotRepository};

/// Holds the light/dark preference and mirrors it to the theme slot.
pub struct ThemeService {
    slots: Arc<dyn SlotRepository>,
    current: Mutex<Theme>,
}

impl ThemeService {
    /// Read the stored theme; a missing or unrecognised value means `Light`.
    pub async fn load(slots: Arc<dyn SlotRepository>) -> Self {
        let theme = match slots.read_slot(SlotKey::Theme).await {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unrecognised stored theme; using light");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read theme slot; using light");
                Theme::default()
            }
        };
        Self {
            slots,
            current: Mutex::new(theme),
        }
    }

    pub async fn current(&self) -> Theme {
        *self.current.lock().await
    }

    /// Flip between light and dark and persist the result.
    pub async fn toggle(&self) -> Theme {
        let mut current = self.current.lock().await;
        *current = current.toggled();
        self.persist(*current).await;
        *current
    }

    pub async fn set(&self, theme: Theme) {
        let mut current = self.current.lock().await;
        *current = theme;
        self.persist(theme).await;
    }

    async fn persist(&self, theme: Theme) {
        if let Err(err) = self.slots.write_slot(SlotKey::Theme, theme.as_str()).await {
            tracing::warn!(error = %err, theme = %theme, "failed to persist theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn defaults_to_light_for_missing_or_invalid_values() {
        let repo = Arc::new(InMemoryRepository::new());
        assert_eq!(ThemeService::load(repo.clone()).await.current().await, Theme::Light);

        repo.write_slot(SlotKey::Theme, "solarized").await.unwrap();
        assert_eq!(ThemeService::load(repo).await.current().await, Theme::Light);
    }

    #[tokio::test]
    async fn toggle_persists_new_theme() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = ThemeService::load(repo.clone()).await;

        assert_eq!(service.toggle().await, Theme::Dark);
        assert_eq!(
            repo.read_slot(SlotKey::Theme).await.unwrap().as_deref(),
            Some("dark")
        );

        let reloaded = ThemeService::load(repo.clone()).await;
        assert_eq!(reloaded.current().await, Theme::Dark);

        reloaded.set(Theme::Light).await;
        assert_eq!(
            repo.read_slot(SlotKey::Theme).await.unwrap().as_deref(),
            Some("light")
        );
    }
}
