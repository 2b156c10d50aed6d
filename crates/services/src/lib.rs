#![forbid(unsafe_code)]

pub mod app_services;
pub mod assistant;
pub mod catalog_service;
pub mod config;
pub mod countdown;
pub mod error;
pub mod practice;
pub mod progress_service;
pub mod theme_service;

pub use app_services::AppServices;
pub use assistant::{AssistantService, RandomPicker, ResponsePicker};
pub use catalog_service::{CatalogService, Dashboard};
pub use config::AppConfig;
pub use countdown::run_countdown;
pub use error::{AppServicesError, AssistantError, ConfigError, PracticeError};
pub use practice::{ActivitySubmission, LessonSubmission, PracticeService};
pub use progress_service::{ProgressObserver, ProgressService, SlotPersistence};
pub use theme_service::ThemeService;
