mod course;
mod health;
mod state;

pub use course::{Course, NewCourse};
pub use health::{Health, HealthStatus};
pub use state::AppState;
