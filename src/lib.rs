pub mod app;
pub mod clock;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod summary;
pub mod ui;
pub mod validation;

pub use app::router;
pub use clock::{Clock, SystemClock};
pub use state::AppState;
pub use storage::{resolve_data_path, JsonFileStore, PointStore};
