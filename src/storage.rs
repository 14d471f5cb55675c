use crate::clock::Clock;
use crate::models::{PunchEvent, PunchKind};
use async_trait::async_trait;
use chrono::Local;
use std::{env, path::Path, path::PathBuf, sync::Arc};
use tokio::{fs, sync::Mutex};
use tracing::{error, warn};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode punch events: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write punch events: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of an append. The event exists even when it could not be made durable.
#[derive(Debug)]
pub struct Appended {
    pub event: PunchEvent,
    pub error: Option<StoreError>,
}

impl Appended {
    pub fn saved(&self) -> bool {
        self.error.is_none()
    }

    pub fn warning(&self) -> Option<String> {
        self.error
            .as_ref()
            .map(|err| format!("punch recorded but not saved: {err}"))
    }
}

/// Append-only log of punch events.
#[async_trait]
pub trait PointStore: Send + Sync {
    /// Every stored event in append order. Never fails; unreadable data loads as empty.
    async fn load(&self) -> Vec<PunchEvent>;

    /// Stamps a new event with a fresh id and the current time and appends it.
    async fn append(&self, kind: PunchKind) -> Appended;
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/points.json"))
}

fn new_event(clock: &dyn Clock, kind: PunchKind) -> PunchEvent {
    PunchEvent {
        id: Uuid::new_v4().to_string(),
        timestamp: clock.now_ms(),
        kind,
    }
}

/// Store backed by a single JSON file, rewritten in full on every append.
pub struct JsonFileStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
    events: Mutex<Vec<PunchEvent>>,
}

impl JsonFileStore {
    pub async fn open(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        let path = path.into();
        let events = load_events(&path).await;
        Self {
            path,
            clock,
            events: Mutex::new(events),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PointStore for JsonFileStore {
    async fn load(&self) -> Vec<PunchEvent> {
        self.events.lock().await.clone()
    }

    async fn append(&self, kind: PunchKind) -> Appended {
        let mut events = self.events.lock().await;
        let event = new_event(self.clock.as_ref(), kind);
        events.push(event.clone());

        let error = persist_events(&self.path, &events).await.err();
        if let Some(err) = &error {
            warn!(path = %self.path.display(), "punch {} kept in memory only: {err}", event.id);
        }

        Appended { event, error }
    }
}

pub async fn load_events(path: &Path) -> Vec<PunchEvent> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(events) => events,
            Err(err) => {
                error!("failed to parse data file: {err}");
                quarantine(path).await;
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Vec::new()
        }
    }
}

/// Moves an unreadable data file aside so the next append cannot overwrite it.
async fn quarantine(path: &Path) {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".corrupt-{}", Local::now().timestamp_millis()));
    let target = PathBuf::from(name);
    match fs::rename(path, &target).await {
        Ok(()) => error!(kept = %target.display(), "unreadable data file set aside"),
        Err(err) => error!("failed to set aside unreadable data file: {err}"),
    }
}

pub async fn persist_events(path: &Path, events: &[PunchEvent]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(events)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// In-memory store with the same contract, for tests and throwaway sessions.
pub struct MemoryStore {
    clock: Arc<dyn Clock>,
    events: Mutex<Vec<PunchEvent>>,
}

impl MemoryStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_events(clock, Vec::new())
    }

    pub fn with_events(clock: Arc<dyn Clock>, events: Vec<PunchEvent>) -> Self {
        Self {
            clock,
            events: Mutex::new(events),
        }
    }
}

#[async_trait]
impl PointStore for MemoryStore {
    async fn load(&self) -> Vec<PunchEvent> {
        self.events.lock().await.clone()
    }

    async fn append(&self, kind: PunchKind) -> Appended {
        let event = new_event(self.clock.as_ref(), kind);
        self.events.lock().await.push(event.clone());
        Appended { event, error: None }
    }
}
