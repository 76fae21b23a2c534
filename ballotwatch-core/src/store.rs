//! File-backed event store.
//!
//! The store owns the in-memory collection and mirrors it to a single JSON
//! file on every mutation. Writes are whole-collection snapshots; there are
//! no partial updates. A missing or unreadable file silently falls back to
//! the seed list.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BallotError, BallotResult};
use crate::event::{Event, EventDraft};
use crate::seed;

/// Current on-disk snapshot format version.
const SNAPSHOT_VERSION: u32 = 1;

/// Versioned on-disk payload. Earlier exports were a bare JSON array;
/// `load_events` still accepts those.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    events: Vec<Event>,
}

pub struct Store {
    path: PathBuf,
    events: Vec<Event>,
}

impl Store {
    /// Open the store at `path`. Corrupt or missing data is treated as
    /// absent and the seed list is used instead; no error surfaces.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let events = load_events(&path).unwrap_or_else(seed::seed_events);
        Store { path, events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Validate a draft, assign it a fresh id and prepend it to the
    /// collection. Nothing is stored when validation fails.
    pub fn add(&mut self, draft: EventDraft, created_at: DateTime<Utc>) -> BallotResult<Event> {
        if draft.name.trim().is_empty() {
            return Err(BallotError::Validation("a name is required".into()));
        }
        if draft.opens.is_none() {
            return Err(BallotError::Validation("an opens date is required".into()));
        }

        let event = Event {
            id: self.fresh_id(&draft.name, created_at),
            name: draft.name,
            location: draft.location,
            kind: draft.kind,
            opens: draft.opens,
            closes: draft.closes,
            notes: draft.notes,
        };

        self.events.insert(0, event.clone());
        self.persist()?;
        Ok(event)
    }

    /// Remove the event with the given id. Returns whether anything was
    /// removed. Confirmation is the caller's concern.
    pub fn remove(&mut self, id: &str) -> BallotResult<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Discard the stored collection and restore the seed list.
    pub fn reset(&mut self) -> BallotResult<()> {
        self.events = seed::seed_events();
        self.persist()
    }

    /// Pretty-printed JSON array of the current collection.
    pub fn export_json(&self) -> BallotResult<String> {
        serde_json::to_string_pretty(&self.events)
            .map_err(|e| BallotError::Serialization(e.to_string()))
    }

    /// Slug of the name plus the creation timestamp, with a numeric suffix
    /// if that still collides with an existing id.
    fn fresh_id(&self, name: &str, created_at: DateTime<Utc>) -> String {
        let base = format!("{}-{}", slug::slugify(name), created_at.timestamp_millis());
        if !self.contains_id(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.contains_id(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn contains_id(&self, id: &str) -> bool {
        self.events.iter().any(|e| e.id == id)
    }

    fn persist(&self) -> BallotResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            events: self.events.clone(),
        };
        let content = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| BallotError::Serialization(e.to_string()))?;

        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Read events from disk. Accepts the versioned snapshot and the legacy
/// bare-array format; anything else (including an unknown version) is
/// treated as absent.
fn load_events(path: &Path) -> Option<Vec<Event>> {
    let raw = std::fs::read_to_string(path).ok()?;

    if let Ok(snapshot) = serde_json::from_str::<Snapshot>(&raw) {
        if snapshot.version == SNAPSHOT_VERSION {
            return Some(snapshot.events);
        }
        return None;
    }

    serde_json::from_str::<Vec<Event>>(&raw).ok()
}
