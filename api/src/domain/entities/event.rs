//! Event domain entity
//!
//! A fight card. Deleting an event deletes its fights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EventId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub location: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to schedule an event
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub location: Option<String>,
    pub date: DateTime<Utc>,
}

/// Partial update of an event. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl EventUpdate {
    pub fn apply_to(&self, event: &Event) -> Event {
        let mut next = event.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if self.location.is_some() {
            next.location = self.location.clone();
        }
        if let Some(date) = self.date {
            next.date = date;
        }
        next
    }
}
