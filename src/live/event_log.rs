use tracing::warn;

use crate::types::{EventId, MatchEvent};

/// Ordered collection of persisted events for one match.
///
/// Events keep the order in which they were confirmed. Identity is the
/// authority-assigned id; an id is never present twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    /// Build a log from events fetched from the authority, dropping repeated ids
    pub fn new(events: Vec<MatchEvent>) -> Self {
        let mut log = Self::default();
        for event in events {
            log.append(event);
        }
        log
    }

    /// Append a confirmed event. Returns false if its id is already logged.
    pub fn append(&mut self, event: MatchEvent) -> bool {
        if self.contains(event.id) {
            warn!("EVENT_LOG: ignoring duplicate event id {}", event.id);
            return false;
        }
        self.events.push(event);
        true
    }

    /// Remove an event by identity
    pub fn remove(&mut self, id: EventId) -> Option<MatchEvent> {
        let index = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(index))
    }

    pub fn get(&self, id: EventId) -> Option<&MatchEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Events in match order: by minute, then by confirmation order
    pub fn timeline(&self) -> Vec<&MatchEvent> {
        let mut ordered: Vec<&MatchEvent> = self.events.iter().collect();
        ordered.sort_by_key(|e| e.minute);
        ordered
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a MatchEvent;
    type IntoIter = std::slice::Iter<'a, MatchEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
