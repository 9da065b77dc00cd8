//! metrics/events.rs
//! Events, grouped by source type inside the envelope:
//! `{"apiKey": "", "events": {"<source type>": [...]}, "internalHostname": "<host>"}`.

use std::collections::{BTreeMap, HashMap};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{categories, envelope_keys, DEFAULT_EVENT_SOURCE_TYPE};
use crate::split::{MarshalError, Marshaler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    Normal,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAlertType {
    Error,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "msg_title")]
    pub title: String,
    #[serde(rename = "msg_text")]
    pub text: String,
    #[serde(rename = "timestamp")]
    pub ts: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<EventPriority>,
    pub host: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<EventAlertType>,
    pub aggregation_key: String,
    pub source_type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub event_type: String,
}

impl Event {
    fn group_key(&self) -> &str {
        if self.source_type_name.is_empty() {
            DEFAULT_EVENT_SOURCE_TYPE
        } else {
            &self.source_type_name
        }
    }
}

/// Groups in first-appearance order; items keep their relative order.
struct GroupedEvents<'a>(&'a [Event]);

impl Serialize for GroupedEvents<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<&Event>)> = Vec::new();
        for event in self.0 {
            let key = event.group_key();
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push((key, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(event);
        }

        let mut map = serializer.serialize_map(Some(groups.len()))?;
        for (key, events) in &groups {
            map.serialize_entry(key, events)?;
        }
        map.end()
    }
}

struct EventsEnvelope<'a> {
    hostname: &'a str,
    events: &'a [Event],
}

impl Serialize for EventsEnvelope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(envelope_keys::API_KEY, "")?;
        map.serialize_entry(envelope_keys::EVENTS, &GroupedEvents(self.events))?;
        map.serialize_entry(envelope_keys::INTERNAL_HOSTNAME, self.hostname)?;
        map.end()
    }
}

#[derive(Deserialize)]
struct OwnedEventsEnvelope {
    events: BTreeMap<String, Vec<Event>>,
}

#[derive(Debug, Clone, Default)]
pub struct EventsMarshaler {
    hostname: String,
}

impl EventsMarshaler {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self { hostname: hostname.into() }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Decode one (decompressed) payload back into its events.
    ///
    /// Groups come back ordered by source type name; order inside a group is
    /// the order they were marshaled in.
    pub fn decode(payload: &[u8]) -> Result<Vec<Event>, MarshalError> {
        let envelope: OwnedEventsEnvelope = serde_json::from_slice(payload)
            .map_err(MarshalError::decode(categories::EVENTS))?;
        Ok(envelope.events.into_values().flatten().collect())
    }
}

impl Marshaler for EventsMarshaler {
    type Item = Event;

    fn category(&self) -> &'static str {
        categories::EVENTS
    }

    fn marshal(&self, items: &[Event]) -> Result<Vec<u8>, MarshalError> {
        let envelope = EventsEnvelope { hostname: &self.hostname, events: items };
        serde_json::to_vec(&envelope).map_err(MarshalError::json(categories::EVENTS))
    }
}
