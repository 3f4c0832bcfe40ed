// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The diagnostic guide record, as stored by the document repository.
//!
//! Guides arrive as loosely-shaped JSON: any text field may be missing, `null`,
//! or hold something that isn't a string. Every such value reads as `None`,
//! and the scorer treats `None` as the empty string. That keeps the engine
//! total over whatever the repository hands it.
//!
//! Nothing is thrown away. Keys the engine doesn't read (media attachments,
//! registering user, ...) and known keys holding the wrong shape are kept in
//! the `extra` maps, so a search result re-serializes as the original record
//! plus `relevanceScore` and `matchedFields`.
//!
//! | JSON path                              | Rust field                          |
//! |----------------------------------------|-------------------------------------|
//! | `generalData.topic`                    | `GeneralData::topic`                |
//! | `generalData.diagnosticGuide`          | `GeneralData::diagnostic_guide`     |
//! | `generalData.truckData`                | `GeneralData::truck_data`           |
//! | `generalData.workOrder`                | `GeneralData::work_order`           |
//! | `problems[i].problemTitle`             | `Problem::problem_title`            |
//! | `problems[i].problemDescription`       | `Problem::problem_description`      |
//! | `problems[i].activities[k].title`      | `Item::title`                       |
//! | `problems[i].solutions[j].title`       | `Item::title`                       |
//! | `problems[i].otherData`                | `Problem::other_data`               |

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A logged repair case: general metadata plus one or more problems.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct DiagnosticGuide {
    /// Opaque identifier. Numeric ids are kept as their decimal string.
    pub id: String,
    pub general_data: Option<GeneralData>,
    pub problems: Vec<Problem>,
    /// Creation timestamp in whatever shape the store wrote it. Display only.
    pub created_at: Option<Value>,
    /// Unread keys, plus known keys whose value had the wrong shape.
    pub extra: Map<String, Value>,
}

impl DiagnosticGuide {
    /// The guide's topic. Older records store it under `diagnosticGuide`,
    /// which is also used when `topic` is empty.
    pub fn topic(&self) -> Option<&str> {
        let general = self.general_data.as_ref()?;
        general
            .topic
            .as_deref()
            .filter(|topic| !topic.is_empty())
            .or(general.diagnostic_guide.as_deref())
    }

    pub fn truck_data(&self) -> Option<&str> {
        self.general_data.as_ref()?.truck_data.as_deref()
    }

    pub fn work_order(&self) -> Option<&str> {
        self.general_data.as_ref()?.work_order.as_deref()
    }

    /// Write this guide's keys into an open map, leaving out `reserved` keys
    /// found in `extra`. A raw value in `extra` is written in place of the
    /// typed field it was rejected from.
    pub(crate) fn serialize_entries<M: SerializeMap>(
        &self,
        map: &mut M,
        reserved: &[&str],
    ) -> Result<(), M::Error> {
        if !self.extra.contains_key("id") {
            map.serialize_entry("id", &self.id)?;
        }
        if let Some(general) = &self.general_data {
            map.serialize_entry("generalData", general)?;
        }
        if !self.extra.contains_key("problems") {
            map.serialize_entry("problems", &self.problems)?;
        }
        if let Some(created_at) = &self.created_at {
            map.serialize_entry("createdAt", created_at)?;
        }
        for (key, value) in &self.extra {
            if !reserved.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        Ok(())
    }
}

impl From<Map<String, Value>> for DiagnosticGuide {
    fn from(mut map: Map<String, Value>) -> Self {
        let id = match map.get("id") {
            Some(Value::String(_)) => take_text(&mut map, "id").unwrap_or_default(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let general_data = match map.get("generalData") {
            Some(Value::Object(_)) => match map.remove("generalData") {
                Some(Value::Object(general)) => Some(GeneralData::from(general)),
                _ => None,
            },
            _ => None,
        };
        let problems = take_records(&mut map, "problems");
        let created_at = map.remove("createdAt");

        Self {
            id,
            general_data,
            problems,
            created_at,
            extra: map,
        }
    }
}

impl Serialize for DiagnosticGuide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.serialize_entries(&mut map, &[])?;
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct GeneralData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Legacy name for `topic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_guide: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_order: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for GeneralData {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            topic: take_text(&mut map, "topic"),
            diagnostic_guide: take_text(&mut map, "diagnosticGuide"),
            truck_data: take_text(&mut map, "truckData"),
            work_order: take_text(&mut map, "workOrder"),
            extra: map,
        }
    }
}

/// One discrete issue within a guide.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Problem {
    pub problem_title: Option<String>,
    pub problem_description: Option<String>,
    pub activities: Vec<Item>,
    pub solutions: Vec<Item>,
    pub other_data: Option<String>,
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Problem {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            problem_title: take_text(&mut map, "problemTitle"),
            problem_description: take_text(&mut map, "problemDescription"),
            activities: take_records(&mut map, "activities"),
            solutions: take_records(&mut map, "solutions"),
            other_data: take_text(&mut map, "otherData"),
            extra: map,
        }
    }
}

impl Serialize for Problem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(title) = &self.problem_title {
            map.serialize_entry("problemTitle", title)?;
        }
        if let Some(description) = &self.problem_description {
            map.serialize_entry("problemDescription", description)?;
        }
        if !self.extra.contains_key("activities") {
            map.serialize_entry("activities", &self.activities)?;
        }
        if !self.extra.contains_key("solutions") {
            map.serialize_entry("solutions", &self.solutions)?;
        }
        if let Some(other) = &self.other_data {
            map.serialize_entry("otherData", other)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// An activity or solution step. Only the title is searched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Item {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            title: take_text(&mut map, "title"),
            extra: map,
        }
    }
}

// =============================================================================
// LENIENT FIELD EXTRACTION
// =============================================================================
//
// A known key is moved out of the raw map only when its value has the
// expected shape. Anything else stays in the map, ends up in `extra`, and is
// written back unchanged on serialization.

/// A string value. Non-strings (numbers, `null`, ...) are left in `map`.
fn take_text(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !map.get(key).is_some_and(Value::is_string) {
        return None;
    }
    match map.remove(key) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

/// An array of objects. Non-object elements are skipped; when any are, or
/// when the value isn't an array at all, the raw value stays in `map`.
fn take_records<T: From<Map<String, Value>>>(map: &mut Map<String, Value>, key: &str) -> Vec<T> {
    let clean = match map.get(key) {
        Some(Value::Array(items)) => items.iter().all(Value::is_object),
        _ => return Vec::new(),
    };
    if clean {
        match map.remove(key) {
            Some(Value::Array(items)) => records_from(items),
            _ => Vec::new(),
        }
    } else {
        match map.get(key) {
            Some(Value::Array(items)) => records_from(items.iter().cloned()),
            _ => Vec::new(),
        }
    }
}

/// Objects from a JSON array, in order. Other elements are dropped.
pub(crate) fn records_from<T, I>(items: I) -> Vec<T>
where
    T: From<Map<String, Value>>,
    I: IntoIterator<Item = Value>,
{
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(fields) => Some(T::from(fields)),
            _ => None,
        })
        .collect()
}
