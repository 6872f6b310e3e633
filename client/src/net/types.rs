//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! `ActivityCollection` keeps the backend's key order instead of sorting, so
//! cards render in the order the server lists them. Every fetch yields a
//! fresh collection; nothing here is patched in place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One activity as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-form description shown on the card.
    pub description: String,
    /// Human-readable schedule (e.g. `"Fridays, 3:30 PM - 5:00 PM"`).
    pub schedule: String,
    /// Capacity advertised by the backend; not enforced client-side.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub max_participants: i64,
    /// Registered participant emails in server order.
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Ordered mapping from activity name to [`Activity`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    entries: Vec<(String, Activity)>,
}

impl ActivityCollection {
    /// Build a collection from `(name, activity)` pairs. A repeated name keeps
    /// its first position and takes the later value.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let mut collection = Self::default();
        for (name, activity) in entries {
            collection.insert(name, activity);
        }
        collection
    }

    fn insert(&mut self, name: String, activity: Activity) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for ActivityCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = ActivityCollection;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut collection = ActivityCollection::default();
        while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
            collection.insert(name, activity);
        }
        Ok(collection)
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// Success body of `POST /activities/{name}/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// JSON body of `POST /activities/{name}/unregister`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregisterRequest {
    pub email: String,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
