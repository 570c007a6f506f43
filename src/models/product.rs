use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Core product entity, serialized as `{"id", "name", "price"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Plain integer amount, no currency attached
    pub price: i64,
}

impl Product {
    /// Builds the stored record for `payload` under a server-chosen `id`.
    pub fn from_payload(id: i64, payload: ProductPayload) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body accepted by create and update.
///
/// Decoding is lenient: keys match field names case-insensitively, a later
/// duplicate key overwrites an earlier one, `null` leaves a field at its
/// current value, and unknown keys are skipped. A client `id` must still be an
/// integer or `null` but is otherwise discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPayload {
    pub name: String,
    pub price: i64,
}

impl ProductPayload {
    /// Decodes a raw request body. A JSON `null` yields the zero payload.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let payload: Option<Self> = serde_json::from_slice(body)?;
        Ok(payload.unwrap_or_default())
    }
}

enum PayloadField {
    Id,
    Name,
    Price,
}

impl PayloadField {
    /// All field names are ASCII without `k` or `s`, so ASCII folding matches
    /// full Unicode simple folding here.
    fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("id") {
            Some(Self::Id)
        } else if key.eq_ignore_ascii_case("name") {
            Some(Self::Name)
        } else if key.eq_ignore_ascii_case("price") {
            Some(Self::Price)
        } else {
            None
        }
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = ProductPayload;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a product object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut payload = ProductPayload::default();

        // Keys are applied in document order, so the last duplicate wins.
        while let Some(key) = map.next_key::<String>()? {
            match PayloadField::from_key(&key) {
                Some(PayloadField::Name) => {
                    if let Some(name) = map.next_value::<Option<String>>()? {
                        payload.name = name;
                    }
                }
                Some(PayloadField::Price) => {
                    if let Some(price) = map.next_value::<Option<i64>>()? {
                        payload.price = price;
                    }
                }
                Some(PayloadField::Id) => {
                    map.next_value::<Option<i64>>()?;
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(payload)
    }
}

impl<'de> Deserialize<'de> for ProductPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PayloadVisitor)
    }
}
