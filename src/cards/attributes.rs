//! Per-card attribute storage.
//!
//! A card is nothing more than a handful of attributes (rank, suit,
//! value, ...). The engine doesn't interpret them: designs refer to
//! them by `AttributeId` and decide at draw time what they look like.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Numbers (rank, value, suit index)
//! - `Text`: Strings (labels, names)
//!
//! Comparisons between attribute values always go through their
//! stringified form, so `Int(7)` and `Text("7")` are the same value.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DesignError;

/// Identifier for a card attribute. Games pick their own numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeId(pub i32);

impl AttributeId {
    /// Create a new attribute ID.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for AttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Attr({})", self.0)
    }
}

impl From<i32> for AttributeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Value for a card attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Integer value (rank, suit index).
    Int(i64),
    /// Text value (label, name).
    Text(String),
}

impl AttributeValue {
    /// Numeric view: text is parsed as an integer, failing to 0.
    #[must_use]
    pub fn as_int(&self) -> i64 {
        match self {
            AttributeValue::Int(v) => *v,
            AttributeValue::Text(s) => parse_int(s),
        }
    }

    /// String view.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            AttributeValue::Int(v) => Cow::Owned(v.to_string()),
            AttributeValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Compare stringified forms.
    #[must_use]
    pub fn same_as(&self, other: &AttributeValue) -> bool {
        match (self, other) {
            (AttributeValue::Int(a), AttributeValue::Int(b)) => a == b,
            _ => self.as_text() == other.as_text(),
        }
    }

    /// Check if this is what an unset attribute reads as ("" or "0").
    #[must_use]
    pub fn is_default(&self) -> bool {
        match self {
            AttributeValue::Int(v) => *v == 0,
            AttributeValue::Text(s) => s.is_empty() || s == "0",
        }
    }
}

/// Integer parse used by every numeric coercion in the crate.
pub(crate) fn parse_int(s: &str) -> i64 {
    s.trim().parse().unwrap_or(0)
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

/// The mutable state of one card: attribute id to value.
///
/// Ids are unique within a store. Entries keep insertion order, which
/// only matters for serialization and debugging output.
///
/// ## Example
///
/// ```
/// use card_face::cards::{AttributeId, AttributeStore};
///
/// const RANK: AttributeId = AttributeId::new(0);
/// const SUIT: AttributeId = AttributeId::new(1);
///
/// let card = AttributeStore::new().with(RANK, 12).with(SUIT, "hearts");
///
/// assert!(card.equals(RANK, "12"));
/// assert_eq!(card.get_text(SUIT), "hearts");
/// assert!(card.equals(AttributeId::new(9), 0)); // unset reads as 0 / ""
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeStore {
    // Cards rarely carry more than a handful of attributes.
    entries: SmallVec<[(AttributeId, AttributeValue); 8]>,
}

impl AttributeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute (builder pattern).
    #[must_use]
    pub fn with(mut self, id: impl Into<AttributeId>, value: impl Into<AttributeValue>) -> Self {
        self.set(id, value);
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, id: impl Into<AttributeId>) -> Option<&AttributeValue> {
        let id = id.into();
        self.entries.iter().find(|(k, _)| *k == id).map(|(_, v)| v)
    }

    /// Insert or overwrite an attribute.
    pub fn set(&mut self, id: impl Into<AttributeId>, value: impl Into<AttributeValue>) {
        let id = id.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((id, value)),
        }
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, id: impl Into<AttributeId>) -> Option<AttributeValue> {
        let id = id.into();
        let index = self.entries.iter().position(|(k, _)| *k == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Check if an attribute is set.
    #[must_use]
    pub fn contains(&self, id: impl Into<AttributeId>) -> bool {
        self.get(id).is_some()
    }

    /// Compare an attribute against a value by stringified form.
    ///
    /// An unset attribute equals `""` and `"0"` (and `0`), so designs can
    /// treat a missing flag the same as a cleared one.
    #[must_use]
    pub fn equals(&self, id: impl Into<AttributeId>, value: impl Into<AttributeValue>) -> bool {
        let value = value.into();
        match self.get(id) {
            Some(current) => current.same_as(&value),
            None => value.is_default(),
        }
    }

    /// Numeric view of an attribute, 0 if unset or not a number.
    #[must_use]
    pub fn get_int(&self, id: impl Into<AttributeId>) -> i64 {
        self.get(id).map_or(0, AttributeValue::as_int)
    }

    /// String view of an attribute, empty if unset.
    #[must_use]
    pub fn get_text(&self, id: impl Into<AttributeId>) -> Cow<'_, str> {
        self.get(id).map_or(Cow::Borrowed(""), AttributeValue::as_text)
    }

    /// Number of attributes set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Encode as a compact binary snapshot.
    pub fn encode(&self) -> Result<Vec<u8>, DesignError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`AttributeStore::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, DesignError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
