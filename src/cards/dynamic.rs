//! Values resolved against a card's attributes at draw time.
//!
//! A `DynamicValue` is authored once as part of a design and reused for
//! every card drawn with it. It either holds a constant, reads an
//! attribute directly, or maps an attribute through a lookup table
//! (e.g. suit index to suit icon).
//!
//! Resolution never mutates the store and never fails: anything that
//! can't be resolved reads as `0`, `""` or no image.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::attributes::{parse_int, AttributeId, AttributeStore, AttributeValue};
use crate::core::Image;

/// A constant owned by the design: a number, a string or an image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignValue {
    /// Integer constant (colour index, repeat count).
    Int(i64),
    /// Text constant.
    Text(String),
    /// Image constant (icon, pip).
    Image(Image),
}

impl From<i64> for DesignValue {
    fn from(v: i64) -> Self {
        DesignValue::Int(v)
    }
}

impl From<i32> for DesignValue {
    fn from(v: i32) -> Self {
        DesignValue::Int(v as i64)
    }
}

impl From<&str> for DesignValue {
    fn from(v: &str) -> Self {
        DesignValue::Text(v.to_string())
    }
}

impl From<String> for DesignValue {
    fn from(v: String) -> Self {
        DesignValue::Text(v)
    }
}

impl From<Image> for DesignValue {
    fn from(v: Image) -> Self {
        DesignValue::Image(v)
    }
}

/// One row of a lookup table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    /// Attribute value this row matches.
    pub key: AttributeValue,
    /// Value produced on a match.
    pub payload: DesignValue,
}

/// Ordered attribute-value to payload table. First match wins.
///
/// ## Example
///
/// ```
/// use card_face::cards::{AttributeValue, DesignValue, LookupTable};
///
/// let names = LookupTable::new()
///     .with(1, "Ace")
///     .with(11, "Jack")
///     .with("1", "never reached");
///
/// assert_eq!(names.get(&AttributeValue::Int(1)), Some(&DesignValue::from("Ace")));
/// assert_eq!(names.get(&AttributeValue::from("11")), Some(&DesignValue::from("Jack")));
/// assert_eq!(names.get(&AttributeValue::Int(5)), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupTable {
    entries: Vec<LookupEntry>,
}

impl LookupTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<AttributeValue>, payload: impl Into<DesignValue>) -> Self {
        self.push(key, payload);
        self
    }

    /// Append a row.
    pub fn push(&mut self, key: impl Into<AttributeValue>, payload: impl Into<DesignValue>) {
        self.entries.push(LookupEntry {
            key: key.into(),
            payload: payload.into(),
        });
    }

    /// Payload of the first row whose key matches `value`.
    #[must_use]
    pub fn get(&self, value: &AttributeValue) -> Option<&DesignValue> {
        self.entries
            .iter()
            .find(|entry| entry.key.same_as(value))
            .map(|entry| &entry.payload)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The result of resolving a `DynamicValue`, borrowed from wherever it lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Read from the card's attributes.
    Attribute(&'a AttributeValue),
    /// Read from the design (constant or lookup payload).
    Design(&'a DesignValue),
}

impl<'a> Resolved<'a> {
    /// Numeric view.
    #[must_use]
    pub fn as_int(self) -> i64 {
        match self {
            Resolved::Attribute(v) => v.as_int(),
            Resolved::Design(DesignValue::Int(v)) => *v,
            Resolved::Design(DesignValue::Text(s)) => parse_int(s),
            Resolved::Design(DesignValue::Image(_)) => 0,
        }
    }

    /// String view. Images have no string form.
    #[must_use]
    pub fn as_text(self) -> Cow<'a, str> {
        match self {
            Resolved::Attribute(v) => v.as_text(),
            Resolved::Design(DesignValue::Int(v)) => Cow::Owned(v.to_string()),
            Resolved::Design(DesignValue::Text(s)) => Cow::Borrowed(s),
            Resolved::Design(DesignValue::Image(_)) => Cow::Borrowed(""),
        }
    }

    /// Image view. Only design-owned images resolve.
    #[must_use]
    pub fn as_image(self) -> Option<&'a Image> {
        match self {
            Resolved::Design(DesignValue::Image(image)) => Some(image),
            _ => None,
        }
    }
}

/// Where a drawn value comes from.
///
/// ## Example
///
/// ```
/// use card_face::cards::{AttributeStore, DynamicValue, LookupTable};
///
/// let rank = DynamicValue::from_attribute(0);
/// let color = DynamicValue::from_lookup(1, LookupTable::new().with("hearts", 2).with("spades", 15));
///
/// let card = AttributeStore::new().with(0, 10).with(1, "hearts");
///
/// assert_eq!(rank.as_text(&card), "10");
/// assert_eq!(color.as_int(&card), 2);
/// assert_eq!(DynamicValue::int(3).as_int(&AttributeStore::new()), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DynamicValue {
    /// Same value for every card.
    Static(DesignValue),
    /// The raw value of an attribute.
    FromAttribute(AttributeId),
    /// An attribute's value mapped through a table.
    FromLookup {
        attribute: AttributeId,
        table: LookupTable,
    },
}

impl DynamicValue {
    /// A constant.
    #[must_use]
    pub fn constant(value: impl Into<DesignValue>) -> Self {
        DynamicValue::Static(value.into())
    }

    /// An integer constant.
    #[must_use]
    pub fn int(value: i64) -> Self {
        DynamicValue::Static(DesignValue::Int(value))
    }

    /// A text constant.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        DynamicValue::Static(DesignValue::Text(value.into()))
    }

    /// An image constant.
    #[must_use]
    pub fn image(value: Image) -> Self {
        DynamicValue::Static(DesignValue::Image(value))
    }

    /// Read an attribute directly.
    #[must_use]
    pub fn from_attribute(id: impl Into<AttributeId>) -> Self {
        DynamicValue::FromAttribute(id.into())
    }

    /// Map an attribute through a lookup table.
    ///
    /// Rows match on the stringified value rather than the exact typed
    /// value: a card holding `Int(7)` picks the row keyed `"7"`, the same
    /// rule `AttributeStore::equals` uses. The first matching row wins.
    #[must_use]
    pub fn from_lookup(id: impl Into<AttributeId>, table: LookupTable) -> Self {
        DynamicValue::FromLookup {
            attribute: id.into(),
            table,
        }
    }

    /// Resolve against a card. `None` when the attribute is unset or no
    /// table row matches.
    #[must_use]
    pub fn resolve<'a>(&'a self, store: &'a AttributeStore) -> Option<Resolved<'a>> {
        match self {
            DynamicValue::Static(value) => Some(Resolved::Design(value)),
            DynamicValue::FromAttribute(id) => store.get(*id).map(Resolved::Attribute),
            DynamicValue::FromLookup { attribute, table } => {
                let current = store.get(*attribute)?;
                table.get(current).map(Resolved::Design)
            }
        }
    }

    /// Numeric view, 0 when unresolved.
    #[must_use]
    pub fn as_int(&self, store: &AttributeStore) -> i64 {
        self.resolve(store).map_or(0, Resolved::as_int)
    }

    /// String view, empty when unresolved.
    #[must_use]
    pub fn as_text<'a>(&'a self, store: &'a AttributeStore) -> Cow<'a, str> {
        self.resolve(store).map_or(Cow::Borrowed(""), Resolved::as_text)
    }

    /// Image view, `None` when unresolved or not an image.
    ///
    /// Images only ever come from the design, so the result borrows
    /// the design and not the card.
    #[must_use]
    pub fn as_image(&self, store: &AttributeStore) -> Option<&Image> {
        match self {
            DynamicValue::Static(DesignValue::Image(image)) => Some(image),
            DynamicValue::Static(_) | DynamicValue::FromAttribute(_) => None,
            DynamicValue::FromLookup { attribute, table } => match table.get(store.get(*attribute)?)? {
                DesignValue::Image(image) => Some(image),
                _ => None,
            },
        }
    }
}

impl From<DesignValue> for DynamicValue {
    fn from(value: DesignValue) -> Self {
        DynamicValue::Static(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pip() -> Image {
        Image::from_rows(&["22", "22"])
    }

    #[test]
    fn test_static_ignores_store() {
        let value = DynamicValue::text("K");
        assert_eq!(value.as_text(&AttributeStore::new()), "K");
        assert_eq!(value.as_text(&AttributeStore::new().with(0, "Q")), "K");
    }

    #[test]
    fn test_from_attribute() {
        let value = DynamicValue::from_attribute(2);
        let card = AttributeStore::new().with(2, "12");

        assert_eq!(value.as_text(&card), "12");
        assert_eq!(value.as_int(&card), 12);
        assert!(value.as_image(&card).is_none());
    }

    #[test]
    fn test_unresolved_is_neutral() {
        let value = DynamicValue::from_attribute(7);
        let card = AttributeStore::new();

        assert!(value.resolve(&card).is_none());
        assert_eq!(value.as_int(&card), 0);
        assert_eq!(value.as_text(&card), "");
        assert!(value.as_image(&card).is_none());
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let table = LookupTable::new().with(1, "first").with("1", "second");
        let value = DynamicValue::from_lookup(0, table);

        assert_eq!(value.as_text(&AttributeStore::new().with(0, 1)), "first");
        assert_eq!(value.as_text(&AttributeStore::new().with(0, 2)), "");
        assert_eq!(value.as_text(&AttributeStore::new()), "");
    }

    #[test]
    fn test_lookup_matches_stringified() {
        let value = DynamicValue::from_lookup(0, LookupTable::new().with(7, "seven").with("queen", 12));

        assert_eq!(value.as_text(&AttributeStore::new().with(0, "7")), "seven");
        assert_eq!(value.as_text(&AttributeStore::new().with(0, "07")), "");
        assert_eq!(value.as_int(&AttributeStore::new().with(0, "queen")), 12);
    }

    #[test]
    fn test_lookup_image() {
        let table = LookupTable::new().with("hearts", pip()).with("spades", "no art");
        let value = DynamicValue::from_lookup(1, table);

        assert_eq!(value.as_image(&AttributeStore::new().with(1, "hearts")), Some(&pip()));
        assert!(value.as_image(&AttributeStore::new().with(1, "spades")).is_none());
        assert_eq!(value.as_text(&AttributeStore::new().with(1, "hearts")), "");
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(DynamicValue::text("42").as_int(&AttributeStore::new()), 42);
        assert_eq!(DynamicValue::text("x").as_int(&AttributeStore::new()), 0);
        assert_eq!(DynamicValue::image(pip()).as_int(&AttributeStore::new()), 0);
        assert_eq!(DynamicValue::int(-3).as_text(&AttributeStore::new()), "-3");
    }

    #[test]
    fn test_resolution_does_not_mutate() {
        let card = AttributeStore::new().with(0, 5);
        let before = card.clone();
        let _ = DynamicValue::from_attribute(0).as_text(&card);
        let _ = DynamicValue::from_lookup(0, LookupTable::new().with(5, 1)).as_int(&card);
        assert_eq!(card, before);
    }

    #[test]
    fn test_serialization() {
        let value = DynamicValue::from_lookup(3, LookupTable::new().with(0, "zero").with(1, pip()));
        let json = serde_json::to_string(&value).unwrap();
        let back: DynamicValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
