//! Card data: attributes and the values designs derive from them.
//!
//! ## Key Types
//!
//! - `AttributeId`: Caller-defined attribute identifier
//! - `AttributeValue`: Integer or text attribute value
//! - `AttributeStore`: One card's attributes
//! - `DynamicValue`: Constant, attribute or lookup, resolved per card
//! - `LookupTable`: Ordered attribute-value to payload mapping

pub mod attributes;
pub mod dynamic;

pub use attributes::{AttributeId, AttributeStore, AttributeValue};
pub use dynamic::{DesignValue, DynamicValue, LookupEntry, LookupTable, Resolved};
