//! Attribute value containers.
//!
//! The host runtime hands this layer three snapshots of every attribute
//! (prior state, configuration, tentative plan). Each snapshot is one of
//! these containers: possibly null, possibly not yet computed, possibly a
//! known raw value.

mod attr;
mod dynamic;

pub use attr::{AttrValue, ListValue, MapValue, StringValue};
pub use dynamic::DynValue;
