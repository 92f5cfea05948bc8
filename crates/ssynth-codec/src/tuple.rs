//! Tuple markers.
//!
//! JSON has one sequence type, so a tuple is written as
//! `{"is_tuple": true, "items": [...]}` and read back as a tuple the moment
//! such an object is recognized. Both directions recurse post-order, so a
//! tuple nested inside a list inside a tuple comes back exactly.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::resolve::Node;

pub const TUPLE_FLAG: &str = "is_tuple";
pub const TUPLE_ITEMS: &str = "items";

/// Marker object for already-encoded tuple items.
pub fn wrap(items: Vec<Value>) -> Value {
    let mut marker = Map::with_capacity(2);
    marker.insert(TUPLE_FLAG.to_string(), Value::Bool(true));
    marker.insert(TUPLE_ITEMS.to_string(), Value::Array(items));
    Value::Object(marker)
}

/// Turn a resolved object back into a tuple if it is a marker.
///
/// Only an object with exactly the two marker keys, a `true` flag and a
/// list of items qualifies; anything else stays a mapping.
pub(crate) fn unwrap(mut fields: IndexMap<String, Node<'_>>) -> Node<'_> {
    let is_marker = fields.len() == 2
        && matches!(fields.get(TUPLE_FLAG), Some(Node::Bool(true)))
        && matches!(fields.get(TUPLE_ITEMS), Some(Node::List(_)));
    if is_marker && let Some(Node::List(items)) = fields.shift_remove(TUPLE_ITEMS) {
        return Node::Tuple(items);
    }
    Node::Map(fields)
}
