//! Cycle-tolerant JSON encoding for arbitrary test parameter values
//!
//! Test parameters can be anything a test author passes in: plain scalars,
//! nested collections, user objects with fields, callables, and objects whose
//! introspection misbehaves. This crate models those inputs as [`Value`] and
//! turns them into JSON text that is always valid.
//!
//! # Example
//!
//! ```
//! use testspan_encode::{Record, Value, encode};
//!
//! let node = Record::new("Node");
//! node.set("name", "root");
//! node.set("next", node.clone());
//!
//! let json = encode(&Value::from(node.clone()));
//! assert_eq!(json, r#"{"name":"root","next":"<circular reference to Node>"}"#);
//! # node.clear();
//! ```

pub mod encoder;
pub mod error;
pub mod object;
pub mod value;

pub use encoder::{CYCLE_MARKER_PREFIX, encode, encode_value};
pub use error::InspectError;
pub use object::{FieldMap, Function, Inspect, ObjectRef, Opaque, Record};
pub use value::{Key, Value};
