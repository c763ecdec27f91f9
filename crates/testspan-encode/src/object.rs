//! Object handles and the introspection capability
//!
//! Anything that is not a plain scalar or collection enters the encoder as an
//! [`ObjectRef`]: a shared handle to something implementing [`Inspect`].
//! The handle's pointer doubles as the object's identity for cycle detection.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::InspectError;
use crate::value::Value;

/// Ordered `name -> value` view of an object's fields
pub type FieldMap = Vec<(String, Value)>;

/// Introspection capability for arbitrary objects.
///
/// Both methods are fallible on purpose: user objects may fail while being
/// looked at, and the encoder has to cope with that.
pub trait Inspect: Send + Sync {
    /// Name of the object's type, used in cycle markers.
    fn type_name(&self) -> &str;

    /// The object's field mapping, if it exposes one.
    fn fields(&self) -> Result<Option<FieldMap>, InspectError> {
        Ok(None)
    }

    /// Canonical debug representation.
    fn debug_string(&self) -> Result<String, InspectError>;
}

/// Shared handle to an inspectable object.
#[derive(Clone)]
pub struct ObjectRef(Arc<dyn Inspect>);

impl ObjectRef {
    pub fn new<T: Inspect + 'static>(object: Arc<T>) -> Self {
        Self(object)
    }

    /// Identity key: the address of the shared allocation.
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    pub fn inspect(&self) -> &dyn Inspect {
        self.0.as_ref()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl fmt::Debug for ObjectRef {
    // Never walks fields: the object graph may be cyclic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({} @ {:#x})", self.0.type_name(), self.id())
    }
}

/// A named object with mutable, ordered fields.
///
/// Records can point at each other (or themselves), so they are the way to
/// build cyclic graphs. Such cycles keep their `Arc`s alive until one of the
/// links is removed, e.g. with [`Record::clear`].
pub struct Record {
    type_name: String,
    fields: RwLock<FieldMap>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            type_name: type_name.into(),
            fields: RwLock::new(Vec::new()),
        })
    }

    pub fn with_fields<K, V, I>(type_name: impl Into<String>, fields: I) -> Arc<Self>
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let record = Self::new(type_name);
        for (name, value) in fields {
            record.set(name, value);
        }
        record
    }

    /// Set a field, replacing an existing one with the same name in place.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        let mut fields = self.fields.write().unwrap_or_else(PoisonError::into_inner);
        match fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => fields.push((name, value)),
        }
    }

    /// Drop all fields, breaking any reference cycles through this record.
    pub fn clear(&self) {
        self.fields
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Inspect for Record {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn fields(&self) -> Result<Option<FieldMap>, InspectError> {
        let fields = self
            .fields
            .read()
            .map_err(|e| InspectError::new("PoisonError", e.to_string()))?;
        Ok(Some(fields.clone()))
    }

    fn debug_string(&self) -> Result<String, InspectError> {
        Ok(format!(
            "<{} object at {:#x}>",
            self.type_name,
            self as *const Self as usize
        ))
    }
}

/// A callable parameter. It has no fields, only a name.
pub struct Function {
    name: String,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self { name: name.into() })
    }
}

impl Inspect for Function {
    fn type_name(&self) -> &str {
        "function"
    }

    fn debug_string(&self) -> Result<String, InspectError> {
        Ok(format!(
            "<function {} at {:#x}>",
            self.name,
            self as *const Self as usize
        ))
    }
}

/// An object known only by its textual form (dates, decimals, handles).
pub struct Opaque {
    type_name: String,
    repr: String,
}

impl Opaque {
    pub fn new(type_name: impl Into<String>, repr: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            type_name: type_name.into(),
            repr: repr.into(),
        })
    }
}

impl Inspect for Opaque {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn debug_string(&self) -> Result<String, InspectError> {
        Ok(self.repr.clone())
    }
}
