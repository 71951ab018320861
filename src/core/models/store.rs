//! Attribute store
//!
//! Holds every attribute retrieved during one run. Attributes are kept in
//! retrieval order so that walking a family always visits instances in the
//! same order the agent returned them, which keeps per-instance failure
//! messages reproducible.

use std::collections::HashMap;

use super::{Attribute, Value};

/// Ordered collection of retrieved attributes, unique by identifier
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    attributes: Vec<Attribute>,
    index: HashMap<String, usize>,
}

impl AttributeStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing any previous value with the same id
    ///
    /// A replaced attribute keeps its original position.
    pub fn put(&mut self, attribute: Attribute) {
        if let Some(&slot) = self.index.get(&attribute.id) {
            self.attributes[slot] = attribute;
        } else {
            self.index.insert(attribute.id.clone(), self.attributes.len());
            self.attributes.push(attribute);
        }
    }

    /// Look up an attribute by exact identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Attribute> {
        self.index.get(id).map(|&slot| &self.attributes[slot])
    }

    /// Decoded text of an `OctetString` attribute
    ///
    /// Absent attributes and attributes of any other type yield an empty
    /// string; neither is treated as an error.
    #[must_use]
    pub fn get_string(&self, id: &str) -> String {
        match self.get(id).map(|a| &a.value) {
            Some(Value::OctetString(bytes)) => String::from_utf8_lossy(bytes).into_owned(),
            _ => String::new(),
        }
    }

    /// Every attribute under `prefix`, in retrieval order
    pub fn iter_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Attribute> + 'a {
        self.attributes.iter().filter(move |a| a.is_under(prefix))
    }

    /// Number of stored attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the store holds no attributes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Extend<Attribute> for AttributeStore {
    fn extend<T: IntoIterator<Item = Attribute>>(&mut self, iter: T) {
        for attribute in iter {
            self.put(attribute);
        }
    }
}

impl FromIterator<Attribute> for AttributeStore {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
