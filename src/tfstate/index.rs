use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use super::address;
use super::document::StateDocument;
use super::error::StateError;

/// Flattened mapping from canonical address strings to the values reachable
/// at those paths. Built once per parsed document, read-only afterwards.
///
/// Every leaf scalar gets an entry, and so does every intermediate
/// object/array node, so `aws_instance.web.tags` resolves as well as
/// `aws_instance.web.tags.Name`. Outputs map `output.<name>` straight to the
/// output value.
#[derive(Debug, Default)]
pub struct AddressIndex {
    entries: BTreeMap<String, Value>,
}

impl AddressIndex {
    pub fn build(document: &StateDocument) -> Result<Self, StateError> {
        let mut index = Self::default();

        for resource in &document.resources {
            let base = resource.base_address();
            for instance in &resource.instances {
                let root = match instance.index_key.as_ref() {
                    None | Some(Value::Null) => base.clone(),
                    Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {
                        format!("{base}[{n}]")
                    }
                    Some(Value::String(key)) => {
                        format!("{base}[{}]", address::quote_key(key))
                    }
                    Some(other) => {
                        return Err(StateError::Format(format!(
                            "unsupported index_key {other} on {base}"
                        )));
                    }
                };
                index_value(
                    &mut index.entries,
                    root,
                    Value::Object(instance.attributes.clone()),
                );
            }
        }

        for (name, output) in &document.outputs {
            index.entries.insert(format!("output.{name}"), output.value.clone());
        }

        Ok(index)
    }

    /// Every known address, in lexicographic order.
    pub fn addresses(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn get(&self, address: &str) -> Option<&Value> {
        self.entries.get(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Inserts `value` under `address` and recurses into object/array children.
fn index_value(entries: &mut BTreeMap<String, Value>, address: String, value: Value) {
    match &value {
        Value::Object(object) => {
            for (key, child) in object {
                let child_address = format!("{address}{}", address::object_step(key));
                index_value(entries, child_address, child.clone());
            }
        }
        Value::Array(items) => {
            for (position, child) in items.iter().enumerate() {
                let child_address = format!("{address}{}", address::array_step(position));
                index_value(entries, child_address, child.clone());
            }
        }
        _ => {}
    }
    entries.insert(address, value);
}

/// A value resolved from the index.
///
/// Borrows the indexed subtree; `bytes()` re-serializes it on demand. The
/// encoding is compact JSON that is byte-identical to the same subtree in a
/// full re-serialization of the parsed document (key order and decimal
/// number spelling are preserved; exponent-form numbers normalize to a
/// signed lowercase `e` once at parse time).
#[derive(Debug, Clone, Copy)]
pub struct LookupResult<'a> {
    value: &'a Value,
}

impl<'a> LookupResult<'a> {
    pub(crate) fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The matched value as parsed from the document.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Compact JSON encoding of the matched value. Strings keep their
    /// surrounding quotes; stripping is the presenter's job.
    pub fn bytes(&self) -> Vec<u8> {
        self.value.to_string().into_bytes()
    }
}

impl fmt::Display for LookupResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value, f)
    }
}
