use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// A Terraform state document in the version 4 on-disk format.
///
/// Deserialized once and never mutated; the address index clones whatever
/// subtrees it needs out of this model.
#[derive(Debug, Clone, Deserialize)]
pub struct StateDocument {
    pub version: u64,
    pub terraform_version: String,
    #[serde(default)]
    pub serial: Option<u64>,
    #[serde(default)]
    pub lineage: Option<String>,
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub outputs: BTreeMap<String, Output>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    /// Verbatim `module.<path>` prefix for resources inside modules.
    #[serde(default)]
    pub module: Option<String>,
    pub mode: ResourceMode,
    #[serde(rename = "type")]
    pub type_: String,
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub instances: Vec<Instance>,
}

/// Whether Terraform manages the resource or only reads it as a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMode {
    Managed,
    Data,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Instance {
    /// `count` index or `for_each` key; absent for single-instance resources.
    #[serde(default)]
    pub index_key: Option<Value>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Output {
    pub value: Value,
    /// The cty type expression Terraform records next to the value.
    #[serde(rename = "type", default)]
    pub type_: Option<Value>,
    #[serde(default)]
    pub sensitive: bool,
}

impl Resource {
    /// Canonical address shared by every instance of this resource,
    /// e.g. `module.net.data.aws_ami.app`.
    pub fn base_address(&self) -> String {
        let mut address = String::new();
        if let Some(module) = self.module.as_deref() {
            if !module.is_empty() {
                address.push_str(module);
                address.push('.');
            }
        }
        if self.mode == ResourceMode::Data {
            address.push_str("data.");
        }
        address.push_str(&self.type_);
        address.push('.');
        address.push_str(&self.name);
        address
    }
}
