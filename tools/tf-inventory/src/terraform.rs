use std::{collections::HashMap, fs, net::IpAddr, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::error::InventoryError;

/// A single entry from `terraform output -json`.
///
/// Terraform also emits a `type` field describing the value's HCL type. We
/// inspect the JSON value directly so it is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TerraformOutput {
    #[serde(default)]
    pub sensitive: bool,
    pub value: Value,
}

impl TerraformOutput {
    /// Reads the output value as an ordered list of IP addresses.
    ///
    /// A list of strings is the usual shape for instance IP outputs, but a
    /// bare string is accepted too and treated as a single address. With a
    /// `limit` only the leading elements are parsed, the rest are never inspected.
    pub fn addresses(
        &self,
        name: &str,
        limit: Option<usize>,
    ) -> Result<Vec<IpAddr>, InventoryError> {
        match &self.value {
            Value::String(s) => Ok(vec![parse_address(name, s)?]),
            Value::Array(values) => {
                let limit = limit.unwrap_or(values.len());
                if values.len() > limit {
                    tracing::debug!(
                        "Ignoring {} additional addresses in '{}', use --all-hosts to include them",
                        values.len() - limit,
                        name
                    );
                }

                values
                    .iter()
                    .take(limit)
                    .map(|value| match value {
                        Value::String(s) => parse_address(name, s),
                        other => Err(InventoryError::InvalidAddress {
                            output: name.to_string(),
                            value: other.to_string(),
                        }),
                    })
                    .collect()
            }
            other => Err(InventoryError::UnexpectedValueType {
                output: name.to_string(),
                found: json_type_name(other),
            }),
        }
    }
}

/// All outputs of a Terraform root module, keyed by output name.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct TerraformOutputs(HashMap<String, TerraformOutput>);

impl TerraformOutputs {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();

        let json = fs::read_to_string(path).map_err(|source| InventoryError::Io {
            path: path.to_owned(),
            source,
        })?;

        Self::from_json_str(&json).map_err(|source| InventoryError::Json {
            path: path.to_owned(),
            source,
        })
    }

    pub fn get(&self, name: &str) -> Result<&TerraformOutput, InventoryError> {
        self.0
            .get(name)
            .ok_or_else(|| InventoryError::MissingOutput(name.to_string()))
    }

    /// Looks up `name` and returns up to `limit` of its addresses, which must not be empty.
    pub fn instance_addresses(
        &self,
        name: &str,
        limit: Option<usize>,
    ) -> Result<Vec<IpAddr>, InventoryError> {
        let output = self.get(name)?;

        if output.sensitive {
            tracing::warn!(
                "Terraform output '{}' is marked sensitive but will be written to the inventory in plain text",
                name
            );
        }

        let addresses = output.addresses(name, limit)?;
        if addresses.is_empty() {
            return Err(InventoryError::EmptyOutput(name.to_string()));
        }

        Ok(addresses)
    }
}

fn parse_address(output: &str, s: &str) -> Result<IpAddr, InventoryError> {
    s.trim()
        .parse()
        .map_err(|_| InventoryError::InvalidAddress {
            output: output.to_string(),
            value: format!("{s:?}"),
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
