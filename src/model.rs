use crate::error::{Result, SampleError};
use indexmap::IndexMap;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Sample name to cURL command, in the order the YAML document lists them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SampleMap {
    samples: IndexMap<String, String>,
}

/// Borrowed view of one entry of a [`SampleMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample<'a> {
    pub name: &'a str,
    pub command: &'a str,
}

impl SampleMap {
    /// Read and validate the sample file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SampleError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text, path)
    }

    /// Parse a YAML document whose root maps sample names to commands.
    ///
    /// `<<` merge keys are resolved first. Values are never stringified: a
    /// number, boolean, null, sequence or nested mapping is rejected.
    /// `origin` only shows up in error messages.
    pub fn from_yaml_str(text: &str, origin: &Path) -> Result<Self> {
        let mut document: Value =
            serde_yaml::from_str(text).map_err(|e| SampleError::malformed(origin, e.to_string()))?;
        document
            .apply_merge()
            .map_err(|e| SampleError::malformed(origin, e.to_string()))?;

        let mapping = match document {
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(SampleError::malformed(
                    origin,
                    format!(
                        "expected a mapping of sample names to commands, found {}",
                        kind_of(&other)
                    ),
                ))
            }
        };

        let mut samples = IndexMap::with_capacity(mapping.len());
        for (index, (key, value)) in mapping.into_iter().enumerate() {
            let name = match key {
                Value::String(name) => name,
                other => {
                    return Err(SampleError::malformed(
                        origin,
                        format!("sample {} has a {} name, expected a string", index, kind_of(&other)),
                    ))
                }
            };

            if name.is_empty() {
                return Err(SampleError::malformed(
                    origin,
                    format!("sample {} has an empty name", index),
                ));
            }

            let command = match value {
                Value::String(command) => command,
                other => {
                    return Err(SampleError::malformed(
                        origin,
                        format!(
                            "sample '{}' maps to a {}, expected a string command",
                            name,
                            kind_of(&other)
                        ),
                    ))
                }
            };

            if samples.contains_key(&name) {
                return Err(SampleError::malformed(
                    origin,
                    format!("sample '{}' is defined more than once", name),
                ));
            }
            samples.insert(name, command);
        }

        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample<'_>> {
        self.samples.iter().map(|(name, command)| Sample {
            name: name.as_str(),
            command: command.as_str(),
        })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
