//! Bound query
//!
//! The finalized SQL text of a statement together with its named parameter
//! mappings. The interceptor mutates it in place before execution.

use serde_json::Value;
use std::collections::HashMap;

/// A named placeholder, bound in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMapping {
    pub property: String,
}

impl ParameterMapping {
    pub fn new(property: &str) -> Self {
        Self {
            property: property.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoundQuery {
    sql: String,
    parameter_mappings: Option<Vec<ParameterMapping>>,
    parameter_object: Value,
    additional_parameters: HashMap<String, Value>,
}

impl BoundQuery {
    /// Create a bound query. `parameter_object` supplies values for the mappings;
    /// a JSON object is looked up by property name, any other value is bound as-is.
    pub fn new(sql: &str, parameter_object: Value) -> Self {
        Self {
            sql: sql.to_string(),
            parameter_mappings: None,
            parameter_object,
            additional_parameters: HashMap::new(),
        }
    }

    /// Append a mapping for `property`
    pub fn with_mapping(mut self, property: &str) -> Self {
        self.push_mapping(ParameterMapping::new(property));
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn set_sql(&mut self, sql: String) {
        self.sql = sql;
    }

    pub fn parameter_object(&self) -> &Value {
        &self.parameter_object
    }

    pub fn parameter_mappings(&self) -> Option<&[ParameterMapping]> {
        self.parameter_mappings.as_deref()
    }

    /// Mappings as a mutable vec, created empty if the query has none yet
    pub fn ensure_parameter_mappings(&mut self) -> &mut Vec<ParameterMapping> {
        self.parameter_mappings.get_or_insert_with(Vec::new)
    }

    pub fn push_mapping(&mut self, mapping: ParameterMapping) {
        self.ensure_parameter_mappings().push(mapping);
    }

    pub fn has_additional_parameter(&self, name: &str) -> bool {
        self.additional_parameters.contains_key(name)
    }

    pub fn additional_parameter(&self, name: &str) -> Option<&Value> {
        self.additional_parameters.get(name)
    }

    pub fn set_additional_parameter(&mut self, name: &str, value: Value) {
        self.additional_parameters.insert(name.to_string(), value);
    }
}
