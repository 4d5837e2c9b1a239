//! Parameter binding
//!
//! Resolves the values for a bound query's parameter mappings and applies
//! them to sqlx MySQL queries in declaration order.

use crate::bound_query::BoundQuery;
use serde_json::Value;
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::{QueryAs, QueryScalar};

// Shared JSON -> SQL binding for the different sqlx query shapes
macro_rules! bind_json_param {
    ($query:expr, $param:expr) => {
        match $param {
            Value::String(s) => $query.bind(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        $query.bind(i as i32)
                    } else {
                        $query.bind(i)
                    }
                } else if let Some(u) = n.as_u64() {
                    $query.bind(u)
                } else if let Some(f) = n.as_f64() {
                    $query.bind(f)
                } else {
                    $query.bind(n.to_string())
                }
            }
            Value::Bool(b) => $query.bind(b),
            Value::Null => $query.bind(Option::<String>::None),
            other => $query.bind(other.to_string()),
        }
    };
}

pub struct ParameterBinder;

impl ParameterBinder {
    /// Values for every mapping of `query`, in declaration order.
    ///
    /// Additional parameters take precedence over the parameter object, so
    /// synthetic paging placeholders never collide with caller properties.
    pub fn resolve(query: &BoundQuery) -> Vec<Value> {
        let Some(mappings) = query.parameter_mappings() else {
            return Vec::new();
        };

        mappings
            .iter()
            .map(|mapping| {
                if let Some(value) = query.additional_parameter(&mapping.property) {
                    return value.clone();
                }
                Self::lookup(query.parameter_object(), &mapping.property)
            })
            .collect()
    }

    fn lookup(parameter_object: &Value, property: &str) -> Value {
        match parameter_object {
            Value::Object(_) => property
                .split('.')
                .try_fold(parameter_object, |current, key| current.get(key))
                .cloned()
                .unwrap_or(Value::Null),
            Value::Null => Value::Null,
            // A lone scalar fills every placeholder
            scalar => scalar.clone(),
        }
    }

    pub fn bind_query_as<'q, O>(
        mut query: QueryAs<'q, MySql, O, MySqlArguments>,
        values: Vec<Value>,
    ) -> QueryAs<'q, MySql, O, MySqlArguments> {
        for value in values {
            query = bind_json_param!(query, value);
        }
        query
    }

    pub fn bind_query_scalar<'q, O>(
        mut query: QueryScalar<'q, MySql, O, MySqlArguments>,
        values: Vec<Value>,
    ) -> QueryScalar<'q, MySql, O, MySqlArguments> {
        for value in values {
            query = bind_json_param!(query, value);
        }
        query
    }
}
