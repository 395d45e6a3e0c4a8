use crate::error::{self, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use snafu::ResultExt;
use std::fmt::Debug;

/// The `Configuration` trait is for structs that model a CRD `spec`. Configuration data arrives as
/// a JSON object keyed by attribute name (snake_case), for example:
///
/// ```yaml
/// spec:
///   name: my-bucket
///   object_lock_enabled_for_bucket: true
/// ```
///
/// The traits aggregated by the `Configuration` trait are typical of "plain old data" types and
/// provide a way to strongly type this data which is otherwise only constrained by the resource
/// schema.
///
pub trait Configuration:
    Serialize + DeserializeOwned + Clone + Debug + Default + Send + Sync + Sized + 'static
{
    /// Convert the `Configuration` object to a serde `Map`.
    fn into_map(self) -> Result<Map<String, Value>> {
        match self.into_value()? {
            Value::Object(map) => Ok(map),
            _ => Err(error::ConfigWrongValueTypeSnafu {}.build().into()),
        }
    }

    /// Convert the `Configuration` object to a serde `Value`.
    fn into_value(self) -> Result<Value> {
        Ok(serde_json::to_value(self).context(error::ConfigSerializationSnafu)?)
    }

    /// Deserialize the `Configuration` object from a serde `Map`.
    fn from_map(map: Map<String, Value>) -> Result<Self> {
        Self::from_value(Value::Object(map))
    }

    /// Deserialize the `Configuration` object from a serde `Value`.
    fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value).context(error::ConfigDeserializationSnafu)?)
    }
}

#[cfg(test)]
mod test {
    use super::Configuration;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: Option<String>,
        size: Option<i64>,
    }

    impl Configuration for Sample {}

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct NotAnObject(i64);

    impl Configuration for NotAnObject {}

    #[test]
    fn from_value_ignores_nulls() {
        let sample = Sample::from_value(json!({ "name": "a", "size": null })).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: Some("a".to_string()),
                size: None
            }
        );
    }

    #[test]
    fn from_value_rejects_wrong_types() {
        assert!(Sample::from_value(json!({ "size": "seven" })).is_err());
    }

    #[test]
    fn into_map_requires_object() {
        assert!(NotAnObject(3).into_map().is_err());
        let map = Sample::default().into_map().unwrap();
        assert!(map.contains_key("name"));
    }
}
