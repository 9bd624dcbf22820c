//! Conversion between TOML documents and [`Dictionary`] values.

use serde::de::DeserializeOwned;
use toml::{Table, Value as Toml};

use super::ConfigError;
use crate::dictionary::{Dictionary, Value};

/// Parses a TOML document into a [`Dictionary`].
pub fn parse_toml(contents: &str) -> Result<Dictionary, ConfigError> {
    let table: Table = toml::from_str(contents).map_err(ConfigError::InvalidToml)?;
    from_toml(table)
}

/// Converts a TOML table into a [`Dictionary`].
///
/// Integers become `Int`, floats `Double`, tables nested dictionaries, and
/// numeric arrays of two to four elements vectors. Other arrays and datetimes
/// have no dictionary counterpart and are rejected.
pub fn from_toml(table: Table) -> Result<Dictionary, ConfigError> {
    table_to_dictionary(table, "")
}

/// Converts a [`Dictionary`] into a TOML table.
pub fn to_toml(dictionary: &Dictionary) -> Result<Table, ConfigError> {
    dictionary_to_table(dictionary, "")
}

/// Deserializes a [`Dictionary`] into a typed configuration struct.
pub fn deserialize<T: DeserializeOwned>(dictionary: &Dictionary) -> Result<T, ConfigError> {
    Toml::Table(to_toml(dictionary)?)
        .try_into()
        .map_err(ConfigError::DeserializeError)
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

fn table_to_dictionary(table: Table, path: &str) -> Result<Dictionary, ConfigError> {
    let mut dictionary = Dictionary::new();
    for (key, value) in table {
        let converted = toml_to_value(value, &join(path, &key))?;
        dictionary.set_value(key, converted);
    }
    Ok(dictionary)
}

fn toml_to_value(value: Toml, path: &str) -> Result<Value, ConfigError> {
    let unsupported = |reason: &'static str| ConfigError::UnsupportedValue {
        key: path.to_owned(),
        reason,
    };

    match value {
        Toml::String(s) => Ok(Value::String(s)),
        Toml::Integer(i) => Ok(Value::Int(i)),
        Toml::Float(f) => Ok(Value::Double(f)),
        Toml::Boolean(b) => Ok(Value::Bool(b)),
        Toml::Table(t) => Ok(Value::Dictionary(table_to_dictionary(t, path)?)),
        Toml::Datetime(_) => Err(unsupported("datetimes are not supported")),
        Toml::Array(items) => {
            let components = items
                .iter()
                .map(|item| match *item {
                    Toml::Integer(i) => Some(i as f64),
                    Toml::Float(f) => Some(f),
                    _ => None,
                })
                .collect::<Option<Vec<f64>>>()
                .ok_or_else(|| unsupported("only numeric arrays are supported"))?;

            match components[..] {
                [x, y] => Ok(Value::Vec2([x, y])),
                [x, y, z] => Ok(Value::Vec3([x, y, z])),
                [x, y, z, w] => Ok(Value::Vec4([x, y, z, w])),
                _ => Err(unsupported("arrays must have two to four elements")),
            }
        }
    }
}

fn dictionary_to_table(dictionary: &Dictionary, path: &str) -> Result<Table, ConfigError> {
    let mut table = Table::new();
    for (key, value) in dictionary.iter() {
        table.insert(key.to_owned(), value_to_toml(value, &join(path, key))?);
    }
    Ok(table)
}

fn array(components: &[f64]) -> Toml {
    Toml::Array(components.iter().map(|c| Toml::Float(*c)).collect())
}

fn value_to_toml(value: &Value, path: &str) -> Result<Toml, ConfigError> {
    Ok(match value {
        Value::Int(v) => Toml::Integer(*v),
        Value::UInt(v) => Toml::Integer(i64::try_from(*v).map_err(|_| {
            ConfigError::UnsupportedValue {
                key: path.to_owned(),
                reason: "unsigned integer exceeds the TOML integer range",
            }
        })?),
        Value::Float(v) => Toml::Float(f64::from(*v)),
        Value::Double(v) => Toml::Float(*v),
        Value::Bool(v) => Toml::Boolean(*v),
        Value::String(s) => Toml::String(s.clone()),
        Value::Vec2(v) => array(v),
        Value::Vec3(v) => array(v),
        Value::Vec4(v) => array(v),
        Value::Vec2f(v) => array(&v.map(f64::from)),
        Value::Vec3f(v) => array(&v.map(f64::from)),
        Value::Vec4f(v) => array(&v.map(f64::from)),
        Value::Dictionary(nested) => Toml::Table(dictionary_to_table(nested, path)?),
    })
}
