use crate::dictionary::{Dictionary, Value};

use super::ConfigError;

/// A value to merge into the loaded configuration at `path`.
///
/// An empty path addresses the root; its value must be a dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    pub path: Vec<String>,
    pub value: Value,
}

impl ConfigEntry {
    pub fn root(dictionary: Dictionary) -> Self {
        Self {
            path: Vec::new(),
            value: Value::Dictionary(dictionary),
        }
    }

    pub fn at_path(path: Vec<String>, value: Value) -> Self {
        Self { path, value }
    }
}

/// A layer of configuration, applied by [`Loader`](super::Loader) in
/// registration order.
pub trait ConfigSource: std::fmt::Debug {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError>;
}

/// A dictionary is a source of its own contents, typically used for defaults.
impl ConfigSource for Dictionary {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        Ok(vec![ConfigEntry::root(self.clone())])
    }
}

pub(crate) fn merge_at_path(dictionary: &mut Dictionary, path: &[String], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        if let Value::Dictionary(overlay) = value {
            dictionary.merge(overlay);
        }
        return;
    };

    if rest.is_empty() {
        match (dictionary.dictionary_mut(first), value) {
            (Some(base), Value::Dictionary(overlay)) => base.merge(overlay),
            (_, value) => dictionary.set_value(first.clone(), value),
        }
        return;
    }

    if !dictionary.has_value::<Dictionary>(first) {
        dictionary.set_value(first.clone(), Dictionary::new());
    }

    if let Some(nested) = dictionary.dictionary_mut(first) {
        merge_at_path(nested, rest, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_at_root() {
        let mut d = Dictionary::from([("a", 1), ("b", 2)]);
        merge_at_path(&mut d, &[], Value::Dictionary(Dictionary::from([("b", 3)])));
        assert_eq!(d, Dictionary::from([("a", 1), ("b", 3)]));
    }

    #[test]
    fn test_merge_creates_intermediate_levels() {
        let mut d = Dictionary::new();
        let path = vec!["server".to_owned(), "port".to_owned()];
        merge_at_path(&mut d, &path, Value::Int(8080));
        assert_eq!(d.value_at::<i64>("server.port"), Ok(8080));
    }

    #[test]
    fn test_merge_replaces_scalar_intermediate() {
        let mut d = Dictionary::from([("server", "localhost")]);
        let path = vec!["server".to_owned(), "port".to_owned()];
        merge_at_path(&mut d, &path, Value::Int(8080));
        assert_eq!(d.value_at::<i64>("server.port"), Ok(8080));
    }

    #[test]
    fn test_merge_nested_dictionary_at_leaf() {
        let mut d = Dictionary::new();
        d.set_value_at("server.host", "localhost").unwrap();
        let path = vec!["server".to_owned()];
        merge_at_path(&mut d, &path, Value::Dictionary(Dictionary::from([("port", 80)])));
        assert!(d.has_path("server.host"));
        assert!(d.has_path("server.port"));
    }
}
