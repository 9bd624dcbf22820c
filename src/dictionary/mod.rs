//! Nested, dynamically-typed configuration container.
//!
//! A [`Dictionary`] maps string keys to [`Value`]s drawn from a closed set of
//! kinds, including nested dictionaries. Children are owned by value, so
//! cloning a dictionary is a deep copy and no two parents can share a child.

mod convert;
mod error;
mod value;

use indexmap::IndexMap;

pub use convert::FromValue;
pub use error::LookupError;
pub use value::{Kind, Value};

/// An insertion-ordered map from string keys to [`Value`]s.
///
/// Two dictionaries are equal when they hold the same keys with equal values,
/// regardless of insertion order.
///
/// ## Example
///
/// ```
/// use dragon_dict::{Dictionary, Value};
///
/// let mut camera = Dictionary::from([
///     ("fov", Value::from(60.0)),
///     ("position", Value::from([0.0, 1.5, -4.0])),
/// ]);
/// camera.set_value("name", "main");
///
/// assert_eq!(camera.value::<f64>("fov"), Some(60.0));
/// assert_eq!(camera.value::<[f64; 2]>("position"), None);
/// assert_eq!(camera.keys().collect::<Vec<_>>(), ["fov", "position", "name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: IndexMap<String, Value>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, replacing any previous value.
    ///
    /// An overwritten key keeps its original position in iteration order.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value under `key` converted to `T`, or `None` if the key is
    /// missing or its value cannot be read as `T`.
    pub fn value<T: FromValue>(&self, key: &str) -> Option<T> {
        self.try_value(key).ok()
    }

    /// Like [`value`](Self::value), but reports why the lookup failed.
    pub fn try_value<T: FromValue>(&self, key: &str) -> Result<T, LookupError> {
        let value = self
            .entries
            .get(key)
            .ok_or_else(|| LookupError::NotFound(key.to_owned()))?;
        convert_value(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Borrows the nested dictionary stored under `key`.
    pub fn dictionary(&self, key: &str) -> Option<&Dictionary> {
        self.entries.get(key).and_then(Value::as_dictionary)
    }

    pub fn dictionary_mut(&mut self, key: &str) -> Option<&mut Dictionary> {
        self.entries.get_mut(key).and_then(Value::as_dictionary_mut)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true if `key` exists and its stored kind is exactly `T`'s native
    /// kind. Only the kind is compared: no conversion or range check is applied,
    /// so `has_value::<i32>` holds for any stored `Int`.
    pub fn has_value<T: FromValue>(&self, key: &str) -> bool {
        match (self.entries.get(key), T::KIND) {
            (Some(value), Some(kind)) => value.kind() == kind,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Keys in byte-wise ascending order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a dotted path such as `"window.size.width"`, descending through
    /// nested dictionaries.
    pub fn value_at<T: FromValue>(&self, path: &str) -> Result<T, LookupError> {
        let (parents, last) = split_path(path);
        let mut current = self;
        for (depth, segment) in parents.iter().enumerate() {
            let value = current
                .entries
                .get(*segment)
                .ok_or_else(|| LookupError::NotFound(path.to_owned()))?;
            current = value
                .as_dictionary()
                .ok_or_else(|| LookupError::TypeMismatch {
                    key: parents[..=depth].join("."),
                    expected: "dictionary",
                    found: value.kind(),
                })?;
        }
        current.try_value(last).map_err(|e| match e {
            LookupError::NotFound(_) => LookupError::NotFound(path.to_owned()),
            LookupError::TypeMismatch { expected, found, .. } => LookupError::TypeMismatch {
                key: path.to_owned(),
                expected,
                found,
            },
        })
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.value_at::<Value>(path).is_ok()
    }

    /// Sets the value at a dotted path, creating missing intermediate
    /// dictionaries. Fails if an intermediate key holds a non-dictionary.
    pub fn set_value_at(
        &mut self,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<(), LookupError> {
        let (parents, last) = split_path(path);
        let mut current = self;
        for (depth, segment) in parents.iter().enumerate() {
            let entry = current
                .entries
                .entry((*segment).to_owned())
                .or_insert_with(|| Value::Dictionary(Dictionary::new()));
            current = match entry {
                Value::Dictionary(nested) => nested,
                other => {
                    return Err(LookupError::TypeMismatch {
                        key: parents[..=depth].join("."),
                        expected: "dictionary",
                        found: other.kind(),
                    })
                }
            };
        }
        current.set_value(last, value);
        Ok(())
    }

    /// Deep-merges `overlay` into `self`. Nested dictionaries are merged
    /// recursively; every other value is replaced.
    pub fn merge(&mut self, overlay: Dictionary) {
        for (key, value) in overlay.entries {
            match (self.entries.get_mut(&key), value) {
                (Some(Value::Dictionary(base)), Value::Dictionary(nested)) => {
                    base.merge(nested);
                }
                (_, value) => {
                    self.entries.insert(key, value);
                }
            }
        }
    }
}

fn convert_value<T: FromValue>(key: &str, value: &Value) -> Result<T, LookupError> {
    T::from_value(value).ok_or_else(|| LookupError::TypeMismatch {
        key: key.to_owned(),
        expected: T::KIND.map(Kind::name).unwrap_or("value"),
        found: value.kind(),
    })
}

fn split_path(path: &str) -> (Vec<&str>, &str) {
    match path.rsplit_once('.') {
        Some((parents, last)) => (parents.split('.').collect(), last),
        None => (Vec::new(), path),
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.set_value(key, value);
        }
        dict
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Dictionary {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from([
            ("int", Value::from(1)),
            ("uint", Value::from(2u32)),
            ("float", Value::from(0.5f32)),
            ("double", Value::from(2.0)),
            ("bool", Value::from(true)),
            ("string", Value::from("text")),
            ("vec2", Value::from([1.0, 2.0])),
            ("vec3", Value::from([1.0, 2.0, 3.0])),
            ("vec4", Value::from([1.0, 2.0, 3.0, 4.0])),
            ("vec2f", Value::from([0.1f32, 0.2])),
            ("vec3f", Value::from([0.1f32, 0.2, 0.3])),
            ("vec4f", Value::from([0.1f32, 0.2, 0.3, 0.4])),
        ])
    }

    #[test]
    fn test_round_trip_every_kind() {
        let mut d = sample();
        d.set_value("nested", Dictionary::from([("a", 1)]));

        assert_eq!(d.value::<i64>("int"), Some(1));
        assert_eq!(d.value::<u64>("uint"), Some(2));
        assert_eq!(d.value::<f32>("float"), Some(0.5));
        assert_eq!(d.value::<f64>("double"), Some(2.0));
        assert_eq!(d.value::<bool>("bool"), Some(true));
        assert_eq!(d.value::<String>("string").as_deref(), Some("text"));
        assert_eq!(d.value::<[f64; 2]>("vec2"), Some([1.0, 2.0]));
        assert_eq!(d.value::<[f64; 3]>("vec3"), Some([1.0, 2.0, 3.0]));
        assert_eq!(d.value::<[f64; 4]>("vec4"), Some([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(d.value::<[f32; 2]>("vec2f"), Some([0.1, 0.2]));
        assert_eq!(d.value::<[f32; 3]>("vec3f"), Some([0.1, 0.2, 0.3]));
        assert_eq!(d.value::<[f32; 4]>("vec4f"), Some([0.1, 0.2, 0.3, 0.4]));
        assert_eq!(
            d.value::<Dictionary>("nested"),
            Some(Dictionary::from([("a", 1)]))
        );
    }

    #[test]
    fn test_missing_and_mismatch_are_distinguished() {
        let d = sample();
        assert_eq!(
            d.try_value::<i64>("nope"),
            Err(LookupError::NotFound("nope".into()))
        );
        assert_eq!(
            d.try_value::<bool>("int"),
            Err(LookupError::TypeMismatch {
                key: "int".into(),
                expected: "bool",
                found: Kind::Int
            })
        );
        assert_eq!(
            d.try_value::<Dictionary>("string").unwrap_err().to_string(),
            "key 'string' holds a string, which cannot be read as dictionary"
        );
        assert_eq!(d.value::<bool>("int"), None);
    }

    #[test]
    fn test_float_reads_as_double() {
        let d = sample();
        assert_eq!(d.value::<f64>("float"), Some(0.5));
        assert_eq!(d.value::<[f64; 3]>("vec2"), None);
    }

    #[test]
    fn test_has_value_is_strict() {
        let d = sample();
        assert!(d.has_value::<f32>("float"));
        assert!(!d.has_value::<f64>("float"));
        assert!(d.has_value::<i32>("int"));
        assert!(!d.has_value::<u64>("int"));
        assert!(d.has_value::<[f32; 3]>("vec3f"));
        assert!(!d.has_value::<[f64; 3]>("vec3f"));
        assert!(d.has_value::<Value>("vec4"));
        assert!(!d.has_value::<String>("missing"));
        assert!(d.has_key("bool"));
        assert!(!d.has_key("missing"));
    }

    #[test]
    fn test_has_value_checks_kind_not_range() {
        let d = Dictionary::from([("big", i64::MAX)]);
        assert!(d.has_value::<i32>("big"));
        assert!(d.has_value::<i64>("big"));
        assert_eq!(d.value::<i32>("big"), None);
    }

    #[test]
    fn test_keys_follow_insertion_order() {
        let mut d = Dictionary::new();
        d.set_value("b", 1);
        d.set_value("a", 2);
        d.set_value("c", 3);
        d.set_value("b", "overwritten");

        assert_eq!(d.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(d.sorted_keys(), ["a", "b", "c"]);
        assert_eq!(d.value::<String>("b").as_deref(), Some("overwritten"));
        assert_eq!(d.len(), 3);

        d.remove("a");
        assert_eq!(d.keys().collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn test_empty() {
        let d = Dictionary::new();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.keys().count(), 0);
    }

    #[test]
    fn test_nested_copy_is_isolated() {
        let mut parent = Dictionary::new();
        parent.set_value("child", Dictionary::from([("x", 1)]));

        let mut copy: Dictionary = parent.value("child").unwrap();
        copy.set_value("x", 99);
        copy.set_value("y", 2);

        assert_eq!(parent.value_at::<i64>("child.x"), Ok(1));
        assert!(!parent.has_path("child.y"));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = Dictionary::from([("x", Value::from(1)), ("y", Value::from("s"))]);
        let b = Dictionary::from([("y", Value::from("s")), ("x", Value::from(1))]);
        assert_eq!(a, b);

        let mut c = b.clone();
        c.set_value("x", 2);
        assert_ne!(a, c);

        let mut d = b.clone();
        d.set_value("z", 1);
        assert_ne!(a, d);

        let e = Dictionary::from([("x", Value::from(1.0)), ("y", Value::from("s"))]);
        assert_ne!(a, e);
    }

    #[test]
    fn test_nested_equality() {
        let inner = Dictionary::from([("k", 1)]);
        let a = Dictionary::from([("inner", inner.clone())]);
        let b = Dictionary::from([("inner", inner)]);
        assert_eq!(a, b);

        let c = Dictionary::from([("inner", Dictionary::from([("k", 2)]))]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_dotted_paths() {
        let mut d = Dictionary::new();
        d.set_value_at("window.size.width", 1280).unwrap();
        d.set_value_at("window.size.height", 720).unwrap();
        d.set_value_at("window.title", "demo").unwrap();

        assert_eq!(d.value_at::<i32>("window.size.width"), Ok(1280));
        assert_eq!(
            d.dictionary("window").and_then(|w| w.dictionary("size")).map(Dictionary::len),
            Some(2)
        );
        assert_eq!(
            d.value_at::<i64>("window.missing"),
            Err(LookupError::NotFound("window.missing".into()))
        );
        assert!(matches!(
            d.value_at::<i64>("window.title.x"),
            Err(LookupError::TypeMismatch { ref key, found: Kind::String, .. }) if key == "window.title"
        ));
        assert!(matches!(
            d.set_value_at("window.title.x", 1),
            Err(LookupError::TypeMismatch { found: Kind::String, .. })
        ));
    }

    #[test]
    fn test_merge_is_deep() {
        let mut base = Dictionary::new();
        base.set_value_at("server.host", "localhost").unwrap();
        base.set_value_at("server.port", 80).unwrap();
        base.set_value("name", "base");

        let mut overlay = Dictionary::new();
        overlay.set_value_at("server.port", 8080).unwrap();
        overlay.set_value("name", Dictionary::new());

        base.merge(overlay);

        assert_eq!(base.value_at::<String>("server.host").as_deref(), Ok("localhost"));
        assert_eq!(base.value_at::<i64>("server.port"), Ok(8080));
        assert!(base.has_value::<Dictionary>("name"));
    }
}
