use super::{components, key_path, scientific, DictionaryFormatter, FormatError};
use crate::dictionary::{Dictionary, Value};

/// Compact JSON notation: `{"key":value,...}` with sorted keys and no
/// whitespace.
///
/// ```
/// use dragon_dict::{format_json, Dictionary, Value};
///
/// let d = Dictionary::from([
///     ("int", Value::from(1)),
///     ("double", Value::from(2.0)),
///     ("string", Value::from("")),
/// ]);
/// assert_eq!(format_json(&d)?, r#"{"double":2.000000E0,"int":1,"string":""}"#);
/// # Ok::<(), dragon_dict::FormatError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl DictionaryFormatter for JsonFormatter {
    fn format(&self, dictionary: &Dictionary) -> Result<String, FormatError> {
        let mut out = String::new();
        write_dictionary(&mut out, dictionary, "")?;
        Ok(out)
    }
}

fn write_dictionary(out: &mut String, dictionary: &Dictionary, path: &str) -> Result<(), FormatError> {
    out.push('{');
    for (i, key) in dictionary.sorted_keys().into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(out, key);
        out.push(':');
        if let Some(value) = dictionary.get(key) {
            write_value(out, value, path, key)?;
        }
    }
    out.push('}');
    Ok(())
}

fn write_value(out: &mut String, value: &Value, path: &str, key: &str) -> Result<(), FormatError> {
    let kind = value.kind();
    match value {
        Value::Int(v) => out.push_str(&v.to_string()),
        Value::UInt(v) => out.push_str(&v.to_string()),
        Value::Float(v) => out.push_str(&scientific(f64::from(*v), path, key, kind)?),
        Value::Double(v) => out.push_str(&scientific(*v, path, key, kind)?),
        Value::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
        Value::String(s) => write_string(out, s),
        Value::Vec2(v) => write_array(out, &components(v, path, key, kind)?),
        Value::Vec3(v) => write_array(out, &components(v, path, key, kind)?),
        Value::Vec4(v) => write_array(out, &components(v, path, key, kind)?),
        Value::Vec2f(v) => write_array(out, &components(v, path, key, kind)?),
        Value::Vec3f(v) => write_array(out, &components(v, path, key, kind)?),
        Value::Vec4f(v) => write_array(out, &components(v, path, key, kind)?),
        Value::Dictionary(nested) => write_dictionary(out, nested, &key_path(path, key))?,
    }
    Ok(())
}

fn write_array(out: &mut String, items: &str) {
    out.push('[');
    out.push_str(items);
    out.push(']');
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Kind;
    use crate::format::format_json;

    fn simple() -> Dictionary {
        Dictionary::from([
            ("int", Value::from(1)),
            ("double", Value::from(2.0)),
            ("vec2", Value::from([0.0f32; 2])),
            ("vec3", Value::from([0.0f32; 3])),
            ("vec4", Value::from([0.0f32; 4])),
            ("string", Value::from("")),
        ])
    }

    fn with_dict(dict: Dictionary) -> Dictionary {
        let mut d = simple();
        d.set_value("dict", dict);
        d
    }

    const SIMPLE: &str = r#""double":2.000000E0,"int":1,"string":"","vec2":[0,0],"vec3":[0,0,0],"vec4":[0,0,0,0]"#;

    #[test]
    fn test_empty_dictionary() {
        assert_eq!(format_json(&Dictionary::new()).unwrap(), "{}");
    }

    #[test]
    fn test_simple_dictionary() {
        assert_eq!(format_json(&simple()).unwrap(), format!("{{{SIMPLE}}}"));
    }

    #[test]
    fn test_scalar_kinds() {
        let d = Dictionary::from([
            ("b", Value::from(false)),
            ("f", Value::from(0.5f32)),
            ("u", Value::from(u64::MAX)),
            ("n", Value::from(-3)),
        ]);
        assert_eq!(
            format_json(&d).unwrap(),
            r#"{"b":false,"f":5.000000E-1,"n":-3,"u":18446744073709551615}"#
        );
    }

    #[test]
    fn test_single_precision_vectors_keep_their_precision() {
        let d = Dictionary::from([
            ("v", Value::from([0.1f32, 0.2, 0.3])),
            ("w", Value::from([0.1, 0.2])),
        ]);
        assert_eq!(format_json(&d).unwrap(), r#"{"v":[0.1,0.2,0.3],"w":[0.1,0.2]}"#);
    }

    #[test]
    fn test_control_characters_use_unicode_escapes() {
        let d = Dictionary::from([("c", "\u{0}\u{1f}\u{8}\u{c}")]);
        assert_eq!(format_json(&d).unwrap(), r#"{"c":"\u0000\u001f\b\f"}"#);
    }

    #[test]
    fn test_nested_dictionary() {
        let inner = simple();
        let mid = with_dict(inner);
        let outer = with_dict(mid);

        let expected = format!("{{\"dict\":{{\"dict\":{{{SIMPLE}}},{SIMPLE}}},{SIMPLE}}}");
        assert_eq!(format_json(&outer).unwrap(), expected);
    }

    #[test]
    fn test_sibling_nested_dictionaries() {
        let f = with_dict(with_dict(simple()));
        let mut g = simple();
        g.set_value("dict3", f.clone());
        g.set_value("dict", f.clone());
        g.set_value("dict2", f);

        let level = format!("{{\"dict\":{{\"dict\":{{{SIMPLE}}},{SIMPLE}}},{SIMPLE}}}");
        let expected = format!("{{\"dict\":{level},\"dict2\":{level},\"dict3\":{level},{SIMPLE}}}");
        assert_eq!(format_json(&g).unwrap(), expected);
    }

    #[test]
    fn test_output_is_independent_of_insertion_order() {
        let a = Dictionary::from([("z", Value::from(1)), ("a", Value::from("x"))]);
        let b = Dictionary::from([("a", Value::from("x")), ("z", Value::from(1))]);

        let first = format_json(&a).unwrap();
        assert_eq!(first, format_json(&a).unwrap());
        assert_eq!(first, format_json(&b).unwrap());
        assert_eq!(first, r#"{"a":"x","z":1}"#);
    }

    #[test]
    fn test_keys_sort_bytewise() {
        let d = Dictionary::from([("b", 1), ("B", 2), ("a", 3), ("_", 4)]);
        assert_eq!(format_json(&d).unwrap(), r#"{"B":2,"_":4,"a":3,"b":1}"#);
    }

    #[test]
    fn test_string_escaping() {
        let d = Dictionary::from([("s", "a\"b\\c\nd\te\u{1}"), ("k\"ey", "é")]);
        assert_eq!(
            format_json(&d).unwrap(),
            r#"{"k\"ey":"é","s":"a\"b\\c\nd\te\u0001"}"#
        );
    }

    #[test]
    fn test_non_finite_fails_without_output() {
        let mut inner = Dictionary::new();
        inner.set_value("bad", [1.0, f64::NAN]);
        let mut d = Dictionary::new();
        d.set_value("ok", 1);
        d.set_value("inner", inner);

        assert_eq!(
            format_json(&d),
            Err(FormatError::NonFinite {
                key: "inner.bad".into(),
                kind: Kind::Vec2
            })
        );
        let d = Dictionary::from([("x", f64::INFINITY)]);
        assert!(format_json(&d).is_err());
    }
}
