use super::{components, key_path, scientific, DictionaryFormatter, FormatError};
use crate::dictionary::{Dictionary, Value};

const RESERVED_WORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Lua table notation: nested `key = value` blocks in braces.
///
/// Compact output has no whitespace (`{a=1,b={c=2}}`). With
/// [`pretty`](Self::pretty) every entry goes on its own line, indented once
/// per nesting level with the configured indentation string.
///
/// ```
/// use dragon_dict::{Dictionary, DictionaryFormatter, LuaFormatter, Value};
///
/// let mut d = Dictionary::from([("name", Value::from("earth"))]);
/// d.set_value("radius", 6371);
///
/// assert_eq!(LuaFormatter::default().format(&d)?, r#"{name="earth",radius=6371}"#);
/// assert_eq!(
///     LuaFormatter::pretty().with_indentation("\t").format(&d)?,
///     "{\n\tname = \"earth\",\n\tradius = 6371\n}"
/// );
/// # Ok::<(), dragon_dict::FormatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LuaFormatter {
    pretty_print: bool,
    indentation: String,
}

impl Default for LuaFormatter {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indentation: "    ".to_owned(),
        }
    }
}

impl LuaFormatter {
    /// A formatter with pretty printing enabled and four-space indentation.
    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            ..Self::default()
        }
    }

    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }

    fn format_dictionary(
        &self,
        dictionary: &Dictionary,
        depth: usize,
        path: &str,
    ) -> Result<String, FormatError> {
        if dictionary.is_empty() {
            return Ok("{}".to_owned());
        }

        let mut entries = Vec::with_capacity(dictionary.len());
        for key in dictionary.sorted_keys() {
            let Some(value) = dictionary.get(key) else {
                continue;
            };
            let value = self.format_value(value, depth + 1, path, key)?;
            let entry = if self.pretty_print {
                format!("{}{} = {}", self.indent(depth + 1), format_key(key), value)
            } else {
                format!("{}={}", format_key(key), value)
            };
            entries.push(entry);
        }

        if self.pretty_print {
            Ok(format!(
                "{{\n{}\n{}}}",
                entries.join(",\n"),
                self.indent(depth)
            ))
        } else {
            Ok(format!("{{{}}}", entries.join(",")))
        }
    }

    fn format_value(
        &self,
        value: &Value,
        depth: usize,
        path: &str,
        key: &str,
    ) -> Result<String, FormatError> {
        let kind = value.kind();
        Ok(match value {
            Value::Int(v) => v.to_string(),
            Value::UInt(v) => v.to_string(),
            Value::Float(v) => scientific(f64::from(*v), path, key, kind)?,
            Value::Double(v) => scientific(*v, path, key, kind)?,
            Value::Bool(v) => v.to_string(),
            Value::String(s) => quote(s),
            Value::Vec2(v) => format!("{{{}}}", components(v, path, key, kind)?),
            Value::Vec3(v) => format!("{{{}}}", components(v, path, key, kind)?),
            Value::Vec4(v) => format!("{{{}}}", components(v, path, key, kind)?),
            Value::Vec2f(v) => format!("{{{}}}", components(v, path, key, kind)?),
            Value::Vec3f(v) => format!("{{{}}}", components(v, path, key, kind)?),
            Value::Vec4f(v) => format!("{{{}}}", components(v, path, key, kind)?),
            Value::Dictionary(nested) => {
                self.format_dictionary(nested, depth, &key_path(path, key))?
            }
        })
    }

    fn indent(&self, depth: usize) -> String {
        self.indentation.repeat(depth)
    }
}

impl DictionaryFormatter for LuaFormatter {
    fn format(&self, dictionary: &Dictionary) -> Result<String, FormatError> {
        self.format_dictionary(dictionary, 0, "")
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let starts_well = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED_WORDS.contains(&key)
}

fn format_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_owned()
    } else {
        format!("[{}]", quote(key))
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Three digits so a following digit is not absorbed into the escape.
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
