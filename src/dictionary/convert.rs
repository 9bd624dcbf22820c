//! Typed extraction of values out of a [`Dictionary`].
//!
//! Each requested type names one native [`Kind`] and the set of stored kinds it
//! accepts. The full table:
//!
//! | requested    | accepted stored kinds                                   |
//! |--------------|---------------------------------------------------------|
//! | `i64`        | `Int`; `UInt` if it fits                                |
//! | `i32`        | `Int`, `UInt` if it fits                                |
//! | `u64`        | `UInt`; `Int` if non-negative                           |
//! | `u32`        | `Int`, `UInt` if it fits                                |
//! | `f64`        | `Double`; `Float` (widened); `Int`, `UInt` (as cast)    |
//! | `f32`        | `Float`; `Double` (narrowing cast)                      |
//! | `bool`       | `Bool`                                                  |
//! | `String`     | `String`                                                |
//! | `[f64; N]`   | `VecN`; `VecNf` (widened); same width only              |
//! | `[f32; N]`   | `VecNf` of the same width only                          |
//! | `Dictionary` | `Dictionary` (deep copy)                                |
//! | `Value`      | anything (clone)                                        |
//!
//! Every pair not listed is a type mismatch.

use super::{Dictionary, Kind, Value};

/// A type that can be read out of a [`Value`].
pub trait FromValue: Sized {
    /// The stored kind that matches this type without any conversion.
    /// `None` for [`Value`] itself, which matches every kind.
    const KIND: Option<Kind>;

    /// Converts according to the table in the module docs.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    const KIND: Option<Kind> = None;

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for i64 {
    const KIND: Option<Kind> = Some(Kind::Int);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Int(v) => Some(v),
            Value::UInt(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }
}

impl FromValue for i32 {
    const KIND: Option<Kind> = Some(Kind::Int);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Int(v) => i32::try_from(v).ok(),
            Value::UInt(v) => i32::try_from(v).ok(),
            _ => None,
        }
    }
}

impl FromValue for u64 {
    const KIND: Option<Kind> = Some(Kind::UInt);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::UInt(v) => Some(v),
            Value::Int(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }
}

impl FromValue for u32 {
    const KIND: Option<Kind> = Some(Kind::UInt);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::UInt(v) => u32::try_from(v).ok(),
            Value::Int(v) => u32::try_from(v).ok(),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const KIND: Option<Kind> = Some(Kind::Double);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Double(v) => Some(v),
            Value::Float(v) => Some(f64::from(v)),
            Value::Int(v) => Some(v as f64),
            Value::UInt(v) => Some(v as f64),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    const KIND: Option<Kind> = Some(Kind::Float);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Float(v) => Some(v),
            Value::Double(v) => Some(v as f32),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const KIND: Option<Kind> = Some(Kind::Bool);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl FromValue for String {
    const KIND: Option<Kind> = Some(Kind::String);

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromValue for [f64; 2] {
    const KIND: Option<Kind> = Some(Kind::Vec2);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Vec2(v) => Some(v),
            Value::Vec2f(v) => Some(v.map(f64::from)),
            _ => None,
        }
    }
}

impl FromValue for [f32; 2] {
    const KIND: Option<Kind> = Some(Kind::Vec2f);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Vec2f(v) => Some(v),
            _ => None,
        }
    }
}

impl FromValue for [f64; 3] {
    const KIND: Option<Kind> = Some(Kind::Vec3);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Vec3(v) => Some(v),
            Value::Vec3f(v) => Some(v.map(f64::from)),
            _ => None,
        }
    }
}

impl FromValue for [f32; 3] {
    const KIND: Option<Kind> = Some(Kind::Vec3f);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Vec3f(v) => Some(v),
            _ => None,
        }
    }
}

impl FromValue for [f64; 4] {
    const KIND: Option<Kind> = Some(Kind::Vec4);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Vec4(v) => Some(v),
            Value::Vec4f(v) => Some(v.map(f64::from)),
            _ => None,
        }
    }
}

impl FromValue for [f32; 4] {
    const KIND: Option<Kind> = Some(Kind::Vec4f);

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Vec4f(v) => Some(v),
            _ => None,
        }
    }
}

impl FromValue for Dictionary {
    const KIND: Option<Kind> = Some(Kind::Dictionary);

    fn from_value(value: &Value) -> Option<Self> {
        value.as_dictionary().cloned()
    }
}
