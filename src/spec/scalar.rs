//! Scalar values that appear in `required` and `choices`.
//!
//! YAML lets these be text, numbers, booleans or null. They are kept tagged
//! and stringified in exactly one place (`Display`).

use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    #[default]
    Null,
}

impl Scalar {
    /// Read YAML 1.1 boolean words (`yes`, `off`, ...) as booleans.
    ///
    /// The parser follows YAML 1.2, where these stay text, but Ansible files
    /// are written against 1.1 and use them for flags like `required`.
    pub fn into_flag(self) -> Scalar {
        match self {
            Scalar::Text(word) => match word.as_str() {
                "yes" | "Yes" | "YES" | "on" | "On" | "ON" => Scalar::Bool(true),
                "no" | "No" | "NO" | "off" | "Off" | "OFF" => Scalar::Bool(false),
                _ => Scalar::Text(word),
            },
            other => other,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{n}"),
            // Integral floats keep their fractional digit: `2.0`, not `2`.
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Null => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, boolean or null")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Integer(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Scalar, E> {
                Ok(i64::try_from(v)
                    .map(Scalar::Integer)
                    .unwrap_or_else(|_| Scalar::Text(v.to_string())))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Text(v))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Null)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Scalar, D::Error>
            where
                D: Deserializer<'de>,
            {
                Scalar::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Vec<Scalar> {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn mixed_scalars_keep_their_tags() {
        let values = parse("[fast, 3, 2.5, true, ~, '10']");
        assert_eq!(
            values,
            vec![
                Scalar::Text("fast".into()),
                Scalar::Integer(3),
                Scalar::Float(2.5),
                Scalar::Bool(true),
                Scalar::Null,
                Scalar::Text("10".into()),
            ]
        );
    }

    #[test]
    fn display_stringifies_every_variant() {
        let shown: Vec<String> = parse("[fast, -3, 2.5, 4.0, true, false, null]")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(shown, ["fast", "-3", "2.5", "4.0", "True", "False", ""]);
    }

    #[test]
    fn yaml_1_1_flag_words_become_booleans() {
        let flags: Vec<Scalar> = parse("[yes, No, ON, off, true, maybe, 1]")
            .into_iter()
            .map(Scalar::into_flag)
            .collect();
        assert_eq!(
            flags,
            vec![
                Scalar::Bool(true),
                Scalar::Bool(false),
                Scalar::Bool(true),
                Scalar::Bool(false),
                Scalar::Bool(true),
                Scalar::Text("maybe".into()),
                Scalar::Integer(1),
            ]
        );
    }

    #[test]
    fn float_and_null_display_is_pinned() {
        let shown: Vec<String> = parse("[1.0e+16, 1.0e-7, .inf, -.inf, 0.1, ~]")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            shown,
            ["10000000000000000.0", "0.0000001", "inf", "-inf", "0.1", ""]
        );
    }

    #[test]
    fn nested_collections_are_rejected() {
        let err = serde_yaml::from_str::<Vec<Scalar>>("[{a: 1}]").unwrap_err();
        assert!(err.to_string().contains("a string, number, boolean or null"));
    }
}
