//! JSON front door: arrays become sequences, everything else a scalar.
//!
//! `serde_json` caps nesting at 128 levels while parsing.

use crate::core::{
    error::{ParseErrorKind, ParseTreeError},
    value::{Scalar, Value},
};

pub fn parse(src: &str) -> Result<Value, ParseTreeError> {
    let raw: serde_json::Value = serde_json::from_str(src).map_err(|e| ParseTreeError {
        line: e.line(),
        column: e.column(),
        kind: ParseErrorKind::Json(e),
    })?;
    Value::try_from(raw)
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ParseTreeError;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value as Json;

        let scalar = match v {
            Json::Null => Scalar::None,
            Json::Bool(b) => Scalar::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Scalar::Int(i.into())
                } else if let Some(u) = n.as_u64() {
                    Scalar::Int(u.into())
                } else {
                    n.as_f64().map_or_else(|| Scalar::Text(n.to_string()), Scalar::Float)
                }
            }
            Json::String(s) => Scalar::Text(s),
            Json::Array(items) => {
                return items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Seq);
            }
            Json::Object(_) => {
                return Err(ParseTreeError {
                    line: 0,
                    column: 0,
                    kind: ParseErrorKind::JsonObject,
                });
            }
        };
        Ok(Value::Scalar(scalar))
    }
}
