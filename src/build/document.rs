use crate::error::{Error, Result};
use crate::types::GlossaryEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// On-disk glossary shape: `{ "terms": [ ...entries ] }`.
///
/// A bare array of entries is accepted too, see [`entries_from_value`].
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct GlossaryFile {
    #[serde(default)]
    pub terms: Vec<GlossaryEntry>,
}

/// Extract entries from an already-parsed JSON document.
///
/// Anything other than an array or an object carrying a `terms` array is a
/// contract violation: the caller handed over something that is not a glossary.
pub fn entries_from_value(value: Value) -> Result<Vec<GlossaryEntry>> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(ref map) if map.get("terms").is_some_and(Value::is_array) => {
            let file: GlossaryFile = serde_json::from_value(value)?;
            Ok(file.terms)
        }
        Value::Object(_) => Err(Error::ContractViolation(
            "glossary object has no `terms` array".to_string(),
        )),
        other => Err(Error::ContractViolation(format!(
            "expected a glossary array or object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
