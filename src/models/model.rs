use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Shared behavior of every record sent to or read from the service.
///
/// Serialization follows the derived `Serialize` impl: keys keep declaration
/// order and unset fields are left out. `validate` works off the same output,
/// so a mandatory field counts as missing exactly when it would not be sent.
pub trait Model: Serialize {
    /// Type name reported in validation errors.
    const NAME: &'static str;

    /// Fields that must be set before the record is sent, in reporting order.
    const MANDATORY_FIELDS: &'static [&'static str];

    /// Serialize the non-null fields into a JSON object.
    fn to_json(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self).map_err(ApiError::Serialization)? {
            Value::Object(mut fields) => {
                fields.retain(|_, v| !v.is_null());
                Ok(fields)
            }
            other => Err(ApiError::Serialization(<serde_json::Error as serde::ser::Error>::custom(
                format!("{} serialized to a non-object value: {other}", Self::NAME),
            ))),
        }
    }

    /// Fail on the first mandatory field that is unset.
    fn validate(&self) -> Result<()> {
        let fields = self.to_json()?;
        match Self::MANDATORY_FIELDS
            .iter()
            .copied()
            .find(|name| !fields.contains_key(*name))
        {
            Some(field) => Err(ApiError::Validation {
                record: Self::NAME,
                field,
                position: None,
            }),
            None => Ok(()),
        }
    }
}

/// Serialize an optional float, refusing NaN and infinities.
///
/// serde_json writes non-finite floats as `null`, which `to_json` would then
/// drop as if the field had never been set.
pub(crate) fn finite_float<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_finite(*v, serializer),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn serialize_finite<S: Serializer>(
    value: f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(value)
    } else {
        Err(<S::Error as serde::ser::Error>::custom(format!(
            "non-finite float {value}"
        )))
    }
}
