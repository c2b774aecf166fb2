//! `serde` support: outcomes travel as `{"success": value}` or
//! `{"failure": "rendered error"}`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Outcome;
use crate::OutcomeError;

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum WireRef<'a, T> {
    Success(&'a T),
    Failure(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum Wire<T> {
    Success(T),
    Failure(String),
}

impl<T> Serialize for Outcome<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = match self {
            Self::Success(value) => WireRef::Success(value),
            Self::Failure(error) => WireRef::Failure(error.to_string()),
        };
        wire.serialize(serializer)
    }
}

/// Failures deserialize as [`OutcomeError::Message`]; any cause structure is
/// flattened into the rendered text.
impl<'de, T> Deserialize<'de> for Outcome<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::Success(value) => Self::Success(value),
            Wire::Failure(message) => Self::Failure(OutcomeError::Message(message)),
        })
    }
}
