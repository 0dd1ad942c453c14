//! Serde helpers for the cluster's JSON conventions.
//!
//! Responsibilities:
//! - Provide `Nullable<T>` so that fields accepting an explicit JSON `null`
//!   keep "null" distinct from "key absent" across round-trips.
//! - Provide deserializers that accept either JSON numbers or strings for
//!   numeric settings values, and booleans or strings for boolean ones.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional rules).
//! - Any merge behavior; callers interpret `Nullable` themselves.
//!
//! Invariants / assumptions:
//! - Index settings values may arrive as `"3"` or `3`, and `"true"` or
//!   `true`, depending on how they were written to the cluster state.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// A value that was explicitly present in the JSON document, either as a
/// concrete value or as a literal `null`.
///
/// Used together with `Option<Nullable<T>>` on fields where all three wire
/// states are meaningful: `None` is "key absent", `Some(Nullable::Null)` is
/// "key present as null", and `Some(Nullable::Value(v))` is a real value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nullable<T> {
    Value(T),
    Null,
}

impl<T> Nullable<T> {
    /// Returns true for an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// Borrow the inner value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Null => None,
        }
    }

    /// Convert into a plain `Option`, collapsing `Null` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Null => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

/// Deserialize an `Option<Nullable<T>>` field while keeping an explicit JSON
/// `null` distinct from an absent key.
///
/// Serde's blanket `Option` deserializer collapses `null` to `None` before the
/// inner `Nullable` enum is ever consulted. Pairing this function with
/// `#[serde(default)]` restores the tri-state: `default` supplies `None` when
/// the key is absent, and this function is invoked only when the key is present
/// (for both `null` and real values), mapping `null` to `Some(Nullable::Null)`.
pub fn opt_nullable<'de, D, T>(deserializer: D) -> Result<Option<Nullable<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Nullable::deserialize(deserializer)?))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U32OrString {
    U32(u32),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    String(String),
}

pub fn opt_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<U32OrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(U32OrString::U32(v)) => Ok(Some(v)),
        Some(U32OrString::I64(v)) => Ok(Some(u32::try_from(v).map_err(D::Error::custom)?)),
        Some(U32OrString::String(s)) => Ok(Some(s.parse::<u32>().map_err(D::Error::custom)?)),
    }
}

pub fn opt_bool_from_string_or_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<BoolOrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(BoolOrString::Bool(v)) => Ok(Some(v)),
        Some(BoolOrString::String(s)) => match s.as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("invalid boolean string: {other:?}"))),
        },
    }
}
