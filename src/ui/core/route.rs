//! Route parameters for the current navigation context.
//!
//! The console mirrors the dashboard's route shape
//! (`/grupos/{grupoId}/salidas/{salidaId}`): navigating into a grupo or one
//! of its sub-views contributes named parameters. Depending on how a segment
//! was matched, a parameter can carry a single value or a collection of
//! values; every consumer must go through [`normalize`] so both shapes
//! resolve to the same identifier. Normalization lives here and nowhere
//! else; the dialog registry calls it when deriving default form values
//! *and* when building the submit payload.

use std::collections::HashMap;

/// Route parameter key for the active grupo.
pub const GRUPO_ID_PARAM: &str = "grupoId";

/// A route parameter value: one value, or several when the segment matched
/// more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Multi(Vec<String>),
}

/// Collapse a parameter to the one identifier it stands for: a `Single`
/// yields its value, a `Multi` its first element. An empty `Multi` yields
/// nothing.
pub fn normalize(value: &ParamValue) -> Option<&str> {
    match value {
        ParamValue::Single(s) => Some(s.as_str()),
        ParamValue::Multi(values) => values.first().map(|s| s.as_str()),
    }
}

/// The named parameters of the current route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    params: HashMap<String, ParamValue>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for the key.
    pub fn set(&mut self, key: &str, value: ParamValue) {
        self.params.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// The normalized value for a key.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(normalize)
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }
}
