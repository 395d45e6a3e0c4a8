use crdform_model::Diagnostics;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The attributes of a resource as stored by the caller, keyed by attribute name.
pub type State = Map<String, Value>;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct CreateRequest {
    /// The resource configuration as written by the user.
    pub config: Value,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ReadRequest {
    pub state: State,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct UpdateRequest {
    pub config: Value,
    /// The state written by the previous `create` or `update`.
    pub prior_state: State,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct DeleteRequest {
    pub state: State,
}

/// The outcome of a provider operation. `value` is only present when no error diagnostic was
/// produced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    pub diagnostics: Diagnostics,
}

impl<T> Response<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value: Some(value),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn failed<D>(diagnostics: D) -> Self
    where
        D: Into<Diagnostics>,
    {
        Self {
            value: None,
            diagnostics: diagnostics.into(),
        }
    }

    pub fn has_error(&self) -> bool {
        self.diagnostics.has_error()
    }
}

impl<T> Default for Response<T> {
    fn default() -> Self {
        Self {
            value: None,
            diagnostics: Diagnostics::new(),
        }
    }
}
