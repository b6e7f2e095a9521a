//! Tag resource.

use serde::{Deserialize, Serialize};

use crate::rest::fields::is_zero;
use crate::rest::{ResourceName, RestResource};

/// A label that can be applied to nearly anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub label: String,
}

impl Tag {
    /// Creates a tag input with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: 0,
            label: label.into(),
        }
    }
}

impl RestResource for Tag {
    type Input = Self;

    const NAME: &'static str = "Tag";
    const PATH: ResourceName = ResourceName::new("tag");

    fn input_id(input: &Self) -> i64 {
        input.id
    }
}
