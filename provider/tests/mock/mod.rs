use configuration_derive::Configuration;
use crdform_model::{Attribute, Validator};
use crdform_provider::ManifestResource;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

/// A spec that can be read from configuration but never written to YAML, so that the marshal
/// failure path can be tested.
#[derive(Clone, Debug, Default, Deserialize, Configuration)]
pub(crate) struct UnprintableSpec {
    pub(crate) color: Option<String>,
}

impl Serialize for UnprintableSpec {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(S::Error::custom("the color cannot be printed"))
    }
}

pub(crate) struct Unprintable;

impl ManifestResource for Unprintable {
    type Spec = UnprintableSpec;
    const GROUP: &'static str = "mock.example.com";
    const VERSION: &'static str = "v1alpha1";
    const KIND: &'static str = "Unprintable";
    const DESCRIPTION: &'static str = "A resource whose spec cannot be serialized.";

    fn spec_schema() -> Attribute {
        Attribute::object("Unprintable spec.").attribute(
            "color",
            Attribute::string("Any color but the right one.")
                .validator(Validator::OneOf(&["red", "green"])),
        )
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Configuration)]
#[serde(rename_all(serialize = "camelCase"))]
pub(crate) struct LampSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) brightness_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) turn_on_at: Option<String>,
}

/// A cluster-scoped resource that serializes normally.
pub(crate) struct Lamp;

impl ManifestResource for Lamp {
    type Spec = LampSpec;
    const GROUP: &'static str = "mock.example.com";
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "DeskLamp";
    const NAMESPACED: bool = false;
    const DESCRIPTION: &'static str = "A lamp.";

    fn spec_schema() -> Attribute {
        Attribute::object("Lamp spec.")
            .attribute(
                "brightness_percent",
                Attribute::int64("How bright.").validator(Validator::Int64Between(0, 100)),
            )
            .attribute(
                "turn_on_at",
                Attribute::string("When to turn on.").validator(Validator::DateTime),
            )
    }
}
