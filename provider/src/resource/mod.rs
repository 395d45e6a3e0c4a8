mod error;

pub use self::error::{IntoProviderError, ProviderError, ProviderResult};
use crate::error::ErrorMessage;
use crate::requests::{CreateRequest, DeleteRequest, ReadRequest, State, UpdateRequest};
use crdform_model::constants::{
    ATTR_API_VERSION, ATTR_ID, ATTR_KIND, ATTR_METADATA, ATTR_SPEC, ATTR_YAML, DIAG_GENERATE_ID,
    DIAG_GENERATE_YAML, DIAG_READ_CONFIGURATION,
};
use crdform_model::{timestamp_id, Attribute, Configuration, Metadata, ResourceModel, Schema};
use heck::ToSnakeCase;
use log::trace;
use serde_json::Value;
use std::marker::PhantomData;

/// You implement the [`ManifestResource`] trait to describe one Kubernetes custom resource
/// definition. The implementing type is never instantiated, it only carries the CRD's identity and
/// schema. Wrap it in a [`CrdResource`] (or use [`Provider::with_resource`]) to get a [`Resource`].
///
/// ## Custom Types
///
/// - `Spec` is the CRD's `spec`. It is read from the `spec` attribute of the configuration and
///   written to the `spec` key of the generated manifest, so its serde attributes decide the
///   Kubernetes field names.
///
/// [`Provider::with_resource`]: crate::Provider::with_resource
pub trait ManifestResource: Send + Sync + 'static {
    type Spec: Configuration;

    /// The API group, e.g. `cert-manager.io`. Empty for the core group.
    const GROUP: &'static str;
    const VERSION: &'static str;
    const KIND: &'static str;
    /// Cluster-scoped kinds have no `metadata.namespace`.
    const NAMESPACED: bool = true;
    const DESCRIPTION: &'static str;

    /// The `spec` attribute of the resource schema.
    fn spec_schema() -> Attribute;

    /// The `apiVersion` written to every manifest, e.g. `cert-manager.io/v1`.
    fn api_version() -> String {
        if Self::GROUP.is_empty() {
            Self::VERSION.to_string()
        } else {
            format!("{}/{}", Self::GROUP, Self::VERSION)
        }
    }

    /// The resource type name, e.g. `k8s_cert_manager_io_certificate_v1`.
    fn type_name(provider: &str) -> String {
        let kind = Self::KIND.to_snake_case();
        if Self::GROUP.is_empty() {
            format!("{}_{}_{}", provider, kind, Self::VERSION)
        } else {
            let group = Self::GROUP.replace(['.', '-'], "_");
            format!("{}_{}_{}_{}", provider, group, kind, Self::VERSION)
        }
    }
}

/// A resource as seen by the [`Provider`]: its identity, its schema, and its lifecycle operations.
/// Configurations reaching `create` and `update` have already been validated against `schema`.
///
/// [`Provider`]: crate::Provider
#[async_trait::async_trait]
pub trait Resource: Send + Sync {
    fn type_name(&self, provider: &str) -> String;

    fn api_version(&self) -> String;

    fn kind(&self) -> &str;

    fn schema(&self) -> Schema;

    async fn create(&self, request: CreateRequest) -> ProviderResult<State>;

    async fn read(&self, request: ReadRequest) -> ProviderResult<State>;

    async fn update(&self, request: UpdateRequest) -> ProviderResult<State>;

    async fn delete(&self, request: DeleteRequest) -> ProviderResult<()>;
}

/// The [`Resource`] implementation shared by every [`ManifestResource`].
pub struct CrdResource<R> {
    resource: PhantomData<R>,
}

impl<R> CrdResource<R>
where
    R: ManifestResource,
{
    pub fn new() -> Self {
        Self {
            resource: PhantomData::default(),
        }
    }

    /// Renders the configuration as a manifest and returns the state to store: the configuration
    /// with `id`, `yaml`, `api_version` and `kind` filled in.
    fn apply(config: Value) -> ProviderResult<State> {
        let mut state = match config {
            Value::Object(map) => map,
            other => {
                return Err(ProviderError::new_with_source(
                    DIAG_READ_CONFIGURATION,
                    ErrorMessage::from(format!("expected an object, got '{}'", other)),
                ))
            }
        };
        let model =
            ResourceModel::<R::Spec>::from_map(state.clone()).context(DIAG_READ_CONFIGURATION)?;
        let id = timestamp_id().context(DIAG_GENERATE_ID)?;
        let api_version = R::api_version();
        let yaml = model
            .to_manifest(&api_version, R::KIND)
            .to_yaml()
            .context(DIAG_GENERATE_YAML)?;
        trace!("generated manifest for '{}':\n{}", model.metadata.name, yaml);

        state.insert(ATTR_ID.to_string(), Value::from(id));
        state.insert(ATTR_YAML.to_string(), Value::from(yaml));
        state.insert(ATTR_API_VERSION.to_string(), Value::from(api_version));
        state.insert(ATTR_KIND.to_string(), Value::from(R::KIND));
        state.entry(ATTR_SPEC).or_insert(Value::Null);
        Ok(state)
    }
}

impl<R> Default for CrdResource<R>
where
    R: ManifestResource,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<R> Resource for CrdResource<R>
where
    R: ManifestResource,
{
    fn type_name(&self, provider: &str) -> String {
        R::type_name(provider)
    }

    fn api_version(&self) -> String {
        R::api_version()
    }

    fn kind(&self) -> &str {
        R::KIND
    }

    fn schema(&self) -> Schema {
        Schema::new(R::DESCRIPTION)
            .attribute(
                ATTR_ID,
                Attribute::int64("The timestamp of the last create or update, in nanoseconds.")
                    .computed(),
            )
            .attribute(
                ATTR_YAML,
                Attribute::string("The generated YAML manifest.").computed(),
            )
            .attribute(
                ATTR_API_VERSION,
                Attribute::string(
                    "APIVersion defines the versioned schema of this representation of an object.",
                )
                .computed(),
            )
            .attribute(
                ATTR_KIND,
                Attribute::string("Kind is a string value representing the REST resource this \
                    object represents.")
                .computed(),
            )
            .attribute(ATTR_METADATA, Metadata::schema(R::NAMESPACED))
            .attribute(ATTR_SPEC, R::spec_schema())
    }

    async fn create(&self, request: CreateRequest) -> ProviderResult<State> {
        Self::apply(request.config)
    }

    async fn read(&self, request: ReadRequest) -> ProviderResult<State> {
        Ok(request.state)
    }

    async fn update(&self, request: UpdateRequest) -> ProviderResult<State> {
        Self::apply(request.config)
    }

    async fn delete(&self, _request: DeleteRequest) -> ProviderResult<()> {
        Ok(())
    }
}
