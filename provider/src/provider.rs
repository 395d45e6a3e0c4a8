use crate::requests::{CreateRequest, DeleteRequest, ReadRequest, Response, State, UpdateRequest};
use crate::resource::{CrdResource, ManifestResource, ProviderError, Resource};
use crdform_model::constants::DIAG_UNKNOWN_RESOURCE;
use crdform_model::schema::validate_config;
use crdform_model::{Diagnostic, Diagnostics, Operation, Schema};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// What a provider offers: its name, its version and the type names of its resources.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    pub type_name: String,
    pub version: String,
    /// Sorted resource type names.
    pub resources: Vec<String>,
}

/// The dispatch table from resource type name to [`Resource`]. A `Provider` holds no mutable state,
/// every request is served independently.
pub struct Provider {
    type_name: String,
    version: String,
    resources: BTreeMap<String, Box<dyn Resource>>,
}

impl Provider {
    pub fn new<S1, S2>(type_name: S1, version: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            version: version.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Registers the [`ManifestResource`] `R`.
    pub fn with_resource<R>(mut self) -> Self
    where
        R: ManifestResource,
    {
        self.register(Box::new(CrdResource::<R>::new()));
        self
    }

    /// Registers a resource under its type name, replacing any resource with the same name.
    pub fn register(&mut self, resource: Box<dyn Resource>) {
        let type_name = resource.type_name(&self.type_name);
        debug!("registering resource '{}'", type_name);
        self.resources.insert(type_name, resource);
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: self.type_name.clone(),
            version: self.version.clone(),
            resources: self.resources.keys().cloned().collect(),
        }
    }

    /// The registered resources in type name order.
    pub fn resources(&self) -> impl Iterator<Item = (&str, &dyn Resource)> {
        self.resources
            .iter()
            .map(|(type_name, resource)| (type_name.as_str(), resource.as_ref()))
    }

    /// The schema of every resource, keyed by type name.
    pub fn schemas(&self) -> BTreeMap<String, Schema> {
        self.resources
            .iter()
            .map(|(type_name, resource)| (type_name.clone(), resource.schema()))
            .collect()
    }

    pub fn schema(&self, type_name: &str) -> Option<Schema> {
        self.resources.get(type_name).map(|resource| resource.schema())
    }

    /// Checks a configuration against the schema of the resource without running any handler.
    pub fn validate_resource_config(&self, type_name: &str, config: &Value) -> Diagnostics {
        match self.resources.get(type_name) {
            Some(resource) => validate_config(&resource.schema(), config),
            None => unknown_resource(type_name).into(),
        }
    }

    pub async fn create(&self, type_name: &str, request: CreateRequest) -> Response<State> {
        debug!("{} '{}'", Operation::Create, type_name);
        let resource = match self.validated(type_name, &request.config) {
            Ok(resource) => resource,
            Err(diagnostics) => return Response::failed(diagnostics),
        };
        respond(Operation::Create, type_name, resource.create(request).await)
    }

    pub async fn read(&self, type_name: &str, request: ReadRequest) -> Response<State> {
        debug!("{} '{}'", Operation::Read, type_name);
        let resource = match self.resources.get(type_name) {
            Some(resource) => resource,
            None => return Response::failed(unknown_resource(type_name)),
        };
        respond(Operation::Read, type_name, resource.read(request).await)
    }

    pub async fn update(&self, type_name: &str, request: UpdateRequest) -> Response<State> {
        debug!("{} '{}'", Operation::Update, type_name);
        let resource = match self.validated(type_name, &request.config) {
            Ok(resource) => resource,
            Err(diagnostics) => return Response::failed(diagnostics),
        };
        respond(Operation::Update, type_name, resource.update(request).await)
    }

    pub async fn delete(&self, type_name: &str, request: DeleteRequest) -> Response<()> {
        debug!("{} '{}'", Operation::Delete, type_name);
        let resource = match self.resources.get(type_name) {
            Some(resource) => resource,
            None => return Response::failed(unknown_resource(type_name)),
        };
        respond(Operation::Delete, type_name, resource.delete(request).await)
    }

    /// Looks up the resource and validates `config` against its schema. Returns the diagnostics
    /// instead of the resource if any of them is an error.
    fn validated(&self, type_name: &str, config: &Value) -> Result<&dyn Resource, Diagnostics> {
        let resource = self
            .resources
            .get(type_name)
            .ok_or_else(|| Diagnostics::from(unknown_resource(type_name)))?;
        let diagnostics = validate_config(&resource.schema(), config);
        if diagnostics.has_error() {
            debug!(
                "configuration of '{}' is invalid:\n{}",
                type_name, diagnostics
            );
            return Err(diagnostics);
        }
        Ok(resource.as_ref())
    }
}

fn unknown_resource(type_name: &str) -> Diagnostic {
    Diagnostic::error(
        DIAG_UNKNOWN_RESOURCE,
        format!("The provider does not support resource type '{}'", type_name),
    )
}

fn respond<T>(
    operation: Operation,
    type_name: &str,
    result: Result<T, ProviderError>,
) -> Response<T> {
    match result {
        Ok(value) => Response::ok(value),
        Err(e) => {
            error!("{} '{}' failed: {}", operation, type_name, e);
            Response::failed(e.to_diagnostic())
        }
    }
}

#[cfg(test)]
mod test {
    use super::Provider;
    use crate::requests::{CreateRequest, DeleteRequest, ReadRequest, UpdateRequest};
    use crate::resource::ManifestResource;
    use crdform_model::{Attribute, Configuration, Validator};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all(serialize = "camelCase"))]
    struct QueueSpec {
        #[serde(skip_serializing_if = "Option::is_none")]
        delivery_mode: Option<String>,
    }

    impl Configuration for QueueSpec {}

    struct Queue;

    impl ManifestResource for Queue {
        type Spec = QueueSpec;
        const GROUP: &'static str = "queues.example.com";
        const VERSION: &'static str = "v1";
        const KIND: &'static str = "Queue";
        const DESCRIPTION: &'static str = "A message queue.";

        fn spec_schema() -> Attribute {
            Attribute::object("Queue spec.").attribute(
                "delivery_mode",
                Attribute::string("How messages are delivered.")
                    .validator(Validator::OneOf(&["AtLeastOnce", "AtMostOnce"])),
            )
        }
    }

    const QUEUE: &str = "k8s_queues_example_com_queue_v1";

    fn provider() -> Provider {
        Provider::new("k8s", "0.1.0").with_resource::<Queue>()
    }

    #[test]
    fn metadata_lists_resources() {
        let metadata = provider().metadata();
        assert_eq!(metadata.type_name, "k8s");
        assert_eq!(metadata.version, "0.1.0");
        assert_eq!(metadata.resources, vec![QUEUE.to_string()]);
        assert!(provider().schema(QUEUE).is_some());
        assert!(provider().schema("k8s_nope").is_none());
        assert_eq!(provider().schemas().len(), 1);
        let provider = provider();
        let (type_name, resource) = provider.resources().next().unwrap();
        assert_eq!(type_name, QUEUE);
        assert_eq!(resource.kind(), "Queue");
        assert_eq!(resource.api_version(), "queues.example.com/v1");
    }

    #[test]
    fn validate_unknown_resource() {
        let diagnostics = provider().validate_resource_config("k8s_nope", &json!({}));
        assert!(diagnostics.has_error());
        assert_eq!(
            diagnostics.iter().next().unwrap().summary,
            "Unknown resource type"
        );
    }

    #[tokio::test]
    async fn invalid_config_skips_handler() {
        let response = provider()
            .create(
                QUEUE,
                CreateRequest {
                    config: json!({
                        "metadata": { "name": "q" },
                        "spec": { "delivery_mode": "ExactlyOnce" },
                    }),
                },
            )
            .await;
        assert!(response.value.is_none());
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Invalid attribute value");
        assert_eq!(
            diagnostic.attribute.as_ref().unwrap().to_string(),
            "spec.delivery_mode"
        );
    }

    #[tokio::test]
    async fn lifecycle() {
        let provider = provider();
        let config = json!({
            "metadata": { "name": "q", "namespace": "jobs" },
            "spec": { "delivery_mode": "AtMostOnce" },
        });
        let created = provider
            .create(
                QUEUE,
                CreateRequest {
                    config: config.clone(),
                },
            )
            .await;
        assert!(!created.has_error(), "{}", created.diagnostics);
        let state = created.value.unwrap();

        let read = provider
            .read(
                QUEUE,
                ReadRequest {
                    state: state.clone(),
                },
            )
            .await;
        assert_eq!(read.value.as_ref(), Some(&state));

        let updated = provider
            .update(
                QUEUE,
                UpdateRequest {
                    config,
                    prior_state: state.clone(),
                },
            )
            .await
            .value
            .unwrap();
        assert_eq!(updated["yaml"], state["yaml"]);

        let deleted = provider.delete(QUEUE, DeleteRequest { state }).await;
        assert!(deleted.diagnostics.is_empty());
        assert!(deleted.value.is_some());
    }

    #[tokio::test]
    async fn unknown_resource_on_every_operation() {
        let provider = provider();
        assert!(provider
            .read("k8s_nope", ReadRequest::default())
            .await
            .has_error());
        assert!(provider
            .delete("k8s_nope", DeleteRequest::default())
            .await
            .has_error());
        assert!(provider
            .update("k8s_nope", UpdateRequest::default())
            .await
            .has_error());
    }
}
