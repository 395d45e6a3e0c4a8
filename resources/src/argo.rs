//! `argoproj.io/v1alpha1` resources of Argo Rollouts.

use configuration_derive::Configuration;
use crdform_model::{Attribute, Validator};
use crdform_provider::ManifestResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const SELECTOR_OPERATORS: &[&str] = &["In", "NotIn", "Exists", "DoesNotExist"];
const SCALE_DOWN: &[&str] = &["never", "onsuccess", "progressively"];

/// A Deployment replacement with blue-green and canary update strategies.
pub struct Rollout;

impl ManifestResource for Rollout {
    type Spec = RolloutSpec;
    const GROUP: &'static str = "argoproj.io";
    const VERSION: &'static str = "v1alpha1";
    const KIND: &'static str = "Rollout";
    const DESCRIPTION: &'static str = "Rollout is a specification for a Rollout resource";

    fn spec_schema() -> Attribute {
        Attribute::object("RolloutSpec is the spec for a Rollout resource")
            .required()
            .attribute(
                "analysis",
                Attribute::object("Analysis configuration for the analysis runs to retain")
                    .attribute(
                        "successful_run_history_limit",
                        Attribute::int64("SuccessfulRunHistoryLimit limits the number of old \
                            successful analysis runs and experiments to be retained in a \
                            history")
                        .validator(Validator::Int64AtLeast(0)),
                    )
                    .attribute(
                        "unsuccessful_run_history_limit",
                        Attribute::int64("UnsuccessfulRunHistoryLimit limits the number of old \
                            unsuccessful analysis runs and experiments to be retained in a \
                            history.")
                        .validator(Validator::Int64AtLeast(0)),
                    ),
            )
            .attribute(
                "min_ready_seconds",
                Attribute::int64("Minimum number of seconds for which a newly created pod should \
                    be ready without any of its container crashing, for it to be considered \
                    available.")
                .validator(Validator::Int64AtLeast(0)),
            )
            .attribute(
                "paused",
                Attribute::bool("Paused pauses the rollout at its current step."),
            )
            .attribute(
                "progress_deadline_abort",
                Attribute::bool("ProgressDeadlineAbort is whether to abort the update when \
                    ProgressDeadlineSeconds is exceeded."),
            )
            .attribute(
                "progress_deadline_seconds",
                Attribute::int64("ProgressDeadlineSeconds The maximum time in seconds for a \
                    rollout to make progress before it is considered to be failed.")
                .validator(Validator::Int64AtLeast(0)),
            )
            .attribute(
                "replicas",
                Attribute::int64("Number of desired pods.").validator(Validator::Int64AtLeast(0)),
            )
            .attribute(
                "restart_at",
                Attribute::string("RestartAt indicates when all the pods of a Rollout should be \
                    restarted")
                .validator(Validator::DateTime),
            )
            .attribute(
                "revision_history_limit",
                Attribute::int64("The number of old ReplicaSets to retain.")
                    .validator(Validator::Int64AtLeast(0)),
            )
            .attribute(
                "selector",
                Attribute::object("Label selector for pods.")
                    .attribute(
                        "match_expressions",
                        Attribute::object_list("matchExpressions is a list of label selector \
                            requirements. The requirements are ANDed.")
                        .attribute(
                            "key",
                            Attribute::string("key is the label key that the selector applies \
                                to.")
                            .required(),
                        )
                        .attribute(
                            "operator",
                            Attribute::string("operator represents a key's relationship to a \
                                set of values.")
                            .required()
                            .validator(Validator::OneOf(SELECTOR_OPERATORS)),
                        )
                        .attribute(
                            "values",
                            Attribute::string_list("values is an array of string values."),
                        ),
                    )
                    .attribute(
                        "match_labels",
                        Attribute::string_map("matchLabels is a map of {key,value} pairs.")
                            .validator(Validator::Labels),
                    ),
            )
            .attribute("strategy", strategy_schema())
            .attribute(
                "workload_ref",
                Attribute::object("WorkloadRef holds a references to a workload that provides \
                    Pod template")
                .attribute(
                    "api_version",
                    Attribute::string("API Version of the referent"),
                )
                .attribute("kind", Attribute::string("Kind of the referent"))
                .attribute("name", Attribute::string("Name of the referent"))
                .attribute(
                    "scale_down",
                    Attribute::string("Automatically scale down deployment")
                        .validator(Validator::OneOf(SCALE_DOWN)),
                ),
            )
    }
}

fn strategy_schema() -> Attribute {
    Attribute::object("The deployment strategy to use to replace existing pods with new ones.")
        .attribute(
            "blue_green",
            Attribute::object("BlueGreen update strategy")
                .attribute(
                    "abort_scale_down_delay_seconds",
                    Attribute::int64("AbortScaleDownDelaySeconds adds a delay in second before \
                        scaling down the preview replicaset if update is aborted.")
                    .validator(Validator::Int64AtLeast(0)),
                )
                .attribute(
                    "active_service",
                    Attribute::string("Name of the service that the rollout modifies as the \
                        active service.")
                    .required(),
                )
                .attribute(
                    "auto_promotion_enabled",
                    Attribute::bool("AutoPromotionEnabled indicates if the rollout should \
                        automatically promote the new ReplicaSet to the active service or enter \
                        a paused state."),
                )
                .attribute(
                    "auto_promotion_seconds",
                    Attribute::int64("AutoPromotionSeconds is a duration in seconds in which to \
                        delay auto-promotion.")
                    .validator(Validator::Int64AtLeast(0)),
                )
                .attribute(
                    "preview_replica_count",
                    Attribute::int64("PreviewReplicaCount is the number of replicas to run for \
                        the preview stack before the switchover.")
                    .validator(Validator::Int64AtLeast(0)),
                )
                .attribute(
                    "preview_service",
                    Attribute::string("Name of the service that the rollout modifies as the \
                        preview service."),
                )
                .attribute(
                    "scale_down_delay_seconds",
                    Attribute::int64("ScaleDownDelaySeconds adds a delay before scaling down the \
                        previous replicaset.")
                    .validator(Validator::Int64AtLeast(0)),
                ),
        )
        .attribute(
            "canary",
            Attribute::object("Canary update strategy")
                .attribute(
                    "canary_service",
                    Attribute::string("CanaryService holds the name of a service which selects \
                        pods with canary version and don't select any pods with stable \
                        version."),
                )
                .attribute(
                    "max_surge",
                    Attribute::string("MaxSurge is the maximum number of pods that can be \
                        scheduled above the original number of pods, as a number or \
                        percentage."),
                )
                .attribute(
                    "max_unavailable",
                    Attribute::string("MaxUnavailable is the maximum number of pods that can be \
                        unavailable during the update, as a number or percentage."),
                )
                .attribute(
                    "scale_down_delay_seconds",
                    Attribute::int64("ScaleDownDelaySeconds adds a delay before scaling down the \
                        previous ReplicaSet when the canary strategy is used with traffic \
                        routing.")
                    .validator(Validator::Int64AtLeast(0)),
                )
                .attribute(
                    "stable_service",
                    Attribute::string("StableService holds the name of a service which selects \
                        pods with stable version and don't select any pods with canary \
                        version."),
                )
                .attribute(
                    "steps",
                    Attribute::object_list("Steps define the order of phases to execute the \
                        canary deployment")
                    .attribute(
                        "pause",
                        Attribute::object("Pause freezes the rollout by setting \
                            spec.Paused to true.")
                        .attribute(
                            "duration",
                            Attribute::string("Duration the amount of time to wait before \
                                moving to the next step."),
                        ),
                    )
                    .attribute(
                        "set_canary_scale",
                        Attribute::object("SetCanaryScale defines how to scale the newRS \
                            without changing traffic weight")
                        .attribute(
                            "match_traffic_weight",
                            Attribute::bool("MatchTrafficWeight cancels out previously set \
                                Replicas or Weight, effectively activating SetWeight"),
                        )
                        .attribute(
                            "replicas",
                            Attribute::int64("Replicas sets the number of replicas the newRS \
                                should have")
                            .validator(Validator::Int64AtLeast(0)),
                        )
                        .attribute(
                            "weight",
                            Attribute::int64("Weight sets the percentage of replicas the newRS \
                                should have")
                            .validator(Validator::Int64Between(0, 100)),
                        ),
                    )
                    .attribute(
                        "set_weight",
                        Attribute::int64("SetWeight sets what percentage of the newRS should \
                            receive")
                        .validator(Validator::Int64Between(0, 100)),
                    ),
                )
                .attribute(
                    "traffic_routing",
                    Attribute::object("TrafficRouting hosts all the supported service meshes \
                        supported to enable more fine-grained traffic routing")
                    .attribute(
                        "istio",
                        Attribute::object("Istio holds Istio specific configuration to route \
                            traffic")
                        .attribute(
                            "destination_rule",
                            Attribute::object("DestinationRule references an Istio \
                                DestinationRule to modify to shape traffic")
                            .attribute(
                                "canary_subset_name",
                                Attribute::string("CanarySubsetName is the subset name to \
                                    modify labels with canary ReplicaSet pod template hash \
                                    value")
                                .required(),
                            )
                            .attribute(
                                "name",
                                Attribute::string("Name holds the name of the DestinationRule")
                                    .required(),
                            )
                            .attribute(
                                "stable_subset_name",
                                Attribute::string("StableSubsetName is the subset name to \
                                    modify labels with stable ReplicaSet pod template hash \
                                    value")
                                .required(),
                            ),
                        )
                        .attribute(
                            "virtual_service",
                            Attribute::object("VirtualService references an Istio \
                                VirtualService to modify to shape traffic")
                            .attribute(
                                "name",
                                Attribute::string("Name holds the name of the VirtualService")
                                    .required(),
                            )
                            .attribute(
                                "routes",
                                Attribute::string_list("A list of HTTP routes within \
                                    VirtualService to edit."),
                            ),
                        ),
                    )
                    .attribute(
                        "nginx",
                        Attribute::object("Nginx holds Nginx Ingress specific configuration to \
                            route traffic")
                        .attribute(
                            "additional_ingress_annotations",
                            Attribute::string_map("AdditionalIngressAnnotations is a set of \
                                annotations to add to the canary ingress")
                            .validator(Validator::Annotations),
                        )
                        .attribute(
                            "annotation_prefix",
                            Attribute::string("AnnotationPrefix has to match the configured \
                                annotation prefix on the nginx ingress controller"),
                        )
                        .attribute(
                            "stable_ingress",
                            Attribute::string("StableIngress refers to the name of an Ingress \
                                resource in the same namespace as the Rollout")
                            .required(),
                        ),
                    ),
                ),
        )
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Configuration)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RolloutSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisRunStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_ready_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_deadline_abort: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_deadline_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<RolloutStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_ref: Option<WorkloadRef>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AnalysisRunStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_run_history_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsuccessful_run_history_limit: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LabelSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_expressions: Option<Vec<LabelSelectorRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<BTreeMap<String, String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct LabelSelectorRequirement {
    pub key: String,
    pub operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RolloutStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blue_green: Option<BlueGreenStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary: Option<CanaryStrategy>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct BlueGreenStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_scale_down_delay_seconds: Option<i64>,
    pub active_service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_promotion_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_promotion_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_replica_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_delay_seconds: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CanaryStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_surge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_delay_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stable_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<CanaryStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_routing: Option<TrafficRouting>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CanaryStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause: Option<RolloutPause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_canary_scale: Option<SetCanaryScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_weight: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct RolloutPause {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SetCanaryScale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_traffic_weight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct TrafficRouting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub istio: Option<IstioTrafficRouting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nginx: Option<NginxTrafficRouting>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct IstioTrafficRouting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_rule: Option<IstioDestinationRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_service: Option<IstioVirtualService>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct IstioDestinationRule {
    pub canary_subset_name: String,
    pub name: String,
    pub stable_subset_name: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct IstioVirtualService {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct NginxTrafficRouting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_ingress_annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_prefix: Option<String>,
    pub stable_ingress: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkloadRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down: Option<String>,
}
