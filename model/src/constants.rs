/// Helper macro to avoid retyping the provider type name when creating further string constants
/// from it. When given no parameters, this returns the provider type name. When given a string
/// literal parameter it adds `_parameter` to the end.
macro_rules! provider {
    () => {
        "k8s"
    };
    ($s:literal) => {
        concat!(provider!(), "_", $s)
    };
}

// Provider identifiers
pub const PROVIDER_TYPE_NAME: &str = provider!();
pub const PROVIDER_VERSION: &str = env!("CARGO_PKG_VERSION");

// Top-level attribute names shared by every resource
pub const ATTR_ID: &str = "id";
pub const ATTR_YAML: &str = "yaml";
pub const ATTR_API_VERSION: &str = "api_version";
pub const ATTR_KIND: &str = "kind";
pub const ATTR_METADATA: &str = "metadata";
pub const ATTR_SPEC: &str = "spec";

// Metadata attribute names
pub const ATTR_NAME: &str = "name";
pub const ATTR_NAMESPACE: &str = "namespace";
pub const ATTR_LABELS: &str = "labels";
pub const ATTR_ANNOTATIONS: &str = "annotations";

// Diagnostic summaries
pub const DIAG_GENERATE_YAML: &str = "Could not generate YAML";
pub const DIAG_READ_CONFIGURATION: &str = "Could not read configuration";
pub const DIAG_GENERATE_ID: &str = "Could not generate ID";
pub const DIAG_UNKNOWN_RESOURCE: &str = "Unknown resource type";
pub const DIAG_MISSING_ARGUMENT: &str = "Missing required argument";
pub const DIAG_UNSUPPORTED_ARGUMENT: &str = "Unsupported argument";
pub const DIAG_READ_ONLY_ATTRIBUTE: &str = "Invalid configuration for read-only attribute";
pub const DIAG_INCORRECT_TYPE: &str = "Incorrect attribute value type";
pub const DIAG_INVALID_VALUE: &str = "Invalid attribute value";

// Kubernetes limits, see k8s.io/apimachinery/pkg/util/validation
pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
pub const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
pub const LABEL_VALUE_MAX_LENGTH: usize = 63;
pub const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;

#[test]
fn provider_constants_macro_test() {
    assert_eq!("k8s", provider!());
    assert_eq!("k8s", PROVIDER_TYPE_NAME);
    assert_eq!("k8s_foo", provider!("foo"));
}
