//! `s3.services.k8s.aws/v1alpha1` resources of the ACK S3 controller.

use crate::ack::Tag;
use configuration_derive::Configuration;
use crdform_model::{Attribute, Validator};
use crdform_provider::ManifestResource;
use serde::{Deserialize, Serialize};

const STATUS: &[&str] = &["Enabled", "Disabled"];
const VERSIONING_STATUS: &[&str] = &["Enabled", "Suspended"];
const OBJECT_OWNERSHIP: &[&str] = &["BucketOwnerPreferred", "ObjectWriter", "BucketOwnerEnforced"];
const SSE_ALGORITHMS: &[&str] = &["AES256", "aws:kms", "aws:kms:dsse"];
const CANNED_ACLS: &[&str] = &[
    "private",
    "public-read",
    "public-read-write",
    "authenticated-read",
];
const PROTOCOLS: &[&str] = &["http", "https"];
const STORAGE_CLASSES: &[&str] = &[
    "GLACIER",
    "STANDARD_IA",
    "ONEZONE_IA",
    "INTELLIGENT_TIERING",
    "DEEP_ARCHIVE",
    "GLACIER_IR",
];

/// An S3 bucket.
pub struct Bucket;

impl ManifestResource for Bucket {
    type Spec = BucketSpec;
    const GROUP: &'static str = "s3.services.k8s.aws";
    const VERSION: &'static str = "v1alpha1";
    const KIND: &'static str = "Bucket";
    const DESCRIPTION: &'static str = "Bucket is the Schema for the Buckets API";

    fn spec_schema() -> Attribute {
        Attribute::object(
            "BucketSpec defines the desired state of Bucket. In terms of implementation, a Bucket \
            is a resource. For more information about buckets, see Buckets overview in the Amazon \
            S3 User Guide.",
        )
        .required()
        .attribute(
            "acl",
            Attribute::string("The canned ACL to apply to the bucket.")
                .validator(Validator::OneOf(CANNED_ACLS)),
        )
        .attribute(
            "accelerate",
            Attribute::object("Container for setting the transfer acceleration state.").attribute(
                "status",
                Attribute::string("Specifies the transfer acceleration status of the bucket.")
                    .validator(Validator::OneOf(VERSIONING_STATUS)),
            ),
        )
        .attribute(
            "cors",
            Attribute::object("Describes the cross-origin access configuration for objects.")
                .attribute(
                    "cors_rules",
                    Attribute::object_list("A set of origins and methods that you allow.")
                        .attribute(
                            "allowed_headers",
                            Attribute::string_list(
                                "Headers that are specified in the Access-Control-Request-Headers \
                                header.",
                            ),
                        )
                        .attribute(
                            "allowed_methods",
                            Attribute::string_list("An HTTP method that you allow the origin to \
                                execute.")
                            .validator(Validator::ValuesOneOf(&[
                                "GET", "PUT", "HEAD", "POST", "DELETE",
                            ])),
                        )
                        .attribute(
                            "allowed_origins",
                            Attribute::string_list(
                                "One or more origins you want customers to be able to access the \
                                bucket from.",
                            ),
                        )
                        .attribute(
                            "expose_headers",
                            Attribute::string_list(
                                "One or more headers in the response that you want customers to be \
                                able to access from their applications.",
                            ),
                        )
                        .attribute("id", Attribute::string("Unique identifier for the rule."))
                        .attribute(
                            "max_age_seconds",
                            Attribute::int64(
                                "The time in seconds that your browser is to cache the preflight \
                                response for the specified resource.",
                            )
                            .validator(Validator::Int64AtLeast(0)),
                        ),
                ),
        )
        .attribute(
            "create_bucket_configuration",
            Attribute::object("The configuration information for the bucket.").attribute(
                "location_constraint",
                Attribute::string("Specifies the Region where the bucket will be created."),
            ),
        )
        .attribute(
            "encryption",
            Attribute::object("Specifies the default server-side-encryption configuration.")
                .attribute(
                    "rules",
                    Attribute::object_list("Container for information about a particular \
                        server-side encryption configuration rule.")
                    .attribute(
                        "apply_server_side_encryption_by_default",
                        Attribute::object(
                            "Describes the default server-side encryption to apply to new objects \
                            in the bucket.",
                        )
                        .attribute(
                            "kms_master_key_id",
                            Attribute::string("AWS Key Management Service (KMS) customer AWS KMS \
                                key ID to use for the default encryption."),
                        )
                        .attribute(
                            "sse_algorithm",
                            Attribute::string("Server-side encryption algorithm to use for the \
                                default encryption.")
                            .validator(Validator::OneOf(SSE_ALGORITHMS)),
                        ),
                    )
                    .attribute(
                        "bucket_key_enabled",
                        Attribute::bool("Specifies whether Amazon S3 should use an S3 Bucket Key \
                            with server-side encryption using KMS."),
                    ),
                ),
        )
        .attribute(
            "grant_full_control",
            Attribute::string(
                "Allows grantee the read, write, read ACP, and write ACP permissions on the \
                bucket.",
            ),
        )
        .attribute(
            "grant_read",
            Attribute::string("Allows grantee to list the objects in the bucket."),
        )
        .attribute(
            "grant_read_acp",
            Attribute::string("Allows grantee to read the bucket ACL."),
        )
        .attribute(
            "grant_write",
            Attribute::string("Allows grantee to create new objects in the bucket."),
        )
        .attribute(
            "grant_write_acp",
            Attribute::string("Allows grantee to write the ACL for the applicable bucket."),
        )
        .attribute(
            "lifecycle",
            Attribute::object("Container for lifecycle rules.").attribute(
                "rules",
                Attribute::object_list("A lifecycle rule for individual objects in an Amazon S3 \
                    bucket.")
                .attribute(
                    "abort_incomplete_multipart_upload",
                    Attribute::object(
                        "Specifies the days since the initiation of an incomplete multipart \
                        upload that Amazon S3 will wait before permanently removing all parts of \
                        the upload.",
                    )
                    .attribute(
                        "days_after_initiation",
                        Attribute::int64("Specifies the number of days after which Amazon S3 \
                            aborts an incomplete multipart upload.")
                        .validator(Validator::Int64AtLeast(1)),
                    ),
                )
                .attribute(
                    "expiration",
                    Attribute::object("Container for the expiration for the lifecycle of the \
                        object.")
                    .attribute(
                        "date",
                        Attribute::string("Indicates at what date the object is to be moved or \
                            deleted.")
                        .validator(Validator::DateTime),
                    )
                    .attribute(
                        "days",
                        Attribute::int64("Indicates the lifetime, in days, of the objects that \
                            are subject to the rule.")
                        .validator(Validator::Int64AtLeast(1)),
                    )
                    .attribute(
                        "expired_object_delete_marker",
                        Attribute::bool("Indicates whether Amazon S3 will remove a delete marker \
                            with no noncurrent versions."),
                    ),
                )
                .attribute("id", Attribute::string("Unique identifier for the rule."))
                .attribute(
                    "prefix",
                    Attribute::string("Prefix identifying one or more objects to which the rule \
                        applies."),
                )
                .attribute(
                    "status",
                    Attribute::string("If 'Enabled', the rule is currently being applied.")
                        .required()
                        .validator(Validator::OneOf(STATUS)),
                )
                .attribute(
                    "transitions",
                    Attribute::object_list("Specifies when an Amazon S3 object transitions to a \
                        specified storage class.")
                    .attribute(
                        "date",
                        Attribute::string("Indicates when objects are transitioned to the \
                            specified storage class.")
                        .validator(Validator::DateTime),
                    )
                    .attribute(
                        "days",
                        Attribute::int64("Indicates the number of days after creation when \
                            objects are transitioned to the specified storage class.")
                        .validator(Validator::Int64AtLeast(0)),
                    )
                    .attribute(
                        "storage_class",
                        Attribute::string("The storage class to which you want the object to \
                            transition.")
                        .validator(Validator::OneOf(STORAGE_CLASSES)),
                    ),
                ),
            ),
        )
        .attribute(
            "logging",
            Attribute::object("Container for logging status information.").attribute(
                "logging_enabled",
                Attribute::object(
                    "Describes where logs are stored and the prefix that Amazon S3 assigns to all \
                    log object keys for a bucket.",
                )
                .attribute(
                    "target_bucket",
                    Attribute::string("Specifies the bucket where you want Amazon S3 to store \
                        server access logs."),
                )
                .attribute(
                    "target_prefix",
                    Attribute::string("A prefix for all log object keys."),
                ),
            ),
        )
        .attribute(
            "name",
            Attribute::string("The name of the bucket to create.").required(),
        )
        .attribute(
            "object_lock_enabled_for_bucket",
            Attribute::bool(
                "Specifies whether you want S3 Object Lock to be enabled for the new bucket.",
            ),
        )
        .attribute(
            "object_ownership",
            Attribute::string("The container element for object ownership for a bucket's \
                ownership controls.")
            .validator(Validator::OneOf(OBJECT_OWNERSHIP)),
        )
        .attribute(
            "ownership_controls",
            Attribute::object("The OwnershipControls (BucketOwnerEnforced, BucketOwnerPreferred, \
                or ObjectWriter) that you want to apply to this Amazon S3 bucket.")
            .attribute(
                "rules",
                Attribute::object_list("The container element for an ownership control rule.")
                    .attribute(
                        "object_ownership",
                        Attribute::string("The container element for object ownership for a \
                            bucket's ownership controls.")
                        .validator(Validator::OneOf(OBJECT_OWNERSHIP)),
                    ),
            ),
        )
        .attribute(
            "policy",
            Attribute::string("The bucket policy as a JSON document."),
        )
        .attribute(
            "public_access_block",
            Attribute::object(
                "The PublicAccessBlock configuration that you want to apply to this Amazon S3 \
                bucket.",
            )
            .attribute(
                "block_public_acls",
                Attribute::bool("Specifies whether Amazon S3 should block public access control \
                    lists (ACLs) for this bucket and objects in this bucket."),
            )
            .attribute(
                "block_public_policy",
                Attribute::bool("Specifies whether Amazon S3 should block public bucket policies \
                    for this bucket."),
            )
            .attribute(
                "ignore_public_acls",
                Attribute::bool("Specifies whether Amazon S3 should ignore public ACLs for this \
                    bucket and objects in this bucket."),
            )
            .attribute(
                "restrict_public_buckets",
                Attribute::bool("Specifies whether Amazon S3 should restrict public bucket \
                    policies for this bucket."),
            ),
        )
        .attribute(
            "tagging",
            Attribute::object("Container for the TagSet and Tag elements.")
                .attribute("tag_set", Tag::schema("A collection for a set of tags.")),
        )
        .attribute(
            "versioning",
            Attribute::object("Container for setting the versioning state.")
                .attribute(
                    "mfa_delete",
                    Attribute::string("Specifies whether MFA delete is enabled in the bucket \
                        versioning configuration.")
                    .validator(Validator::OneOf(STATUS)),
                )
                .attribute(
                    "status",
                    Attribute::string("The versioning state of the bucket.")
                        .validator(Validator::OneOf(VERSIONING_STATUS)),
                ),
        )
        .attribute(
            "website",
            Attribute::object("Container for the request.")
                .attribute(
                    "error_document",
                    Attribute::object("The error information.").attribute(
                        "key",
                        Attribute::string("The object key name to use when a 4XX class error \
                            occurs."),
                    ),
                )
                .attribute(
                    "index_document",
                    Attribute::object("Container for the Suffix element.").attribute(
                        "suffix",
                        Attribute::string("A suffix that is appended to a request that is for a \
                            directory on the website endpoint."),
                    ),
                )
                .attribute(
                    "redirect_all_requests_to",
                    Attribute::object(
                        "Specifies the redirect behavior of all requests to a website endpoint of \
                        an Amazon S3 bucket.",
                    )
                    .attribute(
                        "host_name",
                        Attribute::string("Name of the host where requests are redirected."),
                    )
                    .attribute(
                        "protocol",
                        Attribute::string("Protocol to use when redirecting requests.")
                            .validator(Validator::OneOf(PROTOCOLS)),
                    ),
                ),
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Configuration)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct BucketSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerate: Option<AccelerateConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<CorsConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_bucket_configuration: Option<CreateBucketConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<ServerSideEncryptionConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_full_control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_read: Option<String>,
    #[serde(
        rename(serialize = "grantReadACP"),
        skip_serializing_if = "Option::is_none"
    )]
    pub grant_read_acp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_write: Option<String>,
    #[serde(
        rename(serialize = "grantWriteACP"),
        skip_serializing_if = "Option::is_none"
    )]
    pub grant_write_acp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<LifecycleConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingStatus>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_lock_enabled_for_bucket: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_ownership: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_controls: Option<OwnershipControls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_access_block: Option<PublicAccessBlockConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagging: Option<Tagging>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<VersioningConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<WebsiteConfiguration>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct AccelerateConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CorsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_rules: Option<Vec<CorsRule>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CorsRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expose_headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CreateBucketConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_constraint: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ServerSideEncryptionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ServerSideEncryptionRule>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ServerSideEncryptionRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_server_side_encryption_by_default: Option<ServerSideEncryptionByDefault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_key_enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ServerSideEncryptionByDefault {
    #[serde(
        rename(serialize = "kmsMasterKeyID"),
        skip_serializing_if = "Option::is_none"
    )]
    pub kms_master_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sse_algorithm: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct LifecycleConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<LifecycleRule>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LifecycleRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_incomplete_multipart_upload: Option<AbortIncompleteMultipartUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<LifecycleExpiration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Vec<Transition>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AbortIncompleteMultipartUpload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_after_initiation: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LifecycleExpiration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_object_delete_marker: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Transition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LoggingStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_enabled: Option<LoggingEnabled>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LoggingEnabled {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_prefix: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct OwnershipControls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<OwnershipControlsRule>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct OwnershipControlsRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_ownership: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PublicAccessBlockConfiguration {
    #[serde(
        rename(serialize = "blockPublicACLs"),
        skip_serializing_if = "Option::is_none"
    )]
    pub block_public_acls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_public_policy: Option<bool>,
    #[serde(
        rename(serialize = "ignorePublicACLs"),
        skip_serializing_if = "Option::is_none"
    )]
    pub ignore_public_acls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_public_buckets: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Tagging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_set: Option<Vec<Tag>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VersioningConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_delete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WebsiteConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_document: Option<ErrorDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_document: Option<IndexDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_all_requests_to: Option<RedirectAllRequestsTo>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ErrorDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct IndexDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RedirectAllRequestsTo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

#[cfg(test)]
mod test {
    use super::{Bucket, BucketSpec, PublicAccessBlockConfiguration};
    use crdform_model::{Configuration, Manifest, Metadata};
    use crdform_provider::ManifestResource;
    use serde_json::json;

    #[test]
    fn irregular_keys() {
        let spec = BucketSpec::from_value(json!({
            "name": "logs",
            "grant_read_acp": "id=abc",
            "public_access_block": { "block_public_acls": true, "ignore_public_acls": false },
            "encryption": { "rules": [
                { "apply_server_side_encryption_by_default": { "kms_master_key_id": "k-1" } }
            ] },
        }))
        .unwrap();
        assert_eq!(
            spec.public_access_block,
            Some(PublicAccessBlockConfiguration {
                block_public_acls: Some(true),
                ignore_public_acls: Some(false),
                ..Default::default()
            })
        );
        let value = spec.into_value().unwrap();
        assert_eq!(value["grantReadACP"], "id=abc");
        assert_eq!(value["publicAccessBlock"]["blockPublicACLs"], true);
        assert_eq!(value["publicAccessBlock"]["ignorePublicACLs"], false);
        assert_eq!(
            value["encryption"]["rules"][0]["applyServerSideEncryptionByDefault"]
                ["kmsMasterKeyID"],
            "k-1"
        );
    }

    #[test]
    fn minimal_bucket_yaml() {
        let spec = BucketSpec {
            name: "my-bucket".to_string(),
            ..Default::default()
        };
        let yaml = Manifest::new(
            Bucket::api_version(),
            Bucket::KIND,
            Metadata::new("my-bucket"),
            Some(spec),
        )
        .to_yaml()
        .unwrap();
        assert_eq!(
            yaml,
            "apiVersion: s3.services.k8s.aws/v1alpha1\n\
            kind: Bucket\n\
            metadata:\n  \
              name: my-bucket\n\
            spec:\n  \
              name: my-bucket\n"
        );
    }
}
