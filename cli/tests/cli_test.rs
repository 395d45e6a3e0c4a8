use assert_cmd::Command;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

const BUCKET: &str = "k8s_s3_services_k8s_aws_bucket_v1alpha1";

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn crdform() -> Command {
    Command::cargo_bin("crdform").unwrap()
}

#[test]
fn resources_lists_every_type() {
    let output = crdform().args(&["resources", "--json"]).output().unwrap();
    assert!(output.status.success());
    let rows: Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 7);
    let bucket = rows
        .iter()
        .find(|row| row["typeName"] == BUCKET)
        .unwrap();
    assert_eq!(bucket["apiVersion"], "s3.services.k8s.aws/v1alpha1");
    assert_eq!(bucket["kind"], "Bucket");
    assert_eq!(bucket["scope"], "Namespaced");
    let cluster_issuer = rows
        .iter()
        .find(|row| row["kind"] == "ClusterIssuer")
        .unwrap();
    assert_eq!(cluster_issuer["scope"], "Cluster");
}

#[test]
fn render_prints_the_manifest() {
    let file = config_file(
        r#"
metadata:
  name: my-bucket
spec:
  name: my-bucket
"#,
    );
    crdform()
        .args(&["render", BUCKET, file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            "apiVersion: s3.services.k8s.aws/v1alpha1\n\
            kind: Bucket\n\
            metadata:\n  \
              name: my-bucket\n\
            spec:\n  \
              name: my-bucket\n",
        );
}

#[test]
fn render_state() {
    let file = config_file(r#"{"metadata": {"name": "my-bucket"}, "spec": {"name": "my-bucket"}}"#);
    let output = crdform()
        .args(&["render", BUCKET, file.path().to_str().unwrap(), "--state"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let state: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["kind"], "Bucket");
    assert_eq!(state["api_version"], "s3.services.k8s.aws/v1alpha1");
    assert!(state["id"].as_i64().unwrap() > 0);
    assert_eq!(state["metadata"]["name"], "my-bucket");
}

#[test]
fn validate_rejects_a_bad_name() {
    let file = config_file(
        r#"
metadata:
  name: My_Bucket
spec:
  name: my-bucket
"#,
    );
    let output = crdform()
        .args(&["validate", BUCKET, file.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("metadata.name"), "{}", stdout);
}

#[test]
fn validate_accepts_a_good_config() {
    let file = config_file("metadata:\n  name: my-bucket\nspec:\n  name: my-bucket\n");
    crdform()
        .args(&["validate", BUCKET, file.path().to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn unknown_type_fails() {
    crdform()
        .args(&["schema", "k8s_example_com_gadget_v1"])
        .assert()
        .failure();
    let file = config_file("metadata:\n  name: gadget\n");
    crdform()
        .args(&[
            "render",
            "k8s_example_com_gadget_v1",
            file.path().to_str().unwrap(),
        ])
        .assert()
        .failure();
}

#[test]
fn schema_marks_computed_attributes() {
    let output = crdform().args(&["schema", BUCKET]).output().unwrap();
    assert!(output.status.success());
    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema.to_string().contains("computed"));
}
