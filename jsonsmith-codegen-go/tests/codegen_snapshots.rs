//! Snapshot tests for Go code generation.
//!
//! These tests run the full pipeline (inference + rendering) and pin the
//! generated Go source, alignment included. Run `cargo insta review` to
//! update snapshots when making intentional changes.

use jsonsmith_codegen::{GoConfig, Renderer, Target, infer};
use jsonsmith_codegen_go::GoRenderer;

fn generate(json: &str) -> String {
    let config = GoConfig::default();
    let registry = infer(json, &Target::Go(config.clone())).expect("inference failed");
    GoRenderer::new(config).render(&registry).text
}

#[test]
fn test_snake_case_key_keeps_original_tag() {
    let text = generate(r#"{"user_id":7}"#);

    insta::assert_snapshot!(text, @r#"
type JsonClass struct {
    UserId int64 `json:"user_id"`
}
"#);
}

#[test]
fn test_nested_structs_read_root_first() {
    let text = generate(r#"{"config":{"retries":3,"verbose":true},"name":"svc"}"#);

    insta::assert_snapshot!(text, @r#"
type JsonClass struct {
    Config Config `json:"config"`
    Name   string `json:"name"`
}

type Config struct {
    Retries int64 `json:"retries"`
    Verbose bool  `json:"verbose"`
}
"#);
}

#[test]
fn test_slices_and_dynamic_fallbacks() {
    let text = generate(r#"{"items":[{"id":1}],"tags":["a"],"empty":[],"blob":null}"#);

    insta::assert_snapshot!(text, @r#"
type JsonClass struct {
    Items []Items       `json:"items"`
    Tags  []string      `json:"tags"`
    Empty []interface{} `json:"empty"`
    Blob  interface{}   `json:"blob"`
}

type Items struct {
    Id int64 `json:"id"`
}
"#);
}

#[test]
fn test_generation_is_deterministic() {
    let json = r#"{"grid":[[1.5]],"active_users":[{"a_b":"c"}]}"#;
    assert_eq!(generate(json), generate(json));
}
