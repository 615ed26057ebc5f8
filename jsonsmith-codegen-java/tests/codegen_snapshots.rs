//! Snapshot tests for Java code generation.
//!
//! These tests run the full pipeline (inference + rendering) and pin the
//! generated Java source. Run `cargo insta review` to update snapshots
//! when making intentional changes.

use jsonsmith_codegen::{JavaConfig, JavaStyle, Renderer, Target, infer};
use jsonsmith_codegen_java::JavaRenderer;

fn generate(json: &str, config: JavaConfig) -> String {
    let registry = infer(json, &Target::Java(config.clone())).expect("inference failed");
    JavaRenderer::new(config).render(&registry).text
}

#[test]
fn test_record_with_array_collection() {
    let text = generate(
        r#"{"tags":["a","b"]}"#,
        JavaConfig {
            style: JavaStyle::Records,
            ..JavaConfig::default()
        },
    );

    insta::assert_snapshot!(text, @r#"
public record JsonClass (
    String[] tags
){}
"#);
}

#[test]
fn test_record_with_list_collection() {
    let text = generate(
        r#"{"tags":["a","b"]}"#,
        JavaConfig {
            style: JavaStyle::Records,
            use_arrays: false,
            ..JavaConfig::default()
        },
    );

    insta::assert_snapshot!(text, @r#"
import java.util.List;

public record JsonClass (
    List<String> tags
){}
"#);
}

#[test]
fn test_lombok_with_snake_case_key() {
    let text = generate(r#"{"user_id":7}"#, JavaConfig::default());

    insta::assert_snapshot!(text, @r#"
import lombok.Data;
import com.fasterxml.jackson.annotation.JsonProperty;

@Data
public class JsonClass {
    @JsonProperty("user_id")
    private long userId;
}
"#);
}

#[test]
fn test_plain_classes_with_nested_object() {
    let text = generate(
        r#"{"user":{"id":1},"name":"x"}"#,
        JavaConfig {
            style: JavaStyle::PlainTypes,
            ..JavaConfig::default()
        },
    );

    insta::assert_snapshot!(text, @r#"
public class JsonClass {
    private User user;
    private String name;

    public User getUser() {
        return user;
    }
    public void setUser(User user) {
        this.user = user;
    }
    public String getName() {
        return name;
    }
    public void setName(String name) {
        this.name = name;
    }
}

public class User {
    private long id;

    public long getId() {
        return id;
    }
    public void setId(long id) {
        this.id = id;
    }
}
"#);
}

#[test]
fn test_generation_is_deterministic() {
    let json = r#"{"a_b":1,"rows":[[true]],"meta":{"v":0.5}}"#;
    let first = generate(json, JavaConfig::default());
    let second = generate(json, JavaConfig::default());
    assert_eq!(first, second);
}
