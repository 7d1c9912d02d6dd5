use blockmerge::extract::extract_code;
use blockmerge::filetype::FileType;
use blockmerge::merge;
use serde_json::{json, Value};

#[test]
fn targeted_replace_leaves_rest_untouched() {
    let original = "function add(a,b){return a+b}\nexport default add;";
    let suggestion = "function add(a,b){return a+b+1}";
    let merged = merge(original, suggestion, "math.ts");
    assert_eq!(merged, "function add(a,b){return a+b+1}\nexport default add;");
}

#[test]
fn replace_edits_the_named_block_only_when_content_recurs() {
    // Both functions share an identical body line; span splicing must edit
    // the named block, not the first textual occurrence.
    let original = "function a() {\n  return 0;\n}\n\nfunction b() {\n  return 0;\n}\n";
    let suggestion = "function b() {\n  return 7;\n}";
    let merged = merge(original, suggestion, "twin.js");
    assert!(merged.contains("function a() {\n  return 0;\n}"));
    assert!(merged.contains("function b() {\n  return 7;\n}"));
}

#[test]
fn new_function_is_inserted_before_trailing_export() {
    let original = "export const x = 1;";
    let suggestion = "function greet() {\n  return 'hi';\n}";
    let merged = merge(original, suggestion, "mod.ts");

    let fn_at = merged.find("function greet").expect("function inserted");
    let export_at = merged.find("export const x = 1;").expect("export kept");
    assert!(fn_at < export_at);
    assert!(merged.contains("}\n\nexport const x = 1;"));
}

#[test]
fn insertion_appends_when_no_export_exists() {
    let original = "function a() {}\n";
    let suggestion = "function b() {\n  return 2;\n}";
    let merged = merge(original, suggestion, "lib.js");
    assert!(merged.starts_with("function a() {}"));
    assert!(merged.ends_with("function b() {\n  return 2;\n}"));
}

#[test]
fn json_shallow_merge_updates_existing_key() {
    let original = r#"{"name":"Project","version":"1.0.0"}"#;
    let suggestion = r#"{"version":"1.1.0"}"#;
    let merged = merge(original, suggestion, "package.json");

    let parsed: Value = serde_json::from_str(&merged).expect("merged output is valid JSON");
    assert_eq!(parsed, json!({"name": "Project", "version": "1.1.0"}));
}

#[test]
fn json_merge_adds_new_keys() {
    let merged = merge(r#"{"a":1}"#, r#"{"b":2,"c":3}"#, "data.json");
    let parsed: Value = serde_json::from_str(&merged).unwrap();
    assert_eq!(parsed, json!({"a": 1, "b": 2, "c": 3}));
}

#[test]
fn json_merge_is_idempotent() {
    let original = r#"{"name":"Project","version":"1.0.0"}"#;
    let suggestion = r#"{"version":"1.1.0"}"#;
    let once = merge(original, suggestion, "package.json");
    let twice = merge(&once, suggestion, "package.json");
    assert_eq!(once, twice);
}

#[test]
fn malformed_json_original_degrades_to_textual_append() {
    let merged = merge("{broken", r#"{"version":"2"}"#, "bad.json");
    assert!(merged.starts_with("{broken"));
    assert!(merged.contains("\"version\""));
}

#[test]
fn malformed_json_suggestion_degrades_to_textual_append() {
    let merged = merge(r#"{"a":1}"#, "not json at all", "data.json");
    assert!(merged.starts_with(r#"{"a":1}"#));
    assert!(merged.ends_with("not json at all"));
}

#[test]
fn yaml_leaf_substitution_preserves_siblings_and_indentation() {
    let original = "settings:\n  debug: true\n  port: 3000\n";
    let suggestion = "settings:\n  port: 4000\n";
    let merged = merge(original, suggestion, "config.yml");
    assert_eq!(merged, "settings:\n  debug: true\n  port: 4000\n");
}

#[test]
fn yaml_keys_absent_from_suggestion_survive() {
    let original = "server:\n  host: localhost\n  port: 3000\nlogging:\n  level: info\n";
    let suggestion = "server:\n  port: 8080\n";
    let merged = merge(original, suggestion, "deploy.yaml");
    assert!(merged.contains("  host: localhost"));
    assert!(merged.contains("  port: 8080"));
    assert!(merged.contains("logging:\n  level: info"));
}

#[test]
fn yaml_suggestion_only_keys_are_not_inserted() {
    // Substitution-only policy: the suggestion cannot introduce new keys.
    let merged = merge("a: 1\n", "b: 2\n", "c.yaml");
    assert_eq!(merged, "a: 1\n");
}

#[test]
fn replace_is_idempotent_for_unique_blocks() {
    let original = "function a() {\n  return 1;\n}\n\nfunction b() {\n  return 2;\n}\n";
    let suggestion = "function a() {\n  return 100;\n}";
    let once = merge(original, suggestion, "app.js");
    let twice = merge(&once, suggestion, "app.js");
    assert_eq!(once, twice);
    assert!(once.contains("return 100;"));
    assert!(once.contains("function b() {\n  return 2;\n}"));
}

#[test]
fn unknown_extension_always_appends() {
    let original = "line one\nline two\n";
    let suggestion = "whatever {shape\nthis has";
    let merged = merge(original, suggestion, "data.xyz");
    assert!(merged.starts_with(original));
    assert!(merged.ends_with(suggestion));
}

#[test]
fn empty_suggestion_is_a_no_op() {
    let original = "function a() {}\n";
    assert_eq!(merge(original, "", "a.ts"), original);
    assert_eq!(merge(original, "   \n  ", "a.ts"), original);
}

#[test]
fn unnamed_suggestion_blocks_insert_but_never_replace() {
    let original = "import old from './old';\n\nfunction a() { return 1; }\n";
    let suggestion = "import fresh from './fresh';\n\nfunction a() { return 2; }";
    let merged = merge(original, suggestion, "app.jsx");

    // The named block is replaced in place; the unnamed prelude block must
    // not overwrite the original prelude.
    assert!(merged.contains("import old from './old';"));
    assert!(merged.contains("function a() { return 2; }"));
    assert!(merged.contains("import fresh from './fresh';"));
    assert!(!merged.contains("return 1;"));
}

#[test]
fn python_def_blocks_replace_by_name() {
    let original =
        "def greet(name):\n    return 'hello ' + name\n\ndef farewell(name):\n    return 'bye ' + name\n";
    let suggestion = "def greet(name):\n    return f'hello, {name}!'";
    let merged = merge(original, suggestion, "app.py");
    assert!(merged.contains("f'hello, {name}!'"));
    assert!(merged.contains("def farewell(name):\n    return 'bye ' + name"));
    assert!(!merged.contains("'hello ' + name"));
}

#[test]
fn extracted_fence_feeds_the_engine() {
    let message = "The port was wrong, here is the fix:\n\n```yaml\nsettings:\n  port: 4000\n```\n";
    let original = "settings:\n  debug: true\n  port: 3000\n";

    let suggestion = extract_code(message, FileType::from_filename("config.yaml"));
    let merged = merge(original, &suggestion, "config.yaml");
    assert_eq!(merged, "settings:\n  debug: true\n  port: 4000\n");
}
