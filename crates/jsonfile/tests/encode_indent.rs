use serde_json::json;
use tempfile::tempdir;

#[test]
fn indented_output_uses_four_spaces_and_newlines() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("pretty.json");

    let value = json!({"a": 1, "b": [true, null, "x"]});
    jsonfile::encode_to_path_indented(&path, &value)?;

    let out = std::fs::read_to_string(&path)?;
    let expected = "{\n    \"a\": 1,\n    \"b\": [\n        true,\n        null,\n        \"x\"\n    ]\n}";
    assert_eq!(out, expected);
    Ok(())
}

#[test]
fn custom_indent_width() -> Result<(), Box<dyn std::error::Error>> {
    let options = jsonfile::Options {
        layout: jsonfile::Layout::Indented,
        indent: 2,
    };
    let out = jsonfile::encode_to_string(&json!({"a": [1]}), &options)?;
    assert_eq!(out, "{\n  \"a\": [\n    1\n  ]\n}");
    Ok(())
}

#[test]
fn indented_scalars_have_no_indentation() -> Result<(), Box<dyn std::error::Error>> {
    let options = jsonfile::Options::indented();
    assert_eq!(jsonfile::encode_to_string(&json!(null), &options)?, "null");
    assert_eq!(jsonfile::encode_to_string(&json!(3), &options)?, "3");
    assert_eq!(jsonfile::encode_to_string(&json!("x"), &options)?, "\"x\"");
    Ok(())
}

#[test]
fn indented_empty_containers_stay_on_one_line() -> Result<(), Box<dyn std::error::Error>> {
    let options = jsonfile::Options::indented();
    assert_eq!(jsonfile::encode_to_string(&json!({}), &options)?, "{}");
    assert_eq!(jsonfile::encode_to_string(&json!([]), &options)?, "[]");
    Ok(())
}
