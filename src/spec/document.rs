//! Loading `meta/argument_specs.yml` and locating the entry point options.

use crate::error::ArgSpecError;
use crate::spec::ParameterTree;

use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Fixed location of the rendered parameters inside the document.
pub const OPTIONS_PATH: [&str; 3] = ["argument_specs", "main", "options"];

/// Read and parse the whole document. The file is closed before this returns.
pub fn load_document(path: &Path) -> Result<Value, ArgSpecError> {
    let text = fs::read_to_string(path).map_err(|source| ArgSpecError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, path)
}

/// Parse YAML and resolve `<<: *anchor` merge keys everywhere in the document.
pub fn parse_document(text: &str, path: &Path) -> Result<Value, ArgSpecError> {
    let parse_error = |source| ArgSpecError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let mut document: Value = serde_yaml::from_str(text).map_err(parse_error)?;
    document.apply_merge().map_err(parse_error)?;
    Ok(document)
}

/// Walk `argument_specs.main.options` and convert what is found there.
pub fn extract_parameters(document: &Value) -> Result<ParameterTree, ArgSpecError> {
    let mut current = document;
    for (depth, key) in OPTIONS_PATH.iter().enumerate() {
        current = current.get(*key).ok_or_else(|| ArgSpecError::MissingKey {
            path: OPTIONS_PATH[..=depth].join("."),
        })?;
    }
    ParameterTree::from_value(current, &OPTIONS_PATH.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(src: &str) -> Result<ParameterTree, ArgSpecError> {
        let doc = parse_document(src, Path::new("argument_specs.yml"))?;
        extract_parameters(&doc)
    }

    #[test]
    fn finds_main_options() {
        let t = extract(
            r#"
argument_specs:
  main:
    short_description: Demo role
    options:
      name: { type: str }
      mode: { type: str }
"#,
        )
        .unwrap();
        let names: Vec<&str> = t.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["name", "mode"]);
    }

    #[test]
    fn merge_keys_are_applied() {
        let t = extract(
            r#"
common: &common
  type: str
  required: true
argument_specs:
  main:
    options:
      <<: { inherited: { type: bool } }
      a:
        <<: *common
        description: A
      b:
        <<: *common
        type: path
"#,
        )
        .unwrap();
        let shown: Vec<(&str, &str, String)> = t
            .iter()
            .map(|p| (p.name.as_str(), p.kind.as_str(), p.required.to_string()))
            .collect();
        assert_eq!(
            shown,
            [
                ("a", "str", "True".to_string()),
                ("b", "path", "True".to_string()),
                ("inherited", "bool", String::new()),
            ]
        );
    }

    #[test]
    fn json_documents_are_accepted() {
        let t = extract(r#"{"argument_specs": {"main": {"options": {"name": {"type": "str"}}}}}"#)
            .unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn empty_options_is_an_empty_tree() {
        let t = extract("argument_specs:\n  main:\n    options: {}\n").unwrap();
        assert!(t.is_empty());
    }

    #[test]
    fn missing_key_names_the_path_reached() {
        let err = extract("argument_specs:\n  install:\n    options: {}\n").unwrap_err();
        assert_eq!(err.to_string(), "document has no `argument_specs.main` key");

        let err = extract("argument_specs:\n  main:\n    short_description: x\n").unwrap_err();
        assert_eq!(err.to_string(), "document has no `argument_specs.main.options` key");

        let err = extract("galaxy_info: {}\n").unwrap_err();
        assert_eq!(err.to_string(), "document has no `argument_specs` key");
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = extract("argument_specs: [unclosed\n").unwrap_err();
        assert!(matches!(err, ArgSpecError::Parse { .. }));
    }

    #[test]
    fn unreadable_file_is_a_read_error() {
        let err = load_document(Path::new("/definitely/not/here.yml")).unwrap_err();
        assert!(matches!(err, ArgSpecError::Read { .. }));
    }
}
