use serde_json::json;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use strata::config::{get_config, load_config, parse_config, Config, Overrides};
use strata::error::{Error, Result};
use strata::prompt::Prompter;
use tempfile::TempDir;

struct ScriptedPrompter {
    answers: RefCell<Vec<&'static str>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&'static str]) -> Self {
        Self {
            answers: RefCell::new(answers.to_vec()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, _prompt: &str, _default: &str) -> Result<String> {
        Ok(self.answers.borrow_mut().remove(0).to_string())
    }
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.project_name, "My Project");
    assert_eq!(config.description, "");
    assert_eq!(config.layers, vec!["raw", "intermediate", "primary", "feature"]);
}

#[test]
fn test_with_overrides() {
    let defaults = Config::default();
    let config = defaults.with_overrides(Overrides {
        project_name: Some("open_finance".to_string()),
        description: None,
    });

    assert_eq!(config.project_name, "open_finance");
    assert_eq!(config.description, defaults.description);
    assert_eq!(config.author_name, defaults.author_name);
    assert_eq!(config.layers, defaults.layers);
}

#[test]
fn test_load_json_config() {
    let dir = TempDir::new().unwrap();
    let content = json!({
        "project_name": "open_finance",
        "description": "Open Finance lakehouse",
        "author_name": "Data Team",
        "layers": ["raw", "trusted"],
        "unused": true
    });
    let path = write_config(&dir, "project.json", &content.to_string());

    let config = load_config(&path).unwrap();
    assert_eq!(config.project_name, "open_finance");
    assert_eq!(config.description, "Open Finance lakehouse");
    assert_eq!(config.author_name, "Data Team");
    assert_eq!(config.layers, vec!["raw", "trusted"]);
}

#[test]
fn test_load_yaml_config() {
    let dir = TempDir::new().unwrap();
    let content = r#"
project_name: open_finance
description: Lakehouse
author_name: Data Team
layers:
  - raw
  - primary
"#;
    let path = write_config(&dir, "project.yaml", content);

    let config = load_config(&path).unwrap();
    assert_eq!(config.project_name, "open_finance");
    assert_eq!(config.layers, vec!["raw", "primary"]);
}

#[test]
fn test_layers_default_to_empty() {
    let content = json!({"project_name": "p", "description": "", "author_name": "a"});
    let config = parse_config(&content.to_string(), false).unwrap();
    assert!(config.layers.is_empty());
}

#[test]
fn test_missing_required_key() {
    let content = json!({"project_name": "p", "layers": []});
    let result = parse_config(&content.to_string(), false);
    assert!(matches!(result, Err(Error::ConfigError(_))));

    let result = parse_config("project_name: p\nlayers: []\n", true);
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_layers_not_a_list_of_strings() {
    let base = json!({"project_name": "p", "description": "", "author_name": "a"});
    for layers in [json!("raw"), json!([1, 2]), json!({"raw": 1})] {
        let mut content = base.clone();
        content["layers"] = layers;
        let result = parse_config(&content.to_string(), false);
        assert!(
            matches!(result, Err(Error::ConfigError(_))),
            "accepted {content}"
        );
    }

    let base = "project_name: p\ndescription: d\nauthor_name: a\n";
    for layers in ["layers: raw", "layers: [1, 2]", "layers: [raw, true]"] {
        let content = format!("{base}{layers}\n");
        let result = parse_config(&content, true);
        assert!(
            matches!(result, Err(Error::ConfigError(_))),
            "accepted {content}"
        );
    }
}

#[test]
fn test_yaml_scalars_are_not_coerced() {
    let cases = [
        "project_name: 123\ndescription: d\nauthor_name: a\n",
        "project_name: p\ndescription: true\nauthor_name: a\n",
        "project_name: p\ndescription: d\nauthor_name: 4.5\n",
        "project_name: p\ndescription: ~\nauthor_name: a\n",
    ];
    for content in cases {
        let result = parse_config(content, true);
        assert!(
            matches!(result, Err(Error::ConfigError(_))),
            "accepted {content}"
        );
    }

    // Quoted scalars are strings.
    let content = "project_name: \"123\"\ndescription: 'true'\nauthor_name: a\n";
    let config = parse_config(content, true).unwrap();
    assert_eq!(config.project_name, "123");
    assert_eq!(config.description, "true");
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "project.json", r#"{"project_name": "p""#);

    match load_config(&path) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Invalid configuration format")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let result = load_config(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::ConfigError(_))));

    // A directory is not a configuration file either.
    let result = load_config(dir.path());
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_validate_rejects_duplicate_layers() {
    let config = Config {
        layers: vec!["raw".to_string(), "primary".to_string(), "raw".to_string()],
        ..Config::default()
    };
    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("duplicate layer 'raw'")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_path_traversal() {
    for name in ["", ".", "..", "../escape", "nested/name"] {
        let config = Config {
            project_name: name.to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err(), "accepted project name {name:?}");

        let config = Config {
            layers: vec![name.to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_err(), "accepted layer {name:?}");
    }
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_get_config_interactive() {
    let prompter = ScriptedPrompter::new(&[" open_finance ", "Lakehouse"]);
    let config = get_config(None, &prompter).unwrap();

    assert_eq!(config.project_name, "open_finance");
    assert_eq!(config.description, "Lakehouse");
    assert_eq!(config.author_name, Config::default().author_name);
    assert_eq!(config.layers, Config::default().layers);
}

#[test]
fn test_get_config_interactive_blank_answers() {
    let prompter = ScriptedPrompter::new(&["", "   "]);
    let config = get_config(None, &prompter).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_get_config_interactive_invalid_name() {
    let prompter = ScriptedPrompter::new(&["../escape", ""]);
    let result = get_config(None, &prompter);
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_get_config_from_file_skips_prompts() {
    let dir = TempDir::new().unwrap();
    let content = json!({"project_name": "p", "description": "d", "author_name": "a"});
    let path = write_config(&dir, "project.json", &content.to_string());
    let prompter = ScriptedPrompter::new(&[]);

    let config = get_config(Some(path.as_path()), &prompter).unwrap();
    assert_eq!(config.project_name, "p");
}
