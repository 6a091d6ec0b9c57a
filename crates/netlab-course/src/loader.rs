//! Course loaders: TOML and JSON forms of the same model.
//!
//! TOML is the authoring format; JSON is kept for courses exported from the
//! original web frontend. `load` dispatches on the file extension.

use std::fs;
use std::path::Path;

use netlab_types::{NetlabError, Result};

use crate::model::Course;

/// Parse a course from TOML text.
pub fn from_toml_str(text: &str) -> Result<Course> {
    Ok(toml::from_str(text)?)
}

/// Parse a course from JSON text.
pub fn from_json_str(text: &str) -> Result<Course> {
    Ok(serde_json::from_str(text)?)
}

/// Load a course file, dispatching on its extension.
pub fn load(path: &Path) -> Result<Course> {
    let text = fs::read_to_string(path)?;
    let course = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => from_toml_str(&text)?,
        Some("json") => from_json_str(&text)?,
        _ => {
            return Err(NetlabError::Config(format!(
                "unsupported course format: {}",
                path.display(),
            )));
        },
    };
    log::info!(
        "loaded course '{}' ({} modules) from {}",
        course.title,
        course.modules.len(),
        path.display(),
    );
    Ok(course)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_DOC: &str = r#"
id = "mini"
title = "Mini Course"

[[modules]]
id = "m1"
title = "Module 1"

[[modules.topics]]
id = "t1"
title = "Topic 1"
theory_pages = ["theory one", "theory two"]
syntax_pages = ["syntax one"]
"#;

    const JSON_DOC: &str = r#"{
  "id": "mini",
  "title": "Mini Course",
  "modules": [
    {
      "id": "m1",
      "title": "Module 1",
      "topics": [
        {
          "id": "t1",
          "title": "Topic 1",
          "theory_pages": ["theory one", "theory two"],
          "syntax_pages": ["syntax one"]
        }
      ]
    }
  ]
}"#;

    #[test]
    fn toml_and_json_loaders_agree() {
        let from_toml = from_toml_str(TOML_DOC).unwrap();
        let from_json = from_json_str(JSON_DOC).unwrap();
        assert_eq!(from_toml.id, from_json.id);
        assert_eq!(from_toml.modules.len(), from_json.modules.len());
        let (_, t_toml) = from_toml.topic("t1").unwrap();
        let (_, t_json) = from_json.topic("t1").unwrap();
        assert_eq!(t_toml.theory_pages, t_json.theory_pages);
        assert_eq!(t_toml.syntax_pages, t_json.syntax_pages);
    }

    #[test]
    fn missing_page_arrays_default_empty() {
        let course = from_toml_str(
            "id = \"c\"\ntitle = \"C\"\n\n[[modules]]\nid = \"m\"\ntitle = \"M\"\n\n\
             [[modules.topics]]\nid = \"t\"\ntitle = \"T\"\n",
        )
        .unwrap();
        let (_, topic) = course.topic("t").unwrap();
        assert!(topic.theory_pages.is_empty());
        assert!(topic.syntax_pages.is_empty());
    }

    #[test]
    fn bad_toml_is_parse_error() {
        assert!(matches!(
            from_toml_str("id = [[[nope"),
            Err(NetlabError::TomlParse(_)),
        ));
    }

    #[test]
    fn unsupported_extension_is_config_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("netlab_course_test.yaml");
        fs::write(&path, "id: c").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, NetlabError::Config(_)));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_toml_from_disk() {
        let dir = std::env::temp_dir();
        let path = dir.join("netlab_course_test.toml");
        fs::write(&path, TOML_DOC).unwrap();
        let course = load(&path).unwrap();
        assert_eq!(course.id, "mini");
        let _ = fs::remove_file(&path);
    }
}
