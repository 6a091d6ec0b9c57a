//! Course content data model.
//!
//! A course is a static tree: modules in order, topics in order, pages as
//! plain-text strings. Authored once, read-only at runtime.

use serde::Deserialize;

/// A whole course: ordered modules of ordered topics.
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// One module of a course.
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// One topic: theory pages plus an optional syntax reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub theory_pages: Vec<String>,
    #[serde(default)]
    pub syntax_pages: Vec<String>,
}

impl Course {
    /// Find a topic by id, returning its owning module too.
    pub fn topic(&self, id: &str) -> Option<(&Module, &Topic)> {
        self.modules.iter().find_map(|module| {
            module
                .topics
                .iter()
                .find(|topic| topic.id == id)
                .map(|topic| (module, topic))
        })
    }

    /// The first topic of the first non-empty module.
    pub fn first_topic(&self) -> Option<(&Module, &Topic)> {
        self.modules
            .iter()
            .find_map(|module| module.topics.first().map(|topic| (module, topic)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course {
            id: "c".into(),
            title: "Course".into(),
            modules: vec![
                Module {
                    id: "m-empty".into(),
                    title: "Empty".into(),
                    topics: vec![],
                },
                Module {
                    id: "m1".into(),
                    title: "Module 1".into(),
                    topics: vec![Topic {
                        id: "t1".into(),
                        title: "Topic 1".into(),
                        theory_pages: vec!["page one".into()],
                        syntax_pages: vec![],
                    }],
                },
            ],
        }
    }

    #[test]
    fn topic_lookup_finds_owner() {
        let c = course();
        let (module, topic) = c.topic("t1").unwrap();
        assert_eq!(module.id, "m1");
        assert_eq!(topic.title, "Topic 1");
    }

    #[test]
    fn topic_lookup_missing() {
        assert!(course().topic("nope").is_none());
    }

    #[test]
    fn first_topic_skips_empty_modules() {
        let course = course();
        let (module, topic) = course.first_topic().unwrap();
        assert_eq!(module.id, "m1");
        assert_eq!(topic.id, "t1");
    }
}
