use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog entity - a single blog document.
///
/// The identifier is assigned by the creating handler, never by the store.
/// Every other field is optional: the data layer tolerates absent fields and
/// performs no validation. `publish_date` is carried as opaque text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl Blog {
    /// Create a new blog with a generated ID and the supplied fields.
    pub fn new(fields: BlogFields) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            author: fields.author,
            publish_date: fields.publish_date,
            body: fields.body,
        }
    }
}

/// The four mutable fields of a blog, as submitted in create/update bodies.
///
/// Update semantics are a full overwrite of exactly these fields; the
/// identifier is never part of the set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_blog_gets_unique_id_and_keeps_fields() {
        let fields = BlogFields {
            title: Some("A".to_string()),
            author: Some("B".to_string()),
            publish_date: Some("2024-01-01".to_string()),
            body: Some("x".to_string()),
        };
        let a = Blog::new(fields.clone());
        let b = Blog::new(fields);

        assert_ne!(a.id, b.id);
        assert_eq!(a.title.as_deref(), Some("A"));
        assert_eq!(a.author.as_deref(), Some("B"));
        assert_eq!(a.publish_date.as_deref(), Some("2024-01-01"));
        assert_eq!(a.body.as_deref(), Some("x"));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let blog: Blog = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(blog.id, "abc");
        assert!(blog.title.is_none());
        assert!(blog.publish_date.is_none());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let fields = BlogFields {
            publish_date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["publishDate"], "2024-01-01");
    }
}
