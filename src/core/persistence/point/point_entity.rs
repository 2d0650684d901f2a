use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

/// Maximum number of characters accepted for [`Point::title`].
pub const TITLE_MAX_LENGTH: u64 = 20;

/// A Point record.
///
/// `id` is assigned by the server; a value without one has not been created yet.
/// The derived rules are the stored-record rules; the edit form also refuses
/// empty strings (see `PointUpdate::validate`).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: Option<i64>,
    #[validate(required, length(max = 20))]
    pub title: Option<String>,
    #[validate(required)]
    pub description: Option<String>,
}

impl Point {
    pub fn new(id: Option<i64>, title: Option<String>, description: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Copies every field set on `patch` onto `self`, leaving the rest untouched.
    pub fn merge(&mut self, patch: Point) {
        if let Some(v) = patch.title {
            self.title = Some(v);
        }

        if let Some(v) = patch.description {
            self.description = Some(v);
        }
    }

    /// Case-insensitive substring match over title and description.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [&self.title, &self.description]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(title: &str, description: &str) -> Point {
        Point::new(None, Some(title.into()), Some(description.into()))
    }

    #[test]
    fn default_point_has_no_fields() {
        let p = Point::default();
        assert_eq!(p.id, None);
        assert_eq!(p.title, None);
        assert_eq!(p.description, None);
        assert!(!p.is_persisted());
    }

    #[test]
    fn empty_strings_are_stored_as_is() {
        assert!(point("", "").validate().is_ok());
    }

    #[test]
    fn title_over_limit_is_invalid() {
        let title = "x".repeat(TITLE_MAX_LENGTH as usize + 1);
        assert!(point(&title, "d").validate().is_err());
        let title = "x".repeat(TITLE_MAX_LENGTH as usize);
        assert!(point(&title, "d").validate().is_ok());
    }

    #[test]
    fn missing_fields_are_invalid() {
        let errors = Point::default().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn short_title_with_description_is_valid() {
        assert!(point("ok", "d").validate().is_ok());
    }

    #[test]
    fn serializes_camel_case_without_unset_fields() {
        let json = serde_json::to_value(Point::new(Some(3), Some("a".into()), None)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "title": "a" }));
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let mut stored = Point::new(Some(1), Some("old".into()), Some("desc".into()));
        stored.merge(Point::new(Some(1), Some("new".into()), None));
        assert_eq!(stored.title.as_deref(), Some("new"));
        assert_eq!(stored.description.as_deref(), Some("desc"));
    }

    #[test]
    fn matches_is_case_insensitive() {
        let p = point("Harbor", "North pier");
        assert!(p.matches("harb"));
        assert!(p.matches("PIER"));
        assert!(!p.matches("south"));
        assert!(p.matches("  "));
    }
}
