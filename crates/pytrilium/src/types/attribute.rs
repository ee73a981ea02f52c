//! Attribute types: labels and relations attached to notes.

use serde::{Deserialize, Serialize};

/// Kind of attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// A `#name=value` label.
    Label,
    /// A `~name=noteId` relation; the value is the target note ID.
    Relation,
}

/// An attribute as returned by ETAPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// The attribute ID.
    pub attribute_id: String,
    /// The owning note.
    pub note_id: String,
    /// Label or relation.
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    #[serde(default)]
    pub value: String,
    /// Position among the note's attributes.
    #[serde(default)]
    pub position: i64,
    /// Whether child notes inherit it.
    #[serde(default)]
    pub is_inheritable: bool,
    /// UTC modification time.
    #[serde(default)]
    pub utc_date_modified: Option<String>,
}

/// Parameters for creating an attribute.
///
/// # Example
///
/// ```
/// use pytrilium::{AttributeType, CreateAttributeParams};
///
/// let label = CreateAttributeParams::label("evnnmvHTCgIn", "archived", "");
/// assert_eq!(label.attribute_type, AttributeType::Label);
///
/// let relation = CreateAttributeParams::relation("evnnmvHTCgIn", "template", "root")
///     .inheritable(true);
/// assert_eq!(relation.is_inheritable, Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttributeParams {
    /// The owning note.
    pub note_id: String,
    /// Label or relation.
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    pub value: String,
    /// Position among the note's attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Whether child notes inherit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inheritable: Option<bool>,
    /// Force a specific attribute ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_id: Option<String>,
}

impl CreateAttributeParams {
    fn new(
        note_id: impl Into<String>,
        attribute_type: AttributeType,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            note_id: note_id.into(),
            attribute_type,
            name: name.into(),
            value: value.into(),
            position: None,
            is_inheritable: None,
            attribute_id: None,
        }
    }

    /// A label on `note_id`.
    pub fn label(
        note_id: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(note_id, AttributeType::Label, name, value)
    }

    /// A relation from `note_id` to `target_note_id`.
    pub fn relation(
        note_id: impl Into<String>,
        name: impl Into<String>,
        target_note_id: impl Into<String>,
    ) -> Self {
        Self::new(note_id, AttributeType::Relation, name, target_note_id)
    }

    /// Set the position.
    pub fn position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    /// Set inheritability.
    pub fn inheritable(mut self, inheritable: bool) -> Self {
        self.is_inheritable = Some(inheritable);
        self
    }
}

/// Fields of an attribute that can be changed with PATCH.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributePatch {
    /// New value. Only labels accept a value change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// New position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_serializes_type_tag() {
        let value = serde_json::to_value(CreateAttributeParams::relation("a", "template", "b"))
            .unwrap();
        assert_eq!(value["type"], "relation");
        assert_eq!(value["value"], "b");
        assert!(value.get("position").is_none());
    }
}
