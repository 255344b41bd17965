//! Frame entries

use serde::{Deserialize, Serialize};

use super::{EntityKind, Example};

/// A named role slot within a frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameElement {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "descriptionHtml", default, skip_serializing_if = "String::is_empty")]
    pub description_html: String,
}

/// A frame element mentioned inside the frame's rich description markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMention {
    #[serde(rename = "elementId")]
    pub element_id: String,
    /// Markup class that wraps the mention
    pub span: String,
}

/// Semantic frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "descriptionHtml", default, skip_serializing_if = "String::is_empty")]
    pub description_html: String,
    #[serde(rename = "elementMentions", default, skip_serializing_if = "Vec::is_empty")]
    pub element_mentions: Vec<ElementMention>,
    #[serde(rename = "noteOnRoles", default, skip_serializing_if = "String::is_empty")]
    pub note_on_roles: String,
    #[serde(default)]
    pub elements: Vec<FrameElement>,
    #[serde(default)]
    pub examples: Vec<Example>,
    /// Lexical unit ids the frame document lists (may dangle)
    #[serde(rename = "linkedLexicalUnits", default)]
    pub linked_lexical_units: Vec<String>,
    #[serde(rename = "confusableWith", default, skip_serializing_if = "Vec::is_empty")]
    pub confusable_with: Vec<String>,
    /// Synthetic ids of the constructions this frame contributes
    #[serde(rename = "constructionIds", default)]
    pub construction_ids: Vec<String>,
}

impl Frame {
    /// Create a frame with only an id and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn key(&self) -> String {
        EntityKind::Frame.key(&self.id)
    }

    /// Display title, falling back to the id
    pub fn title(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    pub fn element(&self, element_id: &str) -> Option<&FrameElement> {
        self.elements.iter().find(|e| e.id == element_id)
    }

    /// Human label for a frame element id, falling back to the id itself
    pub fn element_label<'a>(&'a self, element_id: &'a str) -> &'a str {
        match self.element(element_id) {
            Some(element) if !element.name.is_empty() => &element.name,
            _ => element_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_label_fallback() {
        let mut frame = Frame::new("Motion", "Motion");
        frame.elements.push(FrameElement {
            id: "Theme".to_string(),
            name: "Moving thing".to_string(),
            ..FrameElement::default()
        });

        assert_eq!(frame.element_label("Theme"), "Moving thing");
        assert_eq!(frame.element_label("Goal"), "Goal");
    }

    #[test]
    fn test_title_falls_back_to_id() {
        let frame = Frame::new("Motion", "");
        assert_eq!(frame.title(), "Motion");
        assert_eq!(frame.key(), "frame:Motion");
    }
}
