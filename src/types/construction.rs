//! Construction entries

use serde::{Deserialize, Serialize};

use super::{EntityKind, Example};

/// Separator between the owning frame id and the local construction id
pub const CONSTRUCTION_ID_SEPARATOR: &str = "::";

/// Grammatical pattern contributed by one or more frames
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Construction {
    /// Synthetic id `"<frameId>::<localId>"`
    pub id: String,
    #[serde(rename = "localId")]
    pub local_id: String,
    pub name: String,
    #[serde(rename = "linguisticName", default)]
    pub linguistic_name: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(rename = "usageNotes", default)]
    pub usage_notes: Vec<String>,
    /// Owning frames, in contribution order, without duplicates
    #[serde(default)]
    pub frames: Vec<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Construction {
    /// Build the synthetic id of a construction owned by a frame
    pub fn synthetic_id(frame_id: &str, local_id: &str) -> String {
        format!("{}{}{}", frame_id, CONSTRUCTION_ID_SEPARATOR, local_id)
    }

    /// Create a construction owned by a single frame
    pub fn new(frame_id: &str, local_id: &str, name: impl Into<String>) -> Self {
        Self {
            id: Self::synthetic_id(frame_id, local_id),
            local_id: local_id.to_string(),
            name: name.into(),
            frames: vec![frame_id.to_string()],
            ..Self::default()
        }
    }

    pub fn key(&self) -> String {
        EntityKind::Construction.key(&self.id)
    }

    /// Display title, falling back to the id
    pub fn title(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    pub fn primary_frame_id(&self) -> Option<&str> {
        self.frames.first().map(String::as_str)
    }

    pub fn owned_by(&self, frame_id: &str) -> bool {
        self.frames.iter().any(|f| f == frame_id)
    }

    /// Record another contributing frame. Returns false if it was already listed.
    pub fn add_owner(&mut self, frame_id: &str) -> bool {
        if self.owned_by(frame_id) {
            return false;
        }
        self.frames.push(frame_id.to_string());
        true
    }
}
