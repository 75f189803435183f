//! Scenes supply the opposition and an optional opening twist.

use super::{Actor, Side};

/// One-shot effect applied while an encounter is being set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneEvent {
    /// The party is caught off guard and acts slow for the first round.
    Ambush,
    /// One side starts with its guard up.
    Braced(Side),
    /// One side starts with momentum.
    Emboldened(Side),
    /// One side starts vulnerable.
    Exposed(Side),
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub name: String,
    pub description: String,
    pub roster: Vec<Actor>,
    pub event: Option<SceneEvent>,
}

impl Scene {
    pub fn new(name: impl Into<String>, roster: Vec<Actor>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            roster,
            event: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_event(mut self, event: SceneEvent) -> Self {
        self.event = Some(event);
        self
    }
}
