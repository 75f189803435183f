//! Scenes of the campaign, in the order they are played.

use strum::{Display, EnumIter, EnumString};

use encounter_core::Scene;

use crate::bestiary::{chitter, nemesis, skitter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SceneId {
    Start,
    Last,
}

impl SceneId {
    /// Scene that follows this one, if any.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Start => Some(Self::Last),
            Self::Last => None,
        }
    }

    pub fn scene(self) -> Scene {
        match self {
            Self::Start => Scene::new("start", vec![skitter(), chitter()])
                .with_description("introduction scene"),
            Self::Last => Scene::new("last", vec![nemesis()]).with_description("last scene"),
        }
    }
}
