//! Blackboard for AI action selection.

use super::TargetView;
use crate::action::ActionKind;
use crate::state::{ActorId, EncounterState};

/// Everything a profile looks at when picking an action.
///
/// Built from a snapshot of the encounter so trees never hold a borrow of
/// the state. The chosen action is written back by leaf nodes.
#[derive(Clone, Debug)]
pub struct AiContext {
    pub actor: ActorId,
    pub in_melee: bool,
    pub momentum: bool,
    /// Every standing opponent, regardless of reachability.
    pub opponents: Vec<TargetView>,
    legal: Vec<ActionKind>,
    choice: Option<ActionKind>,
}

impl AiContext {
    pub fn new(state: &EncounterState<'_>, actor: ActorId, legal: Vec<ActionKind>) -> Self {
        let status = state.status(actor).copied().unwrap_or_default();
        let opponents = state
            .opponents(actor)
            .into_iter()
            .filter_map(|id| TargetView::of(state, id))
            .collect();
        Self {
            actor,
            in_melee: status.melee,
            momentum: status.momentum,
            opponents,
            legal,
            choice: None,
        }
    }

    /// A context with no opponents and a clean status, for callers that
    /// fill in the blackboard themselves.
    pub fn detached(actor: ActorId, legal: Vec<ActionKind>) -> Self {
        Self {
            actor,
            in_melee: false,
            momentum: false,
            opponents: Vec::new(),
            legal,
            choice: None,
        }
    }

    /// Legal actions in catalog order.
    pub fn legal(&self) -> &[ActionKind] {
        &self.legal
    }

    pub fn can(&self, kind: ActionKind) -> bool {
        self.legal.contains(&kind)
    }

    pub fn choice(&self) -> Option<ActionKind> {
        self.choice
    }

    /// Records `kind` if it is legal. Returns whether it was recorded.
    pub fn choose(&mut self, kind: ActionKind) -> bool {
        if self.can(kind) {
            self.choice = Some(kind);
            true
        } else {
            false
        }
    }

    pub fn any_opponent(&self, f: impl Fn(&TargetView) -> bool) -> bool {
        self.opponents.iter().any(f)
    }
}
