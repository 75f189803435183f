//! Leaf nodes for action-selection trees.
//!
//! Conditions only read the blackboard. Action leaves record a choice and
//! succeed when it is legal.

use super::tree::{Behavior, Status};
use super::{AiContext, TargetView};
use crate::action::ActionKind;

/// Picks one action if it is legal.
pub struct Choose(pub ActionKind);

impl Behavior<AiContext> for Choose {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.choose(self.0).into()
    }
}

/// Picks the first legal action of a priority list.
pub struct Prefer(pub &'static [ActionKind]);

impl Behavior<AiContext> for Prefer {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        self.0.iter().any(|&kind| ctx.choose(kind)).into()
    }
}

/// Picks the first legal action in catalog order.
pub struct AnyLegal;

impl Behavior<AiContext> for AnyLegal {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        match ctx.legal().first().copied() {
            Some(kind) => ctx.choose(kind).into(),
            None => Status::Failure,
        }
    }
}

pub struct InMelee;

impl Behavior<AiContext> for InMelee {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.in_melee.into()
    }
}

pub struct HasMomentum;

impl Behavior<AiContext> for HasMomentum {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.momentum.into()
    }
}

/// Succeeds when at least one opponent matches the predicate.
pub struct AnyOpponent(pub fn(&TargetView) -> bool);

impl Behavior<AiContext> for AnyOpponent {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.any_opponent(self.0).into()
    }
}
