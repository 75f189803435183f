//! Ready-made trees, one per logic profile.
//!
//! ```text
//! reactive()
//!   └─ Selector
//!       ├─ Sequence [InMelee, !HasMomentum, Choose(retreat)]
//!       ├─ Sequence [AnyOpponent(at range), Choose(skirmish)]
//!       ├─ Sequence [AnyOpponent(guarding), Choose(trip)]
//!       ├─ Branch   [AnyOpponent(softened)] -> Prefer(direct attacks)
//!       ├─ Choose(guard)
//!       └─ Choose(block)
//! ```
//!
//! A profile tree that succeeds without recording a choice (a committed
//! branch with nothing legal) falls through to [`fallback`].

use super::nodes::{AnyLegal, AnyOpponent, Choose, HasMomentum, InMelee, Prefer};
use super::tree::{Behavior, branch, inverter, selector, sequence};
use super::{AiContext, LogicProfile};
use crate::action::ActionKind;

pub type BehaviorTree = Box<dyn Behavior<AiContext>>;

const AGGRESSIVE: &[ActionKind] = &[
    ActionKind::Fight,
    ActionKind::Smash,
    ActionKind::Stab,
    ActionKind::HackAndSlash,
    ActionKind::Trip,
    ActionKind::Skirmish,
];

const DEFENSIVE: &[ActionKind] = &[
    ActionKind::Block,
    ActionKind::Guard,
    ActionKind::Fight,
    ActionKind::Smash,
    ActionKind::Stab,
    ActionKind::Skirmish,
    ActionKind::Trip,
];

const FINISHERS: &[ActionKind] = &[
    ActionKind::Fight,
    ActionKind::Smash,
    ActionKind::Stab,
    ActionKind::Trip,
    ActionKind::HackAndSlash,
];

const FALLBACK: &[ActionKind] = &[ActionKind::Fight, ActionKind::Skirmish, ActionKind::Guard];

fn node(behavior: impl Behavior<AiContext> + 'static) -> BehaviorTree {
    Box::new(behavior)
}

fn choose(kind: ActionKind) -> BehaviorTree {
    node(Choose(kind))
}

/// Tree for a profile. Scripted profiles have no tree of their own.
pub fn tree_for(profile: LogicProfile) -> Option<BehaviorTree> {
    match profile {
        LogicProfile::Disruptive => Some(disruptive()),
        LogicProfile::Aggressive => Some(aggressive()),
        LogicProfile::Defensive => Some(defensive()),
        LogicProfile::Reactive => Some(reactive()),
        LogicProfile::Minion | LogicProfile::Grunt | LogicProfile::Nemesis => None,
    }
}

/// Breaks away from melee, then harasses from range.
pub fn disruptive() -> BehaviorTree {
    selector(vec![
        sequence(vec![node(InMelee), choose(ActionKind::Retreat)]),
        choose(ActionKind::Skirmish),
        choose(ActionKind::Trip),
        choose(ActionKind::Smash),
        choose(ActionKind::Fight),
    ])
}

pub fn aggressive() -> BehaviorTree {
    node(Prefer(AGGRESSIVE))
}

pub fn defensive() -> BehaviorTree {
    node(Prefer(DEFENSIVE))
}

/// Reads the opposition before committing.
pub fn reactive() -> BehaviorTree {
    selector(vec![
        sequence(vec![
            node(InMelee),
            inverter(node(HasMomentum)),
            choose(ActionKind::Retreat),
        ]),
        sequence(vec![
            node(AnyOpponent(|t| !t.melee)),
            choose(ActionKind::Skirmish),
        ]),
        sequence(vec![
            node(AnyOpponent(|t| t.guard || t.block)),
            choose(ActionKind::Trip),
        ]),
        branch(
            node(AnyOpponent(|t| t.is_low() || t.is_soft())),
            node(Prefer(FINISHERS)),
        ),
        choose(ActionKind::Guard),
        choose(ActionKind::Block),
    ])
}

/// fight > skirmish > guard > whatever comes first.
pub fn fallback() -> BehaviorTree {
    selector(vec![node(Prefer(FALLBACK)), node(AnyLegal)])
}
