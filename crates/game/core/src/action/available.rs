//! Which of an actor's known actions are legal right now.

use super::{ActionKind, ActionSet};
use crate::state::ActorStatus;

/// Filters a catalog by the actor's status, preserving order.
///
/// Rules, applied in order:
/// - disabled: no direct attacks (skirmish, fight, smash, trip, stab)
/// - in melee: no skirmish or block
/// - out of melee: no retreat; if also pinned, nothing that closes in
///   (fight, smash, trip, stab, block)
pub fn filter_actions(catalog: &[ActionKind], status: &ActorStatus) -> Vec<ActionKind> {
    let mut banned = ActionSet::empty();
    if status.disable {
        banned |= ActionSet::DIRECT_ATTACKS;
    }
    if status.melee {
        banned |= ActionSet::RANGED;
    } else {
        banned |= ActionSet::RETREAT;
        if status.pin {
            banned |= ActionSet::CLOSE_IN;
        }
    }
    catalog
        .iter()
        .copied()
        .filter(|kind| !banned.has(*kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Vec<ActionKind> {
        ActionSet::catalog(ActionSet::empty(), ActionSet::STAB | ActionSet::SMASH)
    }

    #[test]
    fn fresh_actor_cannot_retreat() {
        let legal = filter_actions(&base(), &ActorStatus::default());
        assert!(!legal.contains(&ActionKind::Retreat));
        assert!(legal.contains(&ActionKind::Skirmish));
        assert!(legal.contains(&ActionKind::Block));
    }

    #[test]
    fn melee_removes_ranged_stances() {
        let status = ActorStatus {
            melee: true,
            ..ActorStatus::default()
        };
        let legal = filter_actions(&base(), &status);
        assert!(legal.contains(&ActionKind::Retreat));
        assert!(!legal.contains(&ActionKind::Skirmish));
        assert!(!legal.contains(&ActionKind::Block));
    }

    #[test]
    fn disable_removes_direct_attacks() {
        let status = ActorStatus {
            melee: true,
            disable: true,
            ..ActorStatus::default()
        };
        let legal = filter_actions(&base(), &status);
        for kind in [
            ActionKind::Fight,
            ActionKind::Smash,
            ActionKind::Trip,
            ActionKind::Stab,
        ] {
            assert!(!legal.contains(&kind), "{kind} should be filtered");
        }
        assert!(legal.contains(&ActionKind::Guard));
    }

    #[test]
    fn pinned_at_range_cannot_close_in() {
        let status = ActorStatus {
            pin: true,
            ..ActorStatus::default()
        };
        let legal = filter_actions(&base(), &status);
        assert!(legal.contains(&ActionKind::Skirmish));
        for kind in [
            ActionKind::Fight,
            ActionKind::Smash,
            ActionKind::Trip,
            ActionKind::Stab,
            ActionKind::Block,
        ] {
            assert!(!legal.contains(&kind), "{kind} should be filtered");
        }
    }

    #[test]
    fn pin_does_not_matter_in_melee() {
        let status = ActorStatus {
            melee: true,
            pin: true,
            ..ActorStatus::default()
        };
        let legal = filter_actions(&base(), &status);
        assert!(legal.contains(&ActionKind::Fight));
    }
}
