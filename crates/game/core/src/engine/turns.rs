use strum::IntoEnumIterator;

use crate::state::{ActorId, EncounterState, SpeedTier};

/// Selects who acts next this round.
///
/// Only actors that are neither knocked out nor done are eligible. Fast
/// actors go before normal ones, normal before slow; inside a tier the
/// roster order (party first) breaks ties. Returns `None` once everyone
/// has acted.
pub(super) fn next_actor(state: &EncounterState<'_>) -> Option<ActorId> {
    let eligible: Vec<(ActorId, SpeedTier)> = state
        .order()
        .into_iter()
        .filter_map(|id| {
            let status = state.status(id)?;
            (!status.ko && !status.done).then_some((id, status.speed))
        })
        .collect();

    SpeedTier::iter().find_map(|tier| {
        eligible
            .iter()
            .find(|(_, speed)| *speed == tier)
            .map(|(id, _)| *id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Actor;

    #[test]
    fn fast_actors_go_first_and_ties_follow_the_roster() {
        let mut party = vec![
            Actor::new(ActorId(1), "Valeria"),
            Actor::new(ActorId(2), "Sonja").with_speed(SpeedTier::Slow),
        ];
        let mut enemies = vec![
            Actor::new(ActorId(3), "Skitter").with_speed(SpeedTier::Fast),
            Actor::new(ActorId(4), "Chitter"),
        ];
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();

        let mut order = Vec::new();
        while let Some(id) = next_actor(&state) {
            order.push(id);
            state.update(id, |s| s.done = true);
        }
        assert_eq!(order, vec![ActorId(3), ActorId(1), ActorId(4), ActorId(2)]);
    }

    #[test]
    fn knocked_out_actors_never_act() {
        let mut party = vec![Actor::new(ActorId(1), "Valeria")];
        let mut enemies = vec![Actor::new(ActorId(2), "Skitter").with_speed(SpeedTier::Fast)];
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        state.update(ActorId(2), |s| s.knock_out());

        assert_eq!(next_actor(&state), Some(ActorId(1)));
        state.update(ActorId(1), |s| s.done = true);
        assert_eq!(next_actor(&state), None);
    }
}
