//! Opponents. Ids start at 100 so they never collide with the party.

use encounter_core::{Actor, ActorId, LogicProfile, SpeedTier};

pub fn skitter() -> Actor {
    Actor::new(ActorId(101), "Skitter")
        .with_description("Skitter, a slow and hungry minion")
        .with_logic(LogicProfile::Minion)
        .with_speed(SpeedTier::Slow)
}

pub fn chitter() -> Actor {
    Actor::new(ActorId(102), "Chitter")
        .with_description("Chitter, a grunt of the swarm")
        .with_logic(LogicProfile::Grunt)
}

pub fn nemesis() -> Actor {
    Actor::new(ActorId(103), "Nemesis")
        .with_description("the nemesis, waiting in the hall")
        .with_logic(LogicProfile::Nemesis)
}
