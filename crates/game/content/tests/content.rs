use std::collections::BTreeSet;

use encounter_content::{SceneId, archetypes, arms, default_inventory, premade_party};
use encounter_core::{ActionKind, Consumable, Features, SpeedTier};
use strum::IntoEnumIterator;

#[test]
fn premade_party_matches_its_loadouts() {
    let party = premade_party();
    let names: Vec<&str> = party.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Valeria", "Sonja", "Bosh", "Thoth"]);

    let valeria = &party[0];
    // 12 + 6 stamina; 10 + 4 + 1 skill; 10 + 4 + 1 + 2 defense
    assert_eq!(valeria.stats.base.stamina, 18);
    assert_eq!(valeria.stats.base.skill, 15);
    assert_eq!(valeria.stats.base.defense, 17);
    assert_eq!(valeria.stats.base.reduction, 2);
    assert_eq!(valeria.stats.base.insulation, -3);
    assert!(valeria.has(Features::RIPOSTE | Features::RESIST_PIN));
    assert!(valeria.catalog().contains(&ActionKind::Stab));

    let sonja = &party[1];
    assert_eq!(sonja.speed(), SpeedTier::Fast);
    assert_eq!(&sonja.catalog()[..2], &[ActionKind::Prowl, ActionKind::DirtyTrick]);

    let thoth = &party[3];
    // 10 + 3 diabolist + 1 cape + 1 circlet
    assert_eq!(thoth.stats.base.fortune, 15);
    assert!(thoth.has(Features::REACH));
    assert_eq!(thoth.catalog()[0], ActionKind::Diablerie);
}

#[test]
fn every_actor_id_is_unique_across_the_campaign() {
    let mut ids = BTreeSet::new();
    for actor in premade_party() {
        assert!(ids.insert(actor.id));
    }
    for scene in SceneId::iter().map(SceneId::scene) {
        for actor in &scene.roster {
            assert!(ids.insert(actor.id), "{} reuses an id", actor.name);
            assert!(!actor.is_human());
        }
    }
}

#[test]
fn scenes_chain_from_start_to_last() {
    assert_eq!("start".parse::<SceneId>(), Ok(SceneId::Start));
    assert_eq!("LAST".parse::<SceneId>(), Ok(SceneId::Last));
    assert_eq!(SceneId::Start.next(), Some(SceneId::Last));
    assert_eq!(SceneId::Last.next(), None);
    assert_eq!(SceneId::Start.scene().roster.len(), 2);
}

#[test]
fn catalogs_expose_every_entry_by_name() {
    assert_eq!(archetypes::ALL.len(), 5);
    assert!(archetypes::by_name("Herald").is_some());
    assert_eq!(arms::by_name("polearm").map(|w| w.speed), Some(SpeedTier::Slow));
    assert!(arms::by_name("flail").is_none());
}

#[test]
fn default_inventory_holds_one_of_each() {
    let inventory = default_inventory().unwrap();
    assert!(inventory.is_full());
    assert_eq!(
        inventory.items(),
        &[Consumable::Elixir, Consumable::FireBomb, Consumable::DevilsDust]
    );
}
