//! Scene-by-scene play with a persistent party.
use encounter_content::SceneId;
use encounter_core::{
    Actor, Choice, Dice, EncounterConfig, EncounterEnv, EncounterError, EncounterOutcome,
    InputProvider, Inventory, Reporter, Side, env::resolve_choice, run_encounter,
};

pub const FINALE: &str = "MADNESS REIGNS IN THE HALL OF THE MOUNTAIN KING";

/// How a campaign ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignResult {
    /// Every scene was won.
    Triumph,
    /// The party was knocked out in this scene.
    Fallen(SceneId),
    /// This scene hit the round limit.
    Stalemate(SceneId),
}

/// A party marching through the scenes, sharing one inventory.
pub struct Campaign {
    party: Vec<Actor>,
    inventory: Inventory,
    next: Option<SceneId>,
    config: EncounterConfig,
}

impl Campaign {
    pub fn new(party: Vec<Actor>, inventory: Inventory, start: SceneId) -> Self {
        Self {
            party,
            inventory,
            next: Some(start),
            config: EncounterConfig::new(),
        }
    }

    pub fn with_config(mut self, config: EncounterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn party(&self) -> &[Actor] {
        &self.party
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Plays scenes until the party falls, stalls, or clears the last one.
    ///
    /// Human-led parties may change their marching order before each scene.
    pub fn run(
        &mut self,
        dice: &mut dyn Dice,
        reporter: &mut dyn Reporter,
        input: &mut dyn InputProvider,
    ) -> Result<CampaignResult, EncounterError> {
        while let Some(id) = self.next {
            if self.party.iter().any(Actor::is_human) {
                reorder_party(&mut self.party, input);
            }

            let outcome = self.play(id, dice, reporter, input)?;
            match outcome.victor {
                Some(Side::Party) => self.next = id.next(),
                Some(Side::Enemies) => {
                    reporter.major_report("The party has fallen.");
                    tracing::info!(scene = %id, rounds = outcome.rounds, "party fell");
                    return Ok(CampaignResult::Fallen(id));
                }
                None => return Ok(CampaignResult::Stalemate(id)),
            }
        }

        reporter.major_report(FINALE);
        Ok(CampaignResult::Triumph)
    }

    fn play(
        &mut self,
        id: SceneId,
        dice: &mut dyn Dice,
        reporter: &mut dyn Reporter,
        input: &mut dyn InputProvider,
    ) -> Result<EncounterOutcome, EncounterError> {
        let mut scene = id.scene();
        reporter.report(&format!("{} - {}", scene.name, scene.description));
        tracing::info!(scene = %id, "scene start");

        for actor in &mut self.party {
            actor.refresh();
        }

        run_encounter(
            &mut self.party,
            &mut scene,
            Some(&mut self.inventory),
            EncounterEnv::new(&mut *dice, &mut *reporter, &mut *input),
            self.config.clone(),
        )
    }
}

/// Offers to rebuild the marching order one member at a time.
pub fn reorder_party(party: &mut Vec<Actor>, input: &mut dyn InputProvider) {
    let options = [
        Choice::new("keep", "keep the current order"),
        Choice::new("switch", "choose a new order"),
    ];
    let answer = input.choose("Switch party order before next scene?", &options);
    if resolve_choice(&answer, options.len()) != Some(1) {
        return;
    }

    let mut remaining = std::mem::take(party);
    while !remaining.is_empty() {
        let options: Vec<Choice> = remaining
            .iter()
            .map(|actor| Choice::new(actor.name.clone(), ""))
            .collect();
        let answer = input.choose("Choose the next party member in line:", &options);
        let index = resolve_choice(&answer, options.len()).unwrap_or_default();
        party.push(remaining.remove(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_content::premade_party;
    use encounter_core::ScriptedInput;

    fn names(party: &[Actor]) -> Vec<&str> {
        party.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn keeping_the_order_asks_once() {
        let mut party = premade_party();
        let mut input = ScriptedInput::new(["1"]);

        reorder_party(&mut party, &mut input);

        assert_eq!(names(&party), ["Valeria", "Sonja", "Bosh", "Thoth"]);
        assert_eq!(input.prompts().len(), 1);
    }

    #[test]
    fn switching_rebuilds_the_line_from_answers() {
        let mut party = premade_party();
        // Thoth, then Bosh, then out-of-range clamps to the last remaining
        let mut input = ScriptedInput::new(["2", "4", "3", "9"]);

        reorder_party(&mut party, &mut input);

        assert_eq!(names(&party), ["Thoth", "Bosh", "Sonja", "Valeria"]);
    }
}
