//! Hall of the Mountain King terminal client.
//!
//! Reads `MK_*` settings (a `.env` file is honored), installs logging, then
//! plays the campaign with the premade party against the terminal.
//!
//! ```bash
//! MK_AUTOPLAY=true MK_SEED=7 cargo run -p encounter-client
//! ```

use anyhow::Result;
use encounter_client::{Campaign, CampaignResult, ClientConfig, Console, logging};
use encounter_content::{default_inventory, premade_party};
use encounter_core::{LogicProfile, PcgDice, Reporter};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    tracing::info!(
        seed = config.seed,
        autoplay = config.autoplay,
        start = %config.start_scene,
        "starting campaign"
    );

    let mut party = premade_party();
    if config.autoplay {
        party = party
            .into_iter()
            .map(|actor| actor.with_logic(LogicProfile::Aggressive))
            .collect();
    }

    let console = Console::stdio(config.pause);
    let mut reporter = console.clone();
    let mut input = console;
    let mut dice = PcgDice::new(config.seed);

    reporter.major_report("HALL OF THE MOUNTAIN KING");

    let mut campaign = Campaign::new(party, default_inventory()?, config.start_scene);
    let result = campaign.run(&mut dice, &mut reporter, &mut input)?;

    match result {
        CampaignResult::Triumph => tracing::info!("campaign complete"),
        CampaignResult::Fallen(scene) => tracing::info!(%scene, "campaign lost"),
        CampaignResult::Stalemate(scene) => tracing::warn!(%scene, "campaign stalled"),
    }
    Ok(())
}
