/// Encounter configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterConfig {
    /// Rounds after which a running encounter is called a stalemate.
    pub round_limit: u32,
}

impl EncounterConfig {
    // ===== dice =====
    pub const TEST_DIE: u32 = 20;
    pub const DAMAGE_DIE: u32 = 4;
    pub const SKIRMISH_DIE: u32 = 6;
    pub const RESIST_PIN_DIE: u32 = 4;
    /// Face of the resist-pin die on which the pin is shrugged off.
    pub const RESIST_PIN_FACE: u32 = 4;
    pub const RALLY_DIE: u32 = 2;

    // ===== stat test thresholds =====
    pub const SUCCESS_MARGIN: i32 = 10;
    pub const CRITICAL_MARGIN: i32 = 20;
    pub const FORTUNE_SAVE_BASE: i32 = 10;

    // ===== combat modifiers =====
    pub const MOMENTUM_BONUS: i32 = 4;
    pub const DAZE_PENALTY: i32 = 4;
    pub const GUARD_BONUS: i32 = 4;
    pub const VULNERABLE_PENALTY: i32 = 4;
    pub const CRITICAL_DAMAGE: i32 = 4;
    pub const PRECISE_PENALTY: i32 = 4;
    pub const OPENING_BONUS: i32 = 4;

    // ===== recovery and items =====
    pub const RESTORE_MIN: i32 = 7;
    pub const RESTORE_MAX: i32 = 12;
    pub const BUFF_ROUNDS: u32 = 4;
    pub const MAX_INVENTORY_SLOTS: usize = 3;
    pub const MAX_PARTY: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROUND_LIMIT: u32 = 200;

    pub fn new() -> Self {
        Self {
            round_limit: Self::DEFAULT_ROUND_LIMIT,
        }
    }

    pub fn with_round_limit(round_limit: u32) -> Self {
        Self {
            round_limit: round_limit.max(1),
        }
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self::new()
    }
}
