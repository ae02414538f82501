//! Campaign state: the warband's stats, the map, the chronicle, and the RNG.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::classes::{ClassBonuses, ClassId};
use crate::constants::{
    DEBUG_ENV_VAR, MAX_DAYS, MSG_EPILOGUE_DEFEAT, MSG_EPILOGUE_VICTORY, MSG_THRONE_RECLAIMED,
    MSG_WARBAND_PERISHED, MSG_WINTER_FELL, REVEAL_RADIUS_MARCH, REVEAL_RADIUS_WIDE,
    SCORE_DAYS_LEFT_WEIGHT, SCORE_FAME_WEIGHT, SCORE_FOOD_WEIGHT, SCORE_GOLD_WEIGHT,
    SCORE_HEALTH_WEIGHT, SCORE_RESCUE_BONUS, SCORE_USURPER_BONUS, STARTING_FOOD, STARTING_GOLD,
    STARTING_HEALTH, WORLD_SIZE,
};
use crate::encounters::EncounterKind;
use crate::visibility::VisibilityGrid;
use crate::world::WorldGrid;

/// Chronicle tone, used by renderers to color entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Good,
    Bad,
}

impl Tone {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Good => "good",
            Tone::Bad => "bad",
        }
    }

    /// CSS class the web log styles with; neutral entries carry none.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "",
            Tone::Good => "good",
            Tone::Bad => "bad",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chronicle line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub tone: Tone,
}

/// How a campaign closed. The first cause recorded sticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Ending {
    ThroneReclaimed,
    WarbandPerished,
    WinterFell,
}

impl Ending {
    #[must_use]
    pub const fn is_victory(self) -> bool {
        matches!(self, Ending::ThroneReclaimed)
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Ending::ThroneReclaimed => MSG_THRONE_RECLAIMED,
            Ending::WarbandPerished => MSG_WARBAND_PERISHED,
            Ending::WinterFell => MSG_WINTER_FELL,
        }
    }
}

/// Full campaign snapshot. Persisted fields carry the run; the RNG, the
/// pending confrontation, and the chronicle are rebuilt or replayed by the
/// session layer after a load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignState {
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub x: usize,
    #[serde(default)]
    pub y: usize,
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub health: i32,
    #[serde(default)]
    pub max_health: i32,
    #[serde(default)]
    pub food: i32,
    #[serde(default)]
    pub gold: i32,
    #[serde(default)]
    pub fame: i32,
    #[serde(default)]
    pub class: ClassId,
    #[serde(default)]
    pub rescued: bool,
    #[serde(default)]
    pub usurper_defeated: bool,
    #[serde(default)]
    pub ending: Option<Ending>,
    #[serde(default)]
    pub world: WorldGrid,
    #[serde(default)]
    pub seen: VisibilityGrid,
    #[serde(skip)]
    pub pending: Option<EncounterKind>,
    #[serde(skip)]
    pub rng: Option<ChaCha20Rng>,
    #[serde(skip)]
    pub chronicle: Vec<LogEntry>,
}

impl Default for CampaignState {
    fn default() -> Self {
        Self {
            seed: 0,
            x: 0,
            y: 0,
            day: 1,
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            food: STARTING_FOOD,
            gold: STARTING_GOLD,
            fame: 0,
            class: ClassId::Warrior,
            rescued: false,
            usurper_defeated: false,
            ending: None,
            world: WorldGrid::default(),
            seen: VisibilityGrid::new(WORLD_SIZE),
            pending: None,
            rng: None,
            chronicle: Vec::new(),
        }
    }
}

impl CampaignState {
    /// Seed the RNG and roll the map. Starts the campaign at the capital
    /// with the whole map hidden.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.seed = seed;
        self.world = WorldGrid::generate(WORLD_SIZE, &mut rng);
        self.seen = VisibilityGrid::new(self.world.size());
        self.rng = Some(rng);
        self
    }

    /// Rebuild the RNG from the stored seed after a load. The map itself is
    /// persisted, so only the stream is re-seeded.
    #[must_use]
    pub fn rehydrate(mut self) -> Self {
        self.rng = Some(ChaCha20Rng::seed_from_u64(self.seed));
        self
    }

    #[must_use]
    pub const fn bonuses(&self) -> ClassBonuses {
        self.class.bonuses()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    /// Append a chronicle line.
    pub fn record(&mut self, message: impl Into<String>, tone: Tone) {
        self.chronicle.push(LogEntry {
            message: message.into(),
            tone,
        });
    }

    /// First ending sticks; later causes are ignored. Records the closing
    /// line and the neutral epilogue.
    pub(crate) fn set_ending(&mut self, ending: Ending) {
        if self.ending.is_some() {
            return;
        }
        self.ending = Some(ending);
        let tone = if ending.is_victory() {
            Tone::Good
        } else {
            Tone::Bad
        };
        self.record(ending.message(), tone);
        let epilogue = if ending.is_victory() {
            MSG_EPILOGUE_VICTORY
        } else {
            MSG_EPILOGUE_DEFEAT
        };
        self.record(epilogue, Tone::Neutral);
    }

    /// Uniform roll in `[0, bound)`. Answers 0 when no RNG is attached or
    /// `bound` is not positive.
    pub fn roll(&mut self, bound: i32) -> i32 {
        match self.rng.as_mut() {
            Some(rng) if bound > 0 => rng.random_range(0..bound),
            _ => 0,
        }
    }

    /// Probability check against a unit-interval draw. Answers `false` when
    /// no RNG is attached.
    pub fn chance(&mut self, probability: f64) -> bool {
        match self.rng.as_mut() {
            Some(rng) => rng.random::<f64>() < probability,
            None => false,
        }
    }

    /// Reveal around the warband: the wide radius for sweeps and campaign
    /// starts, otherwise the marching radius plus the path's scout bonus.
    pub fn reveal_around(&mut self, wide: bool) {
        let radius = if wide {
            REVEAL_RADIUS_WIDE
        } else {
            REVEAL_RADIUS_MARCH + usize::try_from(self.bonuses().scout).unwrap_or(0)
        };
        self.seen.reveal(self.x, self.y, radius);
    }

    #[must_use]
    pub const fn at_capital(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Aggregate campaign score for end screens and leaderboards.
    #[must_use]
    pub fn war_score(&self) -> i32 {
        let fame = self.fame.max(0);
        let health = self.health.max(0);
        let food = self.food.max(0);
        let gold = self.gold.max(0);
        let days_left = i32::try_from(MAX_DAYS.saturating_sub(self.day.min(MAX_DAYS))).unwrap_or(0);
        let rescue_bonus = if self.rescued { SCORE_RESCUE_BONUS } else { 0 };
        let usurper_bonus = if self.usurper_defeated {
            SCORE_USURPER_BONUS
        } else {
            0
        };

        fame * SCORE_FAME_WEIGHT
            + health * SCORE_HEALTH_WEIGHT
            + food * SCORE_FOOD_WEIGHT
            + gold * SCORE_GOLD_WEIGHT
            + days_left * SCORE_DAYS_LEFT_WEIGHT
            + rescue_bonus
            + usurper_bonus
    }
}

#[cfg(debug_assertions)]
pub(crate) fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
pub(crate) const fn debug_log_enabled() -> bool {
    false
}
