//! Centralized balance and tuning constants for Throneward campaign logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Campaign framing ---------------------------------------------------------
pub(crate) const WORLD_SIZE: usize = 8;
pub(crate) const MAX_DAYS: u32 = 35;
pub(crate) const STARTING_HEALTH: i32 = 16;
pub(crate) const STARTING_GOLD: i32 = 10;
pub(crate) const STARTING_FOOD: i32 = 10;
pub(crate) const SAVE_KEY: &str = "throneward-save";
pub(crate) const DEBUG_ENV_VAR: &str = "THRONEWARD_DEBUG_LOGS";

// Visibility ---------------------------------------------------------------
pub(crate) const REVEAL_RADIUS_WIDE: usize = 2;
pub(crate) const REVEAL_RADIUS_MARCH: usize = 1;

// Daily upkeep -------------------------------------------------------------
pub(crate) const DAILY_RATION_COST: i32 = 1;
pub(crate) const STARVATION_HEALTH_LOSS: i32 = 2;

// Terrain events -----------------------------------------------------------
pub(crate) const FOREST_FORAGE_CHANCE: f64 = 0.35;
pub(crate) const FOREST_FOOD_BASE: i32 = 1;
pub(crate) const FOREST_FOOD_SPREAD: i32 = 3;
pub(crate) const SWAMP_FEVER_CHANCE: f64 = 0.30;
pub(crate) const SWAMP_HEALTH_LOSS: i32 = 2;
pub(crate) const MOUNTAIN_CACHE_CHANCE: f64 = 0.35;
pub(crate) const MOUNTAIN_GOLD_BASE: i32 = 3;
pub(crate) const MOUNTAIN_GOLD_SPREAD: i32 = 7;

// Raid tuning --------------------------------------------------------------
pub(crate) const RAID_CHANCE: f64 = 0.28;
pub(crate) const RAID_POWER_BASE: i32 = 6;
pub(crate) const RAID_POWER_SPREAD: i32 = 8;
pub(crate) const RAID_FIGHT_SPREAD: i32 = 8;
pub(crate) const RAID_LOOT_BASE: i32 = 4;
pub(crate) const RAID_LOOT_SPREAD: i32 = 8;
pub(crate) const RAID_WIN_FAME: i32 = 2;
pub(crate) const RAID_LOSS_HEALTH: i32 = 3;
pub(crate) const RAID_LOSS_GOLD: i32 = 4;
pub(crate) const BRIBE_COST: i32 = 5;
pub(crate) const BRIBE_FAIL_HEALTH_LOSS: i32 = 2;

// Rescue tuning ------------------------------------------------------------
pub(crate) const CHARGE_ROLL_SPREAD: i32 = 12;
pub(crate) const CHARGE_TARGET: i32 = 16;
pub(crate) const CHARGE_WIN_FAME: i32 = 4;
pub(crate) const CHARGE_LOSS_HEALTH: i32 = 4;
pub(crate) const STEALTH_CHANCE: f64 = 0.55;
pub(crate) const STEALTH_WIN_FAME: i32 = 2;
pub(crate) const STEALTH_LOSS_HEALTH: i32 = 2;

// Final battle tuning ------------------------------------------------------
pub(crate) const DUEL_ROLL_SPREAD: i32 = 14;
pub(crate) const DUEL_TARGET: i32 = 20;
pub(crate) const DUEL_WIN_FAME: i32 = 5;
pub(crate) const DUEL_LOSS_HEALTH: i32 = 5;
pub(crate) const SIEGE_COST: i32 = 6;
pub(crate) const SIEGE_CHANCE: f64 = 0.65;
pub(crate) const SIEGE_WIN_FAME: i32 = 3;
pub(crate) const SIEGE_LOSS_HEALTH: i32 = 3;
pub(crate) const SIEGE_UNPAID_HEALTH_LOSS: i32 = 2;

// Camp actions -------------------------------------------------------------
pub(crate) const REST_FOOD_COST: i32 = 1;
pub(crate) const REST_HEAL: i32 = 4;
pub(crate) const HUNT_FOOD_BASE: i32 = 2;
pub(crate) const HUNT_FOOD_SPREAD: i32 = 4;
pub(crate) const HUNT_MISHAP_CHANCE: f64 = 0.30;
pub(crate) const HUNT_MISHAP_HEALTH_LOSS: i32 = 1;
pub(crate) const SCOUT_FAME: i32 = 1;

// War score weights --------------------------------------------------------
pub(crate) const SCORE_FAME_WEIGHT: i32 = 25;
pub(crate) const SCORE_HEALTH_WEIGHT: i32 = 15;
pub(crate) const SCORE_FOOD_WEIGHT: i32 = 10;
pub(crate) const SCORE_GOLD_WEIGHT: i32 = 5;
pub(crate) const SCORE_DAYS_LEFT_WEIGHT: i32 = 4;
pub(crate) const SCORE_RESCUE_BONUS: i32 = 150;
pub(crate) const SCORE_USURPER_BONUS: i32 = 250;

// Chronicle text: campaign frame -------------------------------------------
pub(crate) const MSG_CAMPAIGN_OPEN: &str =
    "Exile ends here. Gather strength, rescue the captive royal, and crush the usurper.";
pub(crate) const MSG_CAMPAIGN_RESTORED: &str = "Campaign restored from war records.";
pub(crate) const MSG_CAMPAIGN_SAVED: &str = "Campaign saved.";
pub(crate) const MSG_CAMPAIGN_OVER: &str =
    "The campaign has ended. Begin a new one to ride again.";
pub(crate) const MSG_ENCOUNTER_PENDING: &str = "A confrontation demands your answer first.";
pub(crate) const MSG_NO_ENCOUNTER: &str = "No foe awaits your answer.";
pub(crate) const MSG_ACTION_NOT_OFFERED: &str = "That course is not open to you.";
pub(crate) const MSG_EDGE_BLOCKED: &str = "Beyond this edge lie impassable wastes.";

// Chronicle text: upkeep and camp ------------------------------------------
pub(crate) const MSG_STARVATION: &str = "The host starves; hunger costs 2 health.";
pub(crate) const MSG_NO_RATIONS: &str = "No rations remain; rest is impossible.";
pub(crate) const MSG_REST: &str = "Campfires burn through the night. +4 health.";
pub(crate) const MSG_SCOUT: &str = "Scouts map distant roads and hidden valleys. +1 fame.";

// Chronicle text: terrain events -------------------------------------------
pub(crate) const MSG_BOG_FEVER: &str = "Bog-fever spreads in camp. Lose 2 health.";
pub(crate) const MSG_RESCUE_SITE: &str =
    "In a shattered shrine, you find the captive royal chained by sellswords.";
pub(crate) const MSG_BATTLE_SITE: &str =
    "The usurper stands in black armor upon the fortress gate.";

// Chronicle text: encounter resolution -------------------------------------
pub(crate) const MSG_RAID_LOSS: &str = "Heavy losses. -3 health, -4 gold.";
pub(crate) const MSG_BRIBE_PAID: &str = "Gold buys safe passage.";
pub(crate) const MSG_BRIBE_UNPAID: &str = "You cannot pay the demand. Lose 2 health.";
pub(crate) const MSG_CHARGE_WIN: &str =
    "The chains are broken; the royal rides with your host. +4 fame.";
pub(crate) const MSG_CHARGE_LOSS: &str =
    "The rescue fails, and you withdraw bleeding. -4 health.";
pub(crate) const MSG_STEALTH_WIN: &str = "A quiet rescue succeeds under moonlight. +2 fame.";
pub(crate) const MSG_STEALTH_LOSS: &str = "A guard raises the alarm. Lose 2 health.";
pub(crate) const MSG_DUEL_WIN: &str = "You slay the usurper before both armies. +5 fame.";
pub(crate) const MSG_DUEL_LOSS: &str = "You are repelled from the gate. -5 health.";
pub(crate) const MSG_SIEGE_WIN: &str = "The fortress falls after a brutal siege. +3 fame.";
pub(crate) const MSG_SIEGE_LOSS: &str = "The assault fails. -3 health.";
pub(crate) const MSG_SIEGE_UNPAID: &str =
    "Without enough coin to feed siege lines, morale collapses. -2 health.";

// Chronicle text: endings --------------------------------------------------
pub(crate) const MSG_THRONE_RECLAIMED: &str =
    "You return triumphant. The throne is yours once more.";
pub(crate) const MSG_WARBAND_PERISHED: &str = "Your warband perishes on the road.";
pub(crate) const MSG_WINTER_FELL: &str =
    "Winter ends your campaign before the throne is reclaimed.";
pub(crate) const MSG_EPILOGUE_VICTORY: &str =
    "Victory! Begin a new campaign to write another legend.";
pub(crate) const MSG_EPILOGUE_DEFEAT: &str = "Defeat. Rally your strength and try again.";

// Objective board ----------------------------------------------------------
pub(crate) const OBJECTIVE_RESCUE: &str = "Rescue captive royal in eastern ruins";
pub(crate) const OBJECTIVE_USURPER: &str = "Defeat usurper in southern fortress";
pub(crate) const OBJECTIVE_RETURN: &str = "Return to capital alive";
