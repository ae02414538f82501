//! Arrival events and the confrontation state machine.
//!
//! Marching onto a tile rolls terrain events first, then landmark
//! confrontations, then the roaming raid check. Confrontations park in
//! [`crate::state::CampaignState::pending`] until the player answers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{
    BRIBE_COST, BRIBE_FAIL_HEALTH_LOSS, CHARGE_LOSS_HEALTH, CHARGE_ROLL_SPREAD, CHARGE_TARGET,
    CHARGE_WIN_FAME, DUEL_LOSS_HEALTH, DUEL_ROLL_SPREAD, DUEL_TARGET, DUEL_WIN_FAME,
    FOREST_FOOD_BASE, FOREST_FOOD_SPREAD, FOREST_FORAGE_CHANCE, MOUNTAIN_CACHE_CHANCE,
    MOUNTAIN_GOLD_BASE, MOUNTAIN_GOLD_SPREAD, MSG_BATTLE_SITE, MSG_BOG_FEVER, MSG_BRIBE_PAID,
    MSG_BRIBE_UNPAID, MSG_CHARGE_LOSS, MSG_CHARGE_WIN, MSG_DUEL_LOSS, MSG_DUEL_WIN, MSG_RAID_LOSS,
    MSG_RESCUE_SITE, MSG_SIEGE_LOSS, MSG_SIEGE_UNPAID, MSG_SIEGE_WIN, MSG_STEALTH_LOSS,
    MSG_STEALTH_WIN, RAID_CHANCE, RAID_FIGHT_SPREAD, RAID_LOOT_BASE, RAID_LOOT_SPREAD,
    RAID_LOSS_GOLD, RAID_LOSS_HEALTH, RAID_POWER_BASE, RAID_POWER_SPREAD, RAID_WIN_FAME,
    SIEGE_CHANCE, SIEGE_COST, SIEGE_LOSS_HEALTH, SIEGE_UNPAID_HEALTH_LOSS, SIEGE_WIN_FAME,
    STEALTH_CHANCE, STEALTH_LOSS_HEALTH, STEALTH_WIN_FAME, SWAMP_FEVER_CHANCE, SWAMP_HEALTH_LOSS,
};
use crate::state::{CampaignState, Tone};
use crate::world::Terrain;

/// Events one arrival can raise. A tile stacks at most a terrain effect and
/// a raid, so two slots stay inline.
pub type ArrivalTagSet = SmallVec<[ArrivalEvent; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalEvent {
    Forage,
    BogFever,
    TributeCache,
    RescueSite,
    BattleSite,
    Raid,
}

/// A confrontation waiting for the player's answer. Raid strength is rolled
/// when the raid lands, not when it is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EncounterKind {
    BanditRaid { power: i32 },
    RoyalRescue,
    UsurperBattle,
}

impl EncounterKind {
    /// The two answers this confrontation offers.
    #[must_use]
    pub const fn actions(self) -> [ActionId; 2] {
        match self {
            EncounterKind::BanditRaid { .. } => [ActionId::Fight, ActionId::Bribe],
            EncounterKind::RoyalRescue => [ActionId::Charge, ActionId::Stealth],
            EncounterKind::UsurperBattle => [ActionId::Duel, ActionId::Siege],
        }
    }

    #[must_use]
    pub fn offers(self, action: ActionId) -> bool {
        self.actions().contains(&action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionId {
    Fight,
    Bribe,
    Charge,
    Stealth,
    Duel,
    Siege,
}

impl ActionId {
    pub const ALL: [ActionId; 6] = [
        ActionId::Fight,
        ActionId::Bribe,
        ActionId::Charge,
        ActionId::Stealth,
        ActionId::Duel,
        ActionId::Siege,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ActionId::Fight => "fight",
            ActionId::Bribe => "bribe",
            ActionId::Charge => "charge",
            ActionId::Stealth => "stealth",
            ActionId::Duel => "duel",
            ActionId::Siege => "siege",
        }
    }

    /// Button caption offered to the player.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            ActionId::Fight => "Fight",
            ActionId::Bribe => "Bribe (5 gold)",
            ActionId::Charge => "Charge",
            ActionId::Stealth => "Stealth",
            ActionId::Duel => "Challenge to duel",
            ActionId::Siege => "Launch siege (6 gold)",
        }
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fight" => Ok(ActionId::Fight),
            "bribe" => Ok(ActionId::Bribe),
            "charge" => Ok(ActionId::Charge),
            "stealth" => Ok(ActionId::Stealth),
            "duel" => Ok(ActionId::Duel),
            "siege" => Ok(ActionId::Siege),
            _ => Err(()),
        }
    }
}

impl From<ActionId> for String {
    fn from(action: ActionId) -> Self {
        action.as_str().to_string()
    }
}

/// How an answered confrontation went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterResolution {
    pub encounter: EncounterKind,
    pub action: ActionId,
    pub success: bool,
}

/// Roll the events for a fresh arrival on `terrain`.
///
/// Landmark confrontations preempt the roaming raid check; everything else
/// can stack with it. Sets [`CampaignState::pending`] when a confrontation
/// is raised.
pub fn evaluate_arrival(state: &mut CampaignState, terrain: Terrain) -> ArrivalTagSet {
    let mut events = ArrivalTagSet::new();

    if terrain == Terrain::Forest && state.chance(FOREST_FORAGE_CHANCE) {
        let herbs = FOREST_FOOD_BASE + state.roll(FOREST_FOOD_SPREAD);
        state.food += herbs;
        state.record(format!("Foragers return with {herbs} food."), Tone::Good);
        events.push(ArrivalEvent::Forage);
    }

    if terrain == Terrain::Swamp && state.chance(SWAMP_FEVER_CHANCE) {
        state.health -= SWAMP_HEALTH_LOSS;
        state.record(MSG_BOG_FEVER, Tone::Bad);
        events.push(ArrivalEvent::BogFever);
    }

    if terrain == Terrain::Mountain && state.chance(MOUNTAIN_CACHE_CHANCE) {
        let find = MOUNTAIN_GOLD_BASE + state.roll(MOUNTAIN_GOLD_SPREAD);
        state.gold += find;
        state.record(
            format!("You discover hidden tribute caches: +{find} gold."),
            Tone::Good,
        );
        events.push(ArrivalEvent::TributeCache);
    }

    if terrain == Terrain::Ruin && !state.rescued {
        state.pending = Some(EncounterKind::RoyalRescue);
        state.record(MSG_RESCUE_SITE, Tone::Neutral);
        events.push(ArrivalEvent::RescueSite);
        return events;
    }

    if terrain == Terrain::Fortress && state.rescued && !state.usurper_defeated {
        state.pending = Some(EncounterKind::UsurperBattle);
        state.record(MSG_BATTLE_SITE, Tone::Bad);
        events.push(ArrivalEvent::BattleSite);
        return events;
    }

    if state.chance(RAID_CHANCE) {
        let power = RAID_POWER_BASE + state.roll(RAID_POWER_SPREAD);
        state.pending = Some(EncounterKind::BanditRaid { power });
        state.record(format!("Raiders strike ({power} strength)."), Tone::Bad);
        events.push(ArrivalEvent::Raid);
    }

    events
}

/// Apply `action` to an already-detached confrontation. Answers `None` when
/// the confrontation does not offer that action; the caller decides how to
/// report the refusal.
#[must_use]
pub fn apply_action(
    state: &mut CampaignState,
    encounter: EncounterKind,
    action: ActionId,
) -> Option<EncounterResolution> {
    let success = match (encounter, action) {
        (EncounterKind::BanditRaid { power }, ActionId::Fight) => fight_raiders(state, power),
        (EncounterKind::BanditRaid { .. }, ActionId::Bribe) => bribe_raiders(state),
        (EncounterKind::RoyalRescue, ActionId::Charge) => charge_the_shrine(state),
        (EncounterKind::RoyalRescue, ActionId::Stealth) => slip_past_the_guards(state),
        (EncounterKind::UsurperBattle, ActionId::Duel) => duel_the_usurper(state),
        (EncounterKind::UsurperBattle, ActionId::Siege) => lay_siege(state),
        _ => return None,
    };
    Some(EncounterResolution {
        encounter,
        action,
        success,
    })
}

fn fight_raiders(state: &mut CampaignState, power: i32) -> bool {
    let muster = state.health + state.roll(RAID_FIGHT_SPREAD) + state.fame + state.bonuses().combat;
    if muster >= power {
        let loot = RAID_LOOT_BASE + state.roll(RAID_LOOT_SPREAD);
        state.gold += loot;
        state.fame += RAID_WIN_FAME;
        state.record(format!("Raiders crushed. +{loot} gold, +2 fame."), Tone::Good);
        true
    } else {
        state.health -= RAID_LOSS_HEALTH;
        state.gold = (state.gold - RAID_LOSS_GOLD).max(0);
        state.record(MSG_RAID_LOSS, Tone::Bad);
        false
    }
}

fn bribe_raiders(state: &mut CampaignState) -> bool {
    if state.gold >= BRIBE_COST {
        state.gold -= BRIBE_COST;
        state.record(MSG_BRIBE_PAID, Tone::Neutral);
        true
    } else {
        state.health -= BRIBE_FAIL_HEALTH_LOSS;
        state.record(MSG_BRIBE_UNPAID, Tone::Bad);
        false
    }
}

fn charge_the_shrine(state: &mut CampaignState) -> bool {
    let assault = state.roll(CHARGE_ROLL_SPREAD) + state.health + state.bonuses().combat;
    if assault >= CHARGE_TARGET {
        state.rescued = true;
        state.fame += CHARGE_WIN_FAME;
        state.record(MSG_CHARGE_WIN, Tone::Good);
        true
    } else {
        state.health -= CHARGE_LOSS_HEALTH;
        state.record(MSG_CHARGE_LOSS, Tone::Bad);
        false
    }
}

fn slip_past_the_guards(state: &mut CampaignState) -> bool {
    if state.chance(STEALTH_CHANCE) {
        state.rescued = true;
        state.fame += STEALTH_WIN_FAME;
        state.record(MSG_STEALTH_WIN, Tone::Good);
        true
    } else {
        state.health -= STEALTH_LOSS_HEALTH;
        state.record(MSG_STEALTH_LOSS, Tone::Bad);
        false
    }
}

fn duel_the_usurper(state: &mut CampaignState) -> bool {
    let prowess =
        state.roll(DUEL_ROLL_SPREAD) + state.health + state.fame + state.bonuses().combat;
    if prowess >= DUEL_TARGET {
        state.usurper_defeated = true;
        state.fame += DUEL_WIN_FAME;
        state.record(MSG_DUEL_WIN, Tone::Good);
        true
    } else {
        state.health -= DUEL_LOSS_HEALTH;
        state.record(MSG_DUEL_LOSS, Tone::Bad);
        false
    }
}

fn lay_siege(state: &mut CampaignState) -> bool {
    if state.gold < SIEGE_COST {
        state.health -= SIEGE_UNPAID_HEALTH_LOSS;
        state.record(MSG_SIEGE_UNPAID, Tone::Bad);
        return false;
    }
    state.gold -= SIEGE_COST;
    if state.chance(SIEGE_CHANCE) {
        state.usurper_defeated = true;
        state.fame += SIEGE_WIN_FAME;
        state.record(MSG_SIEGE_WIN, Tone::Good);
        true
    } else {
        state.health -= SIEGE_LOSS_HEALTH;
        state.record(MSG_SIEGE_LOSS, Tone::Bad);
        false
    }
}
