//! High-level campaign session: order gating, the march loop, camp actions,
//! and chronicle streaming to an attached observer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classes::ClassId;
use crate::constants::{
    HUNT_FOOD_BASE, HUNT_FOOD_SPREAD, HUNT_MISHAP_CHANCE, HUNT_MISHAP_HEALTH_LOSS,
    MSG_ACTION_NOT_OFFERED, MSG_CAMPAIGN_OPEN, MSG_CAMPAIGN_OVER, MSG_CAMPAIGN_RESTORED,
    MSG_EDGE_BLOCKED, MSG_ENCOUNTER_PENDING, MSG_NO_ENCOUNTER, MSG_NO_RATIONS, MSG_REST, MSG_SCOUT,
    OBJECTIVE_RESCUE, OBJECTIVE_RETURN, OBJECTIVE_USURPER, REST_FOOD_COST, REST_HEAL, SCOUT_FAME,
};
use crate::encounters::{self, ActionId, ArrivalTagSet, EncounterResolution};
use crate::state::{CampaignState, Ending, LogEntry, Tone, debug_log_enabled};
use crate::upkeep;
use crate::world::{Direction, Terrain};

/// Callback fed every chronicle line in order, including a full replay when
/// attached mid-campaign.
pub type ChronicleObserver = Box<dyn FnMut(&str, Tone)>;

/// Where a march order ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarchOutcome {
    /// The gate refused the order: the campaign is over or a confrontation
    /// is pending.
    Suppressed,
    /// The map edge blocked the march; the day did not advance.
    Blocked,
    /// The warband arrived and the day ran its course.
    Arrived {
        terrain: Terrain,
        events: ArrivalTagSet,
    },
}

/// What a hunting day brought back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntOutcome {
    pub food_gained: i32,
    pub mishap: bool,
}

/// One objective board row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectiveRow {
    pub label: &'static str,
    pub done: bool,
}

/// Campaign session binding the player's orders to an owned state.
pub struct CampaignSession {
    state: CampaignState,
    observer: Option<ChronicleObserver>,
    streamed: usize,
}

impl fmt::Debug for CampaignSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CampaignSession")
            .field("state", &self.state)
            .field("streamed", &self.streamed)
            .finish_non_exhaustive()
    }
}

impl CampaignSession {
    /// Begin a fresh campaign on `seed`: roll the map, reveal around the
    /// capital, and open the chronicle.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut session = Self {
            state: CampaignState::default().with_seed(seed),
            observer: None,
            streamed: 0,
        };
        session.open_campaign(MSG_CAMPAIGN_OPEN, Tone::Neutral);
        session
    }

    /// Wrap a restored state. The caller is expected to have rehydrated the
    /// RNG; the wide reveal re-establishes what a saved chronicle cannot.
    #[must_use]
    pub fn from_state(state: CampaignState) -> Self {
        let mut session = Self {
            state,
            observer: None,
            streamed: 0,
        };
        session.open_campaign(MSG_CAMPAIGN_RESTORED, Tone::Good);
        session
    }

    fn open_campaign(&mut self, message: &str, tone: Tone) {
        self.state.reveal_around(true);
        self.record(message, tone);
    }

    /// Borrow the underlying immutable campaign state.
    #[must_use]
    pub const fn state(&self) -> &CampaignState {
        &self.state
    }

    /// Borrow the underlying mutable campaign state.
    pub const fn state_mut(&mut self) -> &mut CampaignState {
        &mut self.state
    }

    /// Apply a closure to the mutable campaign state.
    pub fn with_state_mut<R>(&mut self, f: impl FnOnce(&mut CampaignState) -> R) -> R {
        f(&mut self.state)
    }

    /// Consume the session, returning the underlying campaign state.
    #[must_use]
    pub fn into_state(self) -> CampaignState {
        self.state
    }

    /// Full chronicle so far.
    #[must_use]
    pub fn chronicle(&self) -> &[LogEntry] {
        &self.state.chronicle
    }

    /// Attach the chronicle observer, replaying everything recorded so far.
    pub fn set_observer(&mut self, observer: ChronicleObserver) {
        self.observer = Some(observer);
        self.streamed = 0;
        self.stream_chronicle();
    }

    /// Objective board rows in display order.
    #[must_use]
    pub fn objectives(&self) -> [ObjectiveRow; 3] {
        [
            ObjectiveRow {
                label: OBJECTIVE_RESCUE,
                done: self.state.rescued,
            },
            ObjectiveRow {
                label: OBJECTIVE_USURPER,
                done: self.state.usurper_defeated,
            },
            ObjectiveRow {
                label: OBJECTIVE_RETURN,
                done: self.state.rescued && self.state.usurper_defeated && self.state.at_capital(),
            },
        ]
    }

    /// March one tile. Arrival reveals ground, rolls events, then either
    /// closes the campaign at the capital or runs the daily upkeep.
    pub fn march(&mut self, direction: Direction) -> MarchOutcome {
        if self.orders_suppressed() {
            return MarchOutcome::Suppressed;
        }

        let Some((x, y)) = self.state.world.step(self.state.x, self.state.y, direction) else {
            self.record(MSG_EDGE_BLOCKED, Tone::Neutral);
            return MarchOutcome::Blocked;
        };

        self.state.x = x;
        self.state.y = y;
        self.state.reveal_around(false);

        let terrain = self.state.world.terrain_at(x, y);
        self.record(
            format!("Day {}: you march into {terrain}.", self.state.day),
            Tone::Neutral,
        );
        let events = encounters::evaluate_arrival(&mut self.state, terrain);

        if self.state.rescued && self.state.usurper_defeated && self.state.at_capital() {
            self.state.set_ending(Ending::ThroneReclaimed);
        } else {
            upkeep::advance_day(&mut self.state);
        }

        if debug_log_enabled() {
            println!(
                "Day {}: marched {direction} into {terrain} at ({x}, {y}), health {}, food {}",
                self.state.day, self.state.health, self.state.food
            );
        }

        self.stream_chronicle();
        MarchOutcome::Arrived { terrain, events }
    }

    /// Camp for the night: one ration buys healing, then the day advances.
    /// Refused outright when the larder is empty.
    pub fn rest(&mut self) -> bool {
        if self.orders_suppressed() {
            return false;
        }
        if self.state.food <= 0 {
            self.record(MSG_NO_RATIONS, Tone::Bad);
            return false;
        }
        self.state.food -= REST_FOOD_COST;
        self.state.health = (self.state.health + REST_HEAL).min(self.state.max_health);
        self.record(MSG_REST, Tone::Good);
        upkeep::advance_day(&mut self.state);
        self.stream_chronicle();
        true
    }

    /// Spend the day hunting. Always feeds the host; sometimes the wild
    /// takes a bite back.
    pub fn hunt(&mut self) -> Option<HuntOutcome> {
        if self.orders_suppressed() {
            return None;
        }
        let food_gained =
            HUNT_FOOD_BASE + self.state.roll(HUNT_FOOD_SPREAD) + self.state.bonuses().supplies;
        self.state.food += food_gained;
        let mishap = self.state.chance(HUNT_MISHAP_CHANCE);
        if mishap {
            self.state.health -= HUNT_MISHAP_HEALTH_LOSS;
            self.record(
                format!("The hunt yields {food_gained} food, but the wild bites back. -1 health."),
                Tone::Bad,
            );
        } else {
            self.record(format!("The hunt succeeds: +{food_gained} food."), Tone::Good);
        }
        upkeep::advance_day(&mut self.state);
        self.stream_chronicle();
        Some(HuntOutcome { food_gained, mishap })
    }

    /// Spend the day scouting: a wide reveal and a little fame.
    pub fn scout(&mut self) -> bool {
        if self.orders_suppressed() {
            return false;
        }
        self.state.reveal_around(true);
        self.state.fame += SCOUT_FAME;
        self.record(MSG_SCOUT, Tone::Good);
        upkeep::advance_day(&mut self.state);
        self.stream_chronicle();
        true
    }

    /// Adopt a new path. Takes effect immediately and costs no day.
    pub fn set_class(&mut self, class: ClassId) -> bool {
        if self.orders_suppressed() {
            return false;
        }
        self.state.class = class;
        self.record(format!("You adopt the {class} path."), Tone::Good);
        true
    }

    /// Answer the pending confrontation. A mismatched answer is reported and
    /// leaves the confrontation outstanding.
    pub fn resolve_encounter(&mut self, action: ActionId) -> Option<EncounterResolution> {
        if self.state.is_over() {
            self.record(MSG_CAMPAIGN_OVER, Tone::Neutral);
            return None;
        }
        let Some(encounter) = self.state.pending else {
            self.record(MSG_NO_ENCOUNTER, Tone::Neutral);
            return None;
        };
        let Some(resolution) = encounters::apply_action(&mut self.state, encounter, action) else {
            self.record(MSG_ACTION_NOT_OFFERED, Tone::Neutral);
            return None;
        };
        self.state.pending = None;
        self.stream_chronicle();
        Some(resolution)
    }

    /// Abandon the run and start over on `seed`. The observer stays attached
    /// and picks up the new chronicle from its first line.
    pub fn reset(&mut self, seed: u64) {
        self.state = CampaignState::default().with_seed(seed);
        self.streamed = 0;
        self.open_campaign(MSG_CAMPAIGN_OPEN, Tone::Neutral);
    }

    /// Shared gate for every order; the ended-campaign message wins when
    /// both blockers hold.
    pub(crate) fn orders_suppressed(&mut self) -> bool {
        if self.state.is_over() {
            self.record(MSG_CAMPAIGN_OVER, Tone::Neutral);
            return true;
        }
        if self.state.pending.is_some() {
            self.record(MSG_ENCOUNTER_PENDING, Tone::Neutral);
            return true;
        }
        false
    }

    pub(crate) fn record(&mut self, message: impl Into<String>, tone: Tone) {
        self.state.record(message, tone);
        self.stream_chronicle();
    }

    fn stream_chronicle(&mut self) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        let start = self.streamed.min(self.state.chronicle.len());
        for entry in &self.state.chronicle[start..] {
            observer(&entry.message, entry.tone);
        }
        self.streamed = self.state.chronicle.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MSG_EPILOGUE_VICTORY, MSG_THRONE_RECLAIMED};
    use crate::encounters::EncounterKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Deterministic fixture: no RNG attached, so every chance floors to
    /// false and the default plains map stays quiet.
    fn scripted_session() -> CampaignSession {
        CampaignSession::from_state(CampaignState::default())
    }

    fn last_message(session: &CampaignSession) -> Option<&str> {
        session
            .chronicle()
            .last()
            .map(|entry| entry.message.as_str())
    }

    #[test]
    fn a_fresh_campaign_opens_at_the_capital_with_a_wide_reveal() {
        let session = CampaignSession::new(42);
        let state = session.state();
        assert!(state.at_capital());
        assert_eq!(state.day, 1);
        assert_eq!(state.health, 16);
        assert_eq!(state.food, 10);
        assert_eq!(state.gold, 10);
        // radius 2 clamped into the corner
        assert_eq!(state.seen.revealed_count(), 9);
        assert_eq!(last_message(&session), Some(MSG_CAMPAIGN_OPEN));
    }

    #[test]
    fn marching_moves_commits_reveals_and_advances_the_day() {
        let mut session = scripted_session();
        let outcome = session.march(Direction::East);
        assert_eq!(
            outcome,
            MarchOutcome::Arrived {
                terrain: Terrain::Plains,
                events: ArrivalTagSet::new(),
            }
        );
        let state = session.state();
        assert_eq!((state.x, state.y), (1, 0));
        assert_eq!(state.day, 2);
        assert_eq!(state.food, 9);
        assert!(
            session
                .chronicle()
                .iter()
                .any(|entry| entry.message == "Day 1: you march into plains.")
        );
    }

    #[test]
    fn the_map_edge_blocks_without_costing_a_day() {
        let mut session = scripted_session();
        let before = session.chronicle().len();
        let outcome = session.march(Direction::North);
        assert_eq!(outcome, MarchOutcome::Blocked);
        let state = session.state();
        assert_eq!((state.x, state.y), (0, 0));
        assert_eq!(state.day, 1);
        assert_eq!(state.food, 10, "no upkeep without an arrival");
        assert_eq!(session.chronicle().len(), before + 1);
        assert_eq!(last_message(&session), Some(MSG_EDGE_BLOCKED));
    }

    #[test]
    fn a_finished_campaign_refuses_every_order() {
        let mut session = scripted_session();
        session.state_mut().set_ending(Ending::WinterFell);
        assert_eq!(session.march(Direction::East), MarchOutcome::Suppressed);
        assert_eq!(last_message(&session), Some(MSG_CAMPAIGN_OVER));
        assert!(!session.rest());
        assert!(session.hunt().is_none());
        assert!(!session.scout());
        assert!(!session.set_class(ClassId::Scout));
        assert_eq!(session.state().day, 1);
    }

    #[test]
    fn a_pending_confrontation_blocks_orders_until_answered() {
        let mut session = scripted_session();
        session.state_mut().pending = Some(EncounterKind::BanditRaid { power: 1 });
        assert!(!session.rest());
        assert_eq!(last_message(&session), Some(MSG_ENCOUNTER_PENDING));
        assert_eq!(session.march(Direction::East), MarchOutcome::Suppressed);

        let resolution = session.resolve_encounter(ActionId::Fight);
        assert!(resolution.is_some_and(|r| r.success));
        assert!(session.state().pending.is_none());
        assert!(session.rest(), "orders resume once answered");
    }

    #[test]
    fn answering_nothing_is_reported() {
        let mut session = scripted_session();
        assert!(session.resolve_encounter(ActionId::Fight).is_none());
        assert_eq!(last_message(&session), Some(MSG_NO_ENCOUNTER));
    }

    #[test]
    fn a_mismatched_answer_leaves_the_confrontation_outstanding() {
        let mut session = scripted_session();
        session.state_mut().pending = Some(EncounterKind::RoyalRescue);
        assert!(session.resolve_encounter(ActionId::Siege).is_none());
        assert_eq!(last_message(&session), Some(MSG_ACTION_NOT_OFFERED));
        assert_eq!(session.state().pending, Some(EncounterKind::RoyalRescue));
    }

    #[test]
    fn rest_trades_a_ration_for_capped_healing() {
        let mut session = scripted_session();
        session.state_mut().health = 14;
        assert!(session.rest());
        let state = session.state();
        assert_eq!(state.health, 16, "healing caps at max health");
        assert_eq!(state.food, 8, "one spent resting, one consumed overnight");
        assert_eq!(state.day, 2);
    }

    #[test]
    fn rest_needs_rations() {
        let mut session = scripted_session();
        session.state_mut().food = 0;
        session.state_mut().health = 9;
        assert!(!session.rest());
        assert_eq!(last_message(&session), Some(MSG_NO_RATIONS));
        let state = session.state();
        assert_eq!(state.day, 1, "a refused rest costs no day");
        assert_eq!(state.food, 0);
        assert_eq!(state.health, 9, "no healing without a campfire");
    }

    #[test]
    fn hunting_feeds_the_host_and_spends_the_day() {
        let mut session = scripted_session();
        let outcome = session.hunt().expect("hunt is not gated");
        // No RNG attached: the roll floors to zero and no mishap fires.
        assert_eq!(outcome, HuntOutcome { food_gained: 2, mishap: false });
        let state = session.state();
        assert_eq!(state.food, 11, "ten, plus two hunted, minus one consumed");
        assert_eq!(state.day, 2);
        assert_eq!(state.health, 16);
    }

    #[test]
    fn scouting_sweeps_wide_and_earns_fame() {
        let mut session = scripted_session();
        session.state_mut().x = 4;
        session.state_mut().y = 4;
        let seen_before = session.state().seen.revealed_count();
        assert!(session.scout());
        let state = session.state();
        assert_eq!(state.fame, 1);
        assert_eq!(state.day, 2);
        assert!(state.seen.revealed_count() > seen_before);
        assert!(state.seen.is_revealed(6, 6));
    }

    #[test]
    fn changing_path_is_free_of_the_clock() {
        let mut session = scripted_session();
        assert!(session.set_class(ClassId::Chieftain));
        assert_eq!(session.state().class, ClassId::Chieftain);
        assert_eq!(session.state().day, 1);
        assert_eq!(
            last_message(&session),
            Some("You adopt the chieftain path.")
        );
    }

    #[test]
    fn returning_in_triumph_closes_the_campaign_without_another_day() {
        let mut state = CampaignState::default();
        state.rescued = true;
        state.usurper_defeated = true;
        state.x = 1;
        let mut session = CampaignSession::from_state(state);
        let outcome = session.march(Direction::West);
        match outcome {
            MarchOutcome::Arrived { terrain, .. } => assert_eq!(terrain, Terrain::Capital),
            other => panic!("expected arrival, got {other:?}"),
        }
        let state = session.state();
        assert_eq!(state.ending, Some(Ending::ThroneReclaimed));
        assert_eq!(state.day, 1, "the winning return costs no day");
        assert_eq!(state.food, 10, "no upkeep on the winning return");
        let messages: Vec<&str> = session
            .chronicle()
            .iter()
            .map(|entry| entry.message.as_str())
            .collect();
        assert!(messages.contains(&MSG_THRONE_RECLAIMED));
        assert!(messages.contains(&MSG_EPILOGUE_VICTORY));
        let objectives = session.objectives();
        assert!(objectives.iter().all(|row| row.done));
    }

    #[test]
    fn arriving_on_a_shrine_still_costs_the_day() {
        let mut session = scripted_session();
        session.with_state_mut(|state| state.world.set_terrain(1, 0, Terrain::Ruin));
        let outcome = session.march(Direction::East);
        match outcome {
            MarchOutcome::Arrived { events, .. } => {
                assert_eq!(events.as_slice(), [crate::encounters::ArrivalEvent::RescueSite]);
            }
            other => panic!("expected arrival, got {other:?}"),
        }
        assert_eq!(session.state().day, 2);
        assert!(session.state().pending.is_some());
    }

    #[test]
    fn the_observer_replays_history_then_streams_live() {
        let mut session = scripted_session();
        assert!(session.rest());
        let captured: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&captured);
        session.set_observer(Box::new(move |message, tone| {
            sink.borrow_mut().push(format!("{}|{message}", tone.as_str()));
        }));
        let replayed = captured.borrow().len();
        assert_eq!(replayed, session.chronicle().len(), "full replay on attach");
        assert!(captured.borrow()[0].starts_with("good|"));

        assert!(session.scout());
        assert!(captured.borrow().len() > replayed);
        assert!(
            captured
                .borrow()
                .iter()
                .any(|line| line == &format!("good|{MSG_SCOUT}"))
        );
    }

    #[test]
    fn reset_starts_a_new_chronicle_for_the_same_observer() {
        let mut session = CampaignSession::new(7);
        let captured: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&captured);
        session.set_observer(Box::new(move |message, _| {
            sink.borrow_mut().push(message.to_string());
        }));
        session.state_mut().set_ending(Ending::WinterFell);
        session.reset(8);
        let state = session.state();
        assert_eq!(state.seed, 8);
        assert_eq!(state.day, 1);
        assert!(state.ending.is_none());
        assert_eq!(state.chronicle.len(), 1);
        assert_eq!(
            captured.borrow().last().map(String::as_str),
            Some(MSG_CAMPAIGN_OPEN)
        );
    }

    #[test]
    fn objectives_track_the_three_goals_in_order() {
        let mut session = scripted_session();
        let rows = session.objectives();
        assert_eq!(rows[0].label, OBJECTIVE_RESCUE);
        assert_eq!(rows[1].label, OBJECTIVE_USURPER);
        assert_eq!(rows[2].label, OBJECTIVE_RETURN);
        assert!(rows.iter().all(|row| !row.done));

        session.state_mut().rescued = true;
        session.state_mut().usurper_defeated = true;
        let rows = session.objectives();
        assert!(rows[0].done);
        assert!(rows[1].done);
        assert!(rows[2].done, "already standing at the capital");
    }
}
