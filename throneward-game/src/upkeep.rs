use crate::constants::{DAILY_RATION_COST, MAX_DAYS, MSG_STARVATION, STARVATION_HEALTH_LOSS};
use crate::state::{CampaignState, Ending, Tone};

/// What one day's upkeep did to the warband.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpkeepOutcome {
    pub food_consumed: i32,
    pub starved: bool,
    pub ended: bool,
}

/// Deduct the day's rations. A chieftain's stores can cover the cost
/// entirely; an empty larder costs health instead of food.
pub fn consume_daily_supplies(state: &mut CampaignState) -> (i32, bool) {
    let upkeep = (DAILY_RATION_COST - state.bonuses().supplies).max(0);
    if state.food >= upkeep {
        state.food -= upkeep;
        return (upkeep, false);
    }
    state.food = 0;
    state.health -= STARVATION_HEALTH_LOSS;
    state.record(MSG_STARVATION, Tone::Bad);
    (upkeep, true)
}

/// Advance the clock one day, feed the host, and check for campaign end.
/// Collapse outranks the winter deadline when both land on the same day.
pub fn advance_day(state: &mut CampaignState) -> UpkeepOutcome {
    state.day = state.day.saturating_add(1);
    let (food_consumed, starved) = consume_daily_supplies(state);
    if state.health <= 0 {
        state.set_ending(Ending::WarbandPerished);
    } else if state.day > MAX_DAYS {
        state.set_ending(Ending::WinterFell);
    }
    UpkeepOutcome {
        food_consumed,
        starved,
        ended: state.is_over(),
    }
}
