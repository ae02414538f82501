//! Throneward Game Engine
//!
//! Platform-agnostic core campaign logic for the Throneward exile-to-throne
//! strategy game. This crate provides all game mechanics without UI or
//! platform-specific dependencies.

use thiserror::Error;

pub mod classes;
pub mod constants;
pub mod encounters;
pub mod session;
pub mod share;
pub mod state;
pub mod upkeep;
pub mod visibility;
pub mod world;

// Re-export commonly used types
pub use classes::{ClassBonuses, ClassId};
pub use encounters::{
    ActionId, ArrivalEvent, ArrivalTagSet, EncounterKind, EncounterResolution, apply_action,
    evaluate_arrival,
};
pub use session::{CampaignSession, ChronicleObserver, HuntOutcome, MarchOutcome, ObjectiveRow};
pub use share::{decode_to_seed, encode_friendly, generate_code_from_entropy};
pub use state::{CampaignState, Ending, LogEntry, Tone};
pub use upkeep::{UpkeepOutcome, advance_day, consume_daily_supplies};
pub use visibility::VisibilityGrid;
pub use world::{Direction, Terrain, WorldGrid};

use constants::{MSG_CAMPAIGN_SAVED, SAVE_KEY};

/// Trait for abstracting save/load operations
/// Platform-specific implementations should provide this
pub trait CampaignStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Write a serialized campaign snapshot under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be written.
    fn write(&self, key: &str, payload: &str) -> Result<(), Self::Error>;

    /// Read the serialized campaign snapshot stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Delete whatever is stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be updated.
    fn delete(&self, key: &str) -> Result<(), Self::Error>;
}

/// Why a save request failed outright. Gating refusals are not errors and
/// come back as `Ok(false)`.
#[derive(Debug, Error)]
pub enum SaveError<E> {
    #[error("campaign snapshot could not be serialized")]
    Serialize(#[from] serde_json::Error),
    #[error("campaign snapshot could not be written: {0}")]
    Store(E),
}

/// Main engine for starting, saving, and restoring campaigns
pub struct GameEngine<S>
where
    S: CampaignStore,
{
    store: S,
}

impl<S> GameEngine<S>
where
    S: CampaignStore,
{
    /// Create a new engine over the provided campaign store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Start a fresh campaign with the specified seed
    #[must_use]
    pub fn start(&self, seed: u64) -> CampaignSession {
        CampaignSession::new(seed)
    }

    /// Start a fresh campaign from a share code, if the code parses
    #[must_use]
    pub fn start_from_code(&self, code: &str) -> Option<CampaignSession> {
        share::decode_to_seed(code).map(CampaignSession::new)
    }

    /// Snapshot the session under the well-known save key. Returns
    /// `Ok(false)` without touching the store when the campaign is over or
    /// a confrontation is pending; the refusal lands in the chronicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be serialized or written.
    pub fn save_campaign(
        &self,
        session: &mut CampaignSession,
    ) -> Result<bool, SaveError<S::Error>> {
        if session.orders_suppressed() {
            return Ok(false);
        }
        let payload = serde_json::to_string(session.state())?;
        self.store
            .write(SAVE_KEY, &payload)
            .map_err(SaveError::Store)?;
        session.record(MSG_CAMPAIGN_SAVED, Tone::Good);
        Ok(true)
    }

    /// Load the saved campaign, if one exists
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the payload does not parse.
    pub fn load_saved(&self) -> Result<Option<CampaignSession>, anyhow::Error> {
        let Some(payload) = self.store.read(SAVE_KEY)? else {
            return Ok(None);
        };
        let state: CampaignState = serde_json::from_str(&payload)?;
        Ok(Some(CampaignSession::from_state(state.rehydrate())))
    }

    /// Resume the saved campaign, or start fresh on `seed` when the save is
    /// missing or unreadable
    #[must_use]
    pub fn resume_or_start(&self, seed: u64) -> CampaignSession {
        self.load_saved()
            .ok()
            .flatten()
            .unwrap_or_else(|| self.start(seed))
    }

    /// Delete the saved campaign
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be updated.
    pub fn clear_save(&self) -> Result<(), S::Error> {
        self.store.delete(SAVE_KEY)
    }
}
