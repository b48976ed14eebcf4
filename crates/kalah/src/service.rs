//! Game use cases: create a game and play a move.

use crate::error::{GameError, StorageError};
use crate::storage::GameStorage;
use kalah_core::{Game, GameId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument, warn};

/// Creates games and applies moves against a [`GameStorage`].
///
/// Moves on the same game are serialized through a per-game lock; moves on
/// different games run independently. Nothing is saved unless the whole
/// move succeeds.
#[derive(Debug)]
pub struct GameService<S> {
    storage: S,
    move_locks: Mutex<HashMap<GameId, Arc<Mutex<()>>>>,
}

impl<S: GameStorage> GameService<S> {
    /// Creates a service backed by `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            move_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the storage collaborator.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Creates and stores a fresh game with player one to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Storage`] if the game cannot be saved.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> Result<Game, GameError> {
        let game = self.storage.save(Game::new())?;
        info!(game_id = %game.id(), "Game created");
        Ok(game)
    }

    /// Plays the 1-based `slot` for whichever side is on turn in game `id`.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotFound`] if no game is stored under `id`
    /// - [`GameError::AlreadyFinished`] if the game has ended
    /// - [`GameError::InvalidMove`] if the slot fails validation
    /// - [`GameError::Storage`] if loading or saving fails
    #[instrument(skip(self, id), fields(game_id = %id))]
    pub fn make_move(&self, id: &GameId, slot: u32) -> Result<Game, GameError> {
        let lock = self.move_lock(id)?;
        let _guard = lock
            .lock()
            .map_err(|_| StorageError::new(format!("Move lock for game {} poisoned", id)))?;

        let Some(game) = self.storage.find(id)? else {
            warn!("Move on unknown game");
            self.release_move_lock(id);
            return Err(GameError::NotFound(*id));
        };

        let game = kalah_core::make_move(game, slot)?;
        let game = self.storage.save(game)?;

        if game.is_finished() {
            self.release_move_lock(id);
        }
        info!(
            slot,
            status = %game.status(),
            turn = %game.turn(),
            "Move applied"
        );
        Ok(game)
    }

    fn move_lock(&self, id: &GameId) -> Result<Arc<Mutex<()>>, StorageError> {
        let mut locks = self
            .move_locks
            .lock()
            .map_err(|_| StorageError::new("Move lock table poisoned"))?;
        Ok(Arc::clone(locks.entry(*id).or_default()))
    }

    /// Drops the lock entry of a finished or unknown game; later moves on it
    /// are rejected before touching storage.
    fn release_move_lock(&self, id: &GameId) {
        if let Ok(mut locks) = self.move_locks.lock() {
            locks.remove(id);
        }
    }
}
