//! Game persistence.

use crate::error::StorageError;
use kalah_core::{Game, GameId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, instrument};

/// Lookup and save contract for game records.
pub trait GameStorage: Send + Sync {
    /// Loads the game with `id`, or `None` if nothing is stored under it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store fails.
    fn find(&self, id: &GameId) -> Result<Option<Game>, StorageError>;

    /// Inserts or replaces the game under its own identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store fails.
    fn save(&self, game: Game) -> Result<Game, StorageError>;
}

impl<T: GameStorage + ?Sized> GameStorage for Arc<T> {
    fn find(&self, id: &GameId) -> Result<Option<Game>, StorageError> {
        (**self).find(id)
    }

    fn save(&self, game: Game) -> Result<Game, StorageError> {
        (**self).save(game)
    }
}

/// Process-local storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameStorage {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl InMemoryGameStorage {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating in-memory game storage");
        Self::default()
    }

    /// Number of stored games.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.len())
    }

    /// Whether no games are stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<GameId, Game>>, StorageError> {
        self.games
            .lock()
            .map_err(|e| StorageError::new(format!("Game map lock poisoned: {}", e)))
    }
}

impl GameStorage for InMemoryGameStorage {
    #[instrument(skip(self))]
    fn find(&self, id: &GameId) -> Result<Option<Game>, StorageError> {
        let game = self.lock()?.get(id).cloned();
        if game.is_none() {
            debug!(game_id = %id, "Game not found");
        }
        Ok(game)
    }

    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    fn save(&self, game: Game) -> Result<Game, StorageError> {
        self.lock()?.insert(*game.id(), game.clone());
        debug!("Game saved");
        Ok(game)
    }
}
