//! The two sides of the board.

use crate::board::{PIT_COUNT, PITS_PER_SIDE, PLAYER_ONE_STORE, PLAYER_TWO_STORE};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A player, identified by the half of the board they own.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    /// Owns pits 0-5 and the store at index 6. Moves first.
    PlayerOne,
    /// Owns pits 7-12 and the store at index 13.
    PlayerTwo,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    /// 0-based index of this side's store.
    pub fn store_index(self) -> usize {
        match self {
            Side::PlayerOne => PLAYER_ONE_STORE,
            Side::PlayerTwo => PLAYER_TWO_STORE,
        }
    }

    /// 0-based index of the opponent's store, which sowing skips.
    pub fn opponent_store_index(self) -> usize {
        self.opponent().store_index()
    }

    /// 0-based indices of this side's six pits, store excluded.
    pub fn pit_range(self) -> Range<usize> {
        let start = match self {
            Side::PlayerOne => 0,
            Side::PlayerTwo => PLAYER_ONE_STORE + 1,
        };
        start..start + PITS_PER_SIDE
    }

    /// Whether the 1-based `slot` is on this side of the board.
    ///
    /// Slots 1-7 belong to player one and 8-14 to player two; each range
    /// includes the side's store.
    pub fn owns_slot(self, slot: u32) -> bool {
        let boundary = (PLAYER_ONE_STORE + 1) as u32;
        match self {
            Side::PlayerOne => slot <= boundary,
            Side::PlayerTwo => slot > boundary && slot <= PIT_COUNT as u32,
        }
    }

    /// Whether the 0-based `index` is on this side of the board.
    pub fn owns_index(self, index: usize) -> bool {
        self.owns_slot(index as u32 + 1)
    }
}
