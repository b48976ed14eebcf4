//! The fourteen-slot Kalah board.

use crate::error::InvalidArgument;
use crate::side::Side;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Total number of slots: twelve pits and two stores.
pub const PIT_COUNT: usize = 14;

/// Pits owned by each side, store excluded.
pub const PITS_PER_SIDE: usize = 6;

/// 0-based index of player one's store.
pub const PLAYER_ONE_STORE: usize = 6;

/// 0-based index of player two's store.
pub const PLAYER_TWO_STORE: usize = 13;

/// Stones dealt into each pit in the classic ruleset.
pub const CLASSIC_STONES_PER_PIT: u32 = 6;

/// Stone counts for every slot, in sowing order.
///
/// Indices 0-5 are player one's pits, 6 is player one's store,
/// 7-12 are player two's pits and 13 is player two's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [u32; PIT_COUNT],
}

impl Board {
    /// Deals `stones_per_pit` into every pit, leaving both stores empty.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `stones_per_pit` is zero.
    #[instrument]
    pub fn deal(stones_per_pit: u32) -> Result<Self, InvalidArgument> {
        if stones_per_pit == 0 {
            return Err(InvalidArgument::new(
                "Stones per pit should be greater than 0",
            ));
        }
        Ok(Self::filled(stones_per_pit))
    }

    /// The classic opening position with six stones per pit.
    pub fn classic() -> Self {
        Self::filled(CLASSIC_STONES_PER_PIT)
    }

    fn filled(stones_per_pit: u32) -> Self {
        let mut pits = [stones_per_pit; PIT_COUNT];
        pits[PLAYER_ONE_STORE] = 0;
        pits[PLAYER_TWO_STORE] = 0;
        Self { pits }
    }

    /// Builds a board from a slice of stone counts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] unless the slice has exactly fourteen entries.
    pub fn from_pits(pits: &[u32]) -> Result<Self, InvalidArgument> {
        let pits: [u32; PIT_COUNT] = pits.try_into().map_err(|_| {
            InvalidArgument::new(format!(
                "Board should have {} pits, got {}",
                PIT_COUNT,
                pits.len()
            ))
        })?;
        Ok(Self { pits })
    }

    /// Returns all slots.
    pub fn pits(&self) -> &[u32; PIT_COUNT] {
        &self.pits
    }

    /// Stone count at the 0-based `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.pits.get(index).copied()
    }

    /// Stones in `side`'s store.
    pub fn store(&self, side: Side) -> u32 {
        self.pits[side.store_index()]
    }

    /// Stones in `side`'s six pits, store excluded.
    pub fn pit_stones(&self, side: Side) -> u32 {
        self.pits[side.pit_range()].iter().sum()
    }

    /// Stones in `side`'s pits and store together.
    pub fn side_total(&self, side: Side) -> u32 {
        self.pit_stones(side) + self.store(side)
    }

    /// Stones on the whole board.
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Empties the slot at `index`, returning what it held.
    pub(crate) fn take(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.pits[index])
    }

    /// Adds `stones` to the slot at `index`.
    pub(crate) fn add(&mut self, index: usize, stones: u32) {
        self.pits[index] += stones;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

impl From<[u32; PIT_COUNT]> for Board {
    fn from(pits: [u32; PIT_COUNT]) -> Self {
        Self { pits }
    }
}

impl fmt::Display for Board {
    /// Player two's row is printed right to left above player one's,
    /// with the stores at either end.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |range: std::ops::Range<usize>, reversed: bool| {
            let mut cells: Vec<String> = self.pits[range].iter().map(|s| format!("{:>2}", s)).collect();
            if reversed {
                cells.reverse();
            }
            cells.join(" ")
        };
        writeln!(f, "    {}", row(Side::PlayerTwo.pit_range(), true))?;
        writeln!(
            f,
            "{:>2}{}{:>2}",
            self.store(Side::PlayerTwo),
            " ".repeat(PITS_PER_SIDE * 3 + 2),
            self.store(Side::PlayerOne)
        )?;
        write!(f, "    {}", row(Side::PlayerOne.pit_range(), false))
    }
}
