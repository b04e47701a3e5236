//! Move application: validation, sowing, capture, turn switch, game end.
//!
//! `Board::make_move` is the only way board state changes. A move runs in
//! five steps:
//!
//! 1. **Lift** every stone from the selected pit.
//! 2. **Sow** them one per slot in increasing index order, wrapping around,
//!    skipping the opponent's house.
//! 3. **Capture** when the last stone lands in the mover's own pit that was
//!    empty: that stone and everything in the facing pit go to the mover's
//!    house.
//! 4. **Switch turns** unless the last stone landed in the mover's house.
//! 5. **End the game** once either side has no stones left in its sowing
//!    pits: each side's leftovers go to its own house and the larger house
//!    wins.
//!
//! Validation happens before any of this, so a rejected move changes
//! nothing.

use tracing::{debug, trace};

use super::outcome::{GameResult, MoveReport};
use crate::core::{Board, Player};
use crate::error::MoveError;

impl Board {
    /// Play the stones in `pit` for the player whose turn it is.
    ///
    /// ```
    /// use kalah::core::{Board, Player};
    ///
    /// let mut board = Board::new();
    /// let report = board.make_move(1)?;
    ///
    /// // Six stones from pit 1 end exactly in Player One's house.
    /// assert_eq!(report.landing_pit, 7);
    /// assert!(report.extra_turn);
    /// assert_eq!(board.pits(), &[0, 7, 7, 7, 7, 7, 1, 6, 6, 6, 6, 6, 6, 0]);
    /// assert_eq!(board.turn(), Player::One);
    /// # Ok::<(), kalah::MoveError>(())
    /// ```
    pub fn make_move(&mut self, pit: usize) -> Result<MoveReport, MoveError> {
        if let Err(err) = self.validate_move(pit) {
            debug!(pit, player = %self.turn, %err, "rejected move");
            return Err(err);
        }

        let player = self.turn;
        let sown = self.take(pit);
        let landing_pit = self.sow(pit, sown);
        let captured = self.capture(landing_pit);

        let extra_turn = landing_pit == self.layout.house(player);
        if !extra_turn {
            self.turn = player.other();
        }

        let result = self.finish_if_exhausted();

        debug!(
            pit,
            %player,
            sown,
            landing_pit,
            extra_turn,
            finished = self.finished,
            "applied move"
        );

        Ok(MoveReport {
            player,
            pit,
            sown,
            landing_pit,
            captured,
            extra_turn,
            result,
        })
    }

    /// Check whether `pit` is a legal move without applying it.
    pub fn validate_move(&self, pit: usize) -> Result<(), MoveError> {
        if self.finished {
            return Err(MoveError::GameFinished);
        }
        if !self.layout.contains(pit) {
            return Err(MoveError::PitOutOfBounds { pit });
        }
        if self.layout.is_house(pit) {
            return Err(MoveError::CantMoveHouse { pit });
        }
        match self.layout.owner(pit) {
            Some(owner) if owner != self.turn => {
                return Err(MoveError::NotYourPit { pit, owner });
            }
            _ => {}
        }
        if self.stones(pit) == 0 {
            return Err(MoveError::EmptyPit { pit });
        }
        Ok(())
    }

    /// Pits the current player may move, in index order.
    ///
    /// Empty once the game is finished.
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        let pits = if self.finished {
            // Empty range: nothing is legal on a finished board.
            1..=0
        } else {
            self.layout.sowing_pits(self.turn)
        };
        pits.filter(move |&pit| self.stones(pit) > 0)
    }

    /// How the game ended, `None` while it is still being played.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        if !self.finished {
            return None;
        }
        Some(match self.winner {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }

    /// Sow `stones` starting after `from`. Returns the last pit sown into.
    fn sow(&mut self, from: usize, mut stones: u32) -> usize {
        let skipped = self.layout.house(self.turn.other());
        let mut cursor = from;

        while stones > 0 {
            cursor = self.layout.next(cursor);
            if cursor == skipped {
                continue;
            }
            self.add(cursor, 1);
            stones -= 1;
        }

        cursor
    }

    /// Capture through `landing_pit` if the last stone filled an empty pit
    /// of the mover's. Returns the stones moved to the mover's house.
    fn capture(&mut self, landing_pit: usize) -> Option<u32> {
        let player = self.turn;
        if self.layout.owner(landing_pit) != Some(player) || self.stones(landing_pit) != 1 {
            return None;
        }

        let facing = self.layout.opposite(landing_pit);
        let captured = self.take(landing_pit) + self.take(facing);
        self.add(self.layout.house(player), captured);

        trace!(%player, landing_pit, facing, captured, "captured");
        Some(captured)
    }

    /// End the game if either side's sowing pits are all empty.
    fn finish_if_exhausted(&mut self) -> Option<GameResult> {
        if Player::all().all(|player| self.side_stones(player) > 0) {
            return None;
        }

        for player in Player::all() {
            let remaining: u32 = self
                .layout
                .sowing_pits(player)
                .map(|pit| self.take(pit))
                .sum();
            self.add(self.layout.house(player), remaining);
        }

        self.finished = true;
        self.winner = self.leader();

        let result = self.outcome();
        debug!(
            house_one = self.house(Player::One),
            house_two = self.house(Player::Two),
            ?result,
            "game finished"
        );
        result
    }
}
