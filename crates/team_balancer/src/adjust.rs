//! Manual edits after balancing: moving players between the two sides

use crate::balance::{Side, Teams};
use crate::error::{BalanceError, Result};
use crate::types::Player;

impl<P> Teams<P> {
    /// Move the player at `index` on `from` to the end of the other side.
    pub fn move_player(&mut self, index: usize, from: Side) -> Result<()> {
        let source = self.team_mut(from);
        if index >= source.len() {
            return Err(BalanceError::NoSuchPlayer(format!(
                "index {} on team {:?}",
                index, from
            )));
        }
        let player = source.remove(index);
        self.team_mut(from.other()).push(player);
        Ok(())
    }

    /// Swap one player from each side, keeping both teams' sizes.
    pub fn swap_players(&mut self, index_a: usize, index_b: usize) -> Result<()> {
        if index_a >= self.team_a.len() {
            return Err(BalanceError::NoSuchPlayer(format!("index {} on team A", index_a)));
        }
        if index_b >= self.team_b.len() {
            return Err(BalanceError::NoSuchPlayer(format!("index {} on team B", index_b)));
        }
        std::mem::swap(&mut self.team_a[index_a], &mut self.team_b[index_b]);
        Ok(())
    }
}

impl Teams<Player> {
    /// Side and index of the player with this id (or name, for id-less players)
    pub fn find(&self, key: &str) -> Option<(Side, usize)> {
        [Side::A, Side::B].into_iter().find_map(|side| {
            self.team(side)
                .iter()
                .position(|p| p.key() == key)
                .map(|index| (side, index))
        })
    }

    /// Move a player, looked up by id or name, onto `to`.
    ///
    /// Moving a player onto the side they already play for does nothing.
    pub fn move_by_id(&mut self, key: &str, to: Side) -> Result<()> {
        match self.find(key) {
            Some((side, _)) if side == to => Ok(()),
            Some((side, index)) => self.move_player(index, side),
            None => Err(BalanceError::NoSuchPlayer(key.to_string())),
        }
    }
}
