use anchor_lang::prelude::*;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

use crate::errors::GameError;

// bit i of a mask marks cell i of the 3x3 board, so bits 0..8 cover it all
pub const FULL_BOARD: u16 = 0b111_111_111;

pub const WIN_LINES: [u16; 8] = [
    0b000_000_111, // row 0
    0b000_111_000, // row 1
    0b111_000_000, // row 2
    0b001_001_001, // column 0
    0b010_010_010, // column 1
    0b100_100_100, // column 2
    0b100_010_001, // diagonal through 0-4-8
    0b001_010_100, // diagonal through 2-4-6
];

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Turn {
    Owner,
    Other,
}

impl Default for Turn {
    fn default() -> Self {
        Turn::Owner
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, FromPrimitive, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    OwnerWon,
    OtherWon,
    Draw,
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress
    }
}

/// Outcome of an owner-move submission that did not revert.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Accepted,
    /// Caller is not the owner; the board was left untouched.
    NotOwner,
}

#[account]
#[derive(Default)]
pub struct Game {
    bump: u8, //1;
    nonce: u32, //4;
    owner: Pubkey, //32;
    owner_cells: u16, //2;
    other_cells: u16, //2;
    turn: Turn, //1;
    status: GameStatus, //1;
}

impl Game {
    pub const SIZE: usize = 1 + 4 + 32 + 2 + 2 + 1 + 1;

    pub fn init(&mut self, bump: u8, owner: Pubkey, nonce: u32) -> Result<()> {
        self.bump = bump;
        self.nonce = nonce;
        self.owner = owner;
        self.reset()
    }

    /// Clears the board for a fresh round; owner and account seeds stay put.
    pub fn reset(&mut self) -> Result<()> {
        self.owner_cells = 0;
        self.other_cells = 0;
        self.turn = Turn::Owner;
        self.status = GameStatus::InProgress;

        Ok(())
    }

    /// Applies the owner's next board, `cells`. A caller other than the
    /// owner is reported as `NotOwner` instead of failing the call; every
    /// other violation reverts.
    pub fn owner_move(&mut self, caller: Pubkey, cells: u16) -> Result<MoveOutcome> {
        if caller != self.owner {
            return Ok(MoveOutcome::NotOwner);
        }
        require!(self.turn == Turn::Owner, GameError::NotPlayersTurn);
        let claimed = Self::claimed_cell(self.owner_cells, cells)?;
        require!((claimed & self.other_cells) == 0, GameError::CellAlreadySet);
        require!(self.status == GameStatus::InProgress, GameError::GameAlreadyOver);

        self.owner_cells = cells;
        self.turn = Turn::Other;
        self.settle(self.owner_cells, GameStatus::OwnerWon);

        Ok(MoveOutcome::Accepted)
    }

    /// Applies the other side's next board. Any signer but the owner may
    /// act as the other side; the owner must use `owner_move`.
    pub fn other_move(&mut self, caller: Pubkey, cells: u16) -> Result<()> {
        require_keys_neq!(caller, self.owner, GameError::NotAuthorized);
        require!(self.turn == Turn::Other, GameError::NotPlayersTurn);
        let claimed = Self::claimed_cell(self.other_cells, cells)?;
        require!((claimed & self.owner_cells) == 0, GameError::CellAlreadySet);
        require!(self.status == GameStatus::InProgress, GameError::GameAlreadyOver);

        self.other_cells = cells;
        self.turn = Turn::Owner;
        self.settle(self.other_cells, GameStatus::OtherWon);

        Ok(())
    }

    pub fn set_owner_cells(&mut self, cells: u16) -> Result<()> {
        self.owner_cells = cells;

        Ok(())
    }

    pub fn set_other_cells(&mut self, cells: u16) -> Result<()> {
        self.other_cells = cells;

        Ok(())
    }

    pub fn set_status(&mut self, value: u8) -> Result<()> {
        self.status = GameStatus::from_u8(value).ok_or(GameError::InvalidGameStatus)?;

        Ok(())
    }

    pub fn get_bump(&self) -> u8 {
        self.bump
    }

    pub fn get_nonce(&self) -> u32 {
        self.nonce
    }

    pub fn get_owner(&self) -> Pubkey {
        self.owner
    }

    pub fn get_owner_cells(&self) -> u16 {
        self.owner_cells
    }

    pub fn get_other_cells(&self) -> u16 {
        self.other_cells
    }

    pub fn get_turn(&self) -> Turn {
        self.turn
    }

    pub fn get_status(&self) -> GameStatus {
        self.status
    }

    // `next` must keep every cell of `prev` and claim exactly one new cell
    // on the board; returns the claimed cell's bit
    fn claimed_cell(prev: u16, next: u16) -> Result<u16> {
        require!(next <= FULL_BOARD, GameError::CellOutOfBounds);
        require!((next & prev) == prev, GameError::CellAbandoned);
        let claimed = next & !prev;
        require!(claimed.count_ones() == 1, GameError::NotExactlyOneCell);

        Ok(claimed)
    }

    fn settle(&mut self, mover_cells: u16, verdict: GameStatus) {
        if WIN_LINES.iter().any(|&line| (mover_cells & line) == line) {
            self.status = verdict;
        } else if (self.owner_cells | self.other_cells) == FULL_BOARD {
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_lines_are_triples_covering_the_board() {
        for line in WIN_LINES.iter() {
            assert_eq!(line.count_ones(), 3);
        }
        let covered = WIN_LINES.iter().fold(0, |board, &line| board | line);
        assert_eq!(covered, FULL_BOARD);
    }

    #[test]
    fn claimed_cell_returns_the_new_bit() {
        assert_eq!(
            Game::claimed_cell(0b000_000_011, 0b000_010_011).unwrap(),
            0b000_010_000
        );
        assert_eq!(Game::claimed_cell(0, 0b100_000_000).unwrap(), 0b100_000_000);
    }

    #[test]
    fn claimed_cell_rejects_bits_off_the_board() {
        assert_eq!(
            Game::claimed_cell(0, 0b1_000_000_001).unwrap_err(),
            GameError::CellOutOfBounds.into()
        );
        assert_eq!(
            Game::claimed_cell(0, 1 << 9).unwrap_err(),
            GameError::CellOutOfBounds.into()
        );
    }

    #[test]
    fn claimed_cell_rejects_dropping_a_claimed_cell() {
        assert_eq!(
            Game::claimed_cell(0b011, 0b101).unwrap_err(),
            GameError::CellAbandoned.into()
        );
    }

    #[test]
    fn claimed_cell_rejects_zero_or_multiple_new_cells() {
        assert_eq!(
            Game::claimed_cell(0b011, 0b011).unwrap_err(),
            GameError::NotExactlyOneCell.into()
        );
        assert_eq!(
            Game::claimed_cell(0b011, 0b11_011).unwrap_err(),
            GameError::NotExactlyOneCell.into()
        );
    }
}
