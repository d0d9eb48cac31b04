use anchor_lang::prelude::*;
use crate::{
    events::{Draw, StateChanged, Victory},
    state::{Game, GameStatus},
};

// exactly one event per accepted move: Victory and Draw replace StateChanged
pub fn emit_move_event(game: &Game, mover: Pubkey) {
    match game.get_status() {
        GameStatus::OwnerWon | GameStatus::OtherWon => emit!(Victory { winner: mover }),
        GameStatus::Draw => emit!(Draw {}),
        GameStatus::InProgress => emit!(StateChanged {
            owner_cells: game.get_owner_cells(),
            other_cells: game.get_other_cells(),
        }),
    }
}
