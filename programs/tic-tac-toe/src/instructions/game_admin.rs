use anchor_lang::prelude::*;
use crate::{
    state::game::*,
    errors::GameError,
};


pub fn game_reset_handler(ctx: Context<GameAdmin>) -> Result<()> {
    ctx.accounts.game.reset()
}

pub fn game_set_owner_cells_handler(ctx: Context<GameAdmin>, cells: u16) -> Result<()> {
    ctx.accounts.game.set_owner_cells(cells)
}

pub fn game_set_other_cells_handler(ctx: Context<GameAdmin>, cells: u16) -> Result<()> {
    ctx.accounts.game.set_other_cells(cells)
}

pub fn game_set_status_handler(ctx: Context<GameAdmin>, value: u8) -> Result<()> {
    ctx.accounts.game.set_status(value)
}


// test and recovery plumbing, never part of gameplay
#[derive(Accounts)]
pub struct GameAdmin<'info> {
    #[account(
        mut,
        seeds = [b"game", game.get_owner().as_ref(), &game.get_nonce().to_be_bytes()],
        bump = game.get_bump(),
        constraint = admin.key() == game.get_owner() @ GameError::NotAuthorized,
    )]
    pub game: Account<'info, Game>,

    pub admin: Signer<'info>,
}
