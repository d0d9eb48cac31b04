use anchor_lang::prelude::*;
use crate::{
    state::game::*,
    events::Error,
    utils::emit_move_event,
};


pub fn game_owner_move_handler(ctx: Context<GameOwnerMove>, cells: u16) -> Result<()> {
    let game = &mut ctx.accounts.game;
    let player = &ctx.accounts.player;

    match game.owner_move(player.key(), cells)? {
        MoveOutcome::NotOwner => emit!(Error {
            msg: "You are not the owner".to_string(),
        }),
        MoveOutcome::Accepted => emit_move_event(game, player.key()),
    }

    Ok(())
}


#[derive(Accounts)]
pub struct GameOwnerMove<'info> {
    #[account(
        mut,
        seeds = [b"game", game.get_owner().as_ref(), &game.get_nonce().to_be_bytes()],
        bump = game.get_bump(),
    )]
    pub game: Account<'info, Game>,

    pub player: Signer<'info>,
}
