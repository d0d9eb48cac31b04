use anchor_lang::prelude::*;
use crate::{
    state::game::*,
    utils::emit_move_event,
};


pub fn game_other_move_handler(ctx: Context<GameOtherMove>, cells: u16) -> Result<()> {
    let game = &mut ctx.accounts.game;
    let player = &ctx.accounts.player;

    game.other_move(player.key(), cells)?;
    emit_move_event(game, player.key());

    Ok(())
}


#[derive(Accounts)]
pub struct GameOtherMove<'info> {
    #[account(
        mut,
        seeds = [b"game", game.get_owner().as_ref(), &game.get_nonce().to_be_bytes()],
        bump = game.get_bump(),
    )]
    pub game: Account<'info, Game>,

    pub player: Signer<'info>,
}
