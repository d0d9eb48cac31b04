use anchor_lang::prelude::*;
use crate::state::game::*;


pub fn game_init_handler(ctx: Context<GameInit>, nonce: u32) -> Result<()> {
    let bump = *ctx.bumps.get("game").unwrap();
    let owner_key = ctx.accounts.owner.key();
    ctx.accounts.game.init(bump, owner_key, nonce)
}


#[derive(Accounts)]
#[instruction(nonce: u32)]
pub struct GameInit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + Game::SIZE,
        seeds = [b"game", owner.key().as_ref(), &nonce.to_be_bytes()],
        bump,
    )]
    pub game: Account<'info, Game>,

    pub system_program: Program<'info, System>,
}
