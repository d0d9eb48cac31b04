use anchor_lang::prelude::*;

pub mod instructions;
use instructions::*;

pub mod state;

pub mod errors;
pub mod events;
pub mod utils;


// replace with the key reported by "anchor keys list" when deploying fresh
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod tic_tac_toe {
    use super::*;

    pub fn game_init(ctx: Context<GameInit>, nonce: u32) -> Result<()> {
        instructions::game_init_handler(ctx, nonce)
    }

    pub fn game_owner_move(ctx: Context<GameOwnerMove>, cells: u16) -> Result<()> {
        instructions::game_owner_move_handler(ctx, cells)
    }

    pub fn game_other_move(ctx: Context<GameOtherMove>, cells: u16) -> Result<()> {
        instructions::game_other_move_handler(ctx, cells)
    }

    pub fn game_reset(ctx: Context<GameAdmin>) -> Result<()> {
        instructions::game_reset_handler(ctx)
    }

    pub fn game_set_owner_cells(ctx: Context<GameAdmin>, cells: u16) -> Result<()> {
        instructions::game_set_owner_cells_handler(ctx, cells)
    }

    pub fn game_set_other_cells(ctx: Context<GameAdmin>, cells: u16) -> Result<()> {
        instructions::game_set_other_cells_handler(ctx, cells)
    }

    pub fn game_set_status(ctx: Context<GameAdmin>, value: u8) -> Result<()> {
        instructions::game_set_status_handler(ctx, value)
    }
}
