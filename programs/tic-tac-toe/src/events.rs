use anchor_lang::prelude::*;

#[event]
pub struct StateChanged {
    pub owner_cells: u16,
    pub other_cells: u16,
}

#[event]
pub struct Victory {
    pub winner: Pubkey,
}

#[event]
pub struct Draw {}

#[event]
pub struct Error {
    pub msg: String,
}
