pub mod game_init;
pub mod game_owner_move;
pub mod game_other_move;
pub mod game_admin;



pub use game_init::*;
pub use game_owner_move::*;
pub use game_other_move::*;
pub use game_admin::*;
