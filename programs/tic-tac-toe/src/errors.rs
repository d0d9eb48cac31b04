use anchor_lang::error_code;

#[error_code]
pub enum GameError {
    NotAuthorized,
    NotPlayersTurn,
    CellOutOfBounds,
    CellAbandoned,
    NotExactlyOneCell,
    CellAlreadySet,
    GameAlreadyOver,
    InvalidGameStatus,
}
