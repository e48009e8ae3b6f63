pub mod game;
pub mod raw;
pub mod team;

pub use game::{GameRecord, GameStatus};
pub use raw::RawGame;
pub use team::{Team, TeamId};
