pub mod game;

pub use game::{
    // Identity and generation markers
    Actor, Seed, Team,
    // Board
    Tile, KEY_CARD,
    // Presence and history
    Event, EventKind, Player,
    // Payloads
    GameSnapshot, GameUpdate, Stats,
};
