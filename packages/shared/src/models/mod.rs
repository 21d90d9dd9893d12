pub mod game;
pub mod game_match;
pub mod rating;
pub mod requests;
pub mod responses;
pub mod user;
