use thiserror::Error;


pub mod command;
pub mod log;

pub use command::{Command, PlayerId, PokemonDetails, PokemonRef, parse_command};
pub use log::parse_log;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid command format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
