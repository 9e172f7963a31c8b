mod config;
mod io;
mod parser;

pub use config::ConfigError;
pub use io::IoError;
pub use parser::ParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed equation: {0}")]
    MalformedEquation(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
