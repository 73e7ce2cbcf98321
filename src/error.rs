use std::fmt;
use std::io;

/// Everything that can end a session early.  Game logic itself is total;
/// only the collaborators at the edges fail.
#[derive(Debug)]
pub enum GameError {
    /// The canvas rejected a draw or flush.
    Render(io::Error),
    /// The platform event queue could not be read.
    Input(io::Error),
    /// The soundtrack could not be started.
    Audio(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Render(e) => write!(f, "render failed: {e}"),
            GameError::Input(e) => write!(f, "input failed: {e}"),
            GameError::Audio(msg) => write!(f, "could not play soundtrack: {msg}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Render(e) | GameError::Input(e) => Some(e),
            GameError::Audio(_) => None,
        }
    }
}

/// Terminal writes are the common case, so bare I/O errors are render errors.
impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Render(e)
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
