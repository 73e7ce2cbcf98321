/// Audio collaborator.  The scene starts the soundtrack once and never
/// touches it again.

use crate::error::Result;

pub trait Soundtrack {
    /// Begin looping playback.
    fn start_loop(&mut self) -> Result<()>;
}

/// Terminal builds have no audio device; playback is skipped.
#[derive(Debug, Default)]
pub struct Muted;

impl Soundtrack for Muted {
    fn start_loop(&mut self) -> Result<()> {
        log::info!("no audio output in terminal mode, soundtrack muted");
        Ok(())
    }
}
