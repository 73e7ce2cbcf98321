use std::io::{stdout, BufWriter, Write};

use anyhow::Context;
use crossterm::{cursor, terminal, ExecutableCommand};

use flappy_term::audio::Muted;
use flappy_term::display::TerminalCanvas;
use flappy_term::input::TerminalEvents;
use flappy_term::{GameConfig, Scene, Session};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; redirect it (`2>flappy.log`) to keep the screen clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = GameConfig::from_env();
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("could not enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("could not enter alternate screen")?;
    out.execute(cursor::Hide)?;

    let result = run(&mut out, &cfg);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();

    result
}

fn run<W: Write>(out: &mut W, cfg: &GameConfig) -> anyhow::Result<()> {
    let mut canvas =
        TerminalCanvas::for_terminal(out, cfg).context("could not read terminal size")?;
    let mut scene = Scene::new(cfg);

    Session::new(cfg)
        .run(&mut scene, &mut canvas, TerminalEvents, &mut Muted)
        .context("game loop failed")
}
