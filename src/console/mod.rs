//! Console front end: rendering, keyboard input and the round loop.

mod orchestrator;
mod players;
mod render;
mod view;

pub use orchestrator::{GameEvent, GameObserver, Orchestrator};
pub use players::{HumanPlayer, InputError, MinimaxPlayer, Opponent, parse_move};
pub use render::{BoardRenderer, Palette, TextRenderer};
pub use view::ConsoleView;

use crate::config::Settings;
use crate::games::tictactoe::{Mark, Outcome};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::instrument;

/// Plays one round: human on `input`, prompts to `prompts`, board to `display`.
#[instrument(skip_all, fields(color = settings.color(), show_guide = settings.show_guide()))]
pub fn play<R, P, D>(settings: &Settings, input: R, prompts: P, display: D) -> Result<Outcome>
where
    R: BufRead,
    P: Write,
    D: Write,
{
    let palette = Palette::new(settings.color());
    let mut view = ConsoleView::new(display, TextRenderer::new(palette), palette);
    view.welcome(settings.show_guide())?;

    let human = HumanPlayer::new("You", input, prompts, palette);
    let ai = MinimaxPlayer::new("AI", Mark::Ai);
    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(ai));
    orchestrator.run(&mut view)
}
