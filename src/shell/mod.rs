pub mod input;
pub mod render;
pub mod runner;
pub mod screen;
pub mod terminal;

use std::future;

use color_eyre::Result;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use tokio::{sync::mpsc, task::JoinHandle};

use self::{
    input::Action,
    runner::{Command, GameHandle, GameRunner},
    screen::{Effect, Navigator, Screen},
    terminal::Terminal,
};
use crate::snake::{config::GameConfig, models::GameState};

const ACTION_BUFFER: usize = 32;

struct RunningGame {
    handle: GameHandle,
    task:   JoinHandle<()>,
}

impl RunningGame {
    fn start(config: GameConfig) -> Result<Self> {
        let (handle, task) = GameRunner::spawn(config, StdRng::from_entropy())?;
        Ok(Self { handle, task })
    }

    async fn stop(self) -> Result<()> {
        self.handle.send(Command::Quit).await;
        self.task.await?;
        Ok(())
    }
}

async fn next_state(game: &mut Option<RunningGame>) -> Option<GameState> {
    match game {
        Some(game) => game.handle.changed().await,
        None => future::pending().await,
    }
}

fn redraw(
    terminal: &mut Terminal,
    navigator: &Navigator,
    game: Option<&RunningGame>,
) -> Result<()> {
    match (navigator.screen(), game) {
        (Screen::Game { prompt }, Some(game)) => {
            terminal.draw_game(&game.handle.snapshot(), prompt)
        }
        _ => terminal.draw_home(),
    }
}

/// Runs the terminal shell until the player quits.
///
/// # Errors
///
/// Fails on terminal I/O errors or if a game task panics.
pub async fn run(config: GameConfig) -> Result<()> {
    let mut terminal = Terminal::enter()?;
    let (action_tx, mut actions) = mpsc::channel(ACTION_BUFFER);
    let reader = input::spawn(action_tx);

    let mut navigator = Navigator::default();
    let mut game: Option<RunningGame> = None;
    terminal.draw_home()?;

    loop {
        tokio::select! {
            action = actions.recv() => {
                let Some(action) = action else { break };
                match navigator.handle(action) {
                    Some(Effect::StartGame) => {
                        game = Some(RunningGame::start(config)?);
                    }
                    Some(Effect::StopGame) => {
                        if let Some(running) = game.take() {
                            running.stop().await?;
                        }
                    }
                    Some(Effect::Send(command)) => {
                        if let Some(running) = &game {
                            running.handle.send(command).await;
                        }
                    }
                    Some(Effect::Exit) => break,
                    None => {}
                }
            }
            state = next_state(&mut game) => match state {
                Some(state) => navigator.observe(&state),
                None => {
                    game = None;
                    // the runner ended on its own; go home.
                    navigator.handle(Action::Back);
                }
            },
        }

        redraw(&mut terminal, &navigator, game.as_ref())?;
    }

    if let Some(running) = game.take() {
        running.stop().await?;
    }
    drop(actions);
    reader.await?;
    info!("bye");
    Ok(())
}
