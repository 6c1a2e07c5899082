//! The tick loop. One task owns the [`GameState`]: timer ticks and input
//! commands are both applied by it, in arrival order, and every change is
//! published to watchers.

use color_eyre::Result;
use rand::Rng;
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{self, Instant, Interval, MissedTickBehavior},
};

use crate::snake::{
    config::GameConfig,
    game::{advance, reset, set_direction},
    models::GameState,
    types::Direction,
};

const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetDirection(Direction),
    Restart,
    Quit,
}

pub struct GameRunner<R> {
    config:    GameConfig,
    rng:       R,
    state:     GameState,
    commands:  mpsc::Receiver<Command>,
    snapshots: watch::Sender<GameState>,
}

/// The shell's side of a running game.
pub struct GameHandle {
    commands:  mpsc::Sender<Command>,
    snapshots: watch::Receiver<GameState>,
}

impl GameHandle {
    pub async fn send(&self, command: Command) {
        // a closed channel means the runner is gone, so there is nothing to
        // steer any more.
        if self.commands.send(command).await.is_err() {
            log::debug!("runner already stopped, dropping {command:?}");
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.snapshots.borrow().clone()
    }

    /// Waits for the next published state. `None` once the runner has
    /// stopped.
    pub async fn changed(&mut self) -> Option<GameState> {
        self.snapshots.changed().await.ok()?;
        Some(self.snapshots.borrow_and_update().clone())
    }
}

impl<R: Rng + Send + 'static> GameRunner<R> {
    /// # Errors
    ///
    /// Fails when `config` does not describe a playable board.
    pub fn new(config: GameConfig, mut rng: R) -> Result<(Self, GameHandle)> {
        config.validate()?;
        let state = reset(&config, &mut rng);
        let (command_tx, commands) = mpsc::channel(COMMAND_BUFFER);
        let (snapshots, snapshot_rx) = watch::channel(state.clone());

        Ok((
            Self {
                config,
                rng,
                state,
                commands,
                snapshots,
            },
            GameHandle {
                commands:  command_tx,
                snapshots: snapshot_rx,
            },
        ))
    }

    /// Starts a runner on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// See [`GameRunner::new`].
    pub fn spawn(config: GameConfig, rng: R) -> Result<(GameHandle, JoinHandle<()>)> {
        let (runner, handle) = Self::new(config, rng)?;
        Ok((handle, tokio::spawn(runner.run())))
    }

    fn ticker(period: time::Duration) -> Interval {
        // the first move happens one full period after (re)start.
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    fn publish(&mut self, state: GameState) {
        if state != self.state {
            self.state = state;
            self.snapshots.send_replace(self.state.clone());
        }
    }

    pub async fn run(mut self) {
        let mut ticker = Self::ticker(self.state.speed());
        log::info!("runner started, ticking every {:?}", self.state.speed());

        loop {
            tokio::select! {
                _ = ticker.tick(), if !self.state.game_over => {
                    let next = advance(&self.state, &mut self.rng);
                    self.publish(next);
                }
                command = self.commands.recv() => match command {
                    Some(Command::SetDirection(direction)) => {
                        let next = set_direction(&self.state, direction);
                        self.publish(next);
                    }
                    Some(Command::Restart) => {
                        log::info!("restarting after length {}", self.state.len());
                        let fresh = reset(&self.config, &mut self.rng);
                        self.publish(fresh);
                        ticker = Self::ticker(self.state.speed());
                    }
                    Some(Command::Quit) | None => break,
                },
            }
        }

        log::info!("runner stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::snake::{board::Board, constants::ORIGIN, types::Coord};

    fn start(config: GameConfig) -> (GameHandle, JoinHandle<()>) {
        GameRunner::spawn(config, StdRng::seed_from_u64(42)).unwrap()
    }

    async fn wait_for<F>(handle: &mut GameHandle, pred: F) -> GameState
    where
        F: FnMut(&GameState) -> bool,
    {
        handle.snapshots.wait_for(pred).await.unwrap().clone()
    }

    #[test]
    fn unplayable_configs_are_refused() {
        let config = GameConfig {
            board: Board::square(1),
            origin: Coord::new(0, 0),
            ..GameConfig::default()
        };
        assert!(GameRunner::new(config, StdRng::seed_from_u64(1)).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_move_the_snake() {
        let (handle, _task) = start(GameConfig::default());
        assert_eq!(handle.snapshot().head(), ORIGIN);

        time::sleep(Duration::from_millis(210)).await;
        assert_eq!(handle.snapshot().head(), Coord::new(3, 2));

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(handle.snapshot().head(), Coord::new(4, 2));
    }

    #[tokio::test(start_paused = true)]
    async fn turns_apply_before_the_next_tick() {
        let (handle, _task) = start(GameConfig::default());
        handle.send(Command::SetDirection(Direction::Down)).await;
        handle.send(Command::SetDirection(Direction::Up)).await;

        time::sleep(Duration::from_millis(210)).await;
        let state = handle.snapshot();
        assert_eq!(state.direction, Direction::Down);
        assert_eq!(state.head(), Coord::new(2, 3));
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_hitting_the_wall() {
        let config = GameConfig {
            board: Board::square(4),
            ..GameConfig::default()
        };
        let (mut handle, _task) = start(config);

        let over = wait_for(&mut handle, |s| s.game_over).await;
        assert_eq!(over.head(), Coord::new(3, 2));

        // no further ticks while the game is over
        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(handle.snapshot(), over);

        handle.send(Command::Restart).await;
        let fresh = wait_for(&mut handle, |s| !s.game_over).await;
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh.head(), ORIGIN);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_stops_the_task() {
        let (mut handle, task) = start(GameConfig::default());
        handle.send(Command::Quit).await;
        task.await.unwrap();
        assert!(handle.changed().await.is_none());
    }
}
