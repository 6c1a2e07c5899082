use log::info;

use super::{input::Action, runner::Command};
use crate::snake::models::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Hidden,
    /// "play again?" is on screen.
    Asking,
    /// The player said no; the finished board stays up.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Game { prompt: Prompt },
}

/// What the shell has to do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartGame,
    StopGame,
    Send(Command),
    Exit,
}

/// Home/game navigation plus the game-over prompt.
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
        }
    }
}

impl Navigator {
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    fn go(&mut self, screen: Screen) {
        info!("{:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }

    pub fn handle(&mut self, action: Action) -> Option<Effect> {
        match (self.screen, action) {
            (_, Action::Quit) => Some(Effect::Exit),

            (Screen::Home, Action::Confirm) => {
                self.go(Screen::Game {
                    prompt: Prompt::Hidden,
                });
                Some(Effect::StartGame)
            }
            (Screen::Home, Action::Back) => Some(Effect::Exit),
            (Screen::Home, _) => None,

            (Screen::Game { .. }, Action::Back) => {
                self.go(Screen::Home);
                Some(Effect::StopGame)
            }
            (Screen::Game { .. }, Action::Turn(direction)) => {
                Some(Effect::Send(Command::SetDirection(direction)))
            }
            (
                Screen::Game {
                    prompt: Prompt::Asking,
                },
                Action::Confirm,
            ) => {
                self.go(Screen::Game {
                    prompt: Prompt::Hidden,
                });
                Some(Effect::Send(Command::Restart))
            }
            (
                Screen::Game {
                    prompt: Prompt::Asking,
                },
                Action::Dismiss,
            ) => {
                self.go(Screen::Game {
                    prompt: Prompt::Dismissed,
                });
                None
            }
            (Screen::Game { .. }, Action::Confirm | Action::Dismiss) => None,
        }
    }

    /// Raises the prompt the first time a finished game is seen.
    pub fn observe(&mut self, state: &GameState) {
        if let Screen::Game { prompt } = self.screen {
            match (prompt, state.game_over) {
                (Prompt::Hidden, true) => self.go(Screen::Game {
                    prompt: Prompt::Asking,
                }),
                (Prompt::Asking | Prompt::Dismissed, false) => {
                    self.go(Screen::Game {
                        prompt: Prompt::Hidden,
                    });
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::snake::{config::GameConfig, game::reset, types::Direction};

    fn finished() -> GameState {
        let mut state = reset(&GameConfig::default(), &mut StdRng::seed_from_u64(3));
        state.game_over = true;
        state
    }

    #[test]
    fn home_to_game_and_back() {
        let mut nav = Navigator::default();
        assert_eq!(nav.handle(Action::Turn(Direction::Up)), None);
        assert_eq!(nav.handle(Action::Confirm), Some(Effect::StartGame));
        assert_eq!(
            nav.screen(),
            Screen::Game {
                prompt: Prompt::Hidden
            }
        );
        assert_eq!(
            nav.handle(Action::Turn(Direction::Up)),
            Some(Effect::Send(Command::SetDirection(Direction::Up)))
        );
        assert_eq!(nav.handle(Action::Back), Some(Effect::StopGame));
        assert_eq!(nav.screen(), Screen::Home);
        assert_eq!(nav.handle(Action::Quit), Some(Effect::Exit));
    }

    #[test]
    fn prompt_dismiss_keeps_the_finished_game() {
        let mut nav = Navigator::default();
        nav.handle(Action::Confirm);
        nav.observe(&finished());
        assert_eq!(
            nav.screen(),
            Screen::Game {
                prompt: Prompt::Asking
            }
        );

        assert_eq!(nav.handle(Action::Dismiss), None);
        nav.observe(&finished());
        assert_eq!(
            nav.screen(),
            Screen::Game {
                prompt: Prompt::Dismissed
            }
        );
        // confirming after a dismissal does nothing
        assert_eq!(nav.handle(Action::Confirm), None);
    }

    #[test]
    fn prompt_confirm_restarts() {
        let mut nav = Navigator::default();
        nav.handle(Action::Confirm);
        nav.observe(&finished());
        assert_eq!(
            nav.handle(Action::Confirm),
            Some(Effect::Send(Command::Restart))
        );

        let mut fresh = finished();
        fresh.game_over = false;
        nav.observe(&fresh);
        assert_eq!(
            nav.screen(),
            Screen::Game {
                prompt: Prompt::Hidden
            }
        );
    }
}
