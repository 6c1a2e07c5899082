use color_eyre::Result;
use log::{debug, info};
use pocket_snake::{
    snake::{
        config::GameConfig,
        game::{advance, reset, set_direction},
    },
    strategies::{Greedy, Strategy},
};

struct PlayOptions {
    games:     u64,
    max_ticks: u64,
}

struct Outcome {
    length: usize,
    ticks:  u64,
}

fn play<S: Strategy>(
    config: &GameConfig,
    options: &PlayOptions,
    strategy: &S,
) -> Result<Outcome> {
    let mut rng = rand::thread_rng();
    let mut state = reset(config, &mut rng);
    let mut ticks = 0;

    while !state.game_over && ticks < options.max_ticks {
        let direction = strategy.get_movement(&state)?;
        state = advance(&set_direction(&state, direction), &mut rng);
        ticks += 1;
    }

    debug!("final board:\n{state}");

    Ok(Outcome {
        length: state.len(),
        ticks,
    })
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let config = GameConfig::from_env()?;
    let options = PlayOptions {
        games:     20,
        max_ticks: 10_000,
    };

    let mut best = 0;
    let mut total = 0;
    for game in 1..=options.games {
        let outcome = play(&config, &options, &Greedy)?;
        info!(
            "game {game}: length {} after {} ticks",
            outcome.length, outcome.ticks
        );
        best = best.max(outcome.length);
        total += outcome.length;
    }

    println!(
        "played {} games, best length {best}, mean length {:.1}",
        options.games,
        total as f64 / options.games as f64
    );

    Ok(())
}
