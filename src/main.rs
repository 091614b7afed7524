//! Dots and Boxes - terminal game
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod cli;

use std::cell::RefCell;
use std::io::{self, Stdout, StdinLock};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dots_and_boxes::console::{validate_columns, validate_rows};
use dots_and_boxes::{
    Console, ConsoleSource, GameConfig, GameResult, MoveSource, PlayerKind, TurnError,
};

type Term = Rc<RefCell<Console<StdinLock<'static>, Stdout>>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let term: Term = Rc::new(RefCell::new(Console::new(io::stdin().lock(), io::stdout())));
    say(&term, "Welcome to Dots and Boxes!")?;

    let mut seed = cli.seed.unwrap_or_else(rand::random);
    loop {
        let Some((rows, columns)) = board_size(&cli, &term)? else {
            break;
        };

        let (a, b) = cli.mode.kinds();
        let config = GameConfig::default()
            .with_size(rows, columns)
            .with_players(a, b)
            .with_first(cli.first.map(Into::into))
            .with_seed(seed)
            .with_search(cli.search_config(seed));
        info!(seed, "starting game");

        if play(&config, &term)?.is_none() {
            break;
        }

        if !config.has_human() || !term.borrow_mut().confirm("Play again? (y/n): ")? {
            break;
        }
        seed = seed.wrapping_add(1);
    }

    say(&term, "Thank you for playing!")?;
    Ok(())
}

fn say(term: &Term, text: impl std::fmt::Display) -> Result<()> {
    term.borrow_mut().say(text).context("writing to stdout")
}

/// Rows and columns from the flags, or asked for. `None` if input ended.
fn board_size(cli: &Cli, term: &Term) -> Result<Option<(usize, usize)>> {
    let rows = match cli.rows {
        Some(rows) => validate_rows(rows)?,
        None => match term.borrow_mut().ask_rows()? {
            Some(rows) => rows,
            None => return Ok(None),
        },
    };

    let columns = match cli.columns {
        Some(columns) => validate_columns(rows, columns)?,
        None => match term.borrow_mut().ask_columns(rows)? {
            Some(columns) => columns,
            None => return Ok(None),
        },
    };

    Ok(Some((rows, columns)))
}

/// Play one game to the end. `None` if a human's input ended first.
fn play(config: &GameConfig, term: &Term) -> Result<Option<GameResult>> {
    let (mut controller, opening) =
        config.build(|_| -> Box<dyn MoveSource> { Box::new(ConsoleSource::new(Rc::clone(term))) });

    if opening.tossed {
        say(term, "Flipping a coin to decide who goes first...")?;
        say(term, format!("The coin landed on {}", opening.coin_face()))?;
    }
    say(term, format!("{} goes first", opening.first))?;
    say(term, format!("\n{}\n", controller.board()))?;

    loop {
        let Some(player) = controller.active_player() else {
            break;
        };

        match controller.step() {
            Ok(record) => {
                if let Some(stats) = controller.player(player).last_search() {
                    let mut line = format!(
                        "{player} draws {} {} (took {:.2}s",
                        record.edge.low(),
                        record.edge.high(),
                        stats.elapsed_secs()
                    );
                    if stats.nodes > 0 {
                        line += &format!(", {:.0} positions/s", stats.nodes_per_second());
                    }
                    line.push(')');
                    say(term, line)?;
                }
                if record.scored() {
                    say(term, format!("{player} completed a box and moves again"))?;
                }
                say(term, format!("\n{}\n", controller.board()))?;
            }
            Err(TurnError::Rejected(err)) => {
                if controller.player(player).kind() != PlayerKind::Human {
                    bail!("{player} proposed an unplayable move: {err}");
                }
            }
            Err(TurnError::NoMove { player }) => {
                debug!(%player, "input closed");
                return Ok(None);
            }
            Err(TurnError::GameOver) => break,
        }
    }

    let result = controller
        .result()
        .context("game loop ended before every box was owned")?;
    info!(%result, moves = controller.history().len(), "game over");
    say(term, &result)?;
    Ok(Some(result))
}
