//! Command-line interface for dots-and-boxes.

use clap::{Parser, ValueEnum};

use dots_and_boxes::{PlayerId, PlayerKind, SearchConfig, TurnModel};

/// Dots and Boxes in the terminal against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "dots-and-boxes")]
#[command(about = "Play Dots and Boxes in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dot rows (prompted for when omitted)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Dot columns (prompted for when omitted)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Who plays A and B: h = human, c = computer
    #[arg(long, value_enum, default_value = "hc")]
    pub mode: Mode,

    /// Seed for the coin toss and the computer's RNG (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the coin toss and let this player start
    #[arg(long, value_enum)]
    pub first: Option<First>,

    /// Leaf budget that sets the computer's search depth
    #[arg(long, default_value_t = SearchConfig::DEFAULT_NODE_BUDGET)]
    pub node_budget: u64,

    /// Let the computer's search grant extra turns for completed boxes
    #[arg(long)]
    pub extra_turns: bool,
}

impl Cli {
    /// Search settings from the flags.
    pub fn search_config(&self, seed: u64) -> SearchConfig {
        let turn_model = if self.extra_turns {
            TurnModel::ExtraTurn
        } else {
            TurnModel::Alternating
        };

        SearchConfig::default()
            .with_node_budget(self.node_budget)
            .with_turn_model(turn_model)
            .with_seed(seed)
    }
}

/// Seat assignment, player A then player B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Human A, computer B
    Hc,
    /// Computer A, human B
    Ch,
    /// Two humans
    Hh,
    /// Two computers
    Cc,
}

impl Mode {
    pub fn kinds(self) -> (PlayerKind, PlayerKind) {
        use PlayerKind::{Human, Minimax};
        match self {
            Mode::Hc => (Human, Minimax),
            Mode::Ch => (Minimax, Human),
            Mode::Hh => (Human, Human),
            Mode::Cc => (Minimax, Minimax),
        }
    }
}

/// Player chosen with `--first`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum First {
    A,
    B,
}

impl From<First> for PlayerId {
    fn from(first: First) -> Self {
        match first {
            First::A => PlayerId::A,
            First::B => PlayerId::B,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["dots-and-boxes"]);

        assert_eq!(cli.mode, Mode::Hc);
        assert_eq!(cli.node_budget, 19_000);
        assert!(cli.rows.is_none());
        assert_eq!(cli.search_config(1).turn_model, TurnModel::Alternating);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "dots-and-boxes",
            "--rows",
            "4",
            "--columns",
            "6",
            "--mode",
            "cc",
            "--first",
            "b",
            "--node-budget",
            "500",
            "--extra-turns",
        ]);

        assert_eq!((cli.rows, cli.columns), (Some(4), Some(6)));
        assert_eq!(cli.mode.kinds(), (PlayerKind::Minimax, PlayerKind::Minimax));
        assert_eq!(cli.first.map(PlayerId::from), Some(PlayerId::B));

        let search = cli.search_config(3);
        assert_eq!(search.node_budget, 500);
        assert_eq!(search.turn_model, TurnModel::ExtraTurn);
        assert_eq!(search.seed, 3);
    }
}
