//! Terminal boundary: prompts, move parsing, board-size limits.
//!
//! Nothing in here is needed by the engine. A [`Console`] wraps any
//! `BufRead`/`Write` pair so the same code drives stdin/stdout and tests.
//! Two human seats share one console through [`ConsoleSource`] handles.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use derive_more::{Display, Error};

use crate::board::{BoardState, Edge};
use crate::core::{MoveError, PlayerId};
use crate::players::MoveSource;

/// Largest accepted number of dot rows.
pub const MAX_ROWS: usize = 32;

/// Smallest accepted number of dot rows or columns.
pub const MIN_SIDE: usize = 2;

/// Largest accepted number of dot columns for a given row count.
#[must_use]
pub fn max_columns(rows: usize) -> usize {
    (9999 / rows.max(1)).min(16)
}

/// Input rejected at the boundary.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not a pair of integers.
    #[display("{}", _0)]
    Malformed(#[error(not(source))] String),

    /// A size outside the accepted range.
    #[display("{} must be between {} and {} (got {})", what, min, max, value)]
    OutOfRange {
        what: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// Parse `"<start point> <end point>"` into an edge.
///
/// ```
/// use dots_and_boxes::board::Edge;
/// use dots_and_boxes::console::parse_move;
///
/// assert_eq!(parse_move(" 4 1 ").unwrap(), Edge::new(1, 4));
/// assert!(parse_move("4").is_err());
/// ```
pub fn parse_move(line: &str) -> Result<Edge, InputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [a, b] = parts.as_slice() else {
        return Err(InputError::Malformed(
            "Input must be of form start point, end point".to_string(),
        ));
    };

    match (a.parse::<usize>(), b.parse::<usize>()) {
        (Ok(a), Ok(b)) => Ok(Edge::new(a, b)),
        _ => Err(InputError::Malformed("Input must be integers".to_string())),
    }
}

/// Check a requested row count.
pub fn validate_rows(rows: usize) -> Result<usize, InputError> {
    if (MIN_SIDE..=MAX_ROWS).contains(&rows) {
        Ok(rows)
    } else {
        Err(InputError::OutOfRange {
            what: "rows",
            value: rows,
            min: MIN_SIDE,
            max: MAX_ROWS,
        })
    }
}

/// Check a requested column count against the row count.
pub fn validate_columns(rows: usize, columns: usize) -> Result<usize, InputError> {
    let max = max_columns(rows);
    if (MIN_SIDE..=max).contains(&columns) {
        Ok(columns)
    } else {
        Err(InputError::OutOfRange {
            what: "columns",
            value: columns,
            min: MIN_SIDE,
            max,
        })
    }
}

/// Line-oriented prompt/response over a reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until `parse` accepts the answer. `None` at end of input.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => self.say(message)?,
            }
        }
    }

    /// Ask for the number of rows, within limits.
    pub fn ask_rows(&mut self) -> io::Result<Option<usize>> {
        let prompt = format!("How many rows should the grid have? (Do not exceed {MAX_ROWS} rows): ");
        self.ask_until(&prompt, |answer| {
            let rows = answer
                .parse::<usize>()
                .map_err(|_| "Not an integer. Please try again.".to_string())?;
            validate_rows(rows).map_err(|err| format!("{err}. Please try again."))
        })
    }

    /// Ask for the number of columns, within limits for `rows`.
    pub fn ask_columns(&mut self, rows: usize) -> io::Result<Option<usize>> {
        let prompt = format!(
            "How many columns should the grid have? (limit {}): ",
            max_columns(rows)
        );
        self.ask_until(&prompt, |answer| {
            let columns = answer
                .parse::<usize>()
                .map_err(|_| "That is not an integer value! Try again.".to_string())?;
            validate_columns(rows, columns).map_err(|err| format!("{err}. Try again."))
        })
    }

    /// Yes/no question; anything but `y`/`yes` is no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")))
    }

    /// Ask `player` for a move until the text parses as an edge.
    pub fn ask_move(&mut self, player: PlayerId) -> io::Result<Option<Edge>> {
        let prompt = format!(
            "Player {}, make your move (start point end point): ",
            player.letter()
        );
        self.ask_until(&prompt, |answer| {
            parse_move(answer).map_err(|err| format!("Error. {err}"))
        })
    }
}

/// A [`MoveSource`] handle onto a shared console.
pub struct ConsoleSource<R, W> {
    console: Rc<RefCell<Console<R, W>>>,
}

impl<R, W> ConsoleSource<R, W> {
    pub fn new(console: Rc<RefCell<Console<R, W>>>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleSource<R, W> {
    fn next_move(&mut self, _board: &BoardState, player: PlayerId) -> Option<Edge> {
        match self.console.borrow_mut().ask_move(player) {
            Ok(edge) => edge,
            Err(err) => {
                tracing::warn!(%err, "console read failed");
                None
            }
        }
    }

    fn rejected(&mut self, _player: PlayerId, error: &MoveError) {
        let message = match error {
            MoveError::InvalidEdge { .. } => "Error. That move does not exist. Try again",
            MoveError::AlreadyClaimed { .. } => "Error. That line is already drawn. Try again",
        };
        if let Err(err) = self.console.borrow_mut().say(message) {
            tracing::warn!(%err, "console write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("0 1"), Ok(Edge::new(0, 1)));
        assert_eq!(parse_move("7   2"), Ok(Edge::new(2, 7)));
        assert!(matches!(parse_move(""), Err(InputError::Malformed(_))));
        assert!(matches!(parse_move("1 2 3"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_move("a b"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_move("-1 2"), Err(InputError::Malformed(_))));
    }

    #[test]
    fn test_limits() {
        assert_eq!(max_columns(2), 16);
        assert_eq!(max_columns(32), 16);
        assert_eq!(validate_rows(32), Ok(32));
        assert!(validate_rows(33).is_err());
        assert!(validate_rows(1).is_err());
        assert_eq!(validate_columns(5, 16), Ok(16));
        assert!(validate_columns(5, 17).is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = validate_rows(40).unwrap_err();
        assert_eq!(err.to_string(), "rows must be between 2 and 32 (got 40)");
    }

    #[test]
    fn test_ask_move_reprompts_on_malformed_input() {
        let mut console = console("hello\n3\n1 0\n");

        let edge = console.ask_move(PlayerId::A).unwrap();
        assert_eq!(edge, Some(Edge::new(0, 1)));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Error. Input must be of form start point, end point"));
        assert_eq!(output.matches("Player A, make your move").count(), 3);
    }

    #[test]
    fn test_ask_move_end_of_input() {
        let mut console = console("");
        assert_eq!(console.ask_move(PlayerId::B).unwrap(), None);
    }

    #[test]
    fn test_ask_rows_and_columns() {
        let mut console = console("x\n50\n4\n20\n6\n");

        assert_eq!(console.ask_rows().unwrap(), Some(4));
        assert_eq!(console.ask_columns(4).unwrap(), Some(6));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Not an integer"));
        assert!(output.contains("rows must be between 2 and 32 (got 50)"));
        assert!(output.contains("columns must be between 2 and 16 (got 20)"));
    }

    #[test]
    fn test_confirm() {
        assert!(console("y\n").confirm("Play again? ").unwrap());
        assert!(console("YES\n").confirm("Play again? ").unwrap());
        assert!(!console("n\n").confirm("Play again? ").unwrap());
        assert!(!console("").confirm("Play again? ").unwrap());
    }

    #[test]
    fn test_console_source_reports_rejection() {
        let shared = Rc::new(RefCell::new(console("0 1\n")));
        let mut source = ConsoleSource::new(Rc::clone(&shared));
        let board = BoardState::new(2, 2);

        assert_eq!(source.next_move(&board, PlayerId::A), Some(Edge::new(0, 1)));
        source.rejected(PlayerId::A, &MoveError::AlreadyClaimed { edge: Edge::new(0, 1) });
        drop(source);

        let console = Rc::try_unwrap(shared).unwrap().into_inner();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("already drawn"));
    }
}
