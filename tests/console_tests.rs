//! Console boundary integration tests.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use dots_and_boxes::console::{parse_move, Console, ConsoleSource, InputError};
use dots_and_boxes::core::PlayerId;
use dots_and_boxes::game::{GameConfig, GameResult};
use dots_and_boxes::players::{MoveSource, PlayerKind};

#[test]
fn test_parse_errors_have_user_messages() {
    assert_eq!(
        parse_move("12").unwrap_err().to_string(),
        "Input must be of form start point, end point"
    );
    assert_eq!(parse_move("x 3").unwrap_err().to_string(), "Input must be integers");
    assert!(matches!(parse_move("3 x 4"), Err(InputError::Malformed(_))));
}

#[test]
fn test_two_humans_share_one_console() {
    // A: 0-1, B: 0-3 (bad), B: 0-2, A: 0-1 (drawn), A: 1-3, B: 2-3 closes the box.
    let input = "0 1\n0 3\n0 2\n0 1\n1 3\n2 3\n";
    let console = Rc::new(RefCell::new(Console::new(Cursor::new(input), Vec::new())));

    let config = GameConfig::default()
        .with_size(2, 2)
        .with_players(PlayerKind::Human, PlayerKind::Human)
        .with_first(Some(PlayerId::A));
    let (mut controller, _) = config.build(|_| -> Box<dyn MoveSource> {
        Box::new(ConsoleSource::new(Rc::clone(&console)))
    });

    let result = controller.run().unwrap();
    drop(controller);

    assert_eq!(result, GameResult::Winner(PlayerId::B));

    let console = Rc::try_unwrap(console).unwrap().into_inner();
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Player B, make your move"));
    assert!(output.contains("Error. That move does not exist. Try again"));
    assert!(output.contains("Error. That line is already drawn. Try again"));
}

#[test]
fn test_human_against_computer_until_input_ends() {
    let console = Rc::new(RefCell::new(Console::new(Cursor::new("0 1\n"), Vec::new())));

    let config = GameConfig::default()
        .with_size(3, 3)
        .with_first(Some(PlayerId::A));
    let (mut controller, _) = config.build(|_| -> Box<dyn MoveSource> {
        Box::new(ConsoleSource::new(Rc::clone(&console)))
    });

    let err = controller.run().unwrap_err();

    assert_eq!(err.to_string(), "Player A produced no move");
    // A's move and B's reply were both applied before input ran out.
    assert!(controller.history().len() >= 2);
    assert_eq!(controller.history()[0].player, PlayerId::A);
    assert_eq!(controller.history()[1].player, PlayerId::B);
}
