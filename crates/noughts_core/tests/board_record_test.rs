//! The 9-symbol board record exchanged with storage.

use noughts_core::{Board, FieldState, Game, ParseBoardError};

#[test]
fn test_record_reload_matches_cell_by_cell() {
    let mut original = Board::new();
    let mut game = Game::new(&mut original);
    game.occupy_field(1, 1, FieldState::Cross).unwrap();
    game.occupy_field(0, 2, FieldState::Nought).unwrap();
    game.occupy_field(2, 0, FieldState::Cross).unwrap();

    let record = original.to_string();
    assert_eq!(record, "  O X X  ");

    let reloaded: Board = record.parse().unwrap();
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(reloaded.get(row, col), original.get(row, col));
        }
    }
}

#[test]
fn test_serde_uses_record_string() {
    let board: Board = "XO       ".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, r#""XO       ""#);

    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_serde_rejects_malformed_record() {
    assert!(serde_json::from_str::<Board>(r#""XO""#).is_err());
    assert!(serde_json::from_str::<Board>(r#""xo       ""#).is_err());
}

#[test]
fn test_parse_counts_characters_not_bytes() {
    assert_eq!(
        "XOé      ".parse::<Board>(),
        Err(ParseBoardError::UnknownSymbol {
            symbol: 'é',
            index: 2
        })
    );
}
