//! Snapshot JSON shape used by renderers and the wasm surface

use ferris_blocks::core::{Board, GameConfig, GameSnapshot, GameState};
use ferris_blocks::types::{Action, LockEvent, PieceKind};

#[test]
fn snapshot_json_has_expected_fields() {
    let gs = GameState::new(1);
    let json = serde_json::to_string(&gs.snapshot()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    for key in [
        "width", "height", "board", "active", "ghostY", "nextQueue", "gameOver", "episodeId",
        "pieceId", "score", "level", "lines",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["board"].as_array().unwrap().len(), 200);
    assert_eq!(v["active"]["rotation"], "north");
    assert_eq!(v["active"]["cells"].as_array().unwrap().len(), 4);
}

#[test]
fn snapshot_json_after_game_over() {
    let board = Board::from_rows(&["#"]).unwrap();
    let gs = GameState::with_board(GameConfig::default().with_pieces(&[PieceKind::Dot]), board)
        .unwrap();

    let v = serde_json::to_value(gs.snapshot()).unwrap();
    assert_eq!(v["gameOver"], true);
    assert!(v["active"].is_null());
    assert!(v["ghostY"].is_null());
    assert_eq!(v["board"], serde_json::json!([8]));
    assert_eq!(v["nextQueue"][0], "dot");
}

#[test]
fn snapshot_roundtrips_through_json() {
    let mut gs = GameState::new(17);
    gs.move_left();
    gs.drop();
    gs.rotate();

    let snap = gs.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn actions_parse_from_json_names() {
    let actions: Vec<Action> =
        serde_json::from_str(r#"["moveLeft","moveRight","moveDown","rotate","drop","restart"]"#)
            .unwrap();
    assert_eq!(
        actions,
        vec![
            Action::MoveLeft,
            Action::MoveRight,
            Action::MoveDown,
            Action::Rotate,
            Action::Drop,
            Action::Restart,
        ]
    );
}

#[test]
fn lock_event_serializes() {
    let mut gs = GameState::new(2);
    gs.drop();
    let event: LockEvent = gs.take_last_event().unwrap();

    let v = serde_json::to_value(event).unwrap();
    assert_eq!(v["cellsLocked"], 4);
    assert_eq!(v["linesCleared"], 0);
}
