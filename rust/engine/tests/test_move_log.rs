use focus_engine::engine::FocusGame;
use focus_engine::logger::{MoveAction, MoveLogger, MoveRecord};

fn played_game() -> FocusGame {
    let mut game = FocusGame::new(("Mitch", "R"), ("Hannah", "W")).unwrap();
    game.move_piece("Mitch", (0, 0), (0, 1), 1).unwrap();
    game.move_piece("Hannah", (2, 0), (2, 1), 1).unwrap();
    game
}

#[test]
fn writes_jsonl_with_lf_only() {
    let game = played_game();
    let mut logger = MoveLogger::new(Vec::new());
    for rec in game.history() {
        logger.write(rec).expect("write");
    }
    assert_eq!(logger.written(), 2);
    let bytes = logger.into_inner();
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn records_round_trip_through_json() {
    let game = played_game();
    let mut logger = MoveLogger::new(Vec::new());
    logger.write(&game.history()[0]).unwrap();
    let text = String::from_utf8(logger.into_inner()).unwrap();

    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(value["player"], "Mitch");
    assert_eq!(value["action"]["kind"], "stack");
    assert_eq!(value["action"]["from"]["col"], 0);
    assert_eq!(value["action"]["to"]["row"], 1);
    assert_eq!(value["outcome"], "successfully moved");

    let back: MoveRecord = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(back.action, game.history()[0].action);
    assert!(back.ts.is_some());
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let rec = MoveRecord {
        seq: 1,
        player: "Hannah".to_string(),
        action: MoveAction::Reserve { at: (0, 2).into() },
        reserve_gained: 0,
        captured_gained: 1,
        outcome: "Hannah Wins".to_string(),
        ts: None,
    };
    let mut logger = MoveLogger::new(Vec::new());
    logger.write(&rec).expect("write");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = MoveRecord {
        ts: Some(preset.clone()),
        ..rec
    };
    logger.write(&rec2).expect("write2");

    let content = String::from_utf8(logger.into_inner()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].contains("\"ts\":"), "ts should be injected");
    assert!(lines[0].contains("\"kind\":\"reserve\""));
    assert!(lines[1].contains(&preset), "preset ts must be kept");
}
