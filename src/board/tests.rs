use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Black.opponent(), Stone::White);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 6);
    assert_eq!(TOTAL_CELLS, 36);
    assert_eq!(LINE_LENGTH, 5);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(), 2 * 6 + 3);

    let back = Pos::from_index(15);
    assert_eq!(back, pos);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 5).to_index(), 5);
    assert_eq!(Pos::new(5, 0).to_index(), 30);
    assert_eq!(Pos::new(5, 5).to_index(), 35);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(5, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(6, 0));
    assert!(!Pos::is_valid(0, 6));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(2, 2).offset(1, -1), Some(Pos::new(3, 1)));
    assert_eq!(Pos::new(0, 3).offset(-1, 0), None);
    assert_eq!(Pos::new(5, 5).offset(1, 1), None);
}

#[test]
fn test_pos_parse() {
    assert_eq!("2,3".parse::<Pos>(), Ok(Pos::new(2, 3)));
    assert_eq!(" 0 , 5 ".parse::<Pos>(), Ok(Pos::new(0, 5)));
    assert_eq!(Pos::new(4, 1).to_string().parse::<Pos>(), Ok(Pos::new(4, 1)));

    assert_eq!(
        "23".parse::<Pos>(),
        Err(ParsePosError::Format("23".to_string()))
    );
    assert_eq!(
        "a,1".parse::<Pos>(),
        Err(ParsePosError::Coordinate("a".to_string()))
    );
    assert_eq!(
        "6,0".parse::<Pos>(),
        Err(ParsePosError::OutOfBounds { x: 6, y: 0 })
    );
    assert!("-1,2".parse::<Pos>().is_err());
}

#[test]
fn test_outcome_scores() {
    assert_eq!(Outcome::WhiteWin.score_for(Stone::White), Some(Score::WIN));
    assert_eq!(Outcome::WhiteWin.score_for(Stone::Black), Some(Score::LOSE));
    assert_eq!(Outcome::BlackWin.score_for(Stone::Black), Some(Score::WIN));
    assert_eq!(Outcome::BlackWin.score_for(Stone::White), Some(Score::LOSE));
    assert_eq!(Outcome::Draw.score_for(Stone::White), Some(Score::DRAW));
    assert_eq!(Outcome::Undecided.score_for(Stone::Black), None);
    assert_eq!(Outcome::win(Stone::Black), Outcome::BlackWin);
}

#[test]
fn test_board_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(1, 4);

    assert!(board.is_board_empty());
    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Some(Stone::Black));
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);
    assert!(board.stones(Stone::Black).get(pos));
    assert!(!board.stones(Stone::White).get(pos));

    board.remove_stone(pos);
    assert_eq!(board.get(pos), None);
    assert!(board.is_board_empty());
}

#[test]
fn test_board_occupied_and_full() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::White);
    board.place_stone(Pos::new(3, 4), Stone::Black);

    let occupied = board.occupied();
    assert_eq!(occupied.count(), 2);
    assert!(occupied.get(Pos::new(0, 0)) && occupied.get(Pos::new(3, 4)));
    assert!(!board.is_board_full());

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if board.is_empty(pos) {
            let stone = if idx % 2 == 0 { Stone::White } else { Stone::Black };
            board.place_stone(pos, stone);
        }
    }
    assert!(board.is_board_full());
    assert!(board.occupied().is_full());
}

#[test]
fn test_board_display() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::White);
    board.place_stone(Pos::new(5, 1), Stone::Black);

    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "  0 1 2 3 4 5");
    assert_eq!(lines[1], "0 O . . . . .");
    assert_eq!(lines[2], "1 . . . . . X");
}
