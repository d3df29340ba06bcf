use threatscore::{
    evaluate, evaluate_with,
    parameters::{BishopScan, Options},
    threats::InsufficientBishops,
    types::{Color, Piece, PieceType, Square},
    Board,
};

fn place(board: &mut Board, piece_type: PieceType, color: Color, x: i32, y: i32) {
    board.add_piece(Piece::new(piece_type, color, Square::from_coordinates(x, y).unwrap()));
}

#[test]
fn white_king_attacked_by_black_knight() {
    let mut board = Board::default();
    place(&mut board, PieceType::King, Color::White, 5, 1);
    place(&mut board, PieceType::Knight, Color::Black, 4, 3);

    assert_eq!(evaluate(&board), Ok((89.0, 139.0)));
}

#[test]
fn empty_position_file() {
    let board: Board = "".parse().unwrap();

    assert!(board.is_empty());
    assert_eq!(evaluate(&board), Ok((139.0, 139.0)));
}

#[test]
fn shared_board_across_threads() {
    let board = Board::new("xx xx xx xx xx xx xx xx\nxx xx xx xx xx xx xx xx\nxx xx xx as xx xx xx xx\n").unwrap();
    let expected = evaluate(&board);
    let board = &board;

    std::thread::scope(|scope| {
        let handles = (0..4).map(|_| scope.spawn(move || evaluate(board))).collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn lone_bishop_against_the_pair_check() {
    let position = "xx xx xx xx xx xx xx xx\nxx fs xx xx xx xx xx xx\nxx xx xx xx xx xx xx xx\nxx xx xx vb\n";
    let board = Board::new(position).unwrap();

    let first_pair = Options { bishop_scan: BishopScan::FirstPair };
    assert_eq!(evaluate_with(&board, &first_pair), Err(InsufficientBishops { found: 1 }));

    let all = Options { bishop_scan: BishopScan::All };
    assert_eq!(evaluate_with(&board, &all), Ok((134.5, 139.0)));
}
