//! Connect-three on a 4-column board: three playable rows and a drop row.

use symsolve::{
    Board, Canonicalizer, ConnectFour, Discrete, Domain, Explorer, Game, Outcomes, Player,
    Position, SymmetryMode,
};

fn game(mode: SymmetryMode) -> ConnectFour<4> {
    ConnectFour::new(3, mode).unwrap()
}

fn empty() -> Board<4> {
    Board::empty(Player::Cross)
}

#[test]
fn symmetry_groups_are_mirror_and_colour_swap() {
    let none = game(SymmetryMode::None);
    let geometric = game(SymmetryMode::Geometric);
    let full = game(SymmetryMode::Full);
    assert_eq!(Canonicalizer::for_game(&none).unwrap().order(), 1);
    assert_eq!(Canonicalizer::for_game(&geometric).unwrap().order(), 2);
    assert_eq!(Canonicalizer::for_game(&full).unwrap().order(), 4);
}

#[test]
fn first_player_wins_connect_three() {
    for mode in [SymmetryMode::Geometric, SymmetryMode::Full] {
        let game = game(mode);
        let explorer = Explorer::new(&game).unwrap();
        assert_eq!(explorer.solve(&empty()).unwrap(), 1, "{mode}");
    }
}

#[test]
fn canonical_graph_counts() {
    for mode in [SymmetryMode::Geometric, SymmetryMode::Full] {
        let game = game(mode);
        let explorer = Explorer::new(&game).unwrap();
        let graph = explorer.graph(&empty()).unwrap();

        assert_eq!(graph.node_count(), 3587, "{mode}");
        assert_eq!(graph.edge_count(), 5909, "{mode}");
        assert_eq!(
            explorer.tally(&graph),
            Outcomes {
                cross: 32_944,
                draw: 7_575,
                circle: 23_348,
            },
            "{mode}"
        );
    }
}

#[test]
fn opening_moves_fold_across_the_mirror() {
    let game = game(SymmetryMode::Geometric);
    let canon = Canonicalizer::for_game(&game).unwrap();
    let openings = canon.canonical_moves(&game, &empty()).unwrap();
    let columns: Vec<usize> = openings.iter().map(|p| p.x.value()).collect();
    assert_eq!(columns, vec![0, 1]);
    assert!(openings.iter().all(|p| p.y.value() == 3));
}

#[test]
fn winning_move_is_preferred() {
    let game = game(SymmetryMode::Full);
    let explorer = Explorer::new(&game).unwrap();

    let mut board = empty();
    for column in [0, 1, 0, 1] {
        board = game
            .update(&board, &ConnectFour::<4>::drop_at(column).unwrap())
            .unwrap();
    }
    assert_eq!(board.turn(), Player::Cross);
    assert_eq!(explorer.solve(&board).unwrap(), 1);

    let stack = ConnectFour::<4>::drop_at(0).unwrap();
    let won = game.update(&board, &stack).unwrap();
    assert_eq!(game.winning(&won), Some(Player::Cross));
    assert!(game.events(&won).is_empty());
    assert_eq!(explorer.solve(&won).unwrap(), -1);
}

#[test]
fn moves_are_drop_row_positions() {
    let game = game(SymmetryMode::None);
    let moves = game.events(&empty());
    let expected: Vec<Position<4>> = (0..4)
        .map(|x| Position::from_coordinates(x, 3).unwrap())
        .collect();
    assert_eq!(moves, expected);
}
