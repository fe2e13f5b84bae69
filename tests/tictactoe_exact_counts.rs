//! Exact counts for 3x3 tic-tac-toe under each symmetry mode.
//!
//! Without symmetry the canonical graph is the plain game graph, so the
//! numbers below are the classical ones: 5478 reachable positions and 255168
//! distinct games. Folding the eight geometric symmetries leaves 765 classes.

use std::collections::BTreeMap;

use symsolve::{
    Board, Domain, Explorer, GameOutcome, Outcomes, Player, Position, SymmetryMode, TicTacToe,
    solver::length_histogram,
};

fn empty() -> Board<3> {
    Board::empty(Player::Cross)
}

fn outcomes(cross: u64, draw: u64, circle: u64) -> Outcomes {
    Outcomes {
        cross,
        draw,
        circle,
    }
}

#[test]
fn unreduced_graph_matches_plain_game_tree() {
    let game = TicTacToe::<3>::new(SymmetryMode::None);
    let explorer = Explorer::new(&game).unwrap();
    let graph = explorer.graph(&empty()).unwrap();

    assert_eq!(explorer.canonicalizer().order(), 1);
    assert_eq!(graph.node_count(), 5478);
    assert_eq!(graph.edge_count(), 16167);
    assert_eq!(graph.terminal_count(), 958);

    let tally = explorer.tally(&graph);
    assert_eq!(tally, outcomes(131_184, 46_080, 77_904));
    assert_eq!(tally.total(), 255_168);
}

#[test]
fn geometric_graph_has_765_classes() {
    let game = TicTacToe::<3>::new(SymmetryMode::Geometric);
    let explorer = Explorer::new(&game).unwrap();
    let graph = explorer.graph(&empty()).unwrap();

    assert_eq!(explorer.canonicalizer().order(), 8);
    assert_eq!(graph.node_count(), 765);
    assert_eq!(graph.edge_count(), 2096);
    assert_eq!(graph.terminal_count(), 138);
    assert_eq!(explorer.tally(&graph), outcomes(13_957, 4_868, 8_005));
}

#[test]
fn colour_swap_adds_no_classes_but_keeps_real_outcomes() {
    let game = TicTacToe::<3>::new(SymmetryMode::Full);
    let explorer = Explorer::new(&game).unwrap();
    let graph = explorer.graph(&empty()).unwrap();

    assert_eq!(explorer.canonicalizer().order(), 16);
    assert_eq!(graph.node_count(), 765);
    assert_eq!(graph.edge_count(), 2096);
    assert_eq!(graph.terminal_count(), 138);
    assert_eq!(
        explorer.enumerate_outcomes(&empty()).unwrap(),
        outcomes(13_957, 4_868, 8_005)
    );
}

#[test]
fn depth_histogram_covers_every_node() {
    let game = TicTacToe::<3>::new(SymmetryMode::Geometric);
    let explorer = Explorer::new(&game).unwrap();
    let graph = explorer.graph(&empty()).unwrap();

    let depths = graph.depth_histogram();
    assert_eq!(depths.values().sum::<usize>(), graph.node_count());
    assert_eq!(depths.get(&0), Some(&1));
    assert_eq!(depths.get(&1), Some(&3));
    assert_eq!(depths.keys().max(), Some(&9));
}

#[test]
fn unreduced_struggles_are_every_game() {
    let game = TicTacToe::<3>::new(SymmetryMode::None);
    let explorer = Explorer::new(&game).unwrap();
    let struggles = explorer.enumerate_struggles(&empty()).unwrap();

    assert_eq!(struggles.len(), 255_168);
    assert_eq!(
        length_histogram(&struggles),
        BTreeMap::from([(5, 1_440), (6, 5_328), (7, 47_952), (8, 72_576), (9, 127_872)])
    );
}

#[test]
fn geometric_struggles_match_outcome_tally() {
    let game = TicTacToe::<3>::new(SymmetryMode::Geometric);
    let explorer = Explorer::new(&game).unwrap();
    let struggles = explorer.enumerate_struggles(&empty()).unwrap();

    assert_eq!(struggles.len(), 26_830);
    assert_eq!(
        length_histogram(&struggles),
        BTreeMap::from([(5, 172), (6, 579), (7, 5_115), (8, 7_426), (9, 13_538)])
    );

    let mut tally = Outcomes::default();
    for outcome in struggles.values() {
        tally.record(*outcome);
    }
    assert_eq!(tally, outcomes(13_957, 4_868, 8_005));
}

#[test]
fn full_struggles_fold_like_geometric() {
    let game = TicTacToe::<3>::new(SymmetryMode::Full);
    let explorer = Explorer::new(&game).unwrap();
    let struggles = explorer.enumerate_struggles(&empty()).unwrap();

    assert_eq!(struggles.len(), 26_830);
    let (shortest, outcome) = struggles.iter().next().unwrap();
    assert_eq!(shortest.len(), 5);
    assert_eq!(*outcome, GameOutcome::Win(Player::Cross));
}

#[test]
fn tictactoe_is_a_draw() {
    for mode in [SymmetryMode::None, SymmetryMode::Geometric, SymmetryMode::Full] {
        let game = TicTacToe::<3>::new(mode);
        let explorer = Explorer::new(&game).unwrap();
        assert_eq!(explorer.solve(&empty()).unwrap(), 0, "{mode}");
    }
}

#[test]
fn solving_visits_each_class_once() {
    let game = TicTacToe::<3>::new(SymmetryMode::None);
    let explorer = Explorer::new(&game).unwrap();
    explorer.solve(&empty()).unwrap();
    assert_eq!(explorer.solved(), 5478);

    for mode in [SymmetryMode::Geometric, SymmetryMode::Full] {
        let game = TicTacToe::<3>::new(mode);
        let explorer = Explorer::new(&game).unwrap();
        explorer.solve(&empty()).unwrap();
        assert_eq!(explorer.solved(), 765, "{mode}");
    }
}

#[test]
fn every_opening_draws() {
    let game = TicTacToe::<3>::new(SymmetryMode::Full);
    let explorer = Explorer::new(&game).unwrap();

    let scored = explorer.move_values(&empty()).unwrap();
    let openings: Vec<(Position<3>, i8)> = scored.iter().map(|m| (m.position, m.value)).collect();
    assert_eq!(
        openings,
        vec![
            ("0,0".parse().unwrap(), 0),
            ("1,0".parse().unwrap(), 0),
            ("1,1".parse().unwrap(), 0),
        ]
    );
    assert_eq!(explorer.best_moves(&empty()).unwrap().len(), 3);

    let centre = game.update(&empty(), &"1,1".parse().unwrap()).unwrap();
    assert_eq!(explorer.solve(&centre).unwrap(), 0);
}

#[test]
fn colour_swapped_root_reports_real_colours() {
    let corner = "X........_O".parse::<Board<3>>().unwrap();
    let expected = outcomes(6_198, 2_185, 3_317);

    let geometric = TicTacToe::<3>::new(SymmetryMode::Geometric);
    let explorer = Explorer::new(&geometric).unwrap();
    assert!(!explorer.graph(&corner).unwrap().root_transform().oppose());
    assert_eq!(explorer.enumerate_outcomes(&corner).unwrap(), expected);

    // the corner opening's representative is stored with colours exchanged
    let full = TicTacToe::<3>::new(SymmetryMode::Full);
    let explorer = Explorer::new(&full).unwrap();
    assert!(explorer.graph(&corner).unwrap().root_transform().oppose());
    assert_eq!(explorer.enumerate_outcomes(&corner).unwrap(), expected);

    let mut tally = Outcomes::default();
    for outcome in explorer.enumerate_struggles(&corner).unwrap().values() {
        tally.record(*outcome);
    }
    assert_eq!(tally, expected);
}
