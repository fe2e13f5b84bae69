//! Group laws for the symmetry descriptors and their board realizations.

use proptest::prelude::*;
use symsolve::{
    Board, Cell, Group, Player, Position, Symmetry, Transform, check_axioms, closure,
    mixing::{Mixing, Sign, Vector, utility},
};

fn transform() -> impl Strategy<Value = Transform> {
    (0u8..16).prop_map(|bits| Transform::unpack(bits).unwrap())
}

fn mixing() -> impl Strategy<Value = Mixing> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(s, o, a)| Mixing::new(s, o, a))
}

/// Arbitrary cell contents; not necessarily a reachable position.
fn board() -> impl Strategy<Value = Board<3>> {
    (prop::collection::vec(0u8..3, 9), any::<bool>()).prop_map(|(cells, circle)| {
        let turn = if circle { Player::Circle } else { Player::Cross };
        Position::<3>::all()
            .zip(cells)
            .fold(Board::empty(turn), |board, (p, c)| {
                let cell = match c {
                    0 => Cell::Empty,
                    1 => Cell::Cross,
                    _ => Cell::Circle,
                };
                board.with_cell(p, cell)
            })
    })
}

#[test]
fn generated_groups_have_expected_orders() {
    assert_eq!(closure::<Transform>(&[]).unwrap().len(), 1);
    assert_eq!(closure(&[Transform::MIRROR]).unwrap().len(), 2);
    assert_eq!(closure(&[Transform::ROTATE]).unwrap().len(), 4);
    assert_eq!(closure(&[Transform::MIRROR, Transform::ROTATE]).unwrap().len(), 8);
    assert_eq!(
        closure(&[Transform::OPPOSE, Transform::MIRROR, Transform::ROTATE])
            .unwrap()
            .len(),
        16
    );
    assert_eq!(closure(&Mixing::basis()).unwrap().len(), 8);
}

#[test]
fn closures_satisfy_axioms() {
    check_axioms(&[Transform::OPPOSE, Transform::MIRROR, Transform::ROTATE]).unwrap();
    check_axioms(&Mixing::basis()).unwrap();
    check_axioms(&[Sign::Minus]).unwrap();
}

#[test]
fn geometric_group_realizes_eight_distinct_symmetries() {
    let group = closure(&[Transform::MIRROR, Transform::ROTATE]).unwrap();
    let mut realized: Vec<Symmetry<3>> = Vec::new();
    for t in group {
        let s = Symmetry::<3>::reify(t);
        assert!(!realized.contains(&s), "{t} realized twice");
        realized.push(s);
    }
    assert_eq!(realized.len(), 8);
}

proptest! {
    #[test]
    fn transform_compose_is_associative(a in transform(), b in transform(), c in transform()) {
        prop_assert_eq!(a.compose(&b).compose(&c), a.compose(&b.compose(&c)));
    }

    #[test]
    fn transform_inverse_cancels(t in transform()) {
        prop_assert_eq!(t.compose(&t.inverse()), Transform::IDENTITY);
        prop_assert_eq!(t.inverse().compose(&t), Transform::IDENTITY);
    }

    #[test]
    fn reify_is_a_homomorphism(a in transform(), b in transform()) {
        let composed = Symmetry::<3>::reify(a.compose(&b));
        let chained = Symmetry::<3>::reify(a).then(&Symmetry::reify(b));
        prop_assert_eq!(composed, chained);
    }

    #[test]
    fn reify_agrees_with_generators(t in transform()) {
        prop_assert_eq!(Symmetry::<3>::reify(t), Symmetry::<3>::from_generators(t));
        prop_assert_eq!(Symmetry::<4>::reify(t), Symmetry::<4>::from_generators(t));
    }

    #[test]
    fn inverse_symmetry_undoes_board_mapping(t in transform(), b in board()) {
        let s = Symmetry::<3>::reify(t);
        prop_assert_eq!(s.inverse().map_board(&s.map_board(&b)), b);
        prop_assert_eq!(Symmetry::<3>::reify(t.inverse()), s.inverse());
    }

    #[test]
    fn mapping_preserves_piece_counts(t in transform(), b in board()) {
        let mapped = Symmetry::<3>::reify(t).map_board(&b);
        prop_assert_eq!(mapped.occupied_count(), b.occupied_count());
    }

    #[test]
    fn mixing_factor_is_a_homomorphism(a in mixing(), b in mixing()) {
        prop_assert_eq!(a.compose(&b).factor(), a.factor().compose(&b.factor()));
    }

    #[test]
    fn mixing_scales_utility(m in mixing(), index in 0usize..4) {
        let v = Vector::from_index(index).unwrap();
        prop_assert_eq!(utility(m.mix(v)), m.factor().value() * utility(v));
    }
}
