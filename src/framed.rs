//! Play on canonical boards while presenting the actual one
//!
//! A [`FramedBoard`] stores the canonical representative of the position and
//! the frame transform that maps it to what the players actually see. Events
//! are given in the actual frame; updates re-canonicalize and compose frames,
//! so the stored board is always canonical.

use crate::{
    board::{Board, Player},
    canonical::Canonicalizer,
    dynamics::{Discrete, Domain},
    error::Result,
    game::Game,
    group::Group,
    position::Position,
    symmetry::Symmetry,
    transform::Transform,
};

/// A canonical board together with the frame it is viewed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramedBoard<const N: usize> {
    pub canonical: Board<N>,
    /// Maps `canonical` to the actual board
    pub frame: Transform,
}

impl<const N: usize> FramedBoard<N> {
    /// The board as the players see it.
    pub fn actual(&self) -> Board<N> {
        Symmetry::reify(self.frame).map_board(&self.canonical)
    }

    /// An actual-frame position expressed in the canonical frame.
    pub fn to_canonical(&self, position: Position<N>) -> Position<N> {
        Symmetry::reify(self.frame.inverse()).map_position(position)
    }

    /// A canonical-frame position expressed in the actual frame.
    pub fn to_actual(&self, position: Position<N>) -> Position<N> {
        Symmetry::reify(self.frame).map_position(position)
    }
}

/// A game's dynamics lifted onto framed boards.
pub struct Framed<'c, G, const N: usize> {
    game: &'c G,
    canon: &'c Canonicalizer<N>,
}

impl<'c, G: Game<N>, const N: usize> Framed<'c, G, N> {
    pub fn new(game: &'c G, canon: &'c Canonicalizer<N>) -> Self {
        Framed { game, canon }
    }

    /// Frame an arbitrary board.
    pub fn frame(&self, board: &Board<N>) -> FramedBoard<N> {
        let (canonical, frame) = self.canon.canonical(board);
        FramedBoard { canonical, frame }
    }
}

impl<G: Game<N>, const N: usize> Domain for Framed<'_, G, N> {
    type Selector = Player;
    type State = FramedBoard<N>;
    type Event = Position<N>;

    fn permits(&self, state: &FramedBoard<N>, event: &Position<N>) -> bool {
        self.game
            .permits(&state.canonical, &state.to_canonical(*event))
    }

    fn create(&self, selector: Player) -> Result<FramedBoard<N>> {
        Ok(self.frame(&self.game.create(selector)?))
    }

    fn update(&self, state: &FramedBoard<N>, event: &Position<N>) -> Result<FramedBoard<N>> {
        let next = self
            .game
            .update(&state.canonical, &state.to_canonical(*event))?;
        let (canonical, transform) = self.canon.canonical(&next);
        Ok(FramedBoard {
            canonical,
            frame: transform.compose(&state.frame),
        })
    }
}

impl<G: Game<N>, const N: usize> Discrete for Framed<'_, G, N> {
    fn selectors(&self) -> &[Player] {
        self.game.selectors()
    }

    /// One actual-frame move per canonical move class.
    fn events(&self, state: &FramedBoard<N>) -> Vec<Position<N>> {
        self.canon
            .representative_moves(self.game, &state.canonical)
            .into_iter()
            .map(|m| state.to_actual(m))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game::SymmetryMode, games::TicTacToe};

    #[test]
    fn actual_board_tracks_direct_play() {
        let game = TicTacToe::<3>::new(SymmetryMode::Full);
        let canon = Canonicalizer::for_game(&game).unwrap();
        let framed = Framed::new(&game, &canon);

        let moves = [
            Position::at(0, 0),
            Position::at(1, 1),
            Position::at(2, 1),
            Position::at(0, 2),
        ];

        let mut direct = game.create(Player::Cross).unwrap();
        let mut state = framed.create(Player::Cross).unwrap();
        for mv in moves {
            assert!(framed.permits(&state, &mv));
            direct = game.update(&direct, &mv).unwrap();
            state = framed.update(&state, &mv).unwrap();

            assert_eq!(state.actual(), direct);
            assert!(canon.is_canonical(&state.canonical));
        }
    }

    #[test]
    fn events_are_legal_in_the_actual_frame() {
        let game = TicTacToe::<3>::new(SymmetryMode::Geometric);
        let canon = Canonicalizer::for_game(&game).unwrap();
        let framed = Framed::new(&game, &canon);

        let board: Board<3> = "X../.O./..._X".parse().unwrap();
        let state = framed.frame(&board);
        let actual = state.actual();
        for mv in framed.events(&state) {
            assert!(game.permits(&actual, &mv), "{mv} is not legal");
        }
        assert!(!framed.events(&state).is_empty());
    }

    #[test]
    fn live_boards_always_offer_a_move() {
        let game = TicTacToe::<3>::new(SymmetryMode::Full);
        let canon = Canonicalizer::for_game(&game).unwrap();
        let framed = Framed::new(&game, &canon);

        // walk every opening line two plies deep
        let root = framed.create(Player::Cross).unwrap();
        for first in framed.events(&root) {
            let state = framed.update(&root, &first).unwrap();
            let offered = framed.events(&state);
            assert!(!offered.is_empty());
            assert_eq!(
                offered.len(),
                canon.canonical_moves(&game, &state.canonical).unwrap().len()
            );
            for second in offered {
                let next = framed.update(&state, &second).unwrap();
                assert_eq!(
                    framed.events(&next).is_empty(),
                    game.events(&next.actual()).is_empty()
                );
            }
        }
    }

    #[test]
    fn occupied_actual_cell_is_rejected() {
        let game = TicTacToe::<3>::new(SymmetryMode::Full);
        let canon = Canonicalizer::for_game(&game).unwrap();
        let framed = Framed::new(&game, &canon);

        let state = framed
            .update(&framed.create(Player::Cross).unwrap(), &Position::at(2, 0))
            .unwrap();
        assert!(!framed.permits(&state, &Position::at(2, 0)));
        assert!(framed.update(&state, &Position::at(2, 0)).is_err());
    }
}
