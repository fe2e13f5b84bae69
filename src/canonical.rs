//! Folding symmetric boards and moves into canonical classes
//!
//! A [`Canonicalizer`] closes a symmetry basis once, realizes every element,
//! and then answers two questions:
//!
//! - which board represents the orbit of a given board ([`Canonicalizer::canonical`])
//! - which move represents the moves that lead into the same class
//!   ([`Canonicalizer::canonical_move`])
//!
//! The representative is the orbit member with the smallest packed key. The
//! transform returned alongside it maps the representative back to the input.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet, HashMap},
};

use tracing::debug;

use crate::{
    board::{Board, BoardKey},
    error::{DomainError, Error, Result},
    game::Game,
    group::{DEFAULT_CLOSURE_LIMIT, Group, closure_with_limit},
    position::Position,
    symmetry::Symmetry,
    transform::Transform,
};

/// Realized symmetry group plus a per-board class cache.
///
/// The cache is only valid for the basis the canonicalizer was built from;
/// build a new one when the basis changes.
pub struct Canonicalizer<const N: usize> {
    /// Sorted by transform packing, so the identity comes first
    symmetries: Vec<(Transform, Symmetry<N>)>,
    classes: RefCell<HashMap<BoardKey, (Board<N>, Transform)>>,
}

impl<const N: usize> Canonicalizer<N> {
    pub fn new(basis: &[Transform]) -> Result<Self> {
        Self::with_limit(basis, DEFAULT_CLOSURE_LIMIT)
    }

    /// # Errors
    ///
    /// [`DomainError::UnboundedClosure`] when the basis closes to more than
    /// `limit` elements.
    pub fn with_limit(basis: &[Transform], limit: usize) -> Result<Self> {
        let mut transforms: Vec<Transform> =
            closure_with_limit(basis, limit)?.into_iter().collect();
        transforms.sort();

        let symmetries = transforms
            .into_iter()
            .map(|t| (t, Symmetry::reify(t)))
            .collect::<Vec<_>>();
        debug!(order = symmetries.len(), "realized symmetry group");

        Ok(Canonicalizer {
            symmetries,
            classes: RefCell::new(HashMap::new()),
        })
    }

    /// Canonicalizer for a game's own basis.
    pub fn for_game<G: Game<N>>(game: &G) -> Result<Self> {
        Self::new(&game.basis())
    }

    /// Number of elements in the realized group.
    pub fn order(&self) -> usize {
        self.symmetries.len()
    }

    pub fn transforms(&self) -> impl Iterator<Item = Transform> + '_ {
        self.symmetries.iter().map(|(t, _)| *t)
    }

    pub fn symmetries(&self) -> &[(Transform, Symmetry<N>)] {
        &self.symmetries
    }

    /// Boards classified so far.
    pub fn cached(&self) -> usize {
        self.classes.borrow().len()
    }

    /// The orbit of `board`, keyed by image and valued by the transform that
    /// maps the image back to `board`.
    ///
    /// When several symmetries produce the same image, the one with the
    /// smallest packing is kept.
    pub fn class(&self, board: &Board<N>) -> BTreeMap<Board<N>, Transform> {
        let mut orbit = BTreeMap::new();
        for (transform, symmetry) in &self.symmetries {
            orbit
                .entry(symmetry.map_board(board))
                .or_insert_with(|| transform.inverse());
        }
        orbit
    }

    /// The representative of `board`'s orbit and the transform mapping it
    /// back: `Symmetry::reify(t).map_board(&rep) == *board`.
    pub fn canonical(&self, board: &Board<N>) -> (Board<N>, Transform) {
        let key = board.key();
        if let Some(hit) = self.classes.borrow().get(&key) {
            return *hit;
        }

        // the identity is first, so ties keep the earliest symmetry
        let mut best = (*board, Transform::IDENTITY);
        for (transform, symmetry) in self.symmetries.iter().skip(1) {
            let image = symmetry.map_board(board);
            if image < best.0 {
                best = (image, transform.inverse());
            }
        }

        self.classes.borrow_mut().insert(key, best);
        best
    }

    pub fn is_canonical(&self, board: &Board<N>) -> bool {
        self.canonical(board).0 == *board
    }

    /// Moves symmetric to `mv` that lead into the same class as `mv` itself.
    ///
    /// A symmetric image qualifies only when it is legal on `board` and its
    /// successor canonicalizes to the successor of `mv`. Values map each
    /// image back to `mv`.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalMove`] when `mv` is not legal on `board`.
    pub fn class_of_move<G: Game<N>>(
        &self,
        game: &G,
        board: &Board<N>,
        mv: Position<N>,
    ) -> Result<BTreeMap<Position<N>, Transform>> {
        if !game.permits(board, &mv) {
            return Err(Error::IllegalMove {
                position: mv.to_string(),
                reason: "not a legal move on this board".to_string(),
            });
        }

        let target = self.canonical(&game.update(board, &mv)?).0;
        let legal: BTreeSet<Position<N>> = game.events(board).into_iter().collect();

        let mut moves = BTreeMap::new();
        for (transform, symmetry) in &self.symmetries {
            let image = symmetry.map_position(mv);
            if moves.contains_key(&image) || !legal.contains(&image) {
                continue;
            }
            if self.canonical(&game.update(board, &image)?).0 == target {
                moves.insert(image, transform.inverse());
            }
        }
        Ok(moves)
    }

    /// The smallest move in `mv`'s class, with the transform mapping it back.
    pub fn canonical_move<G: Game<N>>(
        &self,
        game: &G,
        board: &Board<N>,
        mv: Position<N>,
    ) -> Result<(Position<N>, Transform)> {
        self.class_of_move(game, board, mv)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                DomainError::EmptyClass {
                    position: mv.to_string(),
                }
                .into()
            })
    }

    /// The smallest member of each move class among the moves `game` lists.
    ///
    /// Every legal move counts as its own image under the identity, so the
    /// result is empty exactly when `game.events(board)` is. An image whose
    /// successor cannot be built is left out of the class.
    pub fn representative_moves<G: Game<N>>(
        &self,
        game: &G,
        board: &Board<N>,
    ) -> Vec<Position<N>> {
        let legal = game.events(board);
        let targets: BTreeMap<Position<N>, Board<N>> = legal
            .iter()
            .filter_map(|mv| {
                let child = game.update(board, mv).ok()?;
                Some((*mv, self.canonical(&child).0))
            })
            .collect();

        let mut moves = BTreeSet::new();
        for &mv in &legal {
            let target = targets.get(&mv);
            let representative = self
                .symmetries
                .iter()
                .map(|(_, symmetry)| symmetry.map_position(mv))
                .filter(|image| target.is_some() && targets.get(image) == target)
                .fold(mv, Ord::min);
            moves.insert(representative);
        }
        moves.into_iter().collect()
    }

    /// One representative per move class on `board`, ascending.
    pub fn canonical_moves<G: Game<N>>(
        &self,
        game: &G,
        board: &Board<N>,
    ) -> Result<Vec<Position<N>>> {
        let mut moves = BTreeSet::new();
        for mv in game.events(board) {
            moves.insert(self.canonical_move(game, board, mv)?.0);
        }
        Ok(moves.into_iter().collect())
    }
}
