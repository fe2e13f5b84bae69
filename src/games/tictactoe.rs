//! N-in-a-row on an `N x N` board (classic tic-tac-toe for `N = 3`)

use crate::{
    board::{Board, Player},
    dynamics::{Discrete, Domain, Placement},
    error::{Error, Result},
    game::{Game, SymmetryMode, line_winner},
    position::{Arrow, Index, Position, Step},
    transform::Transform,
};

const ROW: Arrow = Arrow::new(Step::Increment, Step::Zero);
const COLUMN: Arrow = Arrow::new(Step::Zero, Step::Increment);
const DIAGONAL: Arrow = Arrow::new(Step::Increment, Step::Increment);
const ANTI_DIAGONAL: Arrow = Arrow::new(Step::Decrement, Step::Increment);

/// Fill a full row, column or diagonal to win.
#[derive(Debug, Clone)]
pub struct TicTacToe<const N: usize = 3> {
    mode: SymmetryMode,
    placement: Placement,
    lines: Vec<Vec<Position<N>>>,
}

impl<const N: usize> TicTacToe<N> {
    pub fn new(mode: SymmetryMode) -> Self {
        let first = Index::<N>::first();
        let last = Index::<N>::last();

        let mut lines: Vec<Vec<Position<N>>> = vec![
            Position::new(first, first).line(DIAGONAL).collect(),
            Position::new(last, first).line(ANTI_DIAGONAL).collect(),
        ];
        for i in Index::<N>::all() {
            lines.push(Position::new(first, i).line(ROW).collect());
            lines.push(Position::new(i, first).line(COLUMN).collect());
        }

        TicTacToe {
            mode,
            placement: Placement::new(),
            lines,
        }
    }

    /// Restrict which players may open.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn mode(&self) -> SymmetryMode {
        self.mode
    }

    /// Every win line, each listing its `N` positions.
    pub fn lines(&self) -> &[Vec<Position<N>>] {
        &self.lines
    }
}

impl<const N: usize> Default for TicTacToe<N> {
    fn default() -> Self {
        Self::new(SymmetryMode::default())
    }
}

impl<const N: usize> Domain for TicTacToe<N> {
    type Selector = Player;
    type State = Board<N>;
    type Event = Position<N>;

    fn permits(&self, state: &Board<N>, event: &Position<N>) -> bool {
        state.is_empty_at(*event) && self.winning(state).is_none()
    }

    fn create(&self, selector: Player) -> Result<Board<N>> {
        self.placement.check_selector(selector)?;
        Ok(Board::empty(selector))
    }

    fn update(&self, state: &Board<N>, event: &Position<N>) -> Result<Board<N>> {
        if let Some(winner) = self.winning(state) {
            return Err(Error::IllegalMove {
                position: event.to_string(),
                reason: format!("game already won by {winner}"),
            });
        }
        Placement::place(state, *event)
    }
}

impl<const N: usize> Discrete for TicTacToe<N> {
    fn selectors(&self) -> &[Player] {
        self.placement.selectors()
    }

    fn events(&self, state: &Board<N>) -> Vec<Position<N>> {
        if self.winning(state).is_some() {
            return Vec::new();
        }
        state.empty_positions()
    }
}

impl<const N: usize> Game<N> for TicTacToe<N> {
    fn basis(&self) -> Vec<Transform> {
        match self.mode {
            SymmetryMode::None => Vec::new(),
            SymmetryMode::Geometric => vec![Transform::MIRROR, Transform::ROTATE],
            SymmetryMode::Full => vec![Transform::OPPOSE, Transform::MIRROR, Transform::ROTATE],
        }
    }

    fn winning(&self, board: &Board<N>) -> Option<Player> {
        line_winner(board, &self.lines, N)
    }
}
