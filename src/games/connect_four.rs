//! Gravity drops on an `N`-column board
//!
//! Rows `0..N-1` hold pieces, row 0 at the bottom. Row `N-1` is a virtual drop
//! row that never holds a piece: a move is the position `(column, N-1)` and
//! the piece falls to the lowest empty row of that column.

use crate::{
    board::{Board, Player},
    dynamics::{Discrete, Domain, Placement},
    error::{Error, Result},
    game::{Game, SymmetryMode, line_winner},
    position::{Arrow, Index, Position, Step},
    transform::Transform,
};

/// Directions that cover every line once: up, both diagonals, right.
const DIRECTIONS: [Arrow; 4] = [
    Arrow::new(Step::Zero, Step::Increment),
    Arrow::new(Step::Increment, Step::Increment),
    Arrow::new(Step::Increment, Step::Zero),
    Arrow::new(Step::Increment, Step::Decrement),
];

/// Connect `run` pieces horizontally, vertically or diagonally.
#[derive(Debug, Clone)]
pub struct ConnectFour<const N: usize = 7> {
    run: usize,
    mode: SymmetryMode,
    placement: Placement,
    lines: Vec<Vec<Position<N>>>,
}

impl<const N: usize> ConnectFour<N> {
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] unless `2 <= run <= N - 1`.
    pub fn new(run: usize, mode: SymmetryMode) -> Result<Self> {
        if run < 2 || run + 1 > N {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "connect run {run} does not fit a board with {} playable rows",
                    N.saturating_sub(1)
                ),
            });
        }

        let lines = Position::<N>::all()
            .flat_map(|start| DIRECTIONS.iter().map(move |&arrow| (start, arrow)))
            .map(|(start, arrow)| start.line(arrow).take(run).collect::<Vec<_>>())
            .filter(|line| line.len() == run)
            .collect();

        Ok(ConnectFour {
            run,
            mode,
            placement: Placement::new(),
            lines,
        })
    }

    pub fn run(&self) -> usize {
        self.run
    }

    pub fn mode(&self) -> SymmetryMode {
        self.mode
    }

    pub fn lines(&self) -> &[Vec<Position<N>>] {
        &self.lines
    }

    fn drop_row() -> Index<N> {
        Index::last()
    }

    /// The top playable row; a column is open while this cell is empty.
    fn top_row() -> Index<N> {
        Index::at(N - 2)
    }

    /// The drop position for `column`.
    pub fn drop_at(column: usize) -> Option<Position<N>> {
        let x = Index::new(column)?;
        Some(Position::new(x, Self::drop_row()))
    }

    /// Where a piece dropped in `column` comes to rest.
    fn landing(board: &Board<N>, column: Index<N>) -> Option<Position<N>> {
        Index::<N>::all()
            .take(N - 1)
            .map(|y| Position::new(column, y))
            .find(|&p| board.is_empty_at(p))
    }
}

impl<const N: usize> Domain for ConnectFour<N> {
    type Selector = Player;
    type State = Board<N>;
    type Event = Position<N>;

    fn permits(&self, state: &Board<N>, event: &Position<N>) -> bool {
        event.y == Self::drop_row()
            && state.is_empty_at(Position::new(event.x, Self::top_row()))
            && self.winning(state).is_none()
    }

    fn create(&self, selector: Player) -> Result<Board<N>> {
        self.placement.check_selector(selector)?;
        Ok(Board::empty(selector))
    }

    fn update(&self, state: &Board<N>, event: &Position<N>) -> Result<Board<N>> {
        if event.y != Self::drop_row() {
            return Err(Error::IllegalMove {
                position: event.to_string(),
                reason: "moves are made on the drop row".to_string(),
            });
        }
        if let Some(winner) = self.winning(state) {
            return Err(Error::IllegalMove {
                position: event.to_string(),
                reason: format!("game already won by {winner}"),
            });
        }

        let target = Self::landing(state, event.x).ok_or_else(|| Error::IllegalMove {
            position: event.to_string(),
            reason: format!("column {} is full", event.x),
        })?;
        Placement::place(state, target)
    }
}

impl<const N: usize> Discrete for ConnectFour<N> {
    fn selectors(&self) -> &[Player] {
        self.placement.selectors()
    }

    fn events(&self, state: &Board<N>) -> Vec<Position<N>> {
        if self.winning(state).is_some() {
            return Vec::new();
        }
        Index::<N>::all()
            .map(|x| Position::new(x, Self::drop_row()))
            .filter(|p| state.is_empty_at(Position::new(p.x, Self::top_row())))
            .collect()
    }
}

impl<const N: usize> Game<N> for ConnectFour<N> {
    /// Gravity breaks rotations; only the left-right mirror survives.
    fn basis(&self) -> Vec<Transform> {
        match self.mode {
            SymmetryMode::None => Vec::new(),
            SymmetryMode::Geometric => vec![Transform::MIRROR],
            SymmetryMode::Full => vec![Transform::OPPOSE, Transform::MIRROR],
        }
    }

    fn winning(&self, board: &Board<N>) -> Option<Player> {
        line_winner(board, &self.lines, self.run)
    }

    /// Nothing rests on the drop row and no piece floats above an empty cell.
    fn check_reachable(&self, board: &Board<N>) -> Result<()> {
        let unreachable = |position: Position<N>, reason: &str| Error::UnreachableBoard {
            label: board.label(),
            reason: format!("{reason} at {position}"),
        };

        for x in Index::<N>::all() {
            let drop = Position::new(x, Self::drop_row());
            if !board.is_empty_at(drop) {
                return Err(unreachable(drop, "piece on the drop row"));
            }

            let mut below_empty = false;
            for y in Index::<N>::all().take(N - 1) {
                let position = Position::new(x, y);
                let empty = board.is_empty_at(position);
                if below_empty && !empty {
                    return Err(unreachable(position, "piece above an empty cell"));
                }
                below_empty |= empty;
            }
        }
        Ok(())
    }
}
