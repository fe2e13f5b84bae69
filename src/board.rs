//! Board state representation and basic operations

use std::{cmp::Ordering, fmt, hash, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::position::{Index, Position};

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    Cross,
    Circle,
}

impl Player {
    /// Both players, in packing order.
    pub const ALL: [Player; 2] = [Player::Cross, Player::Circle];

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }

    /// Zero-sum payoff sign: Cross counts -1, Circle +1.
    pub fn score(self) -> i8 {
        match self {
            Player::Cross => -1,
            Player::Circle => 1,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::Cross => Cell::Cross,
            Player::Circle => Cell::Circle,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }

    fn parse(s: &str, label: &str) -> Result<Player, crate::Error> {
        match s {
            "X" | "x" => Ok(Player::Cross),
            "O" | "o" => Ok(Player::Circle),
            _ => Err(crate::Error::InvalidPlayerString {
                player: s.to_string(),
                label: label.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Score of an optional winner; `None` (no winner) scores zero.
pub fn score(winner: Option<Player>) -> i8 {
    winner.map_or(0, Player::score)
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Cross,
    Circle,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Cross => Some(Player::Cross),
            Cell::Circle => Some(Player::Circle),
        }
    }

    /// Swap Cross and Circle; Empty stays empty.
    pub fn opposite(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Cross => Cell::Circle,
            Cell::Circle => Cell::Cross,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Per-cell line score: Cross -1, Circle +1, Empty 0.
    pub fn score(self) -> i8 {
        score(self.player())
    }

    fn code(self) -> u128 {
        match self {
            Cell::Empty => 0,
            Cell::Cross => 1,
            Cell::Circle => 2,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Cross => 'X',
            Cell::Circle => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Cross),
            'O' | 'o' | '0' => Some(Cell::Circle),
            _ => None,
        }
    }
}

/// Packed board identity: the turn bit followed by two bits per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoardKey(u128);

impl BoardKey {
    pub fn value(self) -> u128 {
        self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Immutable snapshot of a game: whose turn it is and what occupies each cell.
///
/// Boards are never mutated after construction; playing a move produces a new
/// board. Equality, ordering and hashing all go through [`Board::key`].
#[derive(Debug, Clone, Copy)]
pub struct Board<const N: usize> {
    turn: Player,
    cells: [[Cell; N]; N],
}

impl<const N: usize> Board<N> {
    /// Empty board with `turn` to move.
    pub fn empty(turn: Player) -> Self {
        Board {
            turn,
            cells: [[Cell::Empty; N]; N],
        }
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn cell(&self, position: Position<N>) -> Cell {
        self.cells[position.y.value()][position.x.value()]
    }

    pub fn is_empty_at(&self, position: Position<N>) -> bool {
        self.cell(position).is_empty()
    }

    /// Copy of this board with one cell replaced; the turn is unchanged.
    pub fn with_cell(&self, position: Position<N>, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[position.y.value()][position.x.value()] = cell;
        next
    }

    /// Copy of this board with a different player to move.
    pub fn with_turn(&self, turn: Player) -> Self {
        Board { turn, ..*self }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == N * N
    }

    pub fn empty_positions(&self) -> Vec<Position<N>> {
        Position::all().filter(|&p| self.is_empty_at(p)).collect()
    }

    /// Packed identity over the fixed position enumeration order.
    pub fn key(&self) -> BoardKey {
        const { assert!(2 * N * N < 128, "board too large for a 128-bit key") }

        let mut bits = match self.turn {
            Player::Cross => 0,
            Player::Circle => 1,
        };
        for position in Position::<N>::all() {
            bits = (bits << 2) | self.cell(position).code();
        }
        BoardKey(bits)
    }

    /// Text label `"<cells>_<turn>"`, cells row by row.
    pub fn label(&self) -> String {
        let cells: String = self.cells.iter().flatten().map(|c| c.to_char()).collect();
        format!("{cells}_{}", self.turn.to_char())
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<[[Cell; N]; N], crate::Error> {
        if chars.len() != N * N {
            return Err(crate::Error::InvalidBoardLength {
                expected: N * N,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; N]; N];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / N][i % N] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: context.to_string(),
                })?;
        }
        Ok(cells)
    }

    fn infer_turn(cells: &[[Cell; N]; N], context: &str) -> Result<Player, crate::Error> {
        let flat = cells.iter().flatten();
        let crosses = flat.clone().filter(|&&c| c == Cell::Cross).count();
        let circles = flat.filter(|&&c| c == Cell::Circle).count();

        if crosses == circles {
            Ok(Player::Cross)
        } else if crosses == circles + 1 {
            Ok(Player::Circle)
        } else {
            Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "cannot infer the player to move from X={crosses}, O={circles} in '{context}'; add a '_X' or '_O' suffix"
                ),
            })
        }
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::empty(Player::Cross)
    }
}

impl<const N: usize> PartialEq for Board<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<const N: usize> Eq for Board<N> {}

impl<const N: usize> hash::Hash for Board<N> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<const N: usize> PartialOrd for Board<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Board<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<const N: usize> FromStr for Board<N> {
    type Err = crate::Error;

    /// Parse a label such as `"X...O...._X"`.
    ///
    /// Whitespace and `/` separators are ignored. Without a `_X`/`_O` suffix the
    /// player to move is inferred from the piece counts, Cross opening.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        let (cells_part, turn_part) = match cleaned.rsplit_once('_') {
            Some((cells, turn)) if cells.chars().count() == N * N => (cells, Some(turn)),
            _ => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = cells_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let turn = match turn_part {
            Some(turn) => Player::parse(turn, s)?,
            None => Self::infer_turn(&cells, s)?,
        };

        Ok(Board { turn, cells })
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = format!("-{}", "--".repeat(N));
        writeln!(f, "Turn: {}", self.turn)?;
        writeln!(f, "{rule}")?;
        for y in Index::<N>::all() {
            write!(f, "|")?;
            for x in Index::<N>::all() {
                let cell = self.cell(Position::new(x, y));
                let mark = if cell.is_empty() { ' ' } else { cell.to_char() };
                write!(f, "{mark}|")?;
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::<3>::default();
        assert_eq!(board.turn(), Player::Cross);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_positions().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn key_packs_turn_then_cells_column_major() {
        let empty = Board::<3>::empty(Player::Cross);
        assert_eq!(empty.key().value(), 0);

        let circle_turn = Board::<3>::empty(Player::Circle);
        assert_eq!(circle_turn.key().value(), 1 << 18);

        // (0,0) is the first enumerated position and so the most significant cell
        let first = empty.with_cell(Position::at(0, 0), Cell::Cross);
        assert_eq!(first.key().value(), 1 << 16);

        // (0,1) comes second in column-major order
        let second = empty.with_cell(Position::at(0, 1), Cell::Circle);
        assert_eq!(second.key().value(), 2 << 14);
    }

    #[test]
    fn equality_and_order_follow_the_key() {
        let a = Board::<3>::empty(Player::Cross).with_cell(Position::at(2, 2), Cell::Cross);
        let b = Board::<3>::empty(Player::Cross).with_cell(Position::at(0, 0), Cell::Cross);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(a, a.with_turn(Player::Cross));
        assert_ne!(a, a.with_turn(Player::Circle));
    }

    #[test]
    fn seven_wide_boards_fit_the_key() {
        let full = Position::<7>::all().fold(Board::<7>::empty(Player::Circle), |b, p| {
            b.with_cell(p, Cell::Circle)
        });
        assert_eq!(full.key().value() >> 98, 1);
    }

    #[test]
    fn label_round_trip() {
        let board: Board<3> = "XO.\n.X.\n..O_X".parse().unwrap();
        assert_eq!(board.cell(Position::at(0, 0)), Cell::Cross);
        assert_eq!(board.cell(Position::at(1, 0)), Cell::Circle);
        assert_eq!(board.cell(Position::at(1, 1)), Cell::Cross);
        assert_eq!(board.turn(), Player::Cross);
        assert_eq!(board.label(), "XO..X...O_X");

        let parsed: Board<3> = board.label().parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn label_infers_turn_from_counts() {
        let board: Board<3> = "X........".parse().unwrap();
        assert_eq!(board.turn(), Player::Circle);

        let err = "XX.......".parse::<Board<3>>().unwrap_err();
        assert!(err.to_string().contains("cannot infer"));
    }

    #[test]
    fn label_rejects_bad_input() {
        assert!(matches!(
            "XO".parse::<Board<3>>(),
            Err(crate::Error::InvalidBoardLength { expected: 9, got: 2, .. })
        ));
        assert!(matches!(
            "XOZ......".parse::<Board<3>>(),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(matches!(
            "........._Q".parse::<Board<3>>(),
            Err(crate::Error::InvalidPlayerString { .. })
        ));
    }

    #[test]
    fn display_renders_a_grid() {
        let board: Board<3> = "XO.......".parse().unwrap();
        let text = board.to_string();
        assert!(text.starts_with("Turn: X\n-------\n|X|O| |\n"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn cell_scores_follow_player_convention() {
        assert_eq!(Cell::Cross.score(), -1);
        assert_eq!(Cell::Circle.score(), 1);
        assert_eq!(Cell::Empty.score(), 0);
        assert_eq!(score(None), 0);
        assert_eq!(Cell::Cross.opposite(), Cell::Circle);
    }
}
