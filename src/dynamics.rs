//! Generic transition systems
//!
//! A [`Domain`] says which events are legal in a state, how to build an
//! initial state from a selector and how an event transforms a state. A
//! [`Discrete`] domain can also list every legal event. Rule sets build on the
//! plain [`Placement`] domain, which only knows that a piece goes on an empty
//! cell.

use crate::{
    board::{Board, Player},
    error::{Error, Result},
    position::Position,
};

/// Transition-system contract over a selector, a state and an event type.
pub trait Domain {
    type Selector;
    type State;
    type Event;

    /// Whether `event` may be applied to `state`.
    fn permits(&self, state: &Self::State, event: &Self::Event) -> bool;

    /// Initial state for the chosen starting selector.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSelector`] when `selector` is not a declared start.
    fn create(&self, selector: Self::Selector) -> Result<Self::State>;

    /// State after applying a validated event.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalMove`] when the event was not checked with
    /// [`permits`](Self::permits) first and turns out to be impossible.
    fn update(&self, state: &Self::State, event: &Self::Event) -> Result<Self::State>;
}

/// A domain whose legal events can be enumerated.
pub trait Discrete: Domain {
    /// Declared starting selectors.
    fn selectors(&self) -> &[Self::Selector];

    /// Every legal event in `state`; empty exactly when the game is over.
    fn events(&self, state: &Self::State) -> Vec<Self::Event>;
}

/// Every position the domain permits on `board`, in enumeration order.
pub fn transitions<D, const N: usize>(domain: &D, board: &Board<N>) -> Vec<Position<N>>
where
    D: Domain<State = Board<N>, Event = Position<N>> + ?Sized,
{
    Position::all()
        .filter(|position| domain.permits(board, position))
        .collect()
}

/// Place the mover's piece on an empty cell and pass the turn.
#[derive(Debug, Clone)]
pub struct Placement {
    selectors: Vec<Player>,
}

impl Placement {
    /// Either player may open.
    pub fn new() -> Self {
        Self::with_selectors(Player::ALL.to_vec())
    }

    /// Only the given players may open.
    pub fn with_selectors(selectors: Vec<Player>) -> Self {
        Placement { selectors }
    }

    /// Put the mover's piece on `target` without any rule-set check beyond
    /// occupancy.
    pub fn place<const N: usize>(board: &Board<N>, target: Position<N>) -> Result<Board<N>> {
        if !board.is_empty_at(target) {
            return Err(Error::IllegalMove {
                position: target.to_string(),
                reason: "cell is already occupied".to_string(),
            });
        }

        Ok(board
            .with_cell(target, board.turn().to_cell())
            .with_turn(board.turn().opponent()))
    }

    pub fn check_selector(&self, selector: Player) -> Result<()> {
        if self.selectors.contains(&selector) {
            Ok(())
        } else {
            Err(Error::InvalidSelector {
                selector: selector.to_string(),
            })
        }
    }

    pub fn selectors(&self) -> &[Player] {
        &self.selectors
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new()
    }
}

/// Board-level implementation for one concrete side length.
///
/// Rule sets wrap this; it is also usable on its own for free placement.
pub struct FreePlacement<const N: usize> {
    placement: Placement,
}

impl<const N: usize> FreePlacement<N> {
    pub fn new(placement: Placement) -> Self {
        FreePlacement { placement }
    }
}

impl<const N: usize> Domain for FreePlacement<N> {
    type Selector = Player;
    type State = Board<N>;
    type Event = Position<N>;

    fn permits(&self, state: &Board<N>, event: &Position<N>) -> bool {
        state.is_empty_at(*event)
    }

    fn create(&self, selector: Player) -> Result<Board<N>> {
        self.placement.check_selector(selector)?;
        Ok(Board::empty(selector))
    }

    fn update(&self, state: &Board<N>, event: &Position<N>) -> Result<Board<N>> {
        Placement::place(state, *event)
    }
}

impl<const N: usize> Discrete for FreePlacement<N> {
    fn selectors(&self) -> &[Player] {
        self.placement.selectors()
    }

    fn events(&self, state: &Board<N>) -> Vec<Position<N>> {
        transitions(self, state)
    }
}
