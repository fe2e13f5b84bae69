//! Rule plug-ins
//!
//! Each game supplies its win lines, its legal-move rule and the symmetry
//! generators that respect both.

pub mod connect_four;
pub mod tictactoe;

pub use connect_four::ConnectFour;
pub use tictactoe::TicTacToe;
