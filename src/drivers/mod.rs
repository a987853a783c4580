// Chip-level drivers, board-independent.
//
// Pin assignments live in board/; these only adapt esp-hal types to the
// traits tucoplex-core is written against.

pub mod flex_line;

pub use flex_line::FlexLine;
