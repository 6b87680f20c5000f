//! Word jumble puzzle generation.
//!
//! A jumble hides one target word in a square grid of random letters,
//! readable in a straight line north, south, east or west. [`JumblePuzzle`]
//! validates the inputs, picks a placement that geometrically fits, and
//! fills every other cell with a random filler letter.
//!
//! ```
//! use jumble_core::{JumblePuzzle, SimpleRng};
//!
//! let mut rng = SimpleRng::with_seed(42);
//! let puzzle = JumblePuzzle::with_rng("hidden", "medium", &mut rng)?;
//!
//! assert_eq!(puzzle.size(), 12);
//! println!("{puzzle}");
//! # Ok::<(), jumble_core::JumbleError>(())
//! ```

mod error;
mod generator;
mod grid;
mod rng;
mod types;

pub use error::JumbleError;
pub use generator::JumblePuzzle;
pub use grid::{Grid, Position};
pub use rng::{RandomSource, SimpleRng};
pub use types::{Difficulty, Direction, HiddenWord};
