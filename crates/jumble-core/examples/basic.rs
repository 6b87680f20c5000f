//! Basic example of generating a word jumble.

use jumble_core::{Difficulty, JumbleError, JumblePuzzle, SimpleRng};

fn main() -> Result<(), JumbleError> {
    // Generate a puzzle from the process-wide random stream
    println!("Generating a medium puzzle hiding \"planet\"...\n");
    let puzzle = JumblePuzzle::new("planet", "medium")?;

    println!("{puzzle}");
    println!("Size: {0}x{0}", puzzle.size());
    println!(
        "Anchor: row {}, column {}",
        puzzle.anchor().row,
        puzzle.anchor().col
    );
    println!("Reads: {}", puzzle.direction());

    // Reproducible generation with an explicit seed
    let mut rng = SimpleRng::with_seed(42);
    let seeded = JumblePuzzle::with_rng("orbit", "hard", &mut rng)?;
    println!("\nSeeded {} puzzle:", seeded.difficulty());
    println!("{seeded}");

    // The cells the hidden word occupies, anchor first
    print!("\"{}\" runs through:", seeded.hidden_word());
    for pos in seeded.hidden_word_cells() {
        print!(" ({}, {})", pos.row, pos.col);
    }
    println!();

    // Difficulty levels scale the grid
    for &difficulty in Difficulty::all_levels() {
        println!("{difficulty}: multiplier {}", difficulty.multiplier());
    }

    Ok(())
}
