use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use jumble_core::{JumblePuzzle, Position};
use std::collections::HashSet;
use std::io::{self, Write};

/// Print the grid, optionally highlighting the hidden word's run.
pub fn print_grid(puzzle: &JumblePuzzle, reveal: bool) -> io::Result<()> {
    let mut stdout = io::stdout();

    let run: HashSet<Position> = if reveal {
        puzzle.hidden_word_cells().into_iter().collect()
    } else {
        HashSet::new()
    };

    for row in 0..puzzle.size() {
        for col in 0..puzzle.size() {
            let pos = Position::new(row, col);
            let letter = puzzle.grid().get(pos).unwrap_or(' ');
            if col > 0 {
                execute!(stdout, Print(' '))?;
            }
            if run.contains(&pos) {
                execute!(
                    stdout,
                    SetForegroundColor(Color::Green),
                    Print(letter),
                    ResetColor
                )?;
            } else {
                execute!(stdout, Print(letter))?;
            }
        }
        execute!(stdout, Print('\n'))?;
    }

    if reveal {
        writeln!(
            stdout,
            "\n\"{}\" starts at row {}, column {} and reads {}",
            puzzle.hidden_word(),
            puzzle.anchor().row,
            puzzle.anchor().col,
            puzzle.direction(),
        )?;
    }
    stdout.flush()
}

/// Print the puzzle as a JSON document.
pub fn print_json(puzzle: &JumblePuzzle) -> io::Result<()> {
    let json = serde_json::to_string_pretty(puzzle)?;
    println!("{json}");
    Ok(())
}
