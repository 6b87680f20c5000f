mod render;

use clap::Parser;
use jumble_core::{JumblePuzzle, SimpleRng};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "jumble", version, about = "Hide a word in a grid of random letters")]
struct Args {
    /// Word to hide (3 to 10 ASCII letters)
    word: String,

    /// Puzzle difficulty: easy, medium or hard
    #[arg(short, long, default_value = "easy")]
    difficulty: String,

    /// Seed for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Highlight the hidden word in the printed grid
    #[arg(long)]
    reveal: bool,

    /// Print the puzzle as JSON instead of a grid
    #[arg(long, conflicts_with = "reveal")]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The difficulty label is passed through verbatim; matching is exact
    // and case-sensitive, so "Easy" is an error rather than "easy".
    let built = match args.seed {
        Some(seed) => {
            let mut rng = SimpleRng::with_seed(seed);
            JumblePuzzle::with_rng(&args.word, &args.difficulty, &mut rng)
        }
        None => JumblePuzzle::new(&args.word, &args.difficulty),
    };

    let puzzle = match built {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let printed = if args.json {
        render::print_json(&puzzle)
    } else {
        render::print_grid(&puzzle, args.reveal)
    };

    if let Err(e) = printed {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_and_flags() {
        let args = Args::try_parse_from(["jumble", "cat", "-d", "hard", "--seed", "7"]).unwrap();
        assert_eq!(args.word, "cat");
        assert_eq!(args.difficulty, "hard");
        assert_eq!(args.seed, Some(7));
        assert!(!args.reveal);
    }

    #[test]
    fn json_and_reveal_conflict() {
        assert!(Args::try_parse_from(["jumble", "cat", "--json", "--reveal"]).is_err());
    }
}
