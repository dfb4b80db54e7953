//! Plain-text interactive mode
//!
//! Reads commands line by line and drives a game session until the target is
//! reached or the player gives up. Input and output are injected so the loop
//! can run against a terminal or a script.

use super::CommandError;
use crate::analysis::{GameReport, GameSession};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Neighbors listed after every move
const SHOWN_NEIGHBORS: usize = 12;

/// Run the interactive loop; end of input counts as giving up
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails. Illegal
/// moves are reported to the player and the loop continues.
pub fn run_play<R: BufRead, W: Write>(
    mut session: GameSession<'_>,
    input: R,
    mut out: W,
) -> Result<GameReport, CommandError> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Word Path - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Get from {} to {} one neighbor at a time.",
        session.start().bright_yellow().bold(),
        session.target().bright_green().bold()
    )?;
    writeln!(out, "Commands: <word> to move, 'back <word>' to jump back, 'hint', 'quit'\n")?;
    show_position(&session, &mut out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let mut parts = line.split_whitespace();

        match (parts.next(), parts.next()) {
            (None, _) => {}
            (Some("quit" | "q" | "exit"), _) => break,
            (Some("hint"), _) => match session.hint() {
                Some(next) => writeln!(out, "💡 Try {}", next.bright_cyan())?,
                None => writeln!(out, "💡 The target cannot be reached from here")?,
            },
            (Some("back"), Some(word)) => match session.backtrack(word) {
                Ok(()) => {
                    writeln!(out, "↩ Back to {}", word.bright_yellow())?;
                    show_position(&session, &mut out)?;
                }
                Err(e) => writeln!(out, "❌ {e}")?,
            },
            (Some("back"), None) => writeln!(out, "❌ Usage: back <word>")?,
            (Some(word), _) => match session.make_move(word) {
                Ok(choice) => {
                    let verdict = if choice.is_optimal() {
                        "optimal".green()
                    } else {
                        "off the optimal path".yellow()
                    };
                    writeln!(out, "✓ {} ({verdict})", word.bright_white().bold())?;
                    if session.is_won() {
                        writeln!(out, "\n{}", "🎉 Target reached!".bright_green().bold())?;
                        break;
                    }
                    show_position(&session, &mut out)?;
                }
                Err(e) => writeln!(out, "❌ {e}")?,
            },
        }
    }

    Ok(session.finish())
}

fn show_position<W: Write>(session: &GameSession<'_>, out: &mut W) -> Result<(), CommandError> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Move {}: at {} (target {})",
        session.moves(),
        session.current().bright_yellow().bold(),
        session.target().bright_green()
    )?;
    let neighbors = session.neighbors();
    if neighbors.is_empty() {
        writeln!(out, "  Dead end. Use 'back <word>' to jump back.")?;
    }
    for (word, similarity) in neighbors.iter().take(SHOWN_NEIGHBORS) {
        writeln!(out, "  • {word:<20} {similarity:.2}")?;
    }
    if neighbors.len() > SHOWN_NEIGHBORS {
        writeln!(out, "  … and {} more", neighbors.len() - SHOWN_NEIGHBORS)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{GameStatus, SessionOptions};
    use crate::core::WordGraph;
    use crate::core::fixtures::sample_graph;

    fn play(graph: &WordGraph, script: &str) -> (GameReport, String) {
        let session = GameSession::new(graph, "A", "D", SessionOptions::default()).unwrap();
        let mut out = Vec::new();
        let report = run_play(session, script.as_bytes(), &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn scripted_win() {
        let graph = sample_graph();
        let (report, _) = play(&graph, "B\nD\n");
        assert_eq!(report.status, GameStatus::Won);
        assert_eq!(report.player_path, vec!["A", "B", "D"]);
    }

    #[test]
    fn illegal_moves_are_reported_not_fatal() {
        let graph = sample_graph();
        let (report, output) = play(&graph, "D\nzebra\nB\nD\n");
        assert!(output.contains("not a neighbor"));
        assert!(output.contains("not in the graph"));
        assert_eq!(report.total_moves, 2);
    }

    #[test]
    fn back_and_hint() {
        let graph = sample_graph();
        let (report, output) = play(&graph, "C\nback A\nhint\nquit\n");
        assert!(output.contains("Try"));
        assert_eq!(report.status, GameStatus::GivenUp);
        assert_eq!(report.player_path, vec!["A"]);
        assert_eq!(report.backtracks_used, 1);
    }

    #[test]
    fn end_of_input_gives_up() {
        let graph = sample_graph();
        let (report, _) = play(&graph, "C\n");
        assert_eq!(report.status, GameStatus::GivenUp);
        assert_eq!(report.suggested_path, vec!["C", "D"]);
    }
}
