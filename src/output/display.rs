//! Display functions for command results

use super::formatters::{format_path, format_similarity, percentage_bar};
use crate::analysis::{GameReport, SolveOutcome};
use crate::commands::{GeneratedPair, PairStatistics, PathResult, SolveStatistics};
use colored::Colorize;

/// Print the result of a path query
pub fn print_path_result(result: &PathResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Path: {} → {} ({} cost)",
        result.start.bright_yellow().bold(),
        result.target.bright_green().bold(),
        result.cost_model
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", format_path(&result.path));
    println!("\n   Moves:               {}", result.hops);
    println!("   Semantic distance:   {:.3}", result.semantic_distance);
    println!(
        "   Average similarity:  {}",
        format_similarity(result.average_similarity)
    );
}

/// Print an end-of-game report
pub fn print_report(report: &GameReport) {
    println!("\n{}", "═".repeat(60).cyan());
    let headline = if report.is_won() {
        format!("🎉 Reached {}", report.target).bright_green().bold()
    } else {
        format!("🏳 Gave up on {}", report.target).yellow().bold()
    };
    println!(" {headline} ");
    println!("{}", "═".repeat(60).cyan());

    println!("\n🧭 {}", "Paths:".bright_cyan().bold());
    println!("   Yours:      {}", format_path(&report.player_path));
    println!("   Optimal:    {}", format_path(&report.optimal_path));
    println!("   Semantic:   {}", format_path(&report.semantic_path));
    if !report.is_won() {
        println!("   From here:  {}", format_path(&report.suggested_path));
    }

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Moves:              {} ({} optimal)",
        report.total_moves, report.optimal_moves_made
    );
    println!(
        "   Move accuracy:      [{}] {}",
        percentage_bar(report.move_accuracy, 30).green(),
        format!("{:.1}%", report.move_accuracy).bright_yellow()
    );
    println!(
        "   Path efficiency:    {:.1}%",
        report.path_efficiency * 100.0
    );
    println!(
        "   Semantic distance:  {:.3} (optimal {:.3}, semantic path {:.3})",
        report.player_semantic_distance,
        report.optimal_semantic_distance,
        report.semantic_path_distance
    );
    println!(
        "   Avg similarity:     {}",
        format_similarity(report.average_similarity)
    );
    if report.backtracks_used > 0 {
        println!("   Backtracks:         {}", report.backtracks_used);
    }

    if !report.missed_optimal_moves.is_empty() {
        println!("\n🔍 {}", "Missed optimal moves:".yellow().bold());
        for missed in &report.missed_optimal_moves {
            println!("   • {missed}");
        }
    }

    let rarest_taken = report
        .optimal_choices
        .iter()
        .filter(|c| c.chose_rarest)
        .count();
    if rarest_taken > 0 {
        println!("\n💎 Took the rarest word {rarest_taken} time(s)");
    }

    if let Some(challenge) = &report.daily_challenge {
        println!("\n📅 Daily challenge {}", challenge.id.bright_white());
    }
    if let Some(ai) = &report.ai_comparison {
        println!("\n🤖 {} path: {}", ai.model, format_path(&ai.path));
    }
}

/// Print the result of a pairs run
pub fn print_pair_statistics(stats: &PairStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PAIR CHECK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = stats.checks.len();
    let pct = |n: usize| {
        if total > 0 {
            n as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    };

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Pairs checked:   {total}");
    println!(
        "   Reachable:       {} {}",
        stats.reachable,
        format!("({:.1}%)", pct(stats.reachable)).green()
    );
    println!(
        "   In window:       {} {}",
        stats.within_window,
        format!("({:.1}%)", pct(stats.within_window)).green()
    );
    println!(
        "   Average moves:   {}",
        format!("{:.2}", stats.average_hops).bright_yellow().bold()
    );
    println!("   Time taken:      {:.2}s", stats.duration.as_secs_f64());

    let rejected: Vec<_> = stats.rejected().collect();
    if !rejected.is_empty() {
        println!("\n⚠️  {}", "Rejected:".yellow().bold());
        for check in rejected {
            let reason = check
                .hops
                .map_or_else(|| "unreachable".red(), |h| format!("{h} moves").yellow());
            println!(
                "   {} → {}: {reason}",
                check.pair.start, check.pair.target
            );
        }
    }
}

/// Print a single solver run
pub fn print_solve_outcome(outcome: &SolveOutcome) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "🤖 Solver: {} → {}",
        outcome.start.bright_yellow().bold(),
        outcome.target.bright_green().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", format_path(&outcome.path));
    let status = if outcome.status.is_solved() {
        outcome.status.to_string().green()
    } else {
        outcome.status.to_string().red()
    };
    println!("\n   Status:       {status}");
    println!("   Moves:        {}", outcome.steps());
    if let Some(optimal) = outcome.optimal_length {
        println!("   Optimal:      {optimal}");
    }
    if let Some(efficiency) = outcome.efficiency() {
        println!("   Efficiency:   {efficiency:.2}x");
    }
    println!("   Attempts:     {}", outcome.attempts);
}

/// Print the result of solving a batch of pairs
pub fn print_solve_statistics(stats: &SolveStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SOLVER RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = stats.outcomes.len();
    let pct = |n: usize, of: usize| {
        if of > 0 {
            n as f64 / of as f64 * 100.0
        } else {
            0.0
        }
    };

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Pairs:           {total}");
    println!(
        "   Solved:          {} {}",
        stats.solved,
        format!("({:.1}%)", pct(stats.solved, total)).green()
    );
    println!(
        "   Optimal:         {} {}",
        stats.optimal,
        format!("({:.1}% of solved)", pct(stats.optimal, stats.solved)).green()
    );
    println!("   Retried:         {}", stats.retried);
    println!(
        "   Avg efficiency:  {}",
        format!("{:.2}x", stats.average_efficiency).bright_yellow().bold()
    );
    println!("   Time taken:      {:.2}s", stats.duration.as_secs_f64());

    if stats.solved > 0 {
        println!("\n📈 {}", "Efficiency:".bright_cyan().bold());
        let labels = ["1.0x (optimal)", "1.0-1.5x", "1.5-2.0x", "2.0x+"];
        for (label, count) in labels.iter().zip(stats.efficiency_buckets()) {
            println!(
                "   {label:<15} [{}] {count}",
                percentage_bar(pct(count, stats.solved), 20).green()
            );
        }
    }

    let failed: Vec<_> = stats
        .outcomes
        .iter()
        .filter(|o| !o.status.is_solved())
        .collect();
    if !failed.is_empty() {
        println!("\n⚠️  {}", "Unsolved:".yellow().bold());
        for outcome in failed {
            println!(
                "   {} → {}: {}",
                outcome.start,
                outcome.target,
                outcome.status.to_string().red()
            );
        }
    }
}

/// Print generated puzzles
pub fn print_generated_pairs(pairs: &[GeneratedPair], hops: usize) {
    println!(
        "\n🎲 {} ({hops} moves apart)",
        format!("{} puzzle(s)", pairs.len()).bright_cyan().bold()
    );
    for pair in pairs {
        println!(
            "   {} → {}   {}",
            pair.start.bright_yellow(),
            pair.target.bright_green(),
            format_path(&pair.path).bright_black()
        );
    }
}
