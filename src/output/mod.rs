//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_generated_pairs, print_pair_statistics, print_path_result, print_report,
    print_solve_outcome, print_solve_statistics,
};
