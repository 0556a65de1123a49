// src/cli/handlers.rs
use std::error::Error;

use crate::core::AppState;
use crate::models::{Evaluation, GenerationMode};
use crate::study;

// Handlers for CLI commands

fn print_evaluation(evaluation: &Evaluation) {
    println!("Strength: {}", evaluation.strength);
    for line in &evaluation.feedback {
        println!("  {}", line);
    }
}

pub fn handle_check(state: &AppState, password: &str) -> Result<(), Box<dyn Error>> {
    if password.is_empty() {
        return Err("No password provided".into());
    }

    print_evaluation(&state.checker.evaluate(password));
    Ok(())
}

pub fn handle_generate(
    state: &AppState,
    length: Option<usize>,
    use_words: bool,
) -> Result<(), Box<dyn Error>> {
    let length = length.unwrap_or(state.default_length);
    let mode = GenerationMode::from_use_words(use_words);
    let password = state.generator.generate(length, mode)?;

    println!("{}", password);
    print_evaluation(&state.checker.evaluate(&password));
    Ok(())
}

pub fn handle_study(state: &AppState, rounds: usize) -> Result<(), Box<dyn Error>> {
    let report = study::run_study(state, rounds)?;
    println!("{}", report);
    Ok(())
}
