// src/study/mod.rs
//! Diagnostic run: generate passwords in both modes, time each generation and count how
//! many come out strong. Only reachable through the `study` subcommand.

use std::fmt;
use std::time::{Duration, Instant};

use crate::core::AppState;
use crate::generators::GeneratorError;
use crate::history::{LogEntry, LogFilter};
use crate::models::{GenerationMode, Strength};
use crate::utils::{as_millis_f64, truncate_string};

/// Length requested for every generated password.
pub const STUDY_PASSWORD_LENGTH: usize = 12;

const FEEDBACK_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModeStats {
    pub total_time: Duration,
    pub passed: usize,
}

impl ModeStats {
    pub fn average_millis(&self, rounds: usize) -> f64 {
        if rounds == 0 {
            return 0.0;
        }
        as_millis_f64(self.total_time) / rounds as f64
    }
}

#[derive(Debug, Clone)]
pub struct StudyReport {
    pub rounds: usize,
    pub entries: Vec<LogEntry>,
    pub word_based: ModeStats,
    pub regular: ModeStats,
}

impl StudyReport {
    pub fn stats(&self, mode: GenerationMode) -> &ModeStats {
        match mode {
            GenerationMode::WordBased => &self.word_based,
            GenerationMode::Regular => &self.regular,
        }
    }
}

fn timed_generation(
    state: &AppState,
    mode: GenerationMode,
    stats: &mut ModeStats,
) -> Result<(), GeneratorError> {
    let start = Instant::now();
    state.generator.generate(STUDY_PASSWORD_LENGTH, mode)?;
    stats.total_time += start.elapsed();
    Ok(())
}

/// Clears the generation log, then runs `rounds` generations per mode, alternating modes.
pub fn run_study(state: &AppState, rounds: usize) -> Result<StudyReport, GeneratorError> {
    state.log.clear();
    log::info!("Running diagnostic study with {} rounds per mode", rounds);

    let mut word_based = ModeStats::default();
    let mut regular = ModeStats::default();

    for _ in 0..rounds {
        timed_generation(state, GenerationMode::WordBased, &mut word_based)?;
        timed_generation(state, GenerationMode::Regular, &mut regular)?;
    }

    // The log was cleared above, so it holds exactly this run's verdicts
    for (mode, stats) in [
        (GenerationMode::WordBased, &mut word_based),
        (GenerationMode::Regular, &mut regular),
    ] {
        stats.passed = state.log.count(&LogFilter {
            strength: Some(Strength::Strong),
            ..LogFilter::mode(mode)
        });
    }

    Ok(StudyReport {
        rounds,
        entries: state.log.entries(),
        word_based,
        regular,
    })
}

impl fmt::Display for StudyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Password Log Table ===")?;
        writeln!(f, "{:<12}{:<20}{:<10}{:<60}", "Type", "Password", "Strength", "Feedback")?;
        writeln!(f, "{}", "=".repeat(100))?;
        for entry in &self.entries {
            let feedback = entry.evaluation.feedback.join("; ");
            writeln!(
                f,
                "{:<12}{:<20}{:<10}{}",
                entry.mode.label(),
                entry.password,
                entry.strength(),
                truncate_string(&feedback, FEEDBACK_WIDTH)
            )?;
        }
        writeln!(f, "{}", "=".repeat(100))?;

        writeln!(f, "\n=== Password Generation Times (ms) ===")?;
        writeln!(f, "{:<15}{:<10}", "Type", "Average Time (ms)")?;
        writeln!(f, "{}", "=".repeat(50))?;
        for mode in [GenerationMode::WordBased, GenerationMode::Regular] {
            writeln!(
                f,
                "{:<17}{:.3}",
                mode.label(),
                self.stats(mode).average_millis(self.rounds)
            )?;
        }
        writeln!(f, "{}", "=".repeat(50))?;

        writeln!(f, "\n=== Password Strength Results ===")?;
        for mode in [GenerationMode::WordBased, GenerationMode::Regular] {
            writeln!(
                f,
                "{}: {}/{} passed as Strong",
                mode.label(),
                self.stats(mode).passed,
                self.rounds
            )?;
        }
        write!(f, "{}", "=".repeat(50))
    }
}
