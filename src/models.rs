// src/models.rs
use std::fmt;
use serde::Serialize;
use utoipa::ToSchema;

use crate::checker::Check;

/// Overall verdict of a strength evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Strength {
    Weak,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Strong => "Strong",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: Check,
    pub passed: bool,
}

/// Result of running every check against one password.
///
/// `feedback` holds one message per check, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub strength: Strength,
    pub feedback: Vec<String>,
    pub checks: Vec<CheckOutcome>,
}

impl Evaluation {
    pub fn from_outcomes(checks: Vec<CheckOutcome>) -> Self {
        let strength = if checks.iter().all(|c| c.passed) {
            Strength::Strong
        } else {
            Strength::Weak
        };

        let feedback = checks
            .iter()
            .map(|c| c.check.message(c.passed).to_string())
            .collect();

        Self { strength, feedback, checks }
    }

    #[cfg(test)]
    pub fn is_strong(&self) -> bool {
        self.strength == Strength::Strong
    }

    #[cfg(test)]
    pub fn passed(&self, check: Check) -> bool {
        self.checks
            .iter()
            .find(|c| c.check == check)
            .map_or(false, |c| c.passed)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = Check> + '_ {
        self.checks.iter().filter(|c| !c.passed).map(|c| c.check)
    }
}

// Password generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    WordBased,
    Regular,
}

impl GenerationMode {
    pub fn from_use_words(use_words: bool) -> Self {
        if use_words {
            GenerationMode::WordBased
        } else {
            GenerationMode::Regular
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenerationMode::WordBased => "Word-based",
            GenerationMode::Regular => "Regular",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
