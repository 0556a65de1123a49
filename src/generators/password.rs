// src/generators/password.rs
use std::sync::Arc;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::checker::rules::{MIN_LENGTH, SPECIAL_CHARS};
use crate::checker::StrengthChecker;
use crate::history::{GenerationLog, LogEntry};
use crate::models::GenerationMode;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const FULL_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_+=";

/// Used in place of the word list when it holds fewer than two words.
pub const PLACEHOLDER_WORDS: [&str; 2] = ["defaultWord1", "defaultWord2"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {min} characters.")]
    InvalidLength { length: usize, min: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8]) -> char {
    // Every charset here is a non-empty const
    set[rng.gen_range(0..set.len())] as char
}

/// Builds passwords and records each one, with its evaluation, in the shared log.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    checker: StrengthChecker,
    words: Arc<Vec<String>>,
    log: Arc<GenerationLog>,
}

impl PasswordGenerator {
    pub fn new(checker: StrengthChecker, words: Arc<Vec<String>>, log: Arc<GenerationLog>) -> Self {
        Self { checker, words, log }
    }

    pub fn generate(&self, length: usize, mode: GenerationMode) -> Result<String> {
        self.generate_with_rng(length, mode, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        length: usize,
        mode: GenerationMode,
        rng: &mut R,
    ) -> Result<String> {
        if length < MIN_LENGTH {
            return Err(GeneratorError::InvalidLength { length, min: MIN_LENGTH });
        }

        let password = match mode {
            GenerationMode::WordBased => self.word_based(length, rng),
            GenerationMode::Regular => regular(length, rng),
        };

        let evaluation = self.checker.evaluate(&password);
        log::debug!(
            "Generated {} password of {} characters ({})",
            mode,
            password.chars().count(),
            evaluation.strength
        );

        self.log.append(LogEntry::new(mode, password.clone(), evaluation));
        Ok(password)
    }

    // Two distinct words, a two-digit number and a special character, padded with
    // alphanumerics up to `length`. Never truncated, so the result can run longer.
    fn word_based<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        let words: Vec<&str> = if self.words.len() >= 2 {
            self.words.choose_multiple(rng, 2).map(String::as_str).collect()
        } else {
            PLACEHOLDER_WORDS.choose_multiple(rng, 2).copied().collect()
        };

        let mut password = words.concat();
        password.push_str(&rng.gen_range(10..=99).to_string());
        password.push(pick(rng, SPECIAL_CHARS.as_bytes()));

        let current = password.chars().count();
        if current < length {
            password.extend((current..length).map(|_| pick(rng, ALPHANUMERIC)));
        }

        password
    }
}

// One character from each class, the rest from the full alphabet, then shuffled.
fn regular<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    let mut chars = vec![
        pick(rng, LOWERCASE),
        pick(rng, UPPERCASE),
        pick(rng, DIGITS),
        pick(rng, SPECIAL_CHARS.as_bytes()),
    ];
    chars.extend((4..length).map(|_| pick(rng, FULL_ALPHABET)));
    chars.shuffle(rng);
    chars.into_iter().collect()
}
