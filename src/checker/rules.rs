// src/checker/rules.rs

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()-_+=";

/// Keyboard rows and runs that make a password predictable.
pub const KEYBOARD_PATTERNS: [&str; 16] = [
    "qwerty", "asdf", "zxcv", "1234", "5678", "7890", "abcd", "efgh", "ijkl",
    "mnop", "qrst", "uvwx", "yz", "0987", "8765", "4321",
];

/// Longest tolerated run of one repeated character.
pub const MAX_REPEAT_RUN: usize = 2;

/// The strength checks, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    Length,
    CaseMix,
    Digit,
    SpecialChar,
    NotCommon,
    NoRepeats,
    NoKeyboardPattern,
}

impl Check {
    pub const ALL: [Check; 7] = [
        Check::Length,
        Check::CaseMix,
        Check::Digit,
        Check::SpecialChar,
        Check::NotCommon,
        Check::NoRepeats,
        Check::NoKeyboardPattern,
    ];

    pub fn message(&self, passed: bool) -> &'static str {
        match (self, passed) {
            (Check::Length, true) => "✅ Good length!",
            (Check::Length, false) => "❌ Too short! Password must be at least 8 characters long.",
            (Check::CaseMix, true) => "✅ Nice mix of upper and lower case letters!",
            (Check::CaseMix, false) => "❌ Missing mix of upper and lower case letters.",
            (Check::Digit, true) => "✅ Great! You've got numbers.",
            (Check::Digit, false) => "❌ Missing a number. Numbers make it stronger!",
            (Check::SpecialChar, true) => "✅ Special character is included.",
            (Check::SpecialChar, false) => "❌ No special characters. Spice it up with @, #, or $!",
            (Check::NotCommon, true) => "✅ Unique choice. Well done!",
            (Check::NotCommon, false) => "❌ Oh no! This is too common and easy to guess.",
            (Check::NoRepeats, true) => "✅ No repeated characters.",
            (Check::NoRepeats, false) => "❌ Avoid using repeated characters (e.g., 'aaa').",
            (Check::NoKeyboardPattern, true) => "✅ No keyboard patterns detected.",
            (Check::NoKeyboardPattern, false) => "❌ Avoid predictable patterns like 'qwerty' or '1234'.",
        }
    }
}

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

pub fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

pub fn has_case_mix(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(password: &str) -> bool {
    password.chars().any(is_special)
}

/// True when some character repeats more than `MAX_REPEAT_RUN` times in a row.
pub fn has_repeat_run(password: &str) -> bool {
    let mut run = 0;
    let mut prev = None;

    for c in password.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }

        if run > MAX_REPEAT_RUN {
            return true;
        }
    }

    false
}

pub fn find_keyboard_pattern(password: &str) -> Option<&'static str> {
    let lowered = password.to_lowercase();
    KEYBOARD_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lowered.contains(pattern))
}
