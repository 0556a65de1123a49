// src/checker/mod.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{CheckOutcome, Evaluation};

pub mod rules;

pub use rules::Check;

/// Evaluates passwords against the fixed rule table.
#[derive(Debug, Clone, Default)]
pub struct StrengthChecker {
    common_passwords: Arc<HashSet<String>>,
}

impl StrengthChecker {
    /// `common_passwords` must already be lowercased.
    pub fn new(common_passwords: Arc<HashSet<String>>) -> Self {
        Self { common_passwords }
    }

    pub fn is_common(&self, password: &str) -> bool {
        self.common_passwords.contains(&password.to_lowercase())
    }

    fn run_check(&self, check: Check, password: &str) -> bool {
        match check {
            Check::Length => rules::has_min_length(password),
            Check::CaseMix => rules::has_case_mix(password),
            Check::Digit => rules::has_digit(password),
            Check::SpecialChar => rules::has_special(password),
            Check::NotCommon => !self.is_common(password),
            Check::NoRepeats => !rules::has_repeat_run(password),
            Check::NoKeyboardPattern => rules::find_keyboard_pattern(password).is_none(),
        }
    }

    pub fn evaluate(&self, password: &str) -> Evaluation {
        let outcomes = Check::ALL
            .iter()
            .map(|&check| CheckOutcome {
                check,
                passed: self.run_check(check, password),
            })
            .collect();

        Evaluation::from_outcomes(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Strength;

    fn checker_with(common: &[&str]) -> StrengthChecker {
        let set = common.iter().map(|s| s.to_lowercase()).collect();
        StrengthChecker::new(Arc::new(set))
    }

    #[test]
    fn feedback_always_has_one_message_per_check() {
        let checker = checker_with(&["password"]);
        for pwd in ["", "a", "password", "Password1!", "xK9$mQ2vPz", "aaaaaaaaaaaaaaaaaaaa"] {
            let eval = checker.evaluate(pwd);
            assert_eq!(eval.feedback.len(), 7, "wrong feedback size for {pwd:?}");
            for (i, check) in Check::ALL.iter().enumerate() {
                assert_eq!(eval.checks[i].check, *check);
                assert_eq!(eval.feedback[i], check.message(eval.checks[i].passed));
            }
        }
    }

    #[test]
    fn short_passwords_fail_length() {
        let checker = StrengthChecker::default();
        for pwd in ["", "Ab1!", "xK9$mQ2"] {
            let eval = checker.evaluate(pwd);
            assert!(!eval.passed(Check::Length));
            assert_eq!(eval.strength, Strength::Weak);
        }
    }

    #[test]
    fn single_case_fails_case_mix() {
        let checker = StrengthChecker::default();
        assert!(!checker.evaluate("xk9$mq2vpz").passed(Check::CaseMix));
        assert!(!checker.evaluate("XK9$MQ2VPZ").passed(Check::CaseMix));
        assert!(!checker.evaluate("12345678!").passed(Check::CaseMix));
    }

    #[test]
    fn digit_and_special_are_required() {
        let checker = StrengthChecker::default();
        let eval = checker.evaluate("xKt$mQwvPz");
        assert!(!eval.passed(Check::Digit));
        assert!(eval.passed(Check::SpecialChar));

        let eval = checker.evaluate("xK9tmQ2vPz");
        assert!(eval.passed(Check::Digit));
        assert!(!eval.passed(Check::SpecialChar));
    }

    #[test]
    fn common_passwords_match_in_any_casing() {
        let checker = checker_with(&["Password1!", "letmein"]);
        for pwd in ["password1!", "PASSWORD1!", "Password1!", "LetMeIn"] {
            assert!(!checker.evaluate(pwd).passed(Check::NotCommon), "{pwd} should be common");
        }
        assert!(checker.evaluate("xK9$mQ2vPz").passed(Check::NotCommon));
    }

    #[test]
    fn empty_common_set_never_flags() {
        let checker = StrengthChecker::default();
        assert!(checker.evaluate("password").passed(Check::NotCommon));
    }

    #[test]
    fn repeated_runs_fail() {
        let checker = StrengthChecker::default();
        assert!(!checker.evaluate("xK9$mmmQ2vPz").passed(Check::NoRepeats));
        assert!(!checker.evaluate("xK9$$$Q2vPz").passed(Check::NoRepeats));
        assert!(checker.evaluate("xK9$mmQ2vPz").passed(Check::NoRepeats));
    }

    #[test]
    fn keyboard_patterns_fail() {
        let checker = StrengthChecker::default();
        let eval = checker.evaluate("Zx!9QWERTYb");
        assert!(!eval.passed(Check::NoKeyboardPattern));
        assert_eq!(eval.failed_checks().collect::<Vec<_>>(), vec![Check::NoKeyboardPattern]);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let checker = checker_with(&["password1!"]);
        for pwd in ["Password1!", "xK9$mQ2vPz", "aaa"] {
            assert_eq!(checker.evaluate(pwd), checker.evaluate(pwd));
        }
    }

    #[test]
    fn password1_is_weak() {
        let checker = checker_with(&["password", "password1!"]);
        let eval = checker.evaluate("Password1!");
        assert_eq!(eval.strength, Strength::Weak);
        assert_eq!(eval.feedback.len(), 7);
        assert!(!eval.passed(Check::NotCommon));

        // No keyboard pattern in it, so only the common list makes it weak.
        let eval = StrengthChecker::default().evaluate("Password1!");
        assert_eq!(eval.strength, Strength::Strong);
        assert_eq!(eval.feedback.len(), 7);
    }

    #[test]
    fn mixed_random_password_is_strong() {
        let checker = checker_with(&["password", "123456", "qwerty"]);
        let eval = checker.evaluate("xK9$mQ2vPz");
        assert_eq!(eval.strength, Strength::Strong);
        assert!(eval.is_strong());
        assert_eq!(eval.failed_checks().count(), 0);
    }
}
