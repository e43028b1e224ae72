//! Scoring rules.
//!
//! A scoring rule maps one (chosen, correct, marks, penalty) cell to a
//! signed score. Report generation takes the rule as a trait object, so
//! alternative schemes slot in without touching report logic. The score
//! report and the detailed report must be driven by the same rule
//! instance for their numbers to agree.

/// Strategy for scoring a single response cell.
pub trait ScoringRule: Send + Sync {
    /// Rule name as selectable from the CLI (e.g. "negative-marking").
    fn name(&self) -> &str;

    /// Score one cell. `chosen` is `None` when the student never answered;
    /// an empty string is treated the same way.
    fn evaluate(&self, chosen: Option<&str>, correct: &str, marks: f64, penalty: f64) -> f64;
}

/// Adapt a plain function or closure into a [`ScoringRule`].
pub struct FnRule<F>(pub F);

impl<F> ScoringRule for FnRule<F>
where
    F: Fn(Option<&str>, &str, f64, f64) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn evaluate(&self, chosen: Option<&str>, correct: &str, marks: f64, penalty: f64) -> f64 {
        (self.0)(chosen, correct, marks, penalty)
    }
}

/// The standard rule: full marks on a case-insensitive match, `-penalty`
/// on a wrong answer, 0 for a skip.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeMarking;

impl ScoringRule for NegativeMarking {
    fn name(&self) -> &str {
        "negative-marking"
    }

    fn evaluate(&self, chosen: Option<&str>, correct: &str, marks: f64, penalty: f64) -> f64 {
        match chosen {
            None => 0.0,
            Some(c) if c.is_empty() => 0.0,
            Some(c) if c.eq_ignore_ascii_case(correct) => marks,
            Some(_) => -penalty,
        }
    }
}

/// Lenient variant: wrong answers score 0 instead of `-penalty`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPenalty;

impl ScoringRule for NoPenalty {
    fn name(&self) -> &str {
        "no-penalty"
    }

    fn evaluate(&self, chosen: Option<&str>, correct: &str, marks: f64, _penalty: f64) -> f64 {
        match chosen {
            Some(c) if !c.is_empty() && c.eq_ignore_ascii_case(correct) => marks,
            _ => 0.0,
        }
    }
}

/// Look up a built-in rule by name.
pub fn rule_by_name(name: &str) -> Option<Box<dyn ScoringRule>> {
    match name {
        "negative-marking" | "negative" | "default" => Some(Box::new(NegativeMarking)),
        "no-penalty" | "lenient" => Some(Box::new(NoPenalty)),
        _ => None,
    }
}
