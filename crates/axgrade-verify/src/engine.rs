//! Allow-list verdict evaluator.
//!
//! `AxiomEvaluator` implements the `Evaluator` trait from `axgrade-core`.
//! Evaluation runs in two phases:
//!
//! 1. **Exit status** — a failed checker run short-circuits to `Errored`.
//!    Partial output from a failed run is never interpreted as a verdict.
//! 2. **Axiom scan** — stdout is split on `\n`, blank lines are dropped, and
//!    the remaining candidate lines (per the allow-list's `OutputForm`) are
//!    compared verbatim against the allow-list. Every non-member is
//!    collected before returning so the submitter sees the full set in one
//!    report.
//!
//! Stderr never influences the verdict.

use tracing::{debug, warn};

use axgrade_contracts::{
    axiom::AllowedAxiomSet,
    checker::{CheckerExit, CheckerResult},
    verdict::{Evaluation, Verdict},
};
use axgrade_core::traits::Evaluator;

use crate::message;

/// Classify `result` against `allowed` and frame the display message.
///
/// Pure and deterministic: evaluating the same pair twice yields the same
/// verdict and message.
pub fn evaluate(result: &CheckerResult, allowed: &AllowedAxiomSet) -> (Verdict, String) {
    // ── Phase 1: exit status ──────────────────────────────────────────────────
    if let CheckerExit::Failure { code, cause } = &result.exit {
        warn!(?code, %cause, "checker failed; skipping axiom scan");
        let message = message::errored(cause);
        return (Verdict::Errored { cause: cause.clone() }, message);
    }

    // ── Phase 2: axiom scan ──────────────────────────────────────────────────
    let form = allowed.form();
    let mut scanned = 0usize;
    let mut forbidden: Vec<String> = Vec::new();

    for line in candidate_lines(&result.stdout) {
        if !form.is_candidate(line) {
            continue;
        }
        scanned += 1;
        if !allowed.contains(line) {
            debug!(axiom = %line, "forbidden axiom");
            forbidden.push(line.to_string());
        }
    }

    debug!(
        ?form,
        scanned,
        forbidden_count = forbidden.len(),
        "axiom scan complete"
    );

    if forbidden.is_empty() {
        (Verdict::Passed, message::passed())
    } else {
        let message = message::failed(&forbidden);
        (Verdict::Failed { forbidden }, message)
    }
}

/// Non-blank lines of `stdout`, with a trailing `\r` removed from each.
///
/// Lines are otherwise returned exactly as printed, so surrounding whitespace
/// is significant when comparing against the allow-list.
fn candidate_lines(stdout: &str) -> impl Iterator<Item = &str> {
    stdout
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
}

/// The axgrade verdict evaluator.
///
/// Stateless; the allow-list is passed in per call so one evaluator can serve
/// any output form.
#[derive(Debug, Default, Clone, Copy)]
pub struct AxiomEvaluator;

impl AxiomEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for AxiomEvaluator {
    fn evaluate(&self, result: &CheckerResult, allowed: &AllowedAxiomSet) -> Evaluation {
        let (verdict, message) = evaluate(result, allowed);
        Evaluation { verdict, message }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axgrade_contracts::{
        axiom::{AllowedAxiomSet, OutputForm},
        checker::CheckerResult,
        verdict::Verdict,
    };
    use axgrade_core::traits::Evaluator;

    use super::{evaluate, AxiomEvaluator};

    const PROPEXT_DECL: &str = "axiom propext : Π {a b : Prop}, (a <-> b) -> a = b";
    const CHOICE_DECL: &str = "axiom classical.choice : Π {α : Sort u}, nonempty α -> α";

    // ── Builder helpers ───────────────────────────────────────────────────────

    fn bare_allowed() -> AllowedAxiomSet {
        AllowedAxiomSet::new(
            OutputForm::BareName,
            ["no axioms", "propext", "quot.sound", "classical.choice"],
        )
        .unwrap()
    }

    fn declaration_allowed() -> AllowedAxiomSet {
        AllowedAxiomSet::new(OutputForm::Declaration, [PROPEXT_DECL, CHOICE_DECL]).unwrap()
    }

    fn ok(stdout: &str) -> CheckerResult {
        CheckerResult::success(stdout, "")
    }

    fn forbidden_of(verdict: Verdict) -> Vec<String> {
        match verdict {
            Verdict::Failed { forbidden } => forbidden,
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    // ── Passing runs ──────────────────────────────────────────────────────────

    #[test]
    fn test_no_axioms_sentinel_passes() {
        let (verdict, message) = evaluate(&ok("no axioms\n"), &bare_allowed());

        assert_eq!(verdict, Verdict::Passed);
        assert_eq!(message, "<PASSED::>No forbidden axioms");
    }

    #[test]
    fn test_allowed_axioms_pass() {
        let (verdict, _) = evaluate(&ok("propext\nclassical.choice\n"), &bare_allowed());
        assert_eq!(verdict, Verdict::Passed);
    }

    #[test]
    fn test_empty_output_passes() {
        let (verdict, _) = evaluate(&ok(""), &bare_allowed());
        assert_eq!(verdict, Verdict::Passed);
    }

    /// Whitespace-only lines are not axioms and never fail a run.
    #[test]
    fn test_blank_lines_are_ignored() {
        let (verdict, _) = evaluate(&ok("\n   \npropext\n\t\n\n"), &bare_allowed());
        assert_eq!(verdict, Verdict::Passed);
    }

    #[test]
    fn test_crlf_line_endings_are_tolerated() {
        let (verdict, _) = evaluate(&ok("propext\r\nquot.sound\r\n"), &bare_allowed());
        assert_eq!(verdict, Verdict::Passed);
    }

    // ── Failing runs ──────────────────────────────────────────────────────────

    #[test]
    fn test_custom_axiom_fails() {
        let (verdict, message) = evaluate(&ok("propext\nmy_custom_axiom\n"), &bare_allowed());

        assert_eq!(forbidden_of(verdict), vec!["my_custom_axiom".to_string()]);
        assert!(message.starts_with("<FAILED::>"), "unexpected message: {message}");
        assert!(message.contains("<:LF:>my_custom_axiom"), "unexpected message: {message}");
        assert!(!message.contains('\n'), "forbidden lines must not use raw newlines");
    }

    /// Allowed duplicates contribute nothing; the forbidden line is reported once.
    #[test]
    fn test_repeated_allowed_axiom_does_not_mask_forbidden() {
        let (verdict, _) = evaluate(&ok("propext\npropext\nbad_axiom\n"), &bare_allowed());
        assert_eq!(forbidden_of(verdict), vec!["bad_axiom".to_string()]);
    }

    /// Forbidden lines keep their order of appearance and every occurrence.
    #[test]
    fn test_forbidden_order_and_duplicates_preserved() {
        let stdout = "zeta\npropext\nalpha\nzeta\n";
        let (verdict, message) = evaluate(&ok(stdout), &bare_allowed());

        assert_eq!(
            forbidden_of(verdict),
            vec!["zeta".to_string(), "alpha".to_string(), "zeta".to_string()]
        );
        assert_eq!(
            message,
            "<FAILED::>Forbidden axioms detected:<:LF:>zeta<:LF:>alpha<:LF:>zeta"
        );
    }

    /// Surrounding whitespace is significant: a padded name is not the name.
    #[test]
    fn test_padded_line_is_not_an_allowed_axiom() {
        let (verdict, _) = evaluate(&ok("  propext\n"), &bare_allowed());
        assert_eq!(forbidden_of(verdict), vec!["  propext".to_string()]);
    }

    /// Non-UTF-8 noise decoded lossily is treated as just another line.
    #[test]
    fn test_replacement_characters_are_ordinary_lines() {
        let stdout = String::from_utf8_lossy(b"propext\n\xff\xfe\n").into_owned();
        let (verdict, _) = evaluate(&ok(&stdout), &bare_allowed());
        assert_eq!(forbidden_of(verdict), vec!["\u{fffd}\u{fffd}".to_string()]);
    }

    // ── Errored runs ──────────────────────────────────────────────────────────

    /// A failed exit wins over output that would otherwise pass.
    #[test]
    fn test_failed_exit_is_errored_even_with_clean_output() {
        let result = CheckerResult::failure(Some(1), "exit status: 1", "no axioms\n", "");
        let (verdict, message) = evaluate(&result, &bare_allowed());

        assert_eq!(verdict, Verdict::Errored { cause: "exit status: 1".to_string() });
        assert!(message.starts_with("<ERROR::>"), "unexpected message: {message}");
        assert!(message.ends_with('\n'));
    }

    /// Forbidden-looking output from a failed run is never scanned.
    #[test]
    fn test_failed_exit_does_not_scan_output() {
        let result = CheckerResult::failure(Some(1), "exit status: 1", "sorryAx\n", "");
        let (verdict, message) = evaluate(&result, &bare_allowed());

        assert!(matches!(verdict, Verdict::Errored { .. }));
        assert!(!message.contains("sorryAx"));
    }

    #[test]
    fn test_launch_failure_is_errored() {
        let result = CheckerResult::launch_failure("failed to launch checker 'lean'");
        let (verdict, message) = evaluate(&result, &bare_allowed());

        assert!(matches!(verdict, Verdict::Errored { .. }));
        assert!(message.contains("lean"));
    }

    /// Stderr with a successful exit is informational only.
    #[test]
    fn test_stderr_does_not_affect_verdict() {
        let result = CheckerResult::success("propext\n", "warning: declaration uses 'sorry'\n");
        let (verdict, _) = evaluate(&result, &bare_allowed());
        assert_eq!(verdict, Verdict::Passed);
    }

    // ── Declaration form ──────────────────────────────────────────────────────

    #[test]
    fn test_declaration_form_ignores_non_axiom_lines() {
        let stdout = format!(
            "theorem submission : ∀ n, n + 0 = n\n{PROPEXT_DECL}\nchecked 42 declarations\n"
        );
        let (verdict, _) = evaluate(&ok(&stdout), &declaration_allowed());
        assert_eq!(verdict, Verdict::Passed);
    }

    #[test]
    fn test_declaration_form_flags_unknown_declaration() {
        let sorry = "axiom sorry_ax : Π (α : Sort u), bool -> α";
        let stdout = format!("{CHOICE_DECL}\n{sorry}\n");
        let (verdict, message) = evaluate(&ok(&stdout), &declaration_allowed());

        assert_eq!(forbidden_of(verdict), vec![sorry.to_string()]);
        assert!(message.contains(&format!("<:LF:>{sorry}")));
    }

    /// A bare name never matches a declaration-form allow-list entry.
    #[test]
    fn test_bare_name_does_not_match_declaration_entry() {
        let (verdict, _) = evaluate(&ok("axiom propext\n"), &declaration_allowed());
        assert_eq!(forbidden_of(verdict), vec!["axiom propext".to_string()]);
    }

    // ── Trait + determinism ───────────────────────────────────────────────────

    #[test]
    fn test_evaluator_trait_matches_free_function() {
        let result = ok("propext\nbad\n");
        let allowed = bare_allowed();

        let evaluation = AxiomEvaluator::new().evaluate(&result, &allowed);
        let (verdict, message) = evaluate(&result, &allowed);

        assert_eq!(evaluation.verdict, verdict);
        assert_eq!(evaluation.message, message);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let result = ok("propext\nbad\n\nworse\n");
        let allowed = bare_allowed();

        assert_eq!(evaluate(&result, &allowed), evaluate(&result, &allowed));
    }
}
