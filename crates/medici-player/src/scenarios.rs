//! Builtin scenarios.
//!
//! Each scenario lives in its own module and is built on demand with the
//! prompt the caller configured. Order here is tab order.

mod fund_docs;
mod lp_report;
mod rent_rolls;

use crate::script::Scenario;

/// Prompt shown before every typed command unless configured otherwise.
pub const DEFAULT_PROMPT: &str = "medici λ ";

/// `(name, label)` of every builtin scenario, in tab order.
const CATALOG: [(&str, &str); 3] = [
    ("fund-docs", "Fund Docs"),
    ("lp-report", "LP Reporting"),
    ("rent-rolls", "Rent Rolls"),
];

/// All builtin scenarios in tab order.
#[must_use]
pub fn builtin(prompt: &str) -> Vec<Scenario> {
    CATALOG
        .iter()
        .filter_map(|(name, _)| load(name, prompt))
        .collect()
}

/// Build one builtin scenario by name.
#[must_use]
pub fn load(name: &str, prompt: &str) -> Option<Scenario> {
    match name {
        "fund-docs" => Some(fund_docs::build(prompt)),
        "lp-report" => Some(lp_report::build(prompt)),
        "rent-rolls" => Some(rent_rolls::build(prompt)),
        _ => None,
    }
}

/// Index of a builtin scenario, by name or by index in decimal.
#[must_use]
pub fn resolve(selector: &str) -> Option<usize> {
    if let Ok(index) = selector.parse::<usize>() {
        return (index < CATALOG.len()).then_some(index);
    }
    CATALOG.iter().position(|(name, _)| *name == selector)
}

/// `(name, label)` pairs for all builtin scenarios.
#[must_use]
pub fn list() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

/// Empty scenario carrying the catalog label for `name`.
fn titled(name: &str) -> Scenario {
    let label = CATALOG
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(name, |(_, label)| *label);
    Scenario::new(name, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::LineKind;

    #[test]
    fn test_catalog_matches_builtin() {
        let all = builtin(DEFAULT_PROMPT);
        let names: Vec<_> = all.iter().map(|s| s.name.as_str()).collect();
        let listed: Vec<_> = list().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, listed);
        for (name, label) in list() {
            let s = load(name, DEFAULT_PROMPT).unwrap();
            assert_eq!(s.label, label);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(load("nope", DEFAULT_PROMPT).is_none());
        assert_eq!(resolve("nope"), None);
    }

    #[test]
    fn test_resolve_by_name_or_index() {
        assert_eq!(resolve("lp-report"), Some(1));
        assert_eq!(resolve("2"), Some(2));
        assert_eq!(resolve("3"), None);
    }

    #[test]
    fn test_builtins_are_well_formed() {
        for s in builtin(DEFAULT_PROMPT) {
            assert!(s.unpaired_prompts().is_empty(), "{}", s.name);
            assert_eq!(
                s.lines.first().map(|l| l.kind),
                Some(LineKind::PromptMarker)
            );
            let last = s.lines.last().unwrap();
            assert!(last.trailing_caret, "{} should end on a caret", s.name);
            assert_eq!(s.lines.iter().filter(|l| l.trailing_caret).count(), 1);
        }
    }

    #[test]
    fn test_prompt_is_threaded_through() {
        let s = load("fund-docs", "$ ").unwrap();
        assert_eq!(s.lines[0].text, "$ ");
    }
}
