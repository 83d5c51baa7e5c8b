use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;

/// Adapter over a host regex engine, presenting the two anchored-match
/// predicates the pruning engine and search loop need. Patterns are
/// compiled once and cached by their surface text, rather than recompiled
/// on every call.
pub struct Oracle {
    compiled: RefCell<HashMap<String, Regex>>,
}

impl Oracle {
    pub fn new() -> Self {
        Self {
            compiled: RefCell::new(HashMap::new()),
        }
    }

    fn compiled_pattern(&self, pattern: &str) -> Regex {
        if let Some(re) = self.compiled.borrow().get(pattern) {
            return re.clone();
        }
        let anchored = format!("^(?:{})$", pattern);
        let re = Regex::new(&anchored).unwrap_or_else(|err| {
            panic!(
                "oracle received a pattern its regex engine could not compile: `{}` ({})",
                pattern, err
            )
        });
        self.compiled
            .borrow_mut()
            .insert(pattern.to_string(), re.clone());
        re
    }

    /// True iff every example in `examples` is fully matched (anchored start
    /// and end) by `pattern`.
    pub fn matches_all<'s, I: IntoIterator<Item = &'s str>>(
        &self,
        pattern: &str,
        examples: I,
    ) -> bool {
        let re = self.compiled_pattern(pattern);
        examples.into_iter().all(|s| re.is_match(s))
    }

    /// True iff some example in `examples` is fully matched by `pattern`.
    pub fn matches_any<'s, I: IntoIterator<Item = &'s str>>(
        &self,
        pattern: &str,
        examples: I,
    ) -> bool {
        let re = self.compiled_pattern(pattern);
        examples.into_iter().any(|s| re.is_match(s))
    }
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_all_requires_full_anchoring() {
        let oracle = Oracle::new();
        let examples = ["0", "00", "01", "001"];
        assert!(oracle.matches_all("0.*", examples));
        assert!(!oracle.matches_all("0*1", examples));
    }

    #[test]
    fn matches_any_finds_one_hit() {
        let oracle = Oracle::new();
        let examples = ["0", "00", "01", "001"];
        assert!(oracle.matches_any("00", examples));
        assert!(!oracle.matches_any("10", examples));
    }

    #[test]
    fn compiled_patterns_are_reused() {
        let oracle = Oracle::new();
        assert!(oracle.matches_all("a", ["a"]));
        assert!(oracle.matches_all("a", ["a"]));
        assert_eq!(oracle.compiled.borrow().len(), 1);
    }

    #[test]
    #[should_panic(expected = "could not compile")]
    fn malformed_pattern_panics() {
        let oracle = Oracle::new();
        oracle.matches_all("(", ["a"]);
    }
}
