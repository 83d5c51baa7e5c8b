use crate::oracle::Oracle;
use crate::partial_regex::{self, PartialRegex};
use std::collections::HashSet;
use std::rc::Rc;

fn as_str_iter(s: &HashSet<String>) -> impl Iterator<Item = &str> {
    s.iter().map(String::as_str)
}

/// True iff `t` is fully ground and its canonicalised rendering matches
/// every positive example and no negative example.
pub(crate) fn is_solution(
    oracle: &Oracle,
    state: &Rc<PartialRegex>,
    positives: &HashSet<String>,
    negatives: &HashSet<String>,
) -> bool {
    if partial_regex::holes(state) != 0 {
        return false;
    }
    let pattern = partial_regex::opt(state).render().to_string();
    oracle.matches_all(&pattern, as_str_iter(positives))
        && !oracle.matches_any(&pattern, as_str_iter(negatives))
}

/// True iff no completion of `state` can ever be a solution: its
/// overapproximation fails to cover every positive example, its
/// underapproximation already accepts some negative example, or some
/// "required piece" of its one-step unroll can't match any positive
/// example.
pub(crate) fn is_dead(
    oracle: &Oracle,
    state: &Rc<PartialRegex>,
    positives: &HashSet<String>,
    negatives: &HashSet<String>,
) -> bool {
    let over = partial_regex::opt(&partial_regex::opt(&partial_regex::overapproximation(state)))
        .render()
        .to_string();
    if !oracle.matches_all(&over, as_str_iter(positives)) {
        return true;
    }

    let under = partial_regex::opt(&partial_regex::opt(&partial_regex::underapproximation(
        state,
    )))
    .render()
    .to_string();
    if oracle.matches_any(&under, as_str_iter(negatives)) {
        return true;
    }

    for piece in partial_regex::split(&partial_regex::unroll(state)) {
        let piece_over = partial_regex::opt(&partial_regex::opt(&partial_regex::overapproximation(
            &piece,
        )))
        .render()
        .to_string();
        if !oracle.matches_any(&piece_over, as_str_iter(positives)) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partial_regex::PartialRegex;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ground_match_is_a_solution() {
        let oracle = Oracle::new();
        let p = set(&["0", "00", "01"]);
        let n = set(&["1", "10"]);
        let state = PartialRegex::concat(PartialRegex::literal("0"), PartialRegex::star(PartialRegex::literal(".")));
        assert!(is_solution(&oracle, &state, &p, &n));
    }

    #[test]
    fn a_hole_is_never_a_solution() {
        let oracle = Oracle::new();
        let p = set(&["0"]);
        let n = set(&[]);
        let state = PartialRegex::hole();
        assert!(!is_solution(&oracle, &state, &p, &n));
    }

    #[test]
    fn overapproximation_failure_prunes() {
        let oracle = Oracle::new();
        // No completion of Concat(Literal('1'), Hole) can match "0".
        let p = set(&["0"]);
        let n = set(&[]);
        let state = PartialRegex::concat(PartialRegex::literal("1"), PartialRegex::hole());
        assert!(is_dead(&oracle, &state, &p, &n));
    }

    #[test]
    fn underapproximation_failure_prunes() {
        let oracle = Oracle::new();
        // Underapproximation of Union(Literal('0'), Hole) is "0", which is
        // already a negative example, so every completion is dead.
        let p = set(&["1"]);
        let n = set(&["0"]);
        let state = PartialRegex::union(PartialRegex::literal("0"), PartialRegex::hole());
        assert!(is_dead(&oracle, &state, &p, &n));
    }

    #[test]
    fn a_live_state_is_not_dead() {
        let oracle = Oracle::new();
        let p = set(&["0", "00"]);
        let n = set(&["1"]);
        let state = PartialRegex::hole();
        assert!(!is_dead(&oracle, &state, &p, &n));
    }
}
