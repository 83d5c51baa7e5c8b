use super::node::{Kind, PartialRegex};
use super::opt;
use std::rc::Rc;

/// Count of Hole leaves in `t`; a linear traversal.
pub(crate) fn holes(node: &PartialRegex) -> usize {
    match node.kind() {
        Kind::Hole => 1,
        Kind::Literal(_) | Kind::EmptyString | Kind::EmptyLanguage => 0,
        Kind::Concat(l, r) | Kind::Union(l, r) => holes(l) + holes(r),
        Kind::Star(c) | Kind::Optional(c) => holes(c),
    }
}

/// Replaces the `k`-th Hole (pre-order, left-first) with `replacement`,
/// building the new tree purely: every subtree untouched by the
/// substitution is shared with the original rather than copied, and only
/// the path from the root down to the target hole is freshly allocated.
///
/// Filling the last remaining hole canonicalises the result with [opt::opt]
/// immediately. Asking for a hole index that doesn't exist is a fatal
/// programmer error — the caller is expected to only ever request indices
/// in `0..holes(t)`.
pub(crate) fn fill(node: &Rc<PartialRegex>, replacement: Rc<PartialRegex>, k: usize) -> Rc<PartialRegex> {
    let mut seen = 0usize;
    let filled = fill_rec(node, &replacement, k, &mut seen).unwrap_or_else(|| {
        panic!(
            "fill: hole index {} is out of range for a tree with {} holes",
            k,
            holes(node)
        )
    });
    if holes(&filled) == 0 {
        opt::opt(&filled)
    } else {
        filled
    }
}

fn fill_rec(
    node: &Rc<PartialRegex>,
    replacement: &Rc<PartialRegex>,
    target: usize,
    seen: &mut usize,
) -> Option<Rc<PartialRegex>> {
    match node.kind() {
        Kind::Hole => {
            let index = *seen;
            *seen += 1;
            if index == target {
                Some(Rc::clone(replacement))
            } else {
                None
            }
        }
        Kind::Literal(_) | Kind::EmptyString | Kind::EmptyLanguage => None,
        Kind::Concat(l, r) => {
            if let Some(new_l) = fill_rec(l, replacement, target, seen) {
                Some(PartialRegex::concat(new_l, Rc::clone(r)))
            } else {
                fill_rec(r, replacement, target, seen)
                    .map(|new_r| PartialRegex::concat(Rc::clone(l), new_r))
            }
        }
        Kind::Union(l, r) => {
            if let Some(new_l) = fill_rec(l, replacement, target, seen) {
                Some(PartialRegex::union(new_l, Rc::clone(r)))
            } else {
                fill_rec(r, replacement, target, seen)
                    .map(|new_r| PartialRegex::union(Rc::clone(l), new_r))
            }
        }
        Kind::Star(c) => fill_rec(c, replacement, target, seen).map(PartialRegex::star),
        Kind::Optional(c) => fill_rec(c, replacement, target, seen).map(PartialRegex::optional),
    }
}

/// Enumerates every one-hole substitution of `t` over `alphabet`: for each
/// hole index, a Literal for every symbol of `alphabet` plus `.`, then
/// `EmptyString`, `EmptyLanguage`, `Concat(Hole, Hole)`, `Union(Hole, Hole)`,
/// `Star(Hole)` — in that order. `Optional(Hole)` is deliberately absent:
/// optionals only ever arise through `opt` rewriting `Union(ε, x)`.
pub(crate) fn next_states(node: &Rc<PartialRegex>, alphabet: &[char]) -> Vec<Rc<PartialRegex>> {
    let hole_count = holes(node);
    let mut out = Vec::with_capacity(hole_count * (alphabet.len() + 6));
    for h in 0..hole_count {
        for &symbol in alphabet {
            out.push(fill(node, PartialRegex::literal(&symbol.to_string()), h));
        }
        out.push(fill(node, PartialRegex::literal("."), h));
        out.push(fill(node, PartialRegex::empty_string(), h));
        out.push(fill(node, PartialRegex::empty_language(), h));
        out.push(fill(
            node,
            PartialRegex::concat(PartialRegex::hole(), PartialRegex::hole()),
            h,
        ));
        out.push(fill(
            node,
            PartialRegex::union(PartialRegex::hole(), PartialRegex::hole()),
            h,
        ));
        out.push(fill(node, PartialRegex::star(PartialRegex::hole()), h));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holes_counts_leaves() {
        let t = PartialRegex::concat(PartialRegex::hole(), PartialRegex::hole());
        assert_eq!(holes(&t), 2);
    }

    #[test]
    fn fill_replaces_the_kth_hole_in_preorder() {
        let t = PartialRegex::concat(PartialRegex::hole(), PartialRegex::hole());
        let filled = fill(&t, PartialRegex::literal("a"), 0);
        assert_eq!(holes(&filled), 1);
        assert_eq!(filled.render(), "a□");
    }

    #[test]
    fn filling_the_last_hole_canonicalises() {
        let t = PartialRegex::concat(PartialRegex::hole(), PartialRegex::empty_string());
        let filled = fill(&t, PartialRegex::literal("a"), 0);
        assert_eq!(holes(&filled), 0);
        // opt applied: Concat(a, ε) -> a
        assert_eq!(filled.render(), "a");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn fill_panics_on_out_of_range_index() {
        let t = PartialRegex::hole();
        fill(&t, PartialRegex::literal("a"), 1);
    }

    #[test]
    fn next_states_covers_every_candidate_kind() {
        let t = PartialRegex::hole();
        let states = next_states(&t, &['0', '1']);
        // '0', '1', '.', ε, ∅, Concat(□,□), Union(□,□), Star(□)
        assert_eq!(states.len(), 8);
        let rendered: Vec<String> = states.iter().map(|s| s.render().to_string()).collect();
        assert!(rendered.contains(&"0".to_string()));
        assert!(rendered.contains(&"1".to_string()));
        assert!(rendered.contains(&".".to_string()));
        assert!(rendered.contains(&"□□".to_string()));
        assert!(rendered.contains(&"(□|□)".to_string()));
        assert!(rendered.contains(&"(□)*".to_string()));
    }
}
