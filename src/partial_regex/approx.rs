use super::node::{Kind, PartialRegex};
use std::rc::Rc;

/// Ground regex bounding the language of `t` from above: every Hole becomes
/// `.*`. A pure congruence over every other kind.
pub(crate) fn overapproximation(node: &Rc<PartialRegex>) -> Rc<PartialRegex> {
    match node.kind() {
        Kind::Hole => PartialRegex::star(PartialRegex::literal(".")),
        Kind::Literal(_) | Kind::EmptyString | Kind::EmptyLanguage => Rc::clone(node),
        Kind::Concat(l, r) => PartialRegex::concat(overapproximation(l), overapproximation(r)),
        Kind::Union(l, r) => PartialRegex::union(overapproximation(l), overapproximation(r)),
        Kind::Star(c) => PartialRegex::star(overapproximation(c)),
        Kind::Optional(c) => PartialRegex::optional(overapproximation(c)),
    }
}

/// Ground regex bounding the language of `t` from below: every Hole becomes
/// `∅`.
pub(crate) fn underapproximation(node: &Rc<PartialRegex>) -> Rc<PartialRegex> {
    match node.kind() {
        Kind::Hole => PartialRegex::empty_language(),
        Kind::Literal(_) | Kind::EmptyString | Kind::EmptyLanguage => Rc::clone(node),
        Kind::Concat(l, r) => PartialRegex::concat(underapproximation(l), underapproximation(r)),
        Kind::Union(l, r) => PartialRegex::union(underapproximation(l), underapproximation(r)),
        Kind::Star(c) => PartialRegex::star(underapproximation(c)),
        Kind::Optional(c) => PartialRegex::optional(underapproximation(c)),
    }
}

/// Rewrites every `Star(e)` found in the tree to `e·e·Star(e)`, reusing the
/// raw child `e` unchanged in all three positions (it does not recursively
/// unroll stars nested inside `e` itself — only the `Star` node currently
/// being visited unrolls). Congruent elsewhere, including `Optional`, which
/// is not handled in the corpus this was distilled from but is given the
/// natural extension here (`Optional(e).unroll() = Optional(e.unroll())`),
/// per this crate's resolution of that open question.
pub(crate) fn unroll(node: &Rc<PartialRegex>) -> Rc<PartialRegex> {
    match node.kind() {
        Kind::Star(e) => {
            let e = Rc::clone(e);
            PartialRegex::concat(
                Rc::clone(&e),
                PartialRegex::concat(Rc::clone(&e), PartialRegex::star(e)),
            )
        }
        Kind::Concat(l, r) => PartialRegex::concat(unroll(l), unroll(r)),
        Kind::Union(l, r) => PartialRegex::union(unroll(l), unroll(r)),
        Kind::Optional(c) => PartialRegex::optional(unroll(c)),
        Kind::Literal(_) | Kind::EmptyString | Kind::EmptyLanguage | Kind::Hole => {
            Rc::clone(node)
        }
    }
}

/// Enumerates every "required piece" of `t`: an expression that must be
/// matched by some positive example if any descendant of `t` is ever to
/// succeed. See the congruences in the module-level design notes.
pub(crate) fn split(node: &Rc<PartialRegex>) -> Vec<Rc<PartialRegex>> {
    match node.kind() {
        Kind::Literal(_) | Kind::EmptyString | Kind::EmptyLanguage | Kind::Hole => {
            vec![Rc::clone(node)]
        }
        Kind::Union(l, r) => {
            let mut pieces = split(l);
            pieces.extend(split(r));
            pieces
        }
        Kind::Concat(l, r) => {
            let mut pieces: Vec<Rc<PartialRegex>> = split(l)
                .into_iter()
                .map(|x| PartialRegex::concat(x, Rc::clone(r)))
                .collect();
            pieces.extend(
                split(r)
                    .into_iter()
                    .map(|y| PartialRegex::concat(Rc::clone(l), y)),
            );
            pieces
        }
        Kind::Star(_) => vec![Rc::clone(node)],
        Kind::Optional(c) => {
            let mut pieces = vec![Rc::clone(node)];
            pieces.extend(split(c));
            pieces
        }
    }
}
