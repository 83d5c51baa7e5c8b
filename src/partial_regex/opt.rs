use super::node::{Kind, PartialRegex};
use std::rc::Rc;

/// Rewrite a tree to a semantically-equivalent, cheaper-or-equal-cost tree.
/// Bottom-up: both children are optimised before the parent is inspected.
/// Idempotent (`opt(opt(t)) == opt(t)`) and preserves the language.
pub(crate) fn opt(node: &Rc<PartialRegex>) -> Rc<PartialRegex> {
    match node.kind() {
        Kind::Literal(_) | Kind::EmptyString | Kind::EmptyLanguage | Kind::Hole => {
            Rc::clone(node)
        }
        Kind::Concat(l, r) => opt_concat(opt(l), opt(r)),
        Kind::Union(l, r) => opt_union(opt(l), opt(r)),
        Kind::Star(c) => opt_star(opt(c)),
        Kind::Optional(c) => opt_optional(opt(c)),
    }
}

fn is_empty_language(n: &PartialRegex) -> bool {
    matches!(n.kind(), Kind::EmptyLanguage)
}
fn is_empty_string(n: &PartialRegex) -> bool {
    matches!(n.kind(), Kind::EmptyString)
}

fn opt_concat(e1: Rc<PartialRegex>, e2: Rc<PartialRegex>) -> Rc<PartialRegex> {
    if is_empty_language(&e1) || is_empty_language(&e2) {
        return PartialRegex::empty_language();
    }
    if is_empty_string(&e1) {
        return e2;
    }
    if is_empty_string(&e2) {
        return e1;
    }
    // e*e* -> e*
    if let (Kind::Star(x), Kind::Star(y)) = (e1.kind(), e2.kind()) {
        if x == y {
            return PartialRegex::star(Rc::clone(x));
        }
    }
    // e*e? -> e*
    if let (Kind::Star(x), Kind::Optional(y)) = (e1.kind(), e2.kind()) {
        if x == y {
            return PartialRegex::star(Rc::clone(x));
        }
    }
    // e?e* -> e*
    if let (Kind::Optional(x), Kind::Star(y)) = (e1.kind(), e2.kind()) {
        if x == y {
            return PartialRegex::star(Rc::clone(y));
        }
    }
    // (f·e*)·e* -> f·e*, (f·e?)·e* -> f·e*, (f·e*)·e? -> f·e*
    if let Kind::Concat(f, g) = e1.kind() {
        if let (Kind::Star(x), Kind::Star(y)) = (g.kind(), e2.kind()) {
            if x == y {
                return PartialRegex::concat(Rc::clone(f), PartialRegex::star(Rc::clone(x)));
            }
        }
        if let (Kind::Optional(x), Kind::Star(y)) = (g.kind(), e2.kind()) {
            if x == y {
                return PartialRegex::concat(Rc::clone(f), PartialRegex::star(Rc::clone(x)));
            }
        }
        if let (Kind::Star(x), Kind::Optional(y)) = (g.kind(), e2.kind()) {
            if x == y {
                return PartialRegex::concat(Rc::clone(f), PartialRegex::star(Rc::clone(x)));
            }
        }
    }
    // e*·(e*·f) -> e*·f, e?·(e*·f) -> e*·f, e*·(e?·f) -> e*·f
    if let Kind::Concat(f, g) = e2.kind() {
        if let (Kind::Star(x), Kind::Star(y)) = (e1.kind(), f.kind()) {
            if x == y {
                return PartialRegex::concat(PartialRegex::star(Rc::clone(x)), Rc::clone(g));
            }
        }
        if let (Kind::Optional(x), Kind::Star(y)) = (e1.kind(), f.kind()) {
            if x == y {
                return PartialRegex::concat(PartialRegex::star(Rc::clone(y)), Rc::clone(g));
            }
        }
        if let (Kind::Star(x), Kind::Optional(y)) = (e1.kind(), f.kind()) {
            if x == y {
                return PartialRegex::concat(PartialRegex::star(Rc::clone(x)), Rc::clone(g));
            }
        }
    }
    PartialRegex::concat(e1, e2)
}

fn opt_union(e1: Rc<PartialRegex>, e2: Rc<PartialRegex>) -> Rc<PartialRegex> {
    if is_empty_language(&e1) {
        return e2;
    }
    if is_empty_language(&e2) {
        return e1;
    }
    if is_empty_string(&e1) {
        return PartialRegex::optional(e2);
    }
    if is_empty_string(&e2) {
        return PartialRegex::optional(e1);
    }
    if e1 == e2 {
        return e1;
    }
    // e|e* -> e*, e*|e -> e*
    if let Kind::Star(x) = e2.kind() {
        if &e1 == x {
            return PartialRegex::star(Rc::clone(x));
        }
    }
    if let Kind::Star(x) = e1.kind() {
        if &e2 == x {
            return PartialRegex::star(Rc::clone(x));
        }
    }
    // e|e? -> e?, e?|e -> e?
    if let Kind::Optional(x) = e2.kind() {
        if &e1 == x {
            return PartialRegex::optional(Rc::clone(x));
        }
    }
    if let Kind::Optional(x) = e1.kind() {
        if &e2 == x {
            return PartialRegex::optional(Rc::clone(x));
        }
    }
    // three-way absorption through an inner Union on the left: (f1|f2)|e2* / (f1|f2)|e2?
    if let Kind::Union(f1, f2) = e1.kind() {
        if let Kind::Star(x) = e2.kind() {
            if f1 == x {
                return PartialRegex::union(Rc::clone(f2), Rc::clone(&e2));
            }
            if f2 == x {
                return PartialRegex::union(Rc::clone(f1), Rc::clone(&e2));
            }
        }
        if let Kind::Optional(x) = e2.kind() {
            if f1 == x {
                return PartialRegex::union(Rc::clone(f2), Rc::clone(&e2));
            }
            if f2 == x {
                return PartialRegex::union(Rc::clone(f1), Rc::clone(&e2));
            }
        }
    }
    // mirror: inner Union on the right: e1*|(f1|f2) / e1?|(f1|f2)
    if let Kind::Union(f1, f2) = e2.kind() {
        if let Kind::Star(x) = e1.kind() {
            if f1 == x {
                return PartialRegex::union(Rc::clone(&e1), Rc::clone(f2));
            }
            if f2 == x {
                return PartialRegex::union(Rc::clone(&e1), Rc::clone(f1));
            }
        }
        if let Kind::Optional(x) = e1.kind() {
            if f1 == x {
                return PartialRegex::union(Rc::clone(&e1), Rc::clone(f2));
            }
            if f2 == x {
                return PartialRegex::union(Rc::clone(&e1), Rc::clone(f1));
            }
        }
    }
    PartialRegex::union(e1, e2)
}

fn opt_star(e: Rc<PartialRegex>) -> Rc<PartialRegex> {
    match e.kind() {
        Kind::EmptyLanguage => PartialRegex::empty_language(),
        Kind::EmptyString => PartialRegex::empty_string(),
        Kind::Star(inner) => PartialRegex::star(Rc::clone(inner)),
        Kind::Optional(inner) => PartialRegex::star(Rc::clone(inner)),
        Kind::Concat(e1, e2) => {
            // (e·e*)* -> e*
            if let Kind::Star(x) = e2.kind() {
                if e1 == x {
                    return PartialRegex::star(Rc::clone(x));
                }
            }
            // (e*·e)* -> e*
            if let Kind::Star(x) = e1.kind() {
                if e2 == x {
                    return PartialRegex::star(Rc::clone(x));
                }
            }
            // (e*·f*)* -> (e|f)*
            if let (Kind::Star(x), Kind::Star(y)) = (e1.kind(), e2.kind()) {
                return PartialRegex::star(PartialRegex::union(Rc::clone(x), Rc::clone(y)));
            }
            // (e?·f?)* -> (e|f)*
            if let (Kind::Optional(x), Kind::Optional(y)) = (e1.kind(), e2.kind()) {
                return PartialRegex::star(PartialRegex::union(Rc::clone(x), Rc::clone(y)));
            }
            // (e?·e)* -> e*
            if let Kind::Optional(x) = e1.kind() {
                if e2 == x {
                    return PartialRegex::star(Rc::clone(x));
                }
            }
            // (e·e?)* -> e*
            if let Kind::Optional(x) = e2.kind() {
                if e1 == x {
                    return PartialRegex::star(Rc::clone(x));
                }
            }
            PartialRegex::star(e)
        }
        _ => PartialRegex::star(e),
    }
}

fn opt_optional(e: Rc<PartialRegex>) -> Rc<PartialRegex> {
    match e.kind() {
        Kind::EmptyLanguage => PartialRegex::empty_string(),
        Kind::EmptyString => PartialRegex::empty_string(),
        Kind::Star(inner) => PartialRegex::star(Rc::clone(inner)),
        Kind::Optional(inner) => PartialRegex::optional(Rc::clone(inner)),
        Kind::Concat(e1, e2) => {
            // (e·e*)? -> e*
            if let Kind::Star(x) = e2.kind() {
                if e1 == x {
                    return PartialRegex::star(Rc::clone(x));
                }
            }
            // (e*·e)? -> e*
            if let Kind::Star(x) = e1.kind() {
                if e2 == x {
                    return PartialRegex::star(Rc::clone(x));
                }
            }
            // (e*·f*)? -> e*·f*
            if let (Kind::Star(x), Kind::Star(y)) = (e1.kind(), e2.kind()) {
                return PartialRegex::concat(
                    PartialRegex::star(Rc::clone(x)),
                    PartialRegex::star(Rc::clone(y)),
                );
            }
            // (e?·f?)? -> e?·f?
            if let (Kind::Optional(x), Kind::Optional(y)) = (e1.kind(), e2.kind()) {
                return PartialRegex::concat(
                    PartialRegex::optional(Rc::clone(x)),
                    PartialRegex::optional(Rc::clone(y)),
                );
            }
            PartialRegex::optional(e)
        }
        _ => PartialRegex::optional(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(c: char) -> Rc<PartialRegex> {
        PartialRegex::literal(&c.to_string())
    }

    #[test]
    fn concat_absorbs_empty_language() {
        let t = PartialRegex::concat(lit('a'), PartialRegex::empty_language());
        assert_eq!(opt(&t).render(), "∅");
    }

    #[test]
    fn concat_drops_empty_string() {
        let t = PartialRegex::concat(PartialRegex::empty_string(), lit('a'));
        assert_eq!(opt(&t).render(), "a");
    }

    #[test]
    fn star_star_collapses() {
        let t = PartialRegex::star(PartialRegex::star(lit('a')));
        assert_eq!(opt(&t).render(), "a*");
    }

    #[test]
    fn union_idempotence() {
        let t = PartialRegex::union(lit('a'), lit('a'));
        assert_eq!(opt(&t).render(), "a");
    }

    #[test]
    fn union_with_star_absorbs() {
        let t = PartialRegex::union(lit('a'), PartialRegex::star(lit('a')));
        assert_eq!(opt(&t).render(), "a*");
    }

    #[test]
    fn union_empty_string_becomes_optional() {
        let t = PartialRegex::union(PartialRegex::empty_string(), lit('a'));
        assert_eq!(opt(&t).render(), "a?");
    }

    #[test]
    fn opt_is_idempotent() {
        let t = PartialRegex::concat(
            PartialRegex::union(lit('a'), PartialRegex::star(lit('a'))),
            PartialRegex::empty_string(),
        );
        let once = opt(&t);
        let twice = opt(&once);
        assert_eq!(once.render(), twice.render());
    }

    #[test]
    fn three_way_union_absorption() {
        // (a|b)|a* -> b|a*
        let t = PartialRegex::union(
            PartialRegex::union(lit('a'), lit('b')),
            PartialRegex::star(lit('a')),
        );
        assert_eq!(opt(&t).render(), "(b|a*)");
    }
}
