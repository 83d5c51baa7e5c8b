use once_cell::unsync::OnceCell;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The shape of a partial regex node. Kept `pub(crate)` so the sibling
/// modules of this package (`opt`, `approx`, `expand`) can match on the
/// concrete structure, while [PartialRegex] itself stays an opaque handle to
/// anyone outside the crate.
#[derive(Debug, Clone)]
pub(crate) enum Kind {
    Literal(char),
    EmptyString,
    EmptyLanguage,
    Concat(Rc<PartialRegex>, Rc<PartialRegex>),
    Union(Rc<PartialRegex>, Rc<PartialRegex>),
    Star(Rc<PartialRegex>),
    Optional(Rc<PartialRegex>),
    Hole,
}

/// An immutable node in a partial regex tree.
///
/// Two trees are equal, and hash identically, iff their canonical rendered
/// forms match (see [PartialRegex::render]) — not iff their internal
/// [Kind] structure is identical. Cost and the rendered string are each
/// computed once and memoised.
pub struct PartialRegex {
    kind: Kind,
    rendered: OnceCell<String>,
    cost: OnceCell<u32>,
}

impl PartialRegex {
    fn from_kind(kind: Kind) -> Rc<Self> {
        Rc::new(Self {
            kind,
            rendered: OnceCell::new(),
            cost: OnceCell::new(),
        })
    }

    pub(crate) fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Build a one-character literal. Panics if `symbol` is not exactly one
    /// character — a programmer error, not a recoverable input error (the
    /// caller controls every literal constructed during search).
    pub fn literal(symbol: &str) -> Rc<Self> {
        let mut chars = symbol.chars();
        let c = chars
            .next()
            .unwrap_or_else(|| panic!("Literal requires exactly one character, got empty string"));
        if chars.next().is_some() {
            panic!("Literal requires exactly one character, got `{}`", symbol);
        }
        Self::from_kind(Kind::Literal(c))
    }

    pub fn empty_string() -> Rc<Self> {
        Self::from_kind(Kind::EmptyString)
    }

    pub fn empty_language() -> Rc<Self> {
        Self::from_kind(Kind::EmptyLanguage)
    }

    pub fn hole() -> Rc<Self> {
        Self::from_kind(Kind::Hole)
    }

    pub fn concat(left: Rc<Self>, right: Rc<Self>) -> Rc<Self> {
        Self::from_kind(Kind::Concat(left, right))
    }

    pub fn union(left: Rc<Self>, right: Rc<Self>) -> Rc<Self> {
        Self::from_kind(Kind::Union(left, right))
    }

    pub fn star(child: Rc<Self>) -> Rc<Self> {
        Self::from_kind(Kind::Star(child))
    }

    pub fn optional(child: Rc<Self>) -> Rc<Self> {
        Self::from_kind(Kind::Optional(child))
    }

    /// Canonical surface-syntax rendering, with the peephole flattening
    /// rules applied so structurally distinct trees that denote the same
    /// surface form compare equal.
    pub fn render(&self) -> &str {
        self.rendered.get_or_init(|| render_kind(&self.kind))
    }

    /// Syntactic cost used to order the search's priority queue. Memoised.
    pub fn cost(&self) -> u32 {
        *self.cost.get_or_init(|| cost_kind(&self.kind))
    }

    /// Depth of the tree, counting a leaf as depth 1.
    pub fn depth(&self) -> u32 {
        match &self.kind {
            Kind::Hole => 1,
            Kind::Star(c) | Kind::Optional(c) => c.depth() + 1,
            Kind::Concat(l, r) | Kind::Union(l, r) => l.depth().max(r.depth()) + 1,
            Kind::Literal(_) | Kind::EmptyString | Kind::EmptyLanguage => 1,
        }
    }
}

impl PartialEq for PartialRegex {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}
impl Eq for PartialRegex {}

impl Hash for PartialRegex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.render().hash(state)
    }
}

impl Display for PartialRegex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Debug for PartialRegex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PartialRegex({})", self.render())
    }
}

fn cost_kind(kind: &Kind) -> u32 {
    match kind {
        Kind::Literal(_) | Kind::EmptyString | Kind::EmptyLanguage => 1,
        Kind::Concat(l, r) => l.cost() + r.cost() + 5,
        Kind::Union(l, r) => l.cost() + r.cost() + 30,
        Kind::Star(c) => c.cost() + 20,
        Kind::Optional(c) => c.cost() + 20,
        Kind::Hole => 100,
    }
}

fn render_node(node: &PartialRegex) -> String {
    node.render().to_string()
}

/// Wraps `x` in parentheses when rendering it as the operand of a trailing
/// `?`, matching the grouping rule shared by `Union(ε, x)` and `Optional`.
fn wrap_optional_operand(x: &PartialRegex) -> String {
    match x.kind() {
        Kind::Concat(_, _) | Kind::Union(_, _) => format!("({})?", render_node(x)),
        _ => format!("{}?", render_node(x)),
    }
}

fn render_kind(kind: &Kind) -> String {
    match kind {
        Kind::Literal(c) => c.to_string(),
        Kind::EmptyString => "ε".to_string(),
        Kind::EmptyLanguage => "∅".to_string(),
        Kind::Hole => "□".to_string(),
        Kind::Concat(l, r) => render_concat(l, r),
        Kind::Union(l, r) => render_union(l, r),
        Kind::Star(c) => render_star(c),
        Kind::Optional(c) => render_optional(c),
    }
}

fn render_concat(left: &PartialRegex, right: &PartialRegex) -> String {
    if matches!(left.kind(), Kind::EmptyString) {
        return render_node(right);
    }
    if matches!(right.kind(), Kind::EmptyString) {
        return render_node(left);
    }
    if matches!(left.kind(), Kind::EmptyLanguage) || matches!(right.kind(), Kind::EmptyLanguage) {
        return "∅".to_string();
    }
    format!("{}{}", render_node(left), render_node(right))
}

fn render_union(left: &PartialRegex, right: &PartialRegex) -> String {
    if matches!(left.kind(), Kind::EmptyString) {
        return wrap_optional_operand(right);
    }
    if matches!(right.kind(), Kind::EmptyString) {
        return wrap_optional_operand(left);
    }
    if matches!(left.kind(), Kind::EmptyLanguage) {
        return render_node(right);
    }
    if matches!(right.kind(), Kind::EmptyLanguage) {
        return render_node(left);
    }
    format!("({}|{})", render_node(left), render_node(right))
}

fn render_star(child: &PartialRegex) -> String {
    match child.kind() {
        Kind::EmptyString => "ε".to_string(),
        Kind::EmptyLanguage => "∅".to_string(),
        Kind::Star(inner) => render_star(inner),
        Kind::Concat(e1, e2) => {
            if let (Kind::Star(e), Kind::Star(f)) = (e1.kind(), e2.kind()) {
                return format!("({}|{})*", render_node(e), render_node(f));
            }
            format!("({})*", render_node(child))
        }
        Kind::Literal(c) => format!("{}*", c),
        _ => format!("({})*", render_node(child)),
    }
}

fn render_optional(child: &PartialRegex) -> String {
    wrap_optional_operand(child)
}
