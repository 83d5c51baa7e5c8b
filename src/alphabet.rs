use std::collections::HashSet;

/// The default alphabet used when none is given explicitly on the command
/// line: the binary digits, matching the corpus this search engine's test
/// suite was built against.
pub const DEFAULT_ALPHABET: &[char] = &['0', '1'];

/// Splits a comma-free alphabet string (`"01"`, `"abc"`) into its symbols,
/// rejecting `X`, which is reserved as the example wildcard placeholder.
pub fn parse_alphabet(raw: &str) -> Vec<char> {
    raw.chars().filter(|&c| c != 'X').collect()
}

/// Collects the distinct non-wildcard symbols appearing across `examples`,
/// in the style of the original `get_literals` helper this is grounded on:
/// scan every example, remember every symbol seen, excluding the wildcard
/// placeholder `X` itself (which is synonymous with `.` and never a literal
/// member of the detected alphabet).
pub fn detect_from_examples<'a, I: IntoIterator<Item = &'a str>>(examples: I) -> Vec<char> {
    let mut seen = Vec::new();
    let mut present: HashSet<char> = HashSet::new();
    present.insert('X');
    present.insert('.');
    for example in examples {
        for symbol in example.chars() {
            if present.insert(symbol) {
                seen.push(symbol);
            }
        }
    }
    seen
}

/// Expands every `X` in `example` into every symbol of `alphabet`, one
/// substitution at a time, left to right — so an example with `k`
/// occurrences of `X` expands into `alphabet.len().pow(k)` concrete
/// examples.
pub fn inflate(example: &str, alphabet: &[char]) -> Vec<String> {
    match example.find('X') {
        None => vec![example.to_string()],
        Some(index) => {
            let mut out = Vec::new();
            for &symbol in alphabet {
                let mut replaced = String::with_capacity(example.len());
                replaced.push_str(&example[..index]);
                replaced.push(symbol);
                replaced.push_str(&example[index + 1..]);
                out.extend(inflate(&replaced, alphabet));
            }
            out
        }
    }
}

/// Applies [inflate] across a whole set of examples, deduplicating the
/// result (two differently-placed wildcards can inflate to the same
/// concrete string).
pub fn inflate_all(examples: &HashSet<String>, alphabet: &[char]) -> HashSet<String> {
    let mut out = HashSet::new();
    for example in examples {
        out.extend(inflate(example, alphabet));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_from_examples_collects_distinct_symbols_excluding_wildcard() {
        let examples = ["0", "00", "01", "001"];
        let mut alphabet = detect_from_examples(examples);
        alphabet.sort_unstable();
        assert_eq!(alphabet, vec!['0', '1']);
    }

    #[test]
    fn inflate_single_wildcard_yields_one_example_per_symbol() {
        let alphabet = ['0', '1'];
        let mut out = inflate("X", &alphabet);
        out.sort();
        assert_eq!(out, vec!["0".to_string(), "1".to_string()]);
    }

    #[test]
    fn inflate_double_wildcard_yields_cartesian_product() {
        let alphabet = ['0', '1'];
        let mut out = inflate("XX", &alphabet);
        out.sort();
        assert_eq!(
            out,
            vec![
                "00".to_string(),
                "01".to_string(),
                "10".to_string(),
                "11".to_string(),
            ]
        );
    }

    #[test]
    fn inflate_without_a_wildcard_is_the_identity() {
        let alphabet = ['0', '1'];
        assert_eq!(inflate("01", &alphabet), vec!["01".to_string()]);
    }

    #[test]
    fn inflate_all_deduplicates_across_the_set() {
        let alphabet = ['0', '1'];
        let examples: HashSet<String> = ["X".to_string(), "0".to_string()].into_iter().collect();
        let inflated = inflate_all(&examples, &alphabet);
        let mut sorted: Vec<&String> = inflated.iter().collect();
        sorted.sort();
        assert_eq!(sorted, vec!["0", "1"]);
    }
}
