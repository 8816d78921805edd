//! Spell a vertex walk back into a sequence.

/// First vertex verbatim, then the last character of every later vertex.
///
/// Pre: consecutive vertices overlap by all but one character (true for any
/// walk over a graph from `graph::build_graph`); not re-checked here.
/// An empty walk spells the empty string.
pub fn reconstruct_sequence<'a, I>(vertices: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut iter = vertices.into_iter();
    let Some(first) = iter.next() else {
        return String::new();
    };
    let mut seq = String::from(first);
    seq.extend(iter.filter_map(|v| v.chars().next_back()));
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_last_char_of_each_following_vertex() {
        assert_eq!(reconstruct_sequence(["AT", "TG", "GC", "CC"]), "ATGCC");
        assert_eq!(reconstruct_sequence(["AA", "AA", "AA"]), "AAAA");
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(reconstruct_sequence(["ACGT"]), "ACGT");
        assert_eq!(reconstruct_sequence(Vec::<&str>::new()), "");
    }
}
