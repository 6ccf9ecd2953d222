/// Source of uniform random indices. Passed in explicitly so tests can
/// pin the choice; production wires a fastrand-backed implementation.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..bound`. `bound` is never 0.
    fn next_index(&self, bound: usize) -> usize;
}

/// Uniformly random choice among the normalized resolver set. Spreads
/// query load across the configured servers without keeping round-robin
/// state between passes.
pub struct ResolverPicker {
    random: std::sync::Arc<dyn RandomSource>,
}

impl ResolverPicker {
    pub fn new(random: std::sync::Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// `None` only for an empty set, which cannot occur after defaults
    /// are applied.
    pub fn pick<'a>(&self, resolvers: &'a [String]) -> Option<&'a str> {
        if resolvers.is_empty() {
            return None;
        }
        Some(resolvers[self.random.next_index(resolvers.len())].as_str())
    }
}
