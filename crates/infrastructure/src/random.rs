use keywatch_application::services::RandomSource;

/// fastrand-backed index source for production resolver selection.
pub struct FastrandSource;

impl RandomSource for FastrandSource {
    fn next_index(&self, bound: usize) -> usize {
        fastrand::usize(..bound)
    }
}
