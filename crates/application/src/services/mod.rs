mod resolver_picker;

pub use resolver_picker::{RandomSource, ResolverPicker};
