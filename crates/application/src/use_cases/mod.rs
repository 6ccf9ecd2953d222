mod apply_defaults;
mod collect_keys;

pub use apply_defaults::ApplyDefaults;
pub use collect_keys::CollectKeys;
