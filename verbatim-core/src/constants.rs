/// Verbatim system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Informal floor below which clustering survey responses is not meaningful.
/// Extraction reports fewer responses than this as insufficient.
pub const MIN_RESPONSES_FOR_CLUSTERING: usize = 5;

/// Cluster label reserved for points the density algorithm could not assign.
pub const NOISE_LABEL: i32 = -1;

/// Uninformative standalone answers rejected by the meaningful-text predicate.
pub const DENYLIST: &[&str] = &["yes", "no", "n/a", "na", "none", "null", "undefined"];
