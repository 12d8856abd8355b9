//! Configuration for the composed deduplication entry points.

/// Which sort the position builder uses to group equivalent items.
///
/// Both choices yield positions in ascending order. They differ only in which
/// member of an equivalence class survives when the ordering relation considers
/// two items equal that are not identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stability {
    /// Stable merge sort: the earliest member of every class is kept.
    #[default]
    Stable,
    /// In-place heapsort: no merge buffer, the surviving member is unspecified.
    Unstable,
}

/// Options for [`dedup_with`](crate::algo::dedup_with) and
/// [`uniquify_with`](crate::algo::uniquify_with).
///
/// # Examples
///
/// ```
/// use stabuniq::config::{Options, Stability};
///
/// let options = Options::default().with_stability(Stability::Unstable);
///
/// assert_eq!(options.stability, Stability::Unstable);
/// assert_eq!(Options::default().stability, Stability::Stable);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Sort used by the position builder.
    pub stability: Stability,
}

impl Options {
    pub fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }
}
