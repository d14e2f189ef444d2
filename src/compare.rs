//! Comparator resolution
//!
//! The type/direction choice is a small closed set resolved once at startup
//! into a concrete ordering function. The element type is fixed by the
//! generic parameter when the pipeline instantiates the sort, so the hot
//! comparison path carries no runtime type dispatch.

use crate::config::SortOrder;
use std::cmp::Ordering;

/// Resolve a sort order into a total-order comparator over `T`.
///
/// Ascending is the natural `Ord` comparison; descending reverses it.
/// The returned closure is side-effect free and never fails.
pub fn ordering<T: Ord>(order: SortOrder) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| match order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => b.cmp(a),
    }
}
