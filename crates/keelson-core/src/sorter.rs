//! Weight, kind, and name ordering shared by hooks and manifests.

use keelson_schema::{Hook, Manifest, SortOrder};
use std::cmp::Ordering;

/// Anything that can be placed in an apply or delete sequence.
pub trait Sortable {
    fn weight(&self) -> i64;
    fn kind(&self) -> &str;
    /// Final tie-breaker, compared ascending in both directions.
    fn sort_name(&self) -> &str;
}

impl Sortable for Manifest {
    fn weight(&self) -> i64 {
        self.weight
    }

    fn kind(&self) -> &str {
        &self.head.kind
    }

    fn sort_name(&self) -> &str {
        &self.name
    }
}

impl Sortable for Hook {
    fn weight(&self) -> i64 {
        self.weight
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn sort_name(&self) -> &str {
        &self.name
    }
}

/// Compare two items for the given direction.
///
/// Weight ascends on install and descends on uninstall. The kind index comes
/// from the direction's own table and always ascends. Names always ascend.
pub fn compare<T: Sortable + ?Sized>(a: &T, b: &T, order: SortOrder) -> Ordering {
    let by_weight = match order {
        SortOrder::Install => a.weight().cmp(&b.weight()),
        SortOrder::Uninstall => b.weight().cmp(&a.weight()),
    };
    by_weight
        .then_with(|| order.kind_index(a.kind()).cmp(&order.kind_index(b.kind())))
        .then_with(|| a.sort_name().cmp(b.sort_name()))
}

/// Stable in-place sort of `items` for the given direction.
pub fn sort_by_kind<T: Sortable>(items: &mut [T], order: SortOrder) {
    items.sort_by(|a, b| compare(a, b, order));
}
