//! Reorder Utilities
//!
//! Pure list operations behind drag-reorder and renumbering.

use crate::models::OrderableItem;

/// Move the element at `from` to `to`, shifting everything in between.
/// Returns a new list; out-of-range indices yield an unchanged copy.
pub fn reorder<T: Clone>(list: &[T], from: usize, to: usize) -> Vec<T> {
    let mut result = list.to_vec();
    if from >= list.len() || to >= list.len() {
        return result;
    }
    let moved = result.remove(from);
    result.insert(to, moved);
    result
}

/// Copy of `list` with each `order` set to its array index
pub fn renumbered(list: &[OrderableItem]) -> Vec<OrderableItem> {
    list.iter()
        .enumerate()
        .map(|(i, item)| item.clone().with_order(i as i32))
        .collect()
}

/// Copy of `list` without the item `id`
pub fn without(list: &[OrderableItem], id: &str) -> Vec<OrderableItem> {
    list.iter().filter(|item| item.id != id).cloned().collect()
}

/// Whether every item's `order` equals its position
pub fn is_contiguous(list: &[OrderableItem]) -> bool {
    list.iter().enumerate().all(|(i, item)| item.order == i as i32)
}

/// Stable sort ascending by `order`
pub fn sort_by_order(list: &mut [OrderableItem]) {
    list.sort_by_key(|item| item.order);
}
