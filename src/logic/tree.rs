//! Menu tree traversal logic
//!
//! Pure functions over the immutable `MenuItem` tree: item counting and
//! active-path computation.

use crate::menu::MenuItem;

/// Count every item in the tree (all levels)
pub fn count_items(items: &[MenuItem]) -> usize {
    items
        .iter()
        .map(|item| 1 + count_items(&item.children))
        .sum()
}

/// Compute the active path: the ordered chain of item ids from a root item
/// down to the deepest current item.
///
/// The current item is the one flagged `is_current`; when no item carries
/// that flag, the deepest `is_active` item is used instead. Returns an empty
/// path when the tree has no active location.
///
/// # Examples
/// ```
/// use slidemenu::menu::MenuItem;
/// use slidemenu::logic::tree::active_path;
///
/// let mut root = MenuItem::new(1, "Products");
/// let mut mid = MenuItem::new(2, "Widgets");
/// let mut leaf = MenuItem::new(3, "Sprockets");
/// leaf.is_current = true;
/// mid.children.push(leaf);
/// root.children.push(mid);
///
/// assert_eq!(active_path(&[root]), vec![1, 2, 3]);
/// ```
pub fn active_path(items: &[MenuItem]) -> Vec<u64> {
    if let Some(path) = find_path(items, &|item| item.is_current) {
        return path;
    }
    find_path(items, &|item| item.is_active).unwrap_or_default()
}

/// Depth-first search for the deepest item matching `pred`, returning the
/// id chain leading to it
fn find_path(items: &[MenuItem], pred: &dyn Fn(&MenuItem) -> bool) -> Option<Vec<u64>> {
    let mut best: Option<Vec<u64>> = None;

    for item in items {
        // A match deeper in the subtree wins over the item itself
        if let Some(mut sub) = find_path(&item.children, pred) {
            sub.insert(0, item.id);
            if best.as_ref().map_or(true, |b| sub.len() > b.len()) {
                best = Some(sub);
            }
        } else if pred(item) {
            let path = vec![item.id];
            if best.is_none() {
                best = Some(path);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_current(depth_of_current: usize) -> Vec<MenuItem> {
        // Linear chain 1 -> 2 -> 3, with is_current at the requested depth
        let mut leaf = MenuItem::new(3, "Leaf");
        leaf.is_current = depth_of_current == 3;
        let mut mid = MenuItem::new(2, "Mid");
        mid.is_current = depth_of_current == 2;
        mid.children.push(leaf);
        let mut root = MenuItem::new(1, "Root");
        root.is_current = depth_of_current == 1;
        root.children.push(mid);
        vec![root]
    }

    #[test]
    fn test_count_items_empty() {
        assert_eq!(count_items(&[]), 0);
    }

    #[test]
    fn test_count_items_nested() {
        let items = tree_with_current(0);
        assert_eq!(count_items(&items), 3);
    }

    #[test]
    fn test_count_items_siblings() {
        let items = vec![MenuItem::new(1, "A"), MenuItem::new(2, "B")];
        assert_eq!(count_items(&items), 2);
    }

    #[test]
    fn test_active_path_empty_without_flags() {
        let items = tree_with_current(0);
        assert!(active_path(&items).is_empty());
    }

    #[test]
    fn test_active_path_to_current_leaf() {
        let items = tree_with_current(3);
        assert_eq!(active_path(&items), vec![1, 2, 3]);
    }

    #[test]
    fn test_active_path_to_current_mid() {
        let items = tree_with_current(2);
        assert_eq!(active_path(&items), vec![1, 2]);
    }

    #[test]
    fn test_active_path_prefers_current_over_active() {
        let mut items = tree_with_current(2);
        // An is_active item elsewhere must not override is_current
        let mut other = MenuItem::new(9, "Other");
        other.is_active = true;
        items.push(other);
        assert_eq!(active_path(&items), vec![1, 2]);
    }

    #[test]
    fn test_active_path_falls_back_to_active() {
        let mut root = MenuItem::new(1, "Root");
        let mut child = MenuItem::new(2, "Child");
        child.is_active = true;
        root.children.push(child);
        assert_eq!(active_path(&[root]), vec![1, 2]);
    }
}
