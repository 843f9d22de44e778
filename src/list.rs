//! List Operations
//!
//! The four user intents (add, toggle, remove, reorder) as pure functions
//! over the item vector, plus the derived counter. The rendered view is a
//! projection of this vector; nothing else holds list state.

use crate::models::ShoppingItem;

/// Append a new unpurchased item at the end of the list.
///
/// The name is trimmed first; an empty or whitespace-only name is silently
/// ignored and `false` is returned.
pub fn add_item(items: &mut Vec<ShoppingItem>, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    let id = items.iter().map(|i| i.id).max().map_or(1, |m| m + 1);
    items.push(ShoppingItem {
        id,
        name: name.to_string(),
        purchased: false,
    });
    true
}

/// Flip the purchased flag of the addressed row. One call, one flip.
pub fn toggle_item(items: &mut [ShoppingItem], id: u32) {
    if let Some(item) = items.iter_mut().find(|i| i.id == id) {
        item.purchased = !item.purchased;
    }
}

/// Delete the addressed row. Irreversible, no confirmation.
pub fn remove_item(items: &mut Vec<ShoppingItem>, id: u32) {
    items.retain(|i| i.id != id);
}

/// Move a row immediately before `before`, or to the end when `None`.
///
/// Relative order of all other rows is preserved; purchased flags are
/// untouched.
pub fn place_item(items: &mut Vec<ShoppingItem>, id: u32, before: Option<u32>) {
    let from = match items.iter().position(|i| i.id == id) {
        Some(from) => from,
        None => return,
    };
    let item = items.remove(from);
    let to = before
        .and_then(|b| items.iter().position(|i| i.id == b))
        .unwrap_or(items.len());
    items.insert(to, item);
}

/// Whether `place_item` with the same arguments would change the order.
///
/// Pointer moves fire continuously during a drag, so callers use this to
/// skip the write when the row is already in the computed slot.
pub fn would_move(items: &[ShoppingItem], id: u32, before: Option<u32>) -> bool {
    let from = match items.iter().position(|i| i.id == id) {
        Some(from) => from,
        None => return false,
    };
    match before.and_then(|b| items.iter().position(|i| i.id == b)) {
        Some(to) => to != from && to != from + 1,
        None => from != items.len() - 1,
    }
}

/// Derived counter: (purchased, total). Never stored, always recomputed.
pub fn counts(items: &[ShoppingItem]) -> (usize, usize) {
    let purchased = items.iter().filter(|i| i.purchased).count();
    (purchased, items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[ShoppingItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_add_appends_unpurchased_in_order() {
        let mut items = Vec::new();
        assert!(add_item(&mut items, "Milk"));
        assert!(add_item(&mut items, "Bread"));
        assert_eq!(names(&items), vec!["Milk", "Bread"]);
        assert!(items.iter().all(|i| !i.purchased));
        assert_eq!(counts(&items), (0, 2));
    }

    #[test]
    fn test_add_trims_name() {
        let mut items = Vec::new();
        assert!(add_item(&mut items, "  Eggs  "));
        assert_eq!(items[0].name, "Eggs");
    }

    #[test]
    fn test_add_empty_is_silent_noop() {
        let mut items = Vec::new();
        add_item(&mut items, "Milk");
        assert!(!add_item(&mut items, ""));
        assert!(!add_item(&mut items, "   "));
        assert_eq!(names(&items), vec!["Milk"]);
        assert_eq!(counts(&items), (0, 1));
    }

    #[test]
    fn test_ids_are_unique_among_live_items() {
        let mut items = Vec::new();
        add_item(&mut items, "Milk");
        add_item(&mut items, "Bread");
        let first = items[0].id;
        remove_item(&mut items, first);
        add_item(&mut items, "Eggs");
        let mut ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_double_toggle_returns_to_original() {
        let mut items = Vec::new();
        add_item(&mut items, "Milk");
        add_item(&mut items, "Bread");
        let milk = items[0].id;

        toggle_item(&mut items, milk);
        assert_eq!(counts(&items), (1, 2));
        toggle_item(&mut items, milk);
        assert_eq!(counts(&items), (0, 2));
    }

    #[test]
    fn test_remove_leaves_survivors_counted() {
        let mut items = Vec::new();
        add_item(&mut items, "Milk");
        add_item(&mut items, "Bread");
        let (milk, bread) = (items[0].id, items[1].id);
        toggle_item(&mut items, milk);

        remove_item(&mut items, bread);
        assert_eq!(names(&items), vec!["Milk"]);
        assert_eq!(counts(&items), (1, 1));
    }

    #[test]
    fn test_place_before_first_moves_to_front() {
        let mut items = Vec::new();
        add_item(&mut items, "Milk");
        add_item(&mut items, "Bread");
        add_item(&mut items, "Eggs");
        let eggs = items[2].id;
        let milk = items[0].id;

        place_item(&mut items, eggs, Some(milk));
        assert_eq!(names(&items), vec!["Eggs", "Milk", "Bread"]);
    }

    #[test]
    fn test_place_none_moves_to_end() {
        let mut items = Vec::new();
        add_item(&mut items, "Milk");
        add_item(&mut items, "Bread");
        add_item(&mut items, "Eggs");
        let milk = items[0].id;

        place_item(&mut items, milk, None);
        assert_eq!(names(&items), vec!["Bread", "Eggs", "Milk"]);
    }

    #[test]
    fn test_place_preserves_flags_and_counts() {
        let mut items = Vec::new();
        add_item(&mut items, "Milk");
        add_item(&mut items, "Bread");
        add_item(&mut items, "Eggs");
        let bread = items[1].id;
        toggle_item(&mut items, bread);
        let before = counts(&items);

        let first = items[0].id;
        place_item(&mut items, bread, Some(first));
        assert_eq!(counts(&items), before);
        assert!(items[0].purchased);
        assert_eq!(items[0].name, "Bread");
    }

    #[test]
    fn test_place_preserves_other_relative_order() {
        let mut items = Vec::new();
        for name in ["A", "B", "C", "D"] {
            add_item(&mut items, name);
        }
        let b = items[1].id;
        place_item(&mut items, b, None);
        assert_eq!(names(&items), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_would_move_skips_in_place_slots() {
        let mut items = Vec::new();
        add_item(&mut items, "Milk");
        add_item(&mut items, "Bread");
        add_item(&mut items, "Eggs");
        let (milk, bread, eggs) = (items[0].id, items[1].id, items[2].id);

        // Milk is already before Bread, and Eggs is already last
        assert!(!would_move(&items, milk, Some(bread)));
        assert!(!would_move(&items, eggs, None));
        assert!(would_move(&items, milk, Some(eggs)));
        assert!(would_move(&items, milk, None));
        assert!(would_move(&items, eggs, Some(milk)));
    }

    #[test]
    fn test_duplicate_names_target_the_addressed_row() {
        let mut items = Vec::new();
        add_item(&mut items, "Milk");
        add_item(&mut items, "Milk");
        let second = items[1].id;

        toggle_item(&mut items, second);
        assert!(!items[0].purchased);
        assert!(items[1].purchased);

        remove_item(&mut items, second);
        assert_eq!(items.len(), 1);
        assert!(!items[0].purchased);
    }
}
