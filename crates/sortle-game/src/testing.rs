//! Shared fixtures for unit tests.

use sortle_core::{Item, Puzzle, Zone};

/// Five left items, two right, one in both, two outside.
pub(crate) fn sample_puzzle() -> Puzzle {
    let items = vec![
        Item::new("l1", "Apple", Zone::Left),
        Item::new("r1", "Fire truck", Zone::Right),
        Item::new("b1", "Strawberry", Zone::Both),
        Item::new("l2", "Banana", Zone::Left),
        Item::new("o1", "Cloud", Zone::Outside),
        Item::new("l3", "Pear", Zone::Left),
        Item::new("r2", "Stop sign", Zone::Right),
        Item::new("l4", "Grape", Zone::Left),
        Item::new("o2", "Ocean", Zone::Outside),
        Item::new("l5", "Kiwi", Zone::Left).with_explanation("Green inside"),
    ];
    Puzzle::new("test", "Fruit", "Red", items).expect("fixture is valid")
}
