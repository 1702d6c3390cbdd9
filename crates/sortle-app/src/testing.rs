use sortle_core::{Item, Puzzle, Zone};

pub(crate) const SAMPLE_PUZZLE_JSON: &str = r#"{
    "id": "test",
    "left_label": "Fruit",
    "right_label": "Red",
    "items": [
        {"id": "l1", "text": "Apple", "zone": "left"},
        {"id": "r1", "text": "Fire truck", "zone": "right"},
        {"id": "b1", "text": "Strawberry", "zone": "both"},
        {"id": "l2", "text": "Banana", "zone": "left"},
        {"id": "o1", "text": "Cloud", "zone": "outside"},
        {"id": "l3", "text": "Pear", "zone": "left"},
        {"id": "r2", "text": "Stop sign", "zone": "right"},
        {"id": "l4", "text": "Grape", "zone": "left"},
        {"id": "o2", "text": "Ocean", "zone": "outside"},
        {"id": "l5", "text": "Kiwi", "zone": "left", "explanation": "Green inside"}
    ]
}"#;

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
