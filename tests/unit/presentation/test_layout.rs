use cardio_client::prelude::*;
use serde_json::{Map, Value, json};

fn strs(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

fn card_type(fields: &[&str], layout: CardLayout) -> CardType {
    CardType {
        id: 1,
        name: "test type".to_string(),
        description: String::new(),
        fields: strs(fields),
        layout,
        created_at: None,
        owner: None,
    }
}

fn starter_type(layout: CardLayout) -> CardType {
    card_type(
        &["problem", "difficulty", "category", "hint", "pseudo", "solution", "complexity"],
        layout,
    )
}

fn data(keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .map(|k| (k.to_string(), json!("value")))
        .collect()
}

#[test]
fn starter_type_is_detected_regardless_of_field_order() {
    let mut ct = starter_type(CardLayout::default());
    ct.fields.reverse();
    assert!(is_starter_card_type(&ct));
}

#[test]
fn starter_detection_requires_the_exact_field_set() {
    let mut extra = starter_type(CardLayout::default());
    extra.fields.push("notes".to_string());
    assert!(!is_starter_card_type(&extra));

    let mut short = starter_type(CardLayout::default());
    short.fields.pop();
    assert!(!is_starter_card_type(&short));
}

#[test]
fn starter_type_without_layout_gets_the_classic_split() {
    let ct = starter_type(CardLayout::default());
    let resolved = resolve_layout(&ct, &data(&[]));

    assert_eq!(
        resolved.front,
        strs(&["problem", "difficulty", "category", "hint", "pseudo"])
    );
    assert_eq!(resolved.back, strs(&["solution", "complexity"]));
}

#[test]
fn starter_type_keeps_a_declared_front_but_fills_a_missing_back() {
    let ct = starter_type(CardLayout {
        front: strs(&["problem"]),
        ..CardLayout::default()
    });
    let resolved = resolve_layout(&ct, &data(&[]));

    assert_eq!(resolved.front, strs(&["problem"]));
    assert_eq!(resolved.back, strs(&["solution", "complexity"]));
}

#[test]
fn custom_type_without_front_puts_all_fields_on_the_front() {
    let ct = card_type(&["question", "answer"], CardLayout::default());
    let resolved = resolve_layout(&ct, &data(&[]));

    assert_eq!(resolved.front, strs(&["question", "answer"]));
    assert!(resolved.back.is_empty());
}

#[test]
fn custom_type_uses_its_declared_zones() {
    let ct = card_type(
        &["question", "answer"],
        CardLayout {
            front: strs(&["question"]),
            back: strs(&["answer"]),
            ..CardLayout::default()
        },
    );
    let resolved = resolve_layout(&ct, &data(&[]));

    assert_eq!(resolved.front, strs(&["question"]));
    assert_eq!(resolved.back, strs(&["answer"]));
}

#[test]
fn undeclared_fields_fall_back_to_card_data_keys() {
    let ct = card_type(&[], CardLayout::default());
    let resolved = resolve_layout(&ct, &data(&["answer", "question"]));

    // map keys come back sorted
    assert_eq!(resolved.front, strs(&["answer", "question"]));
}

#[test]
fn declared_preview_wins() {
    let ct = starter_type(CardLayout {
        preview: strs(&["category"]),
        ..CardLayout::default()
    });
    assert_eq!(preview_fields(&ct, &data(&[])), strs(&["category"]));
}

#[test]
fn preview_falls_back_to_problem_and_difficulty() {
    let ct = starter_type(CardLayout::default());
    assert_eq!(
        preview_fields(&ct, &data(&[])),
        strs(&["problem", "difficulty"])
    );
}

#[test]
fn preview_falls_back_to_the_first_two_fields() {
    let ct = card_type(&["question", "answer", "notes"], CardLayout::default());
    assert_eq!(
        preview_fields(&ct, &data(&[])),
        strs(&["question", "answer"])
    );
}

#[test]
fn hidden_fields_are_excluded_from_visible_fields() {
    let ct = card_type(
        &["question", "answer", "mnemonic"],
        CardLayout {
            hidden: strs(&["mnemonic"]),
            ..CardLayout::default()
        },
    );
    assert_eq!(
        visible_fields(&ct, &data(&[])),
        strs(&["question", "answer"])
    );
}
