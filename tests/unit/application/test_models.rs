use assert_json_diff::assert_json_eq;
use cardio_client::prelude::*;
use serde_json::json;

fn strs(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

#[test]
fn card_deserializes_data_and_legacy_mirrors() {
    let card: Card = serde_json::from_value(json!({
        "id": 12,
        "deck": 3,
        "card_type": 1,
        "data": {"problem": "Two Sum", "difficulty": "Easy"},
        "problem": "Two Sum",
        "difficulty": "Easy"
    }))
    .unwrap();

    assert_eq!(card.id, 12);
    assert_eq!(card.field("problem").as_deref(), Some("Two Sum"));
    assert_eq!(card.problem.as_deref(), Some("Two Sum"));
    assert!(card.solution.is_none());
}

#[test]
fn card_field_renders_non_string_values() {
    let card: Card = serde_json::from_value(json!({
        "id": 1,
        "deck": 1,
        "data": {"attempts": 3, "solved": true}
    }))
    .unwrap();

    assert_eq!(card.field("attempts").as_deref(), Some("3"));
    assert_eq!(card.field("solved").as_deref(), Some("true"));
    assert!(card.field("missing").is_none());
}

#[test]
fn card_request_omits_an_unset_card_type() {
    let request = CardRequest {
        deck: 3,
        card_type: None,
        data: serde_json::Map::new(),
    };

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"deck": 3, "data": {}})
    );
}

#[test]
fn generated_card_tolerates_missing_fields() {
    let draft: GeneratedCard =
        serde_json::from_value(json!({"problem": "Two Sum", "solution": "Use a hash map"}))
            .unwrap();

    assert_eq!(draft.problem, "Two Sum");
    assert_eq!(draft.solution, "Use a hash map");
    assert!(draft.hint.is_empty());
}

#[test]
fn deck_patch_serializes_only_the_set_attributes() {
    let patch = DeckPatch {
        shared: Some(true),
        ..DeckPatch::default()
    };

    assert_json_eq!(serde_json::to_value(&patch).unwrap(), json!({"shared": true}));
}

#[test]
fn deck_deserializes_with_defaults_for_optional_attributes() {
    let deck: Deck = serde_json::from_value(json!({"id": 1, "name": "Algorithms"})).unwrap();

    assert_eq!(deck.name, "Algorithms");
    assert!(deck.owner.is_none());
    assert!(!deck.shared);
    assert!(deck.cards.is_empty());
}

#[test]
fn page_deserializes_with_and_without_a_count() {
    let counted: Page<Deck> = serde_json::from_value(json!({
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {"id": 1, "name": "Algorithms"},
            {"id": 2, "name": "System Design"}
        ]
    }))
    .unwrap();
    assert_eq!(counted.count, Some(2));
    assert_eq!(counted.len(), 2);

    let cursor: Page<Deck> = serde_json::from_value(json!({
        "next": "http://localhost:8000/api/cards/?cursor=abc",
        "results": []
    }))
    .unwrap();
    assert!(cursor.count.is_none());
    assert!(cursor.is_empty());
    assert!(cursor.next.is_some());
}

#[test]
fn rating_serializes_lowercase() {
    assert_json_eq!(serde_json::to_value(Rating::Again).unwrap(), json!("again"));
    assert_json_eq!(serde_json::to_value(Rating::Easy).unwrap(), json!("easy"));
    assert_eq!("good".parse::<Rating>().unwrap(), Rating::Good);
    assert!("perfect".parse::<Rating>().is_err());
    assert_eq!(Rating::Hard.to_string(), "hard");
}

#[test]
fn user_card_blank_last_rating_reads_as_none() {
    let user_card: UserCard = serde_json::from_value(json!({
        "id": 5,
        "card": {"id": 12, "deck": 3, "data": {}},
        "ease_factor": 2.5,
        "interval": 0,
        "repetitions": 0,
        "due_date": "2026-08-23T00:00:00Z",
        "last_rating": ""
    }))
    .unwrap();

    assert!(user_card.last_rating.is_none());
    assert_eq!(user_card.status, ReviewStatus::New);
}

#[test]
fn user_card_with_a_rating_reads_it_back() {
    let user_card: UserCard = serde_json::from_value(json!({
        "id": 5,
        "card": {"id": 12, "deck": 3, "data": {}},
        "ease_factor": 2.6,
        "interval": 6,
        "repetitions": 2,
        "due_date": "2026-08-29T00:00:00Z",
        "last_rating": "good",
        "status": "review"
    }))
    .unwrap();

    assert_eq!(user_card.last_rating, Some(Rating::Good));
    assert_eq!(user_card.status, ReviewStatus::Review);
}

#[test]
fn review_update_serializes_only_what_it_carries() {
    assert_json_eq!(
        serde_json::to_value(ReviewUpdate::rating(Rating::Again)).unwrap(),
        json!({"last_rating": "again"})
    );
    assert_json_eq!(
        serde_json::to_value(ReviewUpdate::status(ReviewStatus::Known)).unwrap(),
        json!({"status": "known"})
    );
}

#[test]
fn card_type_accepts_matching_card_data() {
    let ct = CardType {
        id: 1,
        name: "basic".to_string(),
        description: String::new(),
        fields: strs(&["question", "answer"]),
        layout: CardLayout::default(),
        created_at: None,
        owner: None,
    };

    let ok: serde_json::Map<String, serde_json::Value> =
        [("question", "q"), ("answer", "a")]
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();
    assert!(ct.validate_card_data(&ok).is_ok());

    let mut bad = ok.clone();
    bad.remove("answer");
    bad.insert("notes".to_string(), json!("n"));
    let err = ct.validate_card_data(&bad).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unexpected keys"), "got: {msg}");
    assert!(msg.contains("missing keys"), "got: {msg}");
}

#[test]
fn card_type_request_requires_every_field_assigned() {
    let request = CardTypeRequest {
        name: "basic".to_string(),
        description: String::new(),
        fields: strs(&["question", "answer"]),
        layout: CardLayout {
            front: strs(&["question"]),
            preview: strs(&["question"]),
            ..CardLayout::default()
        },
    };

    let err = request.validate().unwrap_err();
    assert!(err.to_string().contains("answer"));
}

#[test]
fn card_type_request_requires_a_preview_field() {
    let request = CardTypeRequest {
        name: "basic".to_string(),
        description: String::new(),
        fields: strs(&["question", "answer"]),
        layout: CardLayout {
            front: strs(&["question"]),
            back: strs(&["answer"]),
            ..CardLayout::default()
        },
    };

    assert!(matches!(request.validate(), Err(AppError::InvalidInput(_))));
}

#[test]
fn card_type_request_accepts_a_complete_layout() {
    let request = CardTypeRequest {
        name: "basic".to_string(),
        description: String::new(),
        fields: strs(&["question", "answer", "mnemonic"]),
        layout: CardLayout {
            front: strs(&["question"]),
            back: strs(&["answer"]),
            preview: strs(&["question"]),
            hidden: strs(&["mnemonic"]),
        },
    };

    assert!(request.validate().is_ok());
}

#[test]
fn register_request_validation_rules() {
    let base = RegisterRequest {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "hunter2222".to_string(),
        password2: "hunter2222".to_string(),
    };
    assert!(base.validate().is_ok());

    let mismatch = RegisterRequest {
        password2: "other".to_string(),
        ..base.clone()
    };
    assert!(mismatch.validate().is_err());

    let short = RegisterRequest {
        password: "short".to_string(),
        password2: "short".to_string(),
        ..base.clone()
    };
    assert!(short.validate().is_err());

    let no_email = RegisterRequest {
        email: String::new(),
        ..base
    };
    assert!(no_email.validate().is_err());
}
