use crate::common::{RecordingNavigator, test_client};
use cardio_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

fn service_client(server: &mockito::Server) -> (Arc<Config>, Arc<CardioHttpClientImpl>) {
    let config = Arc::new(Config::with_base_url(&server.url()));
    let store = Arc::new(MemoryTokenStore::with_pair(TokenPair::new("acc-1", "ref-1")));
    let navigator = Arc::new(RecordingNavigator::new());
    let client = Arc::new(test_client(&server.url(), store, navigator));
    (config, client)
}

#[tokio::test]
async fn deck_service_lists_decks_from_the_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/decks/")
        .with_status(200)
        .with_body(
            r#"{"count":1,"next":null,"previous":null,"results":[{"id":1,"name":"Algorithms"}]}"#,
        )
        .create_async()
        .await;

    let (config, client) = service_client(&server);
    let service = DeckServiceImpl::new(config, client);

    let page = service.list_decks().await.expect("list decks");

    assert_eq!(page.count, Some(1));
    assert_eq!(page.results[0].name, "Algorithms");
    mock.assert_async().await;
}

#[tokio::test]
async fn deck_service_creates_and_patches_decks() {
    let mut server = mockito::Server::new_async().await;
    let created = server
        .mock("POST", "/decks/")
        .match_body(Matcher::Json(json!({
            "name": "Algorithms",
            "description": "",
            "card_type": 1,
            "shared": false,
            "tags": ""
        })))
        .with_status(201)
        .with_body(r#"{"id":9,"name":"Algorithms","card_type":1}"#)
        .create_async()
        .await;
    let patched = server
        .mock("PATCH", "/decks/9/")
        .match_body(Matcher::Json(json!({"shared": true})))
        .with_status(200)
        .with_body(r#"{"id":9,"name":"Algorithms","card_type":1,"shared":true}"#)
        .create_async()
        .await;

    let (config, client) = service_client(&server);
    let service = DeckServiceImpl::new(config, client);

    let request = DeckRequest {
        name: "Algorithms".to_string(),
        description: String::new(),
        card_type: 1,
        shared: false,
        tags: String::new(),
    };
    let deck = service.create_deck(&request).await.expect("create deck");
    assert_eq!(deck.id, 9);

    let patch = DeckPatch {
        shared: Some(true),
        ..DeckPatch::default()
    };
    let deck = service.patch_deck(9, &patch).await.expect("patch deck");
    assert!(deck.shared);

    created.assert_async().await;
    patched.assert_async().await;
}

#[tokio::test]
async fn card_service_filters_by_deck() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/cards/?deck=3")
        .with_status(200)
        .with_body(r#"{"next":null,"previous":null,"results":[{"id":12,"deck":3,"data":{}}]}"#)
        .create_async()
        .await;

    let (config, client) = service_client(&server);
    let service = CardServiceImpl::new(config, client);

    let page = service.list_cards(Some(3)).await.expect("list cards");

    assert!(page.count.is_none());
    assert_eq!(page.results[0].deck, 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn card_service_generates_a_draft() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate_card/")
        .match_body(Matcher::Json(json!({"input_text": "two sum in rust"})))
        .with_status(200)
        .with_body(r#"{"problem":"Two Sum","difficulty":"Easy","solution":"Use a hash map"}"#)
        .create_async()
        .await;

    let (config, client) = service_client(&server);
    let service = CardServiceImpl::new(config, client);

    let draft = service
        .generate_card("two sum in rust")
        .await
        .expect("generate card");

    assert_eq!(draft.problem, "Two Sum");
    assert!(draft.pseudo.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn card_type_service_lists_a_plain_array() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/cardtypes/")
        .with_status(200)
        .with_body(r#"[{"id":1,"name":"starter","fields":["problem"]}]"#)
        .create_async()
        .await;

    let (config, client) = service_client(&server);
    let service = CardTypeServiceImpl::new(config, client);

    let types = service.list_card_types().await.expect("list card types");

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name, "starter");
    mock.assert_async().await;
}

#[tokio::test]
async fn card_type_service_rejects_an_invalid_designer_layout_locally() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/cardtypes/").expect(0).create_async().await;

    let (config, client) = service_client(&server);
    let service = CardTypeServiceImpl::new(config, client);

    let request = CardTypeRequest {
        name: "basic".to_string(),
        description: String::new(),
        fields: vec!["question".to_string(), "answer".to_string()],
        layout: CardLayout {
            front: vec!["question".to_string()],
            back: vec!["answer".to_string()],
            ..CardLayout::default()
        },
    };

    let result = service.create_card_type(&request).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn study_service_fetches_the_queue_and_submits_a_review() {
    let mut server = mockito::Server::new_async().await;
    let queue = server
        .mock("GET", "/usercards/queue/?deck=3")
        .with_status(200)
        .with_body(
            r#"{"count":1,"results":[{
                "id":5,
                "card":{"id":12,"deck":3,"data":{}},
                "ease_factor":2.5,
                "interval":0,
                "repetitions":0,
                "due_date":"2026-08-23T00:00:00Z",
                "last_rating":""
            }]}"#,
        )
        .create_async()
        .await;
    let review = server
        .mock("PATCH", "/usercards/5/")
        .match_body(Matcher::Json(json!({"last_rating": "good"})))
        .with_status(200)
        .with_body(
            r#"{
                "id":5,
                "card":{"id":12,"deck":3,"data":{}},
                "ease_factor":2.6,
                "interval":1,
                "repetitions":1,
                "due_date":"2026-08-24T00:00:00Z",
                "last_rating":"good",
                "status":"review"
            }"#,
        )
        .create_async()
        .await;

    let (config, client) = service_client(&server);
    let service = StudyServiceImpl::new(config, client);

    let page = service.review_queue(Some(3)).await.expect("queue");
    assert_eq!(page.len(), 1);
    assert!(page.results[0].last_rating.is_none());

    let updated = service
        .submit_review(5, &ReviewUpdate::rating(Rating::Good))
        .await
        .expect("submit review");
    assert_eq!(updated.last_rating, Some(Rating::Good));
    assert_eq!(updated.repetitions, 1);

    queue.assert_async().await;
    review.assert_async().await;
}

#[tokio::test]
async fn study_service_resets_progress() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/usercards/reset/")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let (config, client) = service_client(&server);
    let service = StudyServiceImpl::new(config, client);

    let reset = service.reset_progress(None).await.expect("reset");

    assert!(reset.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn account_service_fetches_the_profile() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/me/")
        .with_status(200)
        .with_body(r#"{"id":7,"username":"ada","email":"ada@example.com"}"#)
        .create_async()
        .await;

    let (config, client) = service_client(&server);
    let service = AccountServiceImpl::new(config, client);

    let profile = service.me().await.expect("profile");

    assert_eq!(profile.username, "ada");
    assert_eq!(profile.id, Some(7));
    mock.assert_async().await;
}
