// Facade tests: memoization, cross-resource invalidation, optimistic
// clip-list edits, and the keyword sync GC pass. Request counts are
// enforced with wiremock's `expect`, which verifies on server drop.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fridayctl_api::FridayClient;
use fridayctl_core::Assistant;

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Assistant) {
    let server = MockServer::start().await;
    let client = FridayClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .expect("mock server uri should parse");
    (server, Assistant::from_client(client))
}

const EXAMPLES_PATH: &str = "/friday-inference/tensorflow-models/ddl/examples";
const CLASSES_PATH: &str = "/friday-inference/tensorflow-models/discriminative/classes";

// ── Memoization ─────────────────────────────────────────────────────

#[tokio::test]
async fn repeated_reads_issue_one_request() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path(EXAMPLES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "a.wav": "on" })))
        .expect(1)
        .mount(&server)
        .await;

    let first = assistant.examples().await.unwrap();
    let second = assistant.examples().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first["a.wav"], "on");
}

#[tokio::test]
async fn concurrent_first_reads_issue_one_request() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path(CLASSES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Silence", "on"])))
        .expect(1)
        .mount(&server)
        .await;

    let (a, b) = tokio::join!(assistant.keywords(), assistant.keywords());
    assert_eq!(a.unwrap(), vec!["on"]);
    assert_eq!(b.unwrap(), vec!["on"]);
}

// ── Cross-resource invalidation ─────────────────────────────────────

#[tokio::test]
async fn set_examples_invalidates_examples_and_keywords() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path(EXAMPLES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "a.wav": "on" })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(CLASSES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Silence", "on"])))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(EXAMPLES_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    // Prime both caches.
    assistant.examples().await.unwrap();
    assistant.keywords().await.unwrap();

    let update = BTreeMap::from([("a.wav".to_owned(), "on".to_owned())]);
    assistant.set_examples(&update).await.unwrap();

    // Both must re-fetch.
    assistant.examples().await.unwrap();
    assistant.keywords().await.unwrap();
}

#[tokio::test]
async fn set_bound_scripts_invalidates_bound_scripts_only() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path("/friday-vendor/scripts/bound"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hello": ["x.py"] })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(CLASSES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Silence", "hello"])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/friday-vendor/scripts/bound"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assistant.bound_scripts().await.unwrap();
    assistant.keywords().await.unwrap();

    let update = BTreeMap::from([("hello".to_owned(), vec!["x.py".to_owned()])]);
    assistant.set_bound_scripts(&update).await.unwrap();

    // Bound scripts re-fetch; keywords stay cached.
    assistant.bound_scripts().await.unwrap();
    assistant.keywords().await.unwrap();
}

#[tokio::test]
async fn failed_write_leaves_caches_untouched() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path("/friday-vendor/scripts/bound"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hello": ["x.py"] })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/friday-vendor/scripts/bound"))
        .respond_with(ResponseTemplate::new(500).set_body_string("disk full"))
        .expect(1)
        .mount(&server)
        .await;

    assistant.bound_scripts().await.unwrap();

    let update = BTreeMap::new();
    assert!(assistant.set_bound_scripts(&update).await.is_err());

    // Still served from cache: the GET mock allows one request only.
    let bound = assistant.bound_scripts().await.unwrap();
    assert_eq!(bound["hello"], vec!["x.py"]);
}

// ── Optimistic clip-list edits ──────────────────────────────────────

#[tokio::test]
async fn clip_writes_edit_the_cached_list_without_refetch() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path("/record/clips"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "ids": ["a.wav", "b.wav"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/record/new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "c.wav" })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/record/remove"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/record/rename"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert_eq!(assistant.clips().await.unwrap(), vec!["a.wav", "b.wav"]);

    let new_id = assistant.new_clip().await.unwrap();
    assert_eq!(new_id, "c.wav");

    assistant.remove_clip("a.wav").await.unwrap();
    assistant.rename_clip("b.wav", "hi.wav").await.unwrap();

    // One GET total: every edit was applied to the cached list.
    assert_eq!(assistant.clips().await.unwrap(), vec!["c.wav", "hi.wav"]);
}

#[tokio::test]
async fn remove_clip_filters_only_that_id() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path("/record/clips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ids": ["a", "b", "c"] })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/record/remove"))
        .and(body_json(json!({ "id": "missing" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assistant.clips().await.unwrap();

    // Removing an id the cache never held must not disturb the others.
    assistant.remove_clip("missing").await.unwrap();
    assert_eq!(assistant.clips().await.unwrap(), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn failed_remove_keeps_the_cached_id() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path("/record/clips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ids": ["a.wav"] })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/record/remove"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assistant.clips().await.unwrap();
    assert!(assistant.remove_clip("a.wav").await.is_err());
    assert_eq!(assistant.clips().await.unwrap(), vec!["a.wav"]);
}

// ── Entity views ────────────────────────────────────────────────────

#[tokio::test]
async fn commands_reshape_the_bound_scripts_map() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path("/friday-vendor/scripts/bound"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "hello": ["what.py", "who.py"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let commands = assistant.commands().await.unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].keyword(), "hello");
    assert_eq!(commands[0].scripts(), ["what.py", "who.py"]);

    // Entities are rebuilt with fresh ids, but the map read is cached.
    let again = assistant.commands().await.unwrap();
    assert_ne!(commands[0].id(), again[0].id());
}

#[tokio::test]
async fn set_light_actions_groups_by_keyword_and_invalidates() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path("/friday-vendor/philips-hue/lights/commands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lights on": [ { "id": "1", "state": { "on": true } } ]
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/friday-vendor/philips-hue/lights/commands"))
        .and(body_json(json!({
            "lights on": [
                { "id": "1", "state": { "on": true } },
                { "id": "2", "state": { "on": true } }
            ]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut actions = assistant.light_actions().await.unwrap();
    assert_eq!(actions.len(), 1);

    actions.push(fridayctl_core::DAction::new(
        "lights on",
        fridayctl_core::Vendor::HueLights,
        fridayctl_core::LightUpdate::power("2", true),
    ));
    assistant.set_light_actions(&actions).await.unwrap();

    // The write cleared the cache, so this re-fetches.
    assistant.light_commands().await.unwrap();
}

// ── Keyword sync ────────────────────────────────────────────────────

#[tokio::test]
async fn keyword_clips_joins_examples_and_gcs_orphans() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path(EXAMPLES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "a.wav": "on" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/record/clips"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "ids": ["a.wav", "b.wav"] })),
        )
        .mount(&server)
        .await;

    // Exactly one remove, for the unreferenced clip.
    Mock::given(method("PUT"))
        .and(path("/record/remove"))
        .and(body_json(json!({ "id": "b.wav" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let keywords = assistant.keyword_clips().await.unwrap();
    assert_eq!(
        keywords,
        BTreeMap::from([("on".to_owned(), vec!["a.wav".to_owned()])])
    );

    // The orphan is also gone from the cached clip list.
    assert_eq!(assistant.clips().await.unwrap(), vec!["a.wav"]);
}

#[tokio::test]
async fn gc_failures_are_skipped_not_propagated() {
    let (server, assistant) = setup().await;

    Mock::given(method("GET"))
        .and(path(EXAMPLES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "a.wav": "on" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/record/clips"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "ids": ["a.wav", "b.wav"] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/record/remove"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // The delete fails; the view is still produced.
    let keywords = assistant.keyword_clips().await.unwrap();
    assert_eq!(keywords["on"], vec!["a.wav"]);
}

#[tokio::test]
async fn sync_keywords_pushes_the_inverse_projection() {
    let (server, assistant) = setup().await;

    Mock::given(method("PUT"))
        .and(path(EXAMPLES_PATH))
        .and(body_json(json!({ "a.wav": "on", "b.wav": "on", "c.wav": "off" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let keywords = BTreeMap::from([
        ("on".to_owned(), vec!["a.wav".to_owned(), "b.wav".to_owned()]),
        ("off".to_owned(), vec!["c.wav".to_owned()]),
    ]);
    assistant.sync_keywords(&keywords).await.unwrap();
}
