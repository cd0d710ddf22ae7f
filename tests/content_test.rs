mod common;

use common::TestContent;
use serde_json::json;
use server_training::{
    content::{Catalog, ContentError},
    models::{CatalogEntry, SanitizedQuiz},
    names,
    services::scoring::Style,
};

fn sample_module() -> serde_json::Value {
    json!({
        "id": "orientation",
        "title": "Orientation",
        "description": "First shift",
        "estimated_minutes": 5,
        "version": "1.0",
        "steps": [
            { "type": "text", "content": "Welcome" },
            { "type": "mystery", "payload": 42 },
        ],
        "scenarios": [
            { "id": "first_5_minutes", "title": "First five", "steps": [] },
        ],
    })
}

#[test]
fn load_module_reads_typed_fields() {
    let content = TestContent::new();
    content.write_json("modules/orientation.json", &sample_module());

    let module = content.store().load_module("orientation").unwrap();

    assert_eq!(module.id, Some(json!("orientation")));
    assert_eq!(module.title, Some(json!("Orientation")));
    assert_eq!(module.estimated_minutes, Some(json!(5)));
    assert_eq!(module.version, Some(json!("1.0")));
    assert_eq!(module.steps.len(), 2);
    assert_eq!(module.steps[1]["type"], "mystery");
    assert_eq!(module.steps[1]["payload"], 42);

    let scenario = module.scenario("first_5_minutes").unwrap();
    assert_eq!(scenario["title"], "First five");
    assert!(module.scenario("missing").is_none());
}

#[test]
fn load_module_tolerates_loose_fields() {
    let content = TestContent::new();
    content.write_json(
        "modules/loose.json",
        &json!({
            "title": ["not", "a", "string"],
            "version": 1,
            "estimated_minutes": "five",
            "steps": [{ "type": 3 }, "just text"],
            "scenarios": [{ "title": "no id" }, { "id": 7 }],
        }),
    );

    let module = content.store().load_module("loose").unwrap();
    assert_eq!(module.id, None);
    assert_eq!(module.version, Some(json!(1)));
    assert_eq!(module.estimated_minutes, Some(json!("five")));
    assert_eq!(module.steps.len(), 2);
    assert!(module.scenario("7").is_none());
}

#[test]
fn load_module_raw_returns_file_verbatim() {
    let content = TestContent::new();
    content.write_json("modules/orientation.json", &sample_module());

    let raw = content.store().load_module_raw("orientation").unwrap();
    assert_eq!(raw, sample_module());
}

#[test]
fn missing_files_are_not_found() {
    let content = TestContent::new();
    let store = content.store();

    assert!(store.load_module("nope").unwrap_err().is_not_found());
    assert!(store.load_module_raw("nope").unwrap_err().is_not_found());
    assert!(store.load_quiz("nope").unwrap_err().is_not_found());
    assert!(store.load_scenario("nope").unwrap_err().is_not_found());
}

#[test]
fn traversal_ids_never_reach_the_file_system() {
    let content = TestContent::new();
    content.write("secret.json", r#"{"id": "secret"}"#);
    let store = content.store();

    for id in ["../secret", "..", "modules/../../secret", ""] {
        let err = store.load_module_raw(id).unwrap_err();
        assert!(err.is_not_found(), "{id:?} should be not found, got {err}");
    }
}

#[test]
fn malformed_files_are_parse_errors() {
    let content = TestContent::new();
    content.write("modules/broken.json", "{ \"id\": ");
    content.write_json(
        "quizzes/bad_style.json",
        &json!({ "questions": [{ "question": "Q", "answers": [{ "text": "A", "style": "wizard" }] }] }),
    );

    let err = content.store().load_module("broken").unwrap_err();
    assert!(matches!(err, ContentError::Parse { .. }), "got {err}");

    let err = content.store().load_quiz("bad-style").unwrap_err();
    assert!(matches!(err, ContentError::Parse { .. }), "got {err}");
}

#[test]
fn quiz_ids_resolve_to_snake_case_files() {
    let content = TestContent::new();
    content.write_json(
        "quizzes/server_style.json",
        &json!({ "questions": [{ "question": "Q", "answers": [{ "text": "A", "style": "spark" }] }] }),
    );

    let by_url_id = content.store().load_quiz("server-style").unwrap();
    let by_file_name = content.store().load_quiz("server_style").unwrap();

    assert_eq!(by_url_id.questions.len(), 1);
    assert_eq!(by_url_id.questions[0].answers[0].style, Style::Spark);
    assert_eq!(by_file_name.questions.len(), 1);
}

#[test]
fn content_is_reread_on_every_call() {
    let content = TestContent::new();
    let store = content.store();

    content.write_json("scenarios/s.json", &json!({ "id": "s", "v": 1 }));
    assert_eq!(store.load_scenario("s").unwrap()["v"], json!(1));

    content.write_json("scenarios/s.json", &json!({ "id": "s", "v": 2 }));
    assert_eq!(store.load_scenario("s").unwrap()["v"], json!(2));
}

#[test]
fn catalog_falls_back_to_built_in_entry() {
    let content = TestContent::new();
    let catalog = Catalog::load(content.path()).unwrap();

    assert_eq!(
        catalog.entries(),
        &[CatalogEntry {
            id: names::DEFAULT_MODULE_ID.to_string(),
            title: names::DEFAULT_MODULE_TITLE.to_string(),
            estimated_minutes: 5,
            default_scenario_id: names::DEFAULT_SCENARIO_ID.to_string(),
        }]
    );
}

#[test]
fn catalog_file_overrides_default() {
    let content = TestContent::new();
    content.write_json(
        "catalog.json",
        &json!([
            { "id": "a", "title": "A", "estimated_minutes": 3, "default_scenario_id": "s1" },
            { "id": "b", "title": "B", "estimated_minutes": 7, "default_scenario_id": "s2" },
        ]),
    );

    let catalog = Catalog::load(content.path()).unwrap();
    let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn malformed_catalog_fails_startup() {
    let content = TestContent::new();
    content.write("catalog.json", "[{ \"id\": 1 }]");

    assert!(Catalog::load(content.path()).is_err());
}

#[test]
fn shipped_quiz_sanitizes_without_styles() {
    let store = server_training::content::ContentStore::new(common::shipped_content_dir());
    let quiz = store.load_quiz(names::SERVER_STYLE_QUIZ_ID).unwrap();
    let sanitized = serde_json::to_value(SanitizedQuiz::from(&quiz)).unwrap();

    let questions = sanitized["questions"].as_array().unwrap();
    assert_eq!(questions.len(), quiz.questions.len());
    for (question, original) in questions.iter().zip(&quiz.questions) {
        assert_eq!(question["question"], json!(original.question));
        let answers = question["answers"].as_array().unwrap();
        assert_eq!(answers.len(), original.answers.len());
        assert!(answers.iter().all(|a| a.is_string()));
    }
    assert!(!sanitized.to_string().contains("\"style\""));
}
