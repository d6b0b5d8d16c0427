use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use dietcoach_api::{resolver, AppState};
use dietcoach_client::{Error, MockGenerator};
use dietcoach_model::metrics::{validate, UserMetrics};
use serde_json::{json, Value};

fn chat_request(user_input: &str) -> Value {
    json!({
        "type": "chat",
        "userMetrics": { "weight": 70, "height": 175, "bmi": 22.857, "bmr": 2000 },
        "userInput": user_input,
        "username": "Ana"
    })
}

async fn post(generator: MockGenerator, body: Value) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(Arc::new(generator))))
            .configure(dietcoach_api::configure),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/api/generate-plan")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

fn unused_generator() -> MockGenerator {
    let mut generator = MockGenerator::new();
    generator.expect_generate().never();
    generator
}

#[actix_web::test]
async fn chat_returns_personalized_generated_text() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .withf(|prompt| prompt.contains("Question: What should I eat?"))
        .times(1)
        .returning(|_| Ok("try oatmeal for breakfast.".to_owned()));

    let (status, body) = post(generator, chat_request("What should I eat?")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": "Hi Ana, try oatmeal for breakfast." }));
}

#[actix_web::test]
async fn chat_falls_back_when_remote_fails() {
    let metrics = validate(&UserMetrics::new(70.0, 175.0, 22.857, 2000.0)).unwrap();
    let targets = metrics.targets().unwrap();
    let test_data = [
        Error::InternalServerError,
        Error::CommunicationError,
        Error::EmptyResponse,
    ];

    for (i, error) in test_data.into_iter().enumerate() {
        let mut generator = MockGenerator::new();
        let mut error = Some(error);
        generator
            .expect_generate()
            .times(1)
            .returning(move |_| Err(error.take().unwrap()));

        let (status, body) = post(generator, chat_request("What should I eat?")).await;

        assert_eq!(status, StatusCode::OK, "Test case #{}", i);
        assert_eq!(
            body["response"],
            resolver::resolve(&metrics, &targets, "What should I eat?", "Ana"),
            "Test case #{}",
            i
        );
    }
}

#[actix_web::test]
async fn incomplete_metrics_are_rejected_without_generation() {
    let test_data = [
        json!({ "type": "chat", "userMetrics": { "height": 175, "bmi": 22.9, "bmr": 2000 } }),
        json!({ "type": "chat", "userMetrics": { "weight": 70, "bmi": 22.9, "bmr": 2000 } }),
        json!({ "type": "chat", "userMetrics": { "weight": 70, "height": 175, "bmr": 2000 } }),
        json!({ "type": "chat", "userMetrics": { "weight": "", "height": 175, "bmi": 22.9 } }),
        json!({ "type": "chat", "userMetrics": { "weight": 70, "height": 175, "bmi": 22.9 } }),
        json!({ "type": "chat", "userMetrics": null }),
        json!({ "userInput": "hello" }),
    ];

    for (i, body) in test_data.into_iter().enumerate() {
        let (status, body) = post(unused_generator(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "Test case #{}", i);
        assert_eq!(
            body,
            json!({ "error": "Invalid metrics data received" }),
            "Test case #{}",
            i
        );
    }
}

#[actix_web::test]
async fn numeric_strings_are_accepted() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .returning(|_| Err(Error::ResponseError));

    let (status, body) = post(
        generator,
        json!({
            "type": "chat",
            "userMetrics": { "weight": "70", "height": "175", "bmi": "22.857", "bmr": "2000" },
            "userInput": "diet",
            "username": "Ana"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Based on your metrics (BMI: 22.9, Weight: 70kg)"));
}

#[actix_web::test]
async fn blank_profile_fields_are_rejected_without_generation() {
    let test_data = [
        json!({
            "type": "chat",
            "userMetrics": { "weight": "", "height": "", "bmi": "", "bmr": "" },
            "userInput": "hello",
            "username": ""
        }),
        json!({
            "type": "plan",
            "userMetrics": { "weight": "", "height": "", "bmi": "", "bmr": "" }
        }),
    ];

    for (i, body) in test_data.into_iter().enumerate() {
        let (status, body) = post(unused_generator(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "Test case #{}", i);
        assert_eq!(
            body,
            json!({ "error": "Invalid metrics data received" }),
            "Test case #{}",
            i
        );
    }
}

#[actix_web::test]
async fn bmi_is_shown_with_one_decimal_rounded_half_up() {
    let test_data = [(22.45, "BMI: 22.4,"), (24.95, "BMI: 24.9,"), (22.25, "BMI: 22.3,")];

    for (i, (bmi, expected)) in test_data.into_iter().enumerate() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(Error::CommunicationError));

        let (status, body) = post(
            generator,
            json!({
                "type": "chat",
                "userMetrics": { "weight": 70, "height": 175, "bmi": bmi, "bmr": 2000 },
                "userInput": "diet",
                "username": "Ana"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "Test case #{}", i);
        assert!(
            body["response"].as_str().unwrap().contains(expected),
            "Test case #{}: {}",
            i,
            body["response"]
        );
    }
}

#[actix_web::test]
async fn non_chat_requests_get_a_plan() {
    let (status, body) = post(
        unused_generator(),
        json!({
            "type": "plan",
            "userMetrics": { "weight": 70, "height": 175, "bmi": 22.857, "bmr": 2000 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmiCategory"], "Normal");
    assert_eq!(body["goal"], "maintainWeight");
    assert_eq!(body["dailyCalories"], 2400);
    assert_eq!(body["meals"]["breakfast"], 720);
    assert_eq!(body["macros"]["proteinGrams"], 126);
    assert!(body["generatedAt"].is_string());
}

#[actix_web::test]
async fn malformed_body_is_an_internal_error() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(Arc::new(unused_generator()))))
            .configure(dietcoach_api::configure),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/api/generate-plan")
        .set_payload("{not json")
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn health_check() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(Arc::new(unused_generator()))))
            .configure(dietcoach_api::configure),
    )
    .await;
    let req = test::TestRequest::get().uri("/health").to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "status": "ok" }));
}
