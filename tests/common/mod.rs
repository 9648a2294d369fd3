//! Mock LeetCode service shared by the integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CSRF_TOKEN: &str = "tok123";
pub const SESSION: &str = "session-cookie";

pub fn question(id: &str, title: &str, slug: &str) -> Value {
    json!({
        "questionFrontendId": id,
        "title": title,
        "titleSlug": slug,
        "categoryTitle": "Algorithms",
        "frequency": 0.0,
        "isPaidOnly": false,
        "topicTags": [{"name": "Array", "slug": "array"}],
        "companyTagStats": null
    })
}

/// Serve the CSRF cookie on `GET /`
pub async fn mount_csrf(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("cookie", format!("LEETCODE_SESSION={}", SESSION).as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("csrftoken={}; Path=/", CSRF_TOKEN).as_str()),
        )
        .mount(server)
        .await;
}

/// Answer the count query with `total`
pub async fn mount_count(server: &MockServer, total: Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("x-csrftoken", CSRF_TOKEN))
        .and(body_partial_json(json!({"variables": {"limit": 1, "skip": 0}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"problemsetQuestionList": {"totalNum": total}}
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Answer exactly one page query for the given window
pub async fn mount_page(server: &MockServer, limit: u64, skip: u64, questions: Vec<Value>) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("x-csrftoken", CSRF_TOKEN))
        .and(body_partial_json(json!({"variables": {"limit": limit, "skip": skip}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"problemsetQuestionList": {"questions": questions}}
        })))
        .expect(1)
        .mount(server)
        .await;
}
