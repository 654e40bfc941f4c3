// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP contract tests for the Serper client against a mock server.

use serde_json::{json, Value};
use sift_search_serper::{
	NormalizeError, SearchRequest, SearchRequester, SecretString, SerperClient, SerperError,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SerperClient {
	SerperClient::new(SecretString::from("test-key"))
		.unwrap()
		.with_base_url(format!("{}/search", server.uri()))
}

fn serper_response() -> Value {
	json!({
		"searchParameters": {"q": "华为", "gl": "cn", "hl": "zh-cn", "type": "search", "engine": "google"},
		"knowledgeGraph": {"title": "Huawei", "attributes": {"Founder": "Ren Zhengfei"}},
		"organic": [
			{"title": "a", "link": "https://a.example", "snippet": "A", "position": 1},
			{"title": "b", "link": "https://b.example", "snippet": "B", "position": 2},
			{"title": "c", "link": "https://c.example", "snippet": "C", "position": 3},
			{"title": "d", "link": "https://d.example", "snippet": "D", "position": 4}
		],
		"peopleAlsoAsk": [
			{"question": "q1", "snippet": "s1", "title": "t1", "link": "https://paa.example/1"},
			{"question": "q2", "snippet": "s2", "title": "t2", "link": "https://paa.example/2"}
		],
		"relatedSearches": [{"query": "华为手机"}]
	})
}

#[tokio::test]
async fn sends_key_header_and_serper_body() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/search"))
		.and(header("X-API-KEY", "test-key"))
		.and(body_json(json!({"q": "华为", "gl": "cn", "num": 10})))
		.respond_with(ResponseTemplate::new(200).set_body_json(serper_response()))
		.expect(1)
		.mount(&server)
		.await;

	let request = SearchRequest::new("华为").with_location("cn").with_num(10);
	let raw = client_for(&server).search_raw(&request).await.unwrap();

	assert_eq!(raw, serper_response());
}

#[tokio::test]
async fn search_returns_normalized_result_and_useful_info() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/search"))
		.respond_with(ResponseTemplate::new(200).set_body_json(serper_response()))
		.mount(&server)
		.await;

	let search = client_for(&server)
		.search(&SearchRequest::new("华为"))
		.await
		.unwrap();

	assert_eq!(search.result.search_parameters.query, "华为");
	assert_eq!(search.result.organic_results.len(), 4);
	assert!(search.result.top_stories.is_none());

	let info = &search.useful_info;
	assert_eq!(info.organic_results.len(), 3);
	assert_eq!(
		info.people_also_ask.as_ref().map(|p| p.question.as_str()),
		Some("q1")
	);
	assert!(info.top_stories.is_none());
	assert_eq!(
		info.to_json().unwrap(),
		search.result.useful_info().to_json().unwrap()
	);
}

#[tokio::test]
async fn response_without_query_is_a_normalize_error() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"organic": []})))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.search(&SearchRequest::new("test"))
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		SerperError::Normalize(NormalizeError::MissingRequiredField { .. })
	));
}

#[tokio::test]
async fn non_json_body_is_invalid_response() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.search_raw(&SearchRequest::new("test"))
		.await
		.unwrap_err();

	assert!(matches!(err, SerperError::InvalidResponse(_)));
}

#[tokio::test]
async fn status_codes_map_to_errors() {
	let cases = [
		(403, "Unauthorized.", "unauthorized"),
		(400, "Not enough credits", "api"),
		(403, "Quota exceeded", "rate"),
		(429, "Too many requests", "rate"),
		(503, "unavailable", "api"),
	];

	for (status, body, expected) in cases {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(status).set_body_string(body))
			.mount(&server)
			.await;

		let err = client_for(&server)
			.search_raw(&SearchRequest::new("test"))
			.await
			.unwrap_err();

		let matched = match expected {
			"unauthorized" => matches!(err, SerperError::Unauthorized),
			"rate" => matches!(err, SerperError::RateLimited),
			_ => matches!(err, SerperError::ApiError { status: s, .. } if s == status),
		};
		assert!(matched, "status {status} mapped to {err:?}");
	}
}

#[tokio::test]
async fn slow_server_times_out() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(serper_response())
				.set_delay(std::time::Duration::from_millis(500)),
		)
		.mount(&server)
		.await;

	let client = SerperClient::with_timeout(
		SecretString::from("test-key"),
		std::time::Duration::from_millis(50),
	)
	.unwrap()
	.with_base_url(format!("{}/search", server.uri()));

	let err = client
		.search_raw(&SearchRequest::new("test"))
		.await
		.unwrap_err();

	assert!(matches!(err, SerperError::Timeout));
}
