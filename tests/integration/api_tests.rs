//! API integration tests
//!
//! These run against a live server. Each test owns its ISBNs, so they can
//! run in parallel and do not depend on other rows in the `books` table.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

fn fixture(isbn: &str) -> Value {
    json!({
        "isbn": isbn,
        "amazon_url": "https://www.amazon.com",
        "author": "Roal Dahl",
        "language": "en",
        "pages": 234,
        "publisher": "penguin",
        "title": "BFG",
        "year": 1983
    })
}

/// Remove the given books, ignoring ones that do not exist
async fn clear(client: &Client, isbns: &[&str]) {
    for isbn in isbns {
        let _ = client
            .delete(format!("{}/books/{}", BASE_URL, isbn))
            .send()
            .await;
    }
}

/// Clear leftovers from an earlier failed run, then insert fresh fixtures
async fn seed(client: &Client, isbns: &[&str]) {
    clear(client, isbns).await;

    for isbn in isbns {
        let response = client
            .post(format!("{}/books", BASE_URL))
            .json(&fixture(isbn))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 201);
    }
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_create_book() {
    let client = Client::new();
    clear(&client, &["919191"]).await;

    let book = json!({
        "isbn": "919191",
        "amazon_url": "https://www.amazon.com",
        "author": "God",
        "language": "en",
        "pages": 456,
        "publisher": "Princeton",
        "title": "Bible",
        "year": 1999
    });

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "book": book }));

    let response = client
        .get(format!("{}/books/919191", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["isbn"], "919191");

    clear(&client, &["919191"]).await;
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();
    seed(&client, &["5550001", "5550002"]).await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    let isbns: Vec<&str> = body["books"]
        .as_array()
        .expect("No books array")
        .iter()
        .filter_map(|book| book["isbn"].as_str())
        .collect();
    assert!(isbns.contains(&"5550001"));
    assert!(isbns.contains(&"5550002"));

    clear(&client, &["5550001", "5550002"]).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_book() {
    let client = Client::new();
    seed(&client, &["121221212"]).await;

    let response = client
        .delete(format!("{}/books/121221212", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Book deleted" }));

    let response = client
        .get(format!("{}/books/121221212", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_book() {
    let client = Client::new();
    clear(&client, &["1"]).await;

    let response = client
        .delete(format!("{}/books/1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_book() {
    let client = Client::new();
    seed(&client, &["1323323"]).await;

    let response = client
        .put(format!("{}/books/1323323", BASE_URL))
        .json(&json!({
            "amazon_url": "https://www.google.com",
            "author": "pineapple",
            "language": "en",
            "pages": 500,
            "publisher": "fruits",
            "title": "PUPPIES",
            "year": 2000
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["isbn"], "1323323");
    assert_eq!(body["book"]["title"], "PUPPIES");

    let response = client
        .get(format!("{}/books/1323323", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["author"], "pineapple");

    clear(&client, &["1323323"]).await;
}

#[tokio::test]
#[ignore]
async fn test_create_invalid_book() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "isbn": "42", "pages": -1 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
