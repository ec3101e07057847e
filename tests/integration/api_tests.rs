//! API integration tests

use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080";

async fn add_book(client: &Client, name: &str, author: &str) -> reqwest::Response {
    client
        .post(format!("{}/adicionar_livro", BASE_URL))
        .form(&[
            ("name", name),
            ("author", author),
            ("genre", "Sci-Fi"),
            ("status", "read"),
        ])
        .send()
        .await
        .expect("Failed to send request")
}

async fn delete_book(client: &Client, name: &str) -> reqwest::Response {
    client
        .delete(format!("{}/deletar_livro", BASE_URL))
        .query(&[("name", name)])
        .send()
        .await
        .expect("Failed to send request")
}

async fn find_book(client: &Client, name: &str) -> reqwest::Response {
    client
        .get(format!("{}/busca_livro", BASE_URL))
        .query(&[("name", name)])
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_home_redirects_to_docs() {
    let client = Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client");

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(response.headers().contains_key("location"));
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let name = "Integration Dune";
    delete_book(&client, name).await;

    // Create
    let response = add_book(&client, name, "Frank Herbert").await;
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = response.json().await.expect("Failed to parse response");
    assert!(created["id"].is_number());
    assert_eq!(created["name"], name);

    // Duplicate name
    let response = add_book(&client, name, "Someone Else").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Livro de mesmo nome já salvo na base de dados!");

    // Existing row untouched
    let response = find_book(&client, name).await;
    assert_eq!(response.status(), StatusCode::OK);
    let found: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(found, created);

    // Listed
    let response = client
        .get(format!("{}/lista_livros", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let list: Value = response.json().await.expect("Failed to parse response");
    assert!(list["produtos"]
        .as_array()
        .expect("produtos is not an array")
        .iter()
        .any(|book| book["name"] == name));

    // Delete
    let response = delete_book(&client, name).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Produto removido");
    assert_eq!(body["id"], name);

    // Gone
    let response = find_book(&client, name).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_book(&client, name).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_find_by_author() {
    let client = Client::new();
    let name = "Integration Emma";
    delete_book(&client, name).await;
    add_book(&client, name, "Integration Austen").await;

    let response = client
        .get(format!("{}/busca_autor", BASE_URL))
        .query(&[("author", "Integration Austen")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], name);

    delete_book(&client, name).await;

    let response = client
        .get(format!("{}/busca_autor", BASE_URL))
        .query(&[("author", "Integration Austen")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_author_lookup_returns_lowest_id() {
    let client = Client::new();
    let author = "Integration Same Author";
    let first_name = "Integration Tie First";
    let second_name = "Integration Tie Second";
    delete_book(&client, first_name).await;
    delete_book(&client, second_name).await;

    let response = add_book(&client, first_name, author).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first: Value = response.json().await.expect("Failed to parse response");
    let response = add_book(&client, second_name, author).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second: Value = response.json().await.expect("Failed to parse response");

    let first_id = first["id"].as_i64().expect("No book ID");
    let second_id = second["id"].as_i64().expect("No book ID");
    assert!(first_id < second_id);

    let response = client
        .get(format!("{}/busca_autor", BASE_URL))
        .query(&[("author", author)])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let found: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(found["id"], first_id);
    assert_eq!(found["name"], first_name);

    let response = client
        .get(format!("{}/lista_livros", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let list: Value = response.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = list["produtos"]
        .as_array()
        .expect("produtos is not an array")
        .iter()
        .map(|book| book["id"].as_i64().expect("No book ID"))
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    let first_pos = ids.iter().position(|&id| id == first_id).expect("First book not listed");
    let second_pos = ids.iter().position(|&id| id == second_id).expect("Second book not listed");
    assert!(first_pos < second_pos);

    delete_book(&client, first_name).await;
    delete_book(&client, second_name).await;
}
