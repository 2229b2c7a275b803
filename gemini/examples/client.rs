use reqwest::Client;
use serde_json::json;

// Exercises a running `api` shim: health check, then one question.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url = std::env::var("ASK_SHIM_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

    println!("Health check:");
    let health_response = client.get(format!("{}/health", base_url)).send().await?;
    println!("Status: {}", health_response.status());
    let health_json: serde_json::Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    println!("\nAsk:");
    let ask_response = client
        .post(format!("{}/ask", base_url))
        .json(&json!({ "text": "What does the ? operator do in Rust?" }))
        .send()
        .await?;

    println!("Status: {}", ask_response.status());
    let ask_json: serde_json::Value = ask_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&ask_json)?);

    Ok(())
}
