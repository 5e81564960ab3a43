use portal_navigation::{AppConfig, AppState, create_router};
use tokio::net::TcpListener;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
}

async fn spawn_app() -> TestApp {
    let state = AppState::new(AppConfig::default()).expect("valid navigation setup");
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp { address }
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let response = client()
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("req fail");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_login_flow() {
    let app = spawn_app().await;
    let client = client();

    // Logged out: the dashboard bounces to the login page.
    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("req fail");
    assert_eq!(response.status(), 303);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    assert_eq!(location, "/login");

    // The login page itself renders with no loop.
    let response = client
        .get(format!("{}{}", app.address, location))
        .send()
        .await
        .expect("req fail");
    assert_eq!(response.status(), 200);

    // With a token the dashboard renders.
    let response = client
        .get(format!("{}/", app.address))
        .header("cookie", "jwt_token=abc123")
        .send()
        .await
        .expect("req fail");
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("data-view=\"dashboard\""));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = spawn_app().await;
    let response = client()
        .get(format!("{}/api-docs/openapi.json", app.address))
        .send()
        .await
        .expect("req fail");
    assert_eq!(response.status(), 200);

    let doc: serde_json::Value = response.json().await.unwrap();
    assert!(doc["paths"]["/api/routes"].is_object());
    assert!(doc["paths"]["/api/navigation"].is_object());
}
