use actix_web::{App, HttpResponse, HttpServer, web};
use std::time::Duration;

#[allow(dead_code)]
pub const WIDGETS_PAGE: &str = include_str!("../static/widgets.html");
#[allow(dead_code)]
pub const BARE_PAGE: &str = include_str!("../static/bare.html");

/// Starts a local server with fixture pages and returns its base URL
#[allow(dead_code)]
pub async fn get_test_server_url() -> String {
    let http_server = HttpServer::new(|| {
        App::new()
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html; charset=utf-8")
                        .body(WIDGETS_PAGE)
                }),
            )
            .route(
                "/bare",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html; charset=utf-8")
                        .body(BARE_PAGE)
                }),
            )
            .route(
                "/redirect",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/"))
                        .finish()
                }),
            )
            .route(
                "/loop",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/loop"))
                        .finish()
                }),
            )
            .route(
                "/not-found",
                web::get().to(|| async { HttpResponse::NotFound().body("Not Found") }),
            )
            .route(
                "/slow",
                web::get().to(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    HttpResponse::Ok().content_type("text/html").body(BARE_PAGE)
                }),
            )
            .route(
                "/data.json",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("application/json")
                        .body(r#"{"status": "ok"}"#)
                }),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}
