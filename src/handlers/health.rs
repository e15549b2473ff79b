use actix_web::HttpResponse;

/// Liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("Application is running!")
}

/// Welcome banner
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to the Social Media API!")
}
