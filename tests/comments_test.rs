/// Integration tests for the comment endpoints
mod common;

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::json;
    use social_api::routes;
    use sqlx::SqlitePool;
    use uuid::Uuid;

    use crate::common::fixtures;

    // ============================================
    // Test Setup Helpers
    // ============================================

    async fn setup_test_app(
        pool: SqlitePool,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .configure(routes::configure_routes),
        )
        .await
    }

    async fn create_post<S>(app: &S, username: &str, content: &str) -> String
    where
        S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "username": username, "content": content }))
            .to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        body["id"].as_str().unwrap().to_string()
    }

    async fn create_comment<S>(
        app: &S,
        post_id: &str,
        username: &str,
        content: &str,
    ) -> serde_json::Value
    where
        S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    {
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/comments", post_id))
            .set_json(json!({ "username": username, "content": content }))
            .to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        test::read_body_json(resp).await
    }

    // ============================================
    // Create / Get
    // ============================================

    #[actix_web::test]
    async fn test_create_and_get_comment() {
        let pool = fixtures::create_test_pool().await;
        let app = setup_test_app(pool).await;

        let post_id = create_post(&app, "alice", "a post").await;
        let comment = create_comment(&app, &post_id, "bob", "first!").await;

        assert!(Uuid::parse_str(comment["id"].as_str().unwrap()).is_ok());
        assert_eq!(comment["postId"].as_str().unwrap(), post_id);
        assert_eq!(comment["username"], "bob");
        assert_eq!(comment["content"], "first!");
        assert!(comment["createdAt"].is_string());
        assert!(comment["updatedAt"].is_string());

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/posts/{}/comments/{}",
                post_id,
                comment["id"].as_str().unwrap()
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], comment["id"]);
        assert_eq!(body["username"], "bob");
        assert_eq!(body["content"], "first!");
    }

    // ============================================
    // Ordering
    // ============================================

    #[actix_web::test]
    async fn test_comments_listed_oldest_first() {
        let pool = fixtures::create_test_pool().await;
        let app = setup_test_app(pool).await;

        let post_id = create_post(&app, "alice", "a post").await;
        create_comment(&app, &post_id, "bob", "A").await;
        create_comment(&app, &post_id, "carol", "B").await;
        create_comment(&app, &post_id, "dave", "C").await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}/comments", post_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let comments = body.as_array().unwrap();
        assert_eq!(comments.len(), 3);
        assert_eq!(comments[0]["content"], "A");
        assert_eq!(comments[1]["content"], "B");
        assert_eq!(comments[2]["content"], "C");
    }

    // ============================================
    // Scoping
    // ============================================

    #[actix_web::test]
    async fn test_comment_with_wrong_post_returns_404() {
        let pool = fixtures::create_test_pool().await;
        let app = setup_test_app(pool).await;

        let post_a = create_post(&app, "alice", "post A").await;
        let post_b = create_post(&app, "bob", "post B").await;
        let comment = create_comment(&app, &post_a, "carol", "on A").await;
        let comment_id = comment["id"].as_str().unwrap();

        // Valid comment id, wrong parent post
        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}/comments/{}", post_b, comment_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post or comment not found");
        assert_eq!(body["code"], 404);
    }

    #[actix_web::test]
    async fn test_unknown_comment_id_returns_404() {
        let pool = fixtures::create_test_pool().await;
        let app = setup_test_app(pool).await;

        let post_id = create_post(&app, "alice", "a post").await;

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/posts/{}/comments/{}",
                post_id,
                Uuid::new_v4()
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post or comment not found");
    }

    // ============================================
    // Missing-Post Gate
    // ============================================

    #[actix_web::test]
    async fn test_comment_endpoints_require_existing_post() {
        let pool = fixtures::create_test_pool().await;
        let app = setup_test_app(pool).await;

        let missing_post = Uuid::new_v4();
        let missing_comment = Uuid::new_v4();

        let requests = vec![
            test::TestRequest::get()
                .uri(&format!("/api/posts/{}/comments", missing_post))
                .to_request(),
            test::TestRequest::post()
                .uri(&format!("/api/posts/{}/comments", missing_post))
                .set_json(json!({ "username": "bob", "content": "hi" }))
                .to_request(),
            test::TestRequest::get()
                .uri(&format!(
                    "/api/posts/{}/comments/{}",
                    missing_post, missing_comment
                ))
                .to_request(),
            test::TestRequest::patch()
                .uri(&format!(
                    "/api/posts/{}/comments/{}",
                    missing_post, missing_comment
                ))
                .set_json(json!({ "username": "bob", "content": "hi" }))
                .to_request(),
            test::TestRequest::delete()
                .uri(&format!(
                    "/api/posts/{}/comments/{}",
                    missing_post, missing_comment
                ))
                .to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Post not found");
            assert_eq!(body["code"], 404);
        }
    }

    // ============================================
    // Update
    // ============================================

    #[actix_web::test]
    async fn test_update_comment_overwrites_both_fields() {
        let pool = fixtures::create_test_pool().await;
        let app = setup_test_app(pool).await;

        let post_id = create_post(&app, "alice", "a post").await;
        let comment = create_comment(&app, &post_id, "bob", "original").await;
        let comment_id = comment["id"].as_str().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/posts/{}/comments/{}", post_id, comment_id))
            .set_json(json!({ "username": "edith", "content": "edited" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], comment["id"]);
        assert_eq!(body["username"], "edith");
        assert_eq!(body["content"], "edited");
        assert_eq!(body["createdAt"], comment["createdAt"]);
    }

    #[actix_web::test]
    async fn test_update_comment_scoped_to_post() {
        let pool = fixtures::create_test_pool().await;
        let app = setup_test_app(pool).await;

        let post_a = create_post(&app, "alice", "post A").await;
        let post_b = create_post(&app, "bob", "post B").await;
        let comment = create_comment(&app, &post_a, "carol", "on A").await;

        let req = test::TestRequest::patch()
            .uri(&format!(
                "/api/posts/{}/comments/{}",
                post_b,
                comment["id"].as_str().unwrap()
            ))
            .set_json(json!({ "username": "mallory", "content": "hijack" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post or comment not found");
    }

    // ============================================
    // Delete
    // ============================================

    #[actix_web::test]
    async fn test_delete_comment() {
        let pool = fixtures::create_test_pool().await;
        let app = setup_test_app(pool).await;

        let post_id = create_post(&app, "alice", "a post").await;
        let comment = create_comment(&app, &post_id, "bob", "bye").await;
        let comment_id = comment["id"].as_str().unwrap();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{}/comments/{}", post_id, comment_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}/comments/{}", post_id, comment_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // Deleting again finds nothing
        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{}/comments/{}", post_id, comment_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post or comment not found");
    }
}
