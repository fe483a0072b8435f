//! Integration tests for the HTTP API against in-memory repositories

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web};
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};

    use blog_api::app::create_app;
    use blog_api::dto::{ArticleResponse, CreateAccessTokenResponse, LoginResponse};
    use blog_api::routes::AppState;
    use blog_core::domain::entities::token::RefreshToken;
    use blog_core::domain::entities::user::User;
    use blog_core::repositories::{
        MockArticleRepository, MockRefreshTokenRepository, MockUserRepository,
        RefreshTokenRepository,
    };
    use blog_core::services::{
        AuthServiceConfig, SigningConfig, TokenCodec, TokenIssuer, TokenValidator, MIN_BCRYPT_COST,
    };
    use blog_shared::config::Environment;

    type State = AppState<MockUserRepository, MockRefreshTokenRepository, MockArticleRepository>;

    struct Context {
        state: web::Data<State>,
        users: Arc<MockUserRepository>,
        refresh_tokens: Arc<MockRefreshTokenRepository>,
        codec: TokenCodec,
    }

    fn context() -> Context {
        let users = Arc::new(MockUserRepository::new());
        let refresh_tokens = Arc::new(MockRefreshTokenRepository::new());
        let codec = TokenCodec::new(SigningConfig::new("blog-api-test", "api-test-secret"));
        let state = web::Data::new(AppState::new(
            users.clone(),
            refresh_tokens.clone(),
            Arc::new(MockArticleRepository::new()),
            codec.clone(),
            AuthServiceConfig::new(MIN_BCRYPT_COST),
        ));

        Context {
            state,
            users,
            refresh_tokens,
            codec,
        }
    }

    impl Context {
        async fn logged_in(&self) -> LoginResponse {
            self.state
                .auth_service
                .signup("writer@example.com", "password1")
                .await
                .unwrap();
            let pair = self
                .state
                .auth_service
                .login("writer@example.com", "password1")
                .await
                .unwrap();
            LoginResponse::from(pair)
        }
    }

    #[actix_web::test]
    async fn test_health_check() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert!(body["version"].is_string());
    }

    #[actix_web::test]
    async fn test_signup() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "email": "new@example.com", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 1);

        let duplicate = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "email": "new@example.com", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, duplicate).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let invalid = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "email": "not-an-email", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, invalid).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["fields"], json!(["email"]));
    }

    #[actix_web::test]
    async fn test_login() {
        let ctx = context();
        ctx.state
            .auth_service
            .signup("reader@example.com", "password1")
            .await
            .unwrap();
        let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "reader@example.com", "password": "password1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["accessToken"].is_string());
        assert!(body["refreshToken"].is_string());

        let wrong = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "reader@example.com", "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, wrong).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_create_new_access_token() {
        let ctx = context();
        let pair = ctx.logged_in().await;
        let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

        let req = test::TestRequest::post()
            .uri("/api/token")
            .set_json(json!({ "refreshToken": pair.refresh_token }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: CreateAccessTokenResponse = test::read_body_json(resp).await;
        let claims = ctx.codec.decode(&body.access_token).unwrap();
        assert_eq!(claims.sub, "writer@example.com");
        assert_eq!(claims.user_id(), Some(1));
        assert_eq!(claims.exp - claims.iat, 7200);
    }

    #[actix_web::test]
    async fn test_create_new_access_token_failures_are_bad_requests() {
        let ctx = context();
        let pair = ctx.logged_in().await;

        // A record whose owner no longer exists
        let ghost = User::new(77, "ghost@example.com", "hash");
        ctx.users.insert(ghost.clone()).await;
        let orphaned = TokenIssuer::new(ctx.codec.clone())
            .issue(&ghost, Duration::days(14))
            .unwrap();
        ctx.refresh_tokens
            .save(RefreshToken::new(ghost.id, orphaned.clone(), Utc::now() + Duration::days(14)))
            .await
            .unwrap();
        assert!(ctx.users.remove(77).await.is_some());

        let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

        for token in ["garbage", pair.access_token.as_str(), orphaned.as_str()] {
            let req = test::TestRequest::post()
                .uri("/api/token")
                .set_json(json!({ "refreshToken": token }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert!(body["error"].is_string());
            assert!(body["message"].is_string());
        }
    }

    #[actix_web::test]
    async fn test_create_new_access_token_rejects_malformed_body() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

        let req = test::TestRequest::post()
            .uri("/api/token")
            .set_json(json!({ "token": "abc" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_articles_require_bearer_token() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

        let req = test::TestRequest::get().uri("/api/articles").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "UNAUTHORIZED");

        let req = test::TestRequest::get()
            .uri("/api/articles")
            .insert_header(("Authorization", "Bearer invalid-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_article_crud() {
        let ctx = context();
        let pair = ctx.logged_in().await;
        let bearer = format!("Bearer {}", pair.access_token);
        assert!(TokenValidator::new(ctx.codec.clone()).is_valid(&pair.access_token));

        let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

        let req = test::TestRequest::post()
            .uri("/api/articles")
            .insert_header(("Authorization", bearer.as_str()))
            .set_json(json!({ "title": "First", "content": "Hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["title"], "First");

        let req = test::TestRequest::get()
            .uri("/api/articles")
            .insert_header(("Authorization", bearer.as_str()))
            .to_request();
        let list: Vec<ArticleResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            list,
            vec![ArticleResponse {
                title: "First".to_string(),
                content: "Hello".to_string(),
            }]
        );

        let req = test::TestRequest::put()
            .uri(&format!("/api/articles/{}", id))
            .insert_header(("Authorization", bearer.as_str()))
            .set_json(json!({ "title": "Edited", "content": "Changed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/articles/{}", id))
            .insert_header(("Authorization", bearer.as_str()))
            .to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found, json!({ "title": "Edited", "content": "Changed" }));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/articles/{}", id))
            .insert_header(("Authorization", bearer.as_str()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/articles/{}", id))
            .insert_header(("Authorization", bearer.as_str()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], format!("not found: {}", id));
    }
}
