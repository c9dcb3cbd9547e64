use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, Error};

use crate::errors::json_error_handler;
use crate::handlers::{self, chat, uploads};

/// Builds the whole application. `main` calls this once per worker; tests
/// call it directly.
pub fn app(
    max_payload_bytes: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(NormalizePath::trim())
        .wrap(Cors::permissive())
        .wrap(Logger::default())
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_bytes)
                .content_type_required(false)
                .error_handler(json_error_handler),
        )
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/chats")
                .route("/{chat_id}/messages", web::post().to(chat::post_message)),
        )
        .service(web::scope("/uploads").route("/mfp", web::post().to(uploads::upload_mfp)))
        // Mounted with no handlers yet.
        .service(web::scope("/automations"))
        .default_service(web::to(handlers::not_found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, Method, StatusCode};
    use actix_web::test;

    const ORIGIN: &str = "https://app.nexgen.example";

    #[actix_web::test]
    async fn cors_echoes_any_origin_with_credentials() {
        let app = test::init_service(app(1024)).await;
        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header((header::ORIGIN, ORIGIN))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let headers = resp.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            ORIGIN
        );
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[actix_web::test]
    async fn cors_preflight_succeeds() {
        let app = test::init_service(app(1024)).await;
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/chats/room1/messages")
            .insert_header((header::ORIGIN, ORIGIN))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            ORIGIN
        );
    }
}
