//! 전역 장애 경계 미들웨어
//!
//! 요청 처리 중 발생한 panic을 잡아 `500 Internal Server Error` 응답으로 바꿉니다.
//! 워커가 조용히 연결을 끊는 대신 항상 응답을 돌려주고, 장애는 `error` 레벨로
//! 기록됩니다. 검증 코어는 이 미들웨어를 알지 못합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::fault_inner::FaultBoundaryService;

/// 전역 장애 경계 미들웨어
///
/// # Examples
///
/// ```rust,ignore
/// App::new()
///     .wrap(FaultBoundary::new())
///     .configure(configure_all_routes)
/// ```
#[derive(Debug, Clone, Default)]
pub struct FaultBoundary;

impl FaultBoundary {
    pub fn new() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for FaultBoundary
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = FaultBoundaryService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(FaultBoundaryService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn ok_handler() -> HttpResponse {
        HttpResponse::Ok().body("fine")
    }

    async fn panicking_handler() -> HttpResponse {
        panic!("greeting template exploded")
    }

    #[actix_web::test]
    async fn test_panic_becomes_internal_server_error() {
        let app = test::init_service(
            App::new()
                .wrap(FaultBoundary::new())
                .route("/boom", web::get().to(panicking_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/boom").to_request();
        let Err(err) = test::try_call_service(&app, req).await else {
            panic!("Expected the panic to surface as an error");
        };

        // 서버는 이 에러를 ResponseError로 렌더링함
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, "greeting template exploded");
    }

    #[actix_web::test]
    async fn test_panic_in_later_request_does_not_poison_worker() {
        let app = test::init_service(
            App::new()
                .wrap(FaultBoundary::new())
                .route("/boom", web::get().to(panicking_handler))
                .route("/ok", web::get().to(ok_handler)),
        )
        .await;

        let boom = test::TestRequest::get().uri("/boom").to_request();
        assert!(test::try_call_service(&app, boom).await.is_err());

        let ok = test::TestRequest::get().uri("/ok").to_request();
        let resp = test::call_service(&app, ok).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_normal_response_passes_through() {
        let app = test::init_service(
            App::new()
                .wrap(FaultBoundary::new())
                .route("/ok", web::get().to(ok_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/ok").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "fine");
    }
}
