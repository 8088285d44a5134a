//! FaultBoundary 미들웨어의 핵심적인 기능
use std::any::Any;
use std::future::ready;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::Error;
use futures_util::future::{FutureExt, LocalBoxFuture};
use crate::core::AppError;

/// panic을 잡아 500 응답으로 바꾸는 서비스
///
/// panic은 `AppError::InternalError`로 반환되고, actix가 `ResponseError`로 평문 500을 렌더링합니다.
pub struct FaultBoundaryService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for FaultBoundaryService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // 라우터가 HttpRequest를 단독 소유해야 하므로 복제하지 않고 로그용 값만 보관
        let method = req.method().to_string();
        let path = req.path().to_string();

        // 동기 구간(라우팅, 추출기 준비)의 panic
        let future = match panic::catch_unwind(AssertUnwindSafe(|| self.service.call(req))) {
            Ok(future) => future,
            Err(payload) => {
                return Box::pin(ready(Err(internal_error(&method, &path, payload.as_ref()))));
            }
        };

        Box::pin(async move {
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(result) => result,
                Err(payload) => Err(internal_error(&method, &path, payload.as_ref())),
            }
        })
    }
}

/// panic을 기록하고 500 응답으로 렌더링될 에러를 만듭니다
fn internal_error(method: &str, path: &str, payload: &(dyn Any + Send)) -> Error {
    let message = panic_message(payload);
    log::error!("💥 요청 처리 중 panic 발생: {} {} - {}", method, path, message);
    AppError::InternalError(message).into()
}

/// panic payload에서 메시지를 꺼냅니다
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "Internal Server Error".to_string()
    }
}
