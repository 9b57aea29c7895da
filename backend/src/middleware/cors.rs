//! Cross-origin response headers.
//!
//! Every response gets a fixed origin, method and header allow-list. `OPTIONS`
//! preflight requests are answered here with `200 OK` and an empty body; they
//! never reach the router.

use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderMap, HeaderValue, InvalidHeaderValue,
};
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};

/// Origin allowed when none is configured.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// CORS middleware for a single allowed origin.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use todo_backend::middleware::Cors;
///
/// let cors = Cors::new("https://todo.example").expect("valid origin");
/// let _app = App::new().wrap(cors);
/// ```
#[derive(Clone)]
pub struct Cors {
    allow_origin: HeaderValue,
}

impl Cors {
    /// Allow cross-origin requests from `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderValue`] when `origin` is not a valid header value.
    pub fn new(origin: impl AsRef<str>) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allow_origin: HeaderValue::from_str(origin.as_ref())?,
        })
    }

    fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsMiddleware {
            service,
            cors: self.clone(),
        }))
    }
}

/// Service wrapper produced by [`Cors`].
pub struct CorsMiddleware<S> {
    service: S,
    cors: Cors,
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let cors = self.cors.clone();

        if req.method() == Method::OPTIONS {
            let mut res = req.into_response(HttpResponse::Ok().finish());
            cors.apply(res.headers_mut());
            return Box::pin(ready(Ok(res.map_into_right_body())));
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            cors.apply(res.headers_mut());
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;

    fn header<'a, B>(res: &'a ServiceResponse<B>, name: &str) -> Option<&'a str> {
        res.headers().get(name).and_then(|value| value.to_str().ok())
    }

    #[actix_web::test]
    async fn preflight_short_circuits_with_empty_ok() {
        let app = actix_test::init_service(
            App::new()
                .wrap(Cors::default())
                .route("/todos", web::get().to(|| async { HttpResponse::Ok().body("listed") })),
        )
        .await;
        let req = actix_test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/todos")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(header(&res, "access-control-allow-origin"), Some(DEFAULT_ALLOWED_ORIGIN));
        let body = actix_test::read_body(res).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn preflight_succeeds_for_unrouted_paths() {
        let app = actix_test::init_service(App::new().wrap(Cors::default())).await;
        let req = actix_test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/anything")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn regular_responses_carry_allow_lists() {
        let cors = Cors::new("https://todo.example").expect("valid origin");
        let app = actix_test::init_service(
            App::new()
                .wrap(cors)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(header(&res, "access-control-allow-origin"), Some("https://todo.example"));
        assert_eq!(header(&res, "access-control-allow-methods"), Some(ALLOWED_METHODS));
        assert_eq!(header(&res, "access-control-allow-headers"), Some(ALLOWED_HEADERS));
    }

    #[actix_web::test]
    async fn not_found_responses_carry_allow_lists() {
        let app = actix_test::init_service(App::new().wrap(Cors::default())).await;
        let req = actix_test::TestRequest::get().uri("/missing").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(header(&res, "access-control-allow-origin").is_some());
    }

    #[rstest]
    fn new_rejects_invalid_header_values() {
        assert!(Cors::new("http://bad\norigin").is_err());
    }
}
