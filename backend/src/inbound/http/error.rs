//! HTTP adapter mapping for domain errors.
//!
//! Failures reach clients as a bare status code. The body is always empty;
//! the trace identifier header is the only correlation hint.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::warn;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.finish()
    }
}

/// Turn JSON extractor failures into [`ErrorCode::InvalidRequest`].
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejecting malformed JSON body");
    Error::invalid_request(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    #[actix_web::test]
    async fn responses_carry_status_and_empty_body() {
        let cases = [
            (Error::invalid_request("bad"), StatusCode::BAD_REQUEST),
            (Error::method_not_allowed("nope"), StatusCode::METHOD_NOT_ALLOWED),
            (Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, expected) in cases {
            let response = error.error_response();
            assert_eq!(response.status(), expected);
            let body = to_bytes(response.into_body()).await.expect("read body");
            assert!(body.is_empty(), "{expected}: body should be empty");
        }
    }

    #[rstest]
    fn trace_id_header_is_set_when_known() {
        let response = Error::internal("boom").with_trace_id("abc").error_response();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("ascii header");
        assert_eq!(header, "abc");
    }

    #[rstest]
    fn trace_id_header_is_absent_otherwise() {
        let response = Error::internal("boom").error_response();
        assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    }

    #[rstest]
    fn json_extractor_failures_become_bad_request() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let err = json_error_handler(JsonPayloadError::ContentType, &req);
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
