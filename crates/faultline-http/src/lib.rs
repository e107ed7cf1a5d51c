//! gRPC status code to HTTP status translation.

use http::StatusCode;
use tonic::Code;

/// Equivalent HTTP status for a gRPC status code.
///
/// Follows the standard grpc-gateway mapping. Pure function of `code`.
pub fn grpc_to_http(code: Code) -> StatusCode {
    match code {
        Code::Ok => StatusCode::OK,
        Code::Cancelled => StatusCode::REQUEST_TIMEOUT,
        Code::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::AlreadyExists => StatusCode::CONFLICT,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
        Code::FailedPrecondition => StatusCode::BAD_REQUEST,
        Code::Aborted => StatusCode::CONFLICT,
        Code::OutOfRange => StatusCode::BAD_REQUEST,
        Code::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        Code::DataLoss => StatusCode::INTERNAL_SERVER_ERROR,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grpc_to_http() {
        assert_eq!(grpc_to_http(Code::Ok), StatusCode::OK);
        assert_eq!(grpc_to_http(Code::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(grpc_to_http(Code::DeadlineExceeded), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            grpc_to_http(Code::ResourceExhausted),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(grpc_to_http(Code::Cancelled), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            grpc_to_http(Code::Unauthenticated),
            StatusCode::UNAUTHORIZED
        );
    }
}
