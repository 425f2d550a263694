use bytes::Bytes;

/// HTTP status codes this server can produce.
///
/// The reason phrases are fixed wire strings, including the literal
/// `502 Not Implemented` status line used for unsupported methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 502 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 502);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 502,
        }
    }

    /// Returns the reason phrase that goes on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// A complete response ready to be serialized.
///
/// `Content-Length` is the only header this server ever emits, and only on
/// 200 and 404 responses. The 400 and 502 responses carry a short plain-text
/// body with no headers at all.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code.
    pub status: StatusCode,
    /// Value of the `Content-Length` header; `None` omits the header.
    pub content_length: Option<usize>,
    /// Response body as bytes.
    pub body: Bytes,
}

impl Response {
    /// 200 with the file contents as the body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self {
            status: StatusCode::Ok,
            content_length: Some(body.len()),
            body,
        }
    }

    /// 404 with the fallback page as the body (empty when there is none).
    pub fn not_found(body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self {
            status: StatusCode::NotFound,
            content_length: Some(body.len()),
            body,
        }
    }

    /// 400 for a request line that could not be parsed.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            content_length: None,
            body: Bytes::from_static(b"Bad Request"),
        }
    }

    /// 502 for any method other than GET.
    pub fn not_implemented() -> Self {
        Self {
            status: StatusCode::NotImplemented,
            content_length: None,
            body: Bytes::from_static(b"Method Not Implemented"),
        }
    }
}
