/// A parsed request line.
///
/// Only the method and the path are extracted; headers and body, if the
/// client sent any, are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token, kept verbatim (e.g. "GET", "POST").
    pub method: String,
    /// The request path (e.g. "/index.html").
    pub path: String,
}

impl Request {
    /// GET is the only method this server implements; the comparison is
    /// against the exact token.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
