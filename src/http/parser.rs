use crate::http::request::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The request line has fewer than two space-separated tokens.
    MalformedRequestLine,
}

/// Extracts the method and path from the first line of the request text.
///
/// The line is split on single literal spaces: the first token is the
/// method, the second the path. Consecutive spaces produce empty tokens, so
/// `GET  /x` parses with an empty path. Anything past the first line is
/// ignored here; the connection keeps the full text for the access log.
pub fn parse_request_line(text: &str) -> Result<Request, ParseError> {
    let line = text.lines().next().unwrap_or("");
    let mut tokens = line.split(' ');

    let method = tokens.next().unwrap_or("");
    let path = tokens.next().ok_or(ParseError::MalformedRequestLine)?;

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_request_line("GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();

        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/index.html");
    }
}
