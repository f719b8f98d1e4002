//! Login handshake pieces
//!
//! Token extraction is deliberately looser than a full XML parse: the
//! device ships a bare `<root ...>TOKEN</root>` fragment and firmware
//! variants disagree about the prolog, so the token is cut straight out
//! of the raw text.

use rand::Rng;

/// Ways a login response can fail to yield a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoginFailure {
    /// The device explicitly rejected the credentials
    Denied,
    /// No usable token between the root tags
    Malformed,
}

/// Pull the session token out of a login response body.
///
/// The token is the text strictly between the close of the opening
/// `<root ...>` tag and `</root>`, trimmed. It is accepted only if
/// non-empty, not `"0"`, not `"denied"`, and fully numeric.
pub(crate) fn parse_login_response(body: &str) -> Result<String, LoginFailure> {
    let token = extract_root_text(body).ok_or(LoginFailure::Malformed)?;

    if token == "denied" {
        return Err(LoginFailure::Denied);
    }
    if token.is_empty() || token == "0" || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(LoginFailure::Malformed);
    }

    Ok(token.to_string())
}

fn extract_root_text(body: &str) -> Option<&str> {
    let root = body.find("<root")?;
    let gt = body[root..].find('>')?;
    let start = root + gt + 1;
    let end = body.find("</root>")?;
    if start > end {
        return None;
    }
    Some(body[start..end].trim())
}

/// Short random decimal nonce for the `rnd` query parameter. The device
/// uses it for cache busting, not security; any digit string works.
pub(crate) fn nonce() -> String {
    let mut rng = rand::thread_rng();
    (0..3).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_extraction() {
        assert_eq!(
            parse_login_response(r#"<?xml version="1.0"?><root lng="0">15736</root>"#),
            Ok("15736".to_string())
        );
        // Whitespace around the token is tolerated
        assert_eq!(
            parse_login_response("<root lng=\"1\">\n  42  \n</root>"),
            Ok("42".to_string())
        );
    }

    #[test]
    fn test_denied() {
        assert_eq!(
            parse_login_response(r#"<?xml version="1.0"?><root lng="0">denied</root>"#),
            Err(LoginFailure::Denied)
        );
    }

    #[test]
    fn test_rejected_tokens() {
        assert_eq!(
            parse_login_response(r#"<root lng="0">0</root>"#),
            Err(LoginFailure::Malformed)
        );
        assert_eq!(
            parse_login_response(r#"<root lng="0"></root>"#),
            Err(LoginFailure::Malformed)
        );
        assert_eq!(
            parse_login_response(r#"<root lng="0">12a45</root>"#),
            Err(LoginFailure::Malformed)
        );
    }

    #[test]
    fn test_missing_root() {
        assert_eq!(
            parse_login_response(r#"<?xml version="1.0"?>"#),
            Err(LoginFailure::Malformed)
        );
        assert_eq!(parse_login_response(""), Err(LoginFailure::Malformed));
        assert_eq!(
            parse_login_response("</root><root>"),
            Err(LoginFailure::Malformed)
        );
    }

    #[test]
    fn test_nonce_shape() {
        for _ in 0..32 {
            let n = nonce();
            assert_eq!(n.len(), 3);
            assert!(n.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
