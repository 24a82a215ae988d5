use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};

/// Path extractor for a single numeric id segment.
///
/// Rejects non-numeric or non-positive ids with a 400 before the handler
/// runs, so handlers only ever see well-formed ids.
pub struct SafeIdI64(pub i64);

impl FromRequest for SafeIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(parse_id(raw).map(SafeIdI64))
    }
}

/// Path extractor for the `{register_id}` segment of enrollment routes.
pub struct SafeRegisterIdI64(pub i64);

impl FromRequest for SafeRegisterIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("register_id").unwrap_or_default();
        ready(parse_id(raw).map(SafeRegisterIdI64))
    }
}

fn parse_id(raw: &str) -> Result<i64, actix_web::Error> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => Err(ErrorBadRequest("ID must be positive")),
        Err(_) => Err(ErrorBadRequest("ID must be an integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("9007199254740993").unwrap(), 9007199254740993);
    }

    #[test]
    fn test_parse_id_rejects_junk() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("1.5").is_err());
    }
}
