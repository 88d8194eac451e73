use std::time::Duration;

use abbmock_core::simulate::{parse_delay, ErrorDirective};

#[test]
fn directives_parse_from_the_known_set() {
    assert_eq!(ErrorDirective::parse(Some("timeout")), Some(ErrorDirective::Timeout));
    assert_eq!(ErrorDirective::parse(Some("507")), Some(ErrorDirective::RateLimited));
    assert_eq!(ErrorDirective::parse(Some("429")), Some(ErrorDirective::TooManyRequests));
    assert_eq!(ErrorDirective::parse(Some("404")), Some(ErrorDirective::NotFound));
    assert_eq!(ErrorDirective::parse(Some("500")), Some(ErrorDirective::ServerError));
}

#[test]
fn unknown_directives_mean_no_simulation() {
    assert_eq!(ErrorDirective::parse(None), None);
    assert_eq!(ErrorDirective::parse(Some("")), None);
    assert_eq!(ErrorDirective::parse(Some("503")), None);
    assert_eq!(ErrorDirective::parse(Some("TIMEOUT")), None);
}

#[test]
fn directive_status_codes_match_the_wire_values() {
    assert_eq!(ErrorDirective::Timeout.status().as_u16(), 408);
    assert_eq!(ErrorDirective::RateLimited.status().as_u16(), 507);
    assert_eq!(ErrorDirective::TooManyRequests.status().as_u16(), 429);
    assert_eq!(ErrorDirective::NotFound.status().as_u16(), 404);
    assert_eq!(ErrorDirective::ServerError.status().as_u16(), 500);
}

#[test]
fn delay_parsing_is_permissive() {
    assert_eq!(parse_delay(Some("3")), Some(Duration::from_secs(3)));
    assert_eq!(parse_delay(Some("0")), Some(Duration::from_secs(0)));
    assert_eq!(parse_delay(Some("abc")), None);
    assert_eq!(parse_delay(Some("-1")), None);
    assert_eq!(parse_delay(Some("1.5")), None);
    assert_eq!(parse_delay(None), None);
}
