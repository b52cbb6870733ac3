//! Format checks shared by the providers.

use std::sync::OnceLock;

use regex::Regex;

/// Non-empty local part, one `@`, dot separated alphanumeric/hyphen labels.
const EMAIL_PATTERN: &str = r"^.+@[a-zA-Z0-9\-]+(\.[a-zA-Z0-9\-]+)*$";

const PAGE_ID_PATTERN: &str = r"^[0-9]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("e-mail pattern compiles"))
}

fn page_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PAGE_ID_PATTERN).expect("page id pattern compiles"))
}

pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// One or more ASCII digits.
pub fn is_page_id(value: &str) -> bool {
    page_id_regex().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("a@b.com", true)]
    #[case::no_tld("admin@localhost", true)]
    #[case::hyphen_domain("shop@my-shop.example.org", true)]
    #[case::plus_local("a+news@b.com", true)]
    #[case::empty("", false)]
    #[case::no_at("not-an-email", false)]
    #[case::empty_local("@b.com", false)]
    #[case::empty_domain("a@", false)]
    #[case::trailing_dot("a@b.", false)]
    #[case::underscore_domain("a@b_c.com", false)]
    #[case::trailing_newline("a@b.com\n", false)]
    fn email_check(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_email(value), expected);
    }

    #[rstest]
    #[case::single("1", true)]
    #[case::leading_zero("007", true)]
    #[case::empty("", false)]
    #[case::letters("abc", false)]
    #[case::negative("-1", false)]
    #[case::space(" 1", false)]
    #[case::fraction("1.5", false)]
    fn page_id_check(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_page_id(value), expected);
    }
}
