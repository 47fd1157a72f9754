use regex::Regex;

lazy_static::lazy_static! {
    static ref NOT_DIALABLE: Regex = Regex::new(r"[^0-9+]").unwrap();
}

/// `tel:` target for a human formatted number, e.g. `+91 79798 25081`.
pub fn tel_href(phone: &str) -> String {
    let digits = NOT_DIALABLE.replace_all(phone.trim(), "");
    // only a leading plus is meaningful
    let (plus, rest) = match digits.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", &digits[..]),
    };
    format!("tel:{}{}", plus, rest.replace('+', ""))
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

pub fn anchor_href(id: &str) -> String {
    format!("#{}", id)
}
