//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Matches campus addresses like name@iitb.ac.in, name@iitd.ac.in, name@iit.ac.in
static INSTITUTIONAL_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Za-z0-9._%+-]+@iit[a-z]*\.ac\.in$").unwrap()
});

/// Check whether an address belongs to the institutional domain space.
///
/// The local part is one or more characters from `[A-Za-z0-9._%+-]`; the
/// domain is `iit` followed by an optional campus suffix and `.ac.in`.
/// Matching is case-insensitive.
pub fn is_institutional_email(email: &str) -> bool {
    INSTITUTIONAL_EMAIL_REGEX.is_match(email.trim())
}

/// Mask an email address for logging (e.g. `s****@iitb.ac.in`)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}****@{}", first, domain),
            None => format!("****@{}", domain),
        },
        None => String::from("****"),
    }
}
