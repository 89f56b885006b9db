//! Value canonicalization for duplicate comparison
//!
//! All functions here are pure and total: equivalent inputs compare
//! equal after normalization, and no input can fail.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

/// Normalize an email address for comparison
///
/// - Lowercases and trims
/// - Removes `.` from the local part ("a.b@x" == "ab@x")
/// - Truncates the local part at the first `+` ("ab+tag@x" == "ab@x")
/// - Maps the domain through the alias table
///   ("googlemail.com" -> "gmail.com")
///
/// Empty input yields the empty string; input without an `@` is
/// returned lowercased as-is.
pub fn normalize_email(email: &str, aliases: &HashMap<String, String>) -> String {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return email;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return email;
    };

    let local: String = local
        .split('+')
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| *c != '.')
        .collect();

    let domain = aliases.get(domain).map(String::as_str).unwrap_or(domain);

    format!("{local}@{domain}")
}

/// Normalize a phone number for comparison
///
/// Strips every character that is not a decimal digit, so
/// "+1 (555) 123-4567" and "15551234567" compare equal.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize a person name for comparison
///
/// - Unicode NFKD fold, keeping only ASCII alphanumerics and spaces
///   (strips diacritics: "José" == "Jose")
/// - Converts to lowercase
/// - Collapses whitespace
pub fn normalize_name(name: &str) -> String {
    let result: String = name
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect();

    collapse_whitespace(&result.to_lowercase()).trim().to_string()
}

/// Collapse multiple whitespace characters into a single space
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c.is_ascii_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}
