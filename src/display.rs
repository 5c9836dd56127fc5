//! Formatting helpers for rendering records

use chrono::NaiveDate;

const AVATAR_SLOTS: usize = 8;

/// Two-letter initials for an avatar badge.
///
/// With two or more space-separated parts the first letters of the first and
/// last part are used, otherwise the first two characters of the name.
pub fn initials(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split(' ').collect();
    let letters: String = if parts.len() >= 2 {
        let first = parts[0].chars().next();
        let last = parts[parts.len() - 1].chars().next();
        first.into_iter().chain(last).collect()
    } else {
        full_name.chars().take(2).collect()
    };
    letters.to_uppercase()
}

/// `2006-04-12` becomes `Apr 12, 2006`.
pub fn format_dob(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// GPA with one decimal place.
pub fn format_gpa(gpa: f64) -> String {
    format!("{:.1}", gpa)
}

/// Avatar colour slot (1..=8) for an absolute roster position.
pub fn avatar_slot(position: usize) -> usize {
    position % AVATAR_SLOTS + 1
}
