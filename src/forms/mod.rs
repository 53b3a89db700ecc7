use validator::Validate;

pub mod categories;
pub mod tags;

/// Maximum allowed length for category and tag names, counted after sanitizing.
pub const NAME_MAX_LEN: usize = 255;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Reasons a submitted name is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameIssue {
    Empty,
    TooLong,
}

/// Name as stored, checked against the length limit.
#[derive(Debug, Validate)]
struct SanitizedName {
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    value: String,
}

/// Sanitize `raw` and enforce `1..=NAME_MAX_LEN` characters on the result.
fn clean_name(raw: &str) -> Result<String, NameIssue> {
    let name = SanitizedName {
        value: sanitize_inline_text(raw),
    };

    if name.value.is_empty() {
        return Err(NameIssue::Empty);
    }
    if name.validate().is_err() {
        return Err(NameIssue::TooLong);
    }

    Ok(name.value)
}

/// Collapse runs of whitespace into single spaces and drop control characters.
fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}
