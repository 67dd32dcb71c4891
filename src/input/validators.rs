pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send>;

/// Whitespace as browsers trim it: Unicode `White_Space` minus NEL, plus
/// the byte order mark.
fn is_browser_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

pub fn browser_trim(value: &str) -> &str {
    value.trim_matches(is_browser_whitespace)
}

/// Rejects values that are empty once surrounding whitespace is removed.
pub fn required_trimmed(message: impl Into<String>) -> Validator {
    let msg = message.into();
    Box::new(move |value: &str| {
        if browser_trim(value).is_empty() {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

/// Rejects only the empty string. Whitespace counts as content.
pub fn required(message: impl Into<String>) -> Validator {
    let msg = message.into();
    Box::new(move |value: &str| {
        if value.is_empty() {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), String> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}
