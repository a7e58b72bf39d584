//! Input validation utilities

/// Returns the field when it is present and non-empty
pub fn required(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}

/// Both credential fields, or `None` if either is missing or empty
pub fn required_pair<'a>(
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    Some((required(username)?, required(password)?))
}
