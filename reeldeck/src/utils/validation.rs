/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a rating on the server's 0-100 scale
pub fn validate_rating(rating100: i64) -> ValidationResult {
    if !(0..=100).contains(&rating100) {
        return ValidationResult::err("Rating must be between 0 and 100");
    }
    ValidationResult::ok()
}

/// Validate a server base URL
pub fn validate_server_url(url: &str) -> ValidationResult {
    let url = url.trim();
    if url.is_empty() {
        return ValidationResult::err("Server URL is required");
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return ValidationResult::err("Server URL must start with http:// or https://");
    }

    let rest = url
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    if rest.is_empty() {
        return ValidationResult::err("Server URL is missing a host");
    }

    ValidationResult::ok()
}

/// Validate an API key
pub fn validate_api_key(key: &str) -> ValidationResult {
    if key.trim().is_empty() {
        return ValidationResult::err("API key is required");
    }
    ValidationResult::ok()
}

/// Validate a tag name before creation
pub fn validate_tag_name(name: &str) -> ValidationResult {
    let name = name.trim();
    if name.is_empty() {
        return ValidationResult::err("Tag name is required");
    }

    if name.len() > 100 {
        return ValidationResult::err("Tag name must be less than 100 characters");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_validation() {
        assert!(validate_rating(0).is_valid);
        assert!(validate_rating(50).is_valid);
        assert!(validate_rating(100).is_valid);
        assert!(!validate_rating(-1).is_valid);
        assert!(!validate_rating(101).is_valid);
    }

    #[test]
    fn test_server_url_validation() {
        assert!(validate_server_url("http://media.local:9999").is_valid);
        assert!(validate_server_url("https://catalog.example.com").is_valid);
        assert!(!validate_server_url("").is_valid);
        assert!(!validate_server_url("media.local:9999").is_valid); // no scheme
        assert!(!validate_server_url("http://").is_valid); // no host
    }

    #[test]
    fn test_api_key_validation() {
        assert!(validate_api_key("secret").is_valid);
        assert!(!validate_api_key("").is_valid);
        assert!(!validate_api_key("   ").is_valid);
    }

    #[test]
    fn test_tag_name_validation() {
        assert!(validate_tag_name("outdoor").is_valid);
        assert!(!validate_tag_name("").is_valid);
        assert!(!validate_tag_name("  ").is_valid);
        assert!(!validate_tag_name(&"x".repeat(101)).is_valid);
    }
}
