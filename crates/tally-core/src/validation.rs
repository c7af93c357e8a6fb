//! # Validation Module
//!
//! Field validation shared by the draft constructors and the catalog
//! edit commands. Record shapes are enforced here once, in types, not
//! by convention at every call site.

use crate::error::{ValidationError, ValidationResult};

/// Validates a product name: non-empty, at most 200 characters.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Es Teh Manis").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a price in minor units: zero or more.
pub fn validate_price(price_minor: i64) -> ValidationResult<()> {
    if price_minor < 0 {
        return Err(ValidationError::NegativeAmount {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a username: non-empty, at most 50 characters.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: 50,
        });
    }

    Ok(())
}

/// Validates a password prior to hashing: non-empty.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert!(validate_product_name("Kopi").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn price_rules() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(10_000).is_ok());
        assert!(validate_price(-1).is_err());
    }

    #[test]
    fn credential_rules() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("  ").is_err());
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("").is_err());
    }
}
