//! Tests for user domain models and registration validation.

#[cfg(test)]
mod tests {
    use crate::users::UserRegistration;
    use crate::{errors::ValidationError, Error};

    fn registration(name: &str, email: &str, password: &str) -> UserRegistration {
        UserRegistration {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(registration("Ana", "ana@example.com", "abc123").validate().is_ok());
    }

    #[test]
    fn test_missing_name_rejected() {
        let reg = UserRegistration {
            name: None,
            email: Some("ana@example.com".to_string()),
            password: Some("abc123".to_string()),
        };
        assert!(matches!(
            reg.validate(),
            Err(Error::Validation(ValidationError::MissingField(f))) if f == "name"
        ));
    }

    #[test]
    fn test_missing_email_rejected() {
        let reg = UserRegistration {
            name: Some("Ana".to_string()),
            email: None,
            password: Some("abc123".to_string()),
        };
        assert!(matches!(
            reg.validate(),
            Err(Error::Validation(ValidationError::MissingField(f))) if f == "email"
        ));
    }

    #[test]
    fn test_email_without_at_sign_rejected() {
        let reg = registration("Ana", "ana.example.com", "abc123");
        assert!(matches!(
            reg.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_five_character_password_rejected() {
        let reg = registration("Ana", "ana@example.com", "abc12");
        assert!(matches!(
            reg.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_six_character_password_accepted() {
        assert!(registration("Ana", "ana@example.com", "abc123").validate().is_ok());
    }

    #[test]
    fn test_empty_password_is_missing_not_invalid() {
        let reg = registration("Ana", "ana@example.com", "");
        assert!(matches!(
            reg.validate(),
            Err(Error::Validation(ValidationError::MissingField(f))) if f == "password"
        ));
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = crate::users::User {
            id: "u-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            is_active: true,
            is_staff: false,
            created_at: Default::default(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("passwordHash"));
    }
}
