//! src/domain/contact_name.rs

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<ContactName, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};

    use super::ContactName;
    use crate::domain::ValidationError;

    #[test]
    fn empty_string_is_rejected() {
        let name = "".to_string();
        assert_eq!(
            ContactName::parse(name),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn whitespace_only_names_are_not_empty() {
        for name in [" ", "\t", "  \n "] {
            let parsed = ContactName::parse(name.to_string()).unwrap();
            assert_eq!(parsed.as_ref(), name);
        }
    }

    #[test]
    fn only_the_empty_string_is_rejected() {
        assert_err!(ContactName::parse(String::new()));
        assert_ok!(ContactName::parse("  ".to_string()));
    }

    #[test]
    fn a_valid_name_is_parsed_successfully() {
        let name = "Jane".to_string();
        assert_ok!(ContactName::parse(name));
    }

    #[test]
    fn names_with_symbols_are_kept_verbatim() {
        let name = "Ana (Mum & Baby) <3".to_string();
        let parsed = ContactName::parse(name.clone()).unwrap();
        assert_eq!(parsed.as_ref(), name);
    }
}
