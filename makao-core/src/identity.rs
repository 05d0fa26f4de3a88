use makao_shared::Masked;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Kenyan mobile number in canonical `2547XXXXXXXX` form.
///
/// Accepted input formats are the local `07XXXXXXXX` and the international
/// `2547XXXXXXXX`; anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Msisdn(String);

impl Msisdn {
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdentityError::InvalidPhone);
        }

        let canonical = if digits.len() == 10 && digits.starts_with("07") {
            format!("254{}", &digits[1..])
        } else if digits.len() == 12 && digits.starts_with("2547") {
            digits
        } else {
            return Err(IdentityError::InvalidPhone);
        };

        Ok(Msisdn(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local subscriber form, `07XXXXXXXX`.
    pub fn local_format(&self) -> String {
        format!("0{}", &self.0[3..])
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Msisdn {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Msisdn::parse(&value)
    }
}

impl From<Msisdn> for String {
    fn from(value: Msisdn) -> Self {
        value.0
    }
}

/// Contact details collected on the reservation contact step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetails {
    pub full_name: String,
    pub email: String,
    pub phone: Masked<Msisdn>,
}

impl ContactDetails {
    /// Validate and build contact details. All three fields are required; the
    /// phone must be a Kenyan mobile number.
    pub fn new(full_name: &str, email: &str, phone: &str) -> Result<Self, IdentityError> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(IdentityError::MissingField("full_name"));
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(IdentityError::MissingField("email"));
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(IdentityError::InvalidEmail);
        }

        if phone.trim().is_empty() {
            return Err(IdentityError::MissingField("phone"));
        }
        let msisdn = Msisdn::parse(phone)?;

        Ok(Self {
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: Masked::new(msisdn),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Phone number must match 07XXXXXXXX or 2547XXXXXXXX")]
    InvalidPhone,

    #[error("Email address is not valid")]
    InvalidEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_format_accepted() {
        let msisdn = Msisdn::parse("0712345678").unwrap();
        assert_eq!(msisdn.as_str(), "254712345678");
        assert_eq!(msisdn.local_format(), "0712345678");
    }

    #[test]
    fn test_international_format_accepted() {
        let msisdn = Msisdn::parse("254712345678").unwrap();
        assert_eq!(msisdn.as_str(), "254712345678");
    }

    #[test]
    fn test_bad_numbers_rejected() {
        assert!(Msisdn::parse("12345").is_err());
        assert!(Msisdn::parse("0812345678").is_err());
        assert!(Msisdn::parse("2548123456789").is_err());
        assert!(Msisdn::parse("07123A5678").is_err());
        assert!(Msisdn::parse("").is_err());
    }

    #[test]
    fn test_whitespace_is_stripped() {
        let msisdn = Msisdn::parse("0712 345 678").unwrap();
        assert_eq!(msisdn.as_str(), "254712345678");
    }

    #[test]
    fn test_contact_requires_all_fields() {
        assert!(matches!(
            ContactDetails::new("", "jane@example.com", "0712345678"),
            Err(IdentityError::MissingField("full_name"))
        ));
        assert!(matches!(
            ContactDetails::new("Jane Wanjiku", "", "0712345678"),
            Err(IdentityError::MissingField("email"))
        ));
        assert!(matches!(
            ContactDetails::new("Jane Wanjiku", "jane@example.com", ""),
            Err(IdentityError::MissingField("phone"))
        ));

        let contact = ContactDetails::new("Jane Wanjiku", "jane@example.com", "0712345678").unwrap();
        assert_eq!(contact.phone.expose().as_str(), "254712345678");
    }

    #[test]
    fn test_contact_phone_hidden_in_debug() {
        let contact = ContactDetails::new("Jane Wanjiku", "jane@example.com", "0712345678").unwrap();
        let debug = format!("{:?}", contact);
        assert!(!debug.contains("254712345678"));
    }
}
