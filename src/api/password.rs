use std::fmt::{self, Debug, Formatter};

/// A password that refuses to show up in logs.
///
/// The `Debug` impl masks the secret so builders carrying a password can
/// still derive `Debug` without leaking it.
#[derive(Default)]
pub struct Password(Option<String>);

impl Password {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.len()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_and_as_deref() {
        let password: Password = None.into();
        assert_eq!(password.as_deref(), None);

        let password: Password = "password".into();
        assert_eq!(password.as_deref(), Some("password"));
    }

    #[test]
    fn test_debug_masks_the_secret() {
        let password: Password = None.into();
        assert_eq!(format!("{:?}", password), "Password(None)");

        let password: Password = "password".into();
        assert_eq!(format!("{:?}", password), "Password(********)");
    }
}
