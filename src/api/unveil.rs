use std::path::{Path, PathBuf};

use crate::api::Password;
use crate::error::StegoShieldError;
use crate::{codec, media};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    password: Password,
}

impl UnveilApi {
    /// This is the stego image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Set the password that was used at embedding time
    pub fn using_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the extraction and return the hidden message.
    pub fn execute(self) -> Result<String, StegoShieldError> {
        let Some(secret_image) = self.secret_image else {
            return Err(StegoShieldError::CarrierNotSet);
        };
        let Some(password) = self.password.as_deref() else {
            return Err(StegoShieldError::MissingPassword);
        };

        let stego = media::load_cover(&secret_image)?;
        let message = codec::extract(&stego, password)?;

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::error::StegoShieldError;
    use crate::media;
    use crate::test_utils::prepare_checkerboard_image;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        media::save_stego(&prepare_checkerboard_image(100, 100, 10), &carrier)
            .expect("Failed to write carrier image");

        crate::api::hide::prepare()
            .with_message("Hello World")
            .with_image(&carrier)
            .with_password("Secret42")
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message in image");

        let message = crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .using_password("Secret42")
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(message, "Hello World");
    }

    #[test]
    fn missing_pieces_are_reported() {
        let result = crate::api::unveil::prepare().using_password("pw").execute();
        assert!(matches!(result, Err(StegoShieldError::CarrierNotSet)));

        let result = crate::api::unveil::prepare()
            .from_secret_file("secret.png")
            .execute();
        assert!(matches!(result, Err(StegoShieldError::MissingPassword)));
    }
}
