use std::path::{Path, PathBuf};

use crate::api::Password;
use crate::error::StegoShieldError;
use crate::{codec, media};

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// What an embed run looked like, for display next to the stego image.
///
/// `capacity` is the number of safe carrier bits the analyzer found,
/// `used_bits` the portion the payload occupied. Purely informational.
#[derive(Debug, Clone, Copy)]
pub struct HideReport {
    pub capacity: usize,
    pub used_bits: usize,
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password that gates extraction
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the embed and write the stego image to the output path.
    pub fn execute(self) -> Result<HideReport, StegoShieldError> {
        let Some(image) = self.image else {
            return Err(StegoShieldError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoShieldError::TargetNotSet);
        };
        let Some(message) = self.message else {
            return Err(StegoShieldError::MissingMessage);
        };
        let Some(password) = self.password.as_deref() else {
            return Err(StegoShieldError::MissingPassword);
        };

        let cover = media::load_cover(&image)?;
        let embedded = codec::embed(&cover, &message, password)?;
        media::save_stego(&embedded.image, &output)?;

        Ok(HideReport {
            capacity: embedded.capacity,
            used_bits: embedded.used_bits,
        })
    }
}
