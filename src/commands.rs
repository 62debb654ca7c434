use std::path::Path;

use crate::api::hide::HideReport;
use crate::error::StegoShieldError;
use crate::{api, codec, media};

/// Hide `message` inside the cover at `cover_image` and write the stego
/// image to `output`.
pub fn hide(
    cover_image: &Path,
    output: &Path,
    message: &str,
    password: &str,
) -> Result<HideReport, StegoShieldError> {
    api::hide::prepare()
        .with_image(cover_image)
        .with_output(output)
        .with_message(message)
        .with_password(password)
        .execute()
}

/// Recover the message hidden in the image at `secret_image`.
pub fn unveil(secret_image: &Path, password: &str) -> Result<String, StegoShieldError> {
    api::unveil::prepare()
        .from_secret_file(secret_image)
        .using_password(password)
        .execute()
}

/// Report how many carrier bits the cover at `cover_image` offers, without
/// embedding anything.
pub fn inspect_capacity(cover_image: &Path) -> Result<usize, StegoShieldError> {
    let cover = media::load_cover(cover_image)?;
    Ok(codec::capacity(&cover))
}
