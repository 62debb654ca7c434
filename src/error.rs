use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors produced while parsing a framed payload back into a message.
#[derive(Error, Debug)]
pub enum FrameError {
    /// Represents a length header that cannot belong to a framed payload,
    /// for example zero, beyond the pixel count, or not byte-aligned
    #[error("Payload header declares an implausible bit length of {declared_bits}")]
    CorruptHeader { declared_bits: u64 },

    /// Represents payload bytes that do not decode as UTF-8 text
    #[error("Payload bytes are not valid UTF-8")]
    CorruptPayload(#[from] FromUtf8Error),

    /// Represents a decoded payload without the proof/message separator
    #[error("Payload is missing the proof separator")]
    MissingSeparator,

    /// Represents a structurally valid payload whose proof does not match
    /// the supplied password
    #[error("Password does not match the embedded proof")]
    PasswordMismatch,
}

/// Errors produced while embedding a message into a cover image.
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Represents a cover image without enough safe pixels for the payload.
    /// Recoverable by choosing a busier cover image or a shorter message
    #[error("Cover image has {capacity} safe carrier bits but the payload needs {required}")]
    InsufficientCapacity { required: usize, capacity: usize },
}

/// Errors produced while extracting a message from a stego image.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Represents a length header that cannot belong to a framed payload.
    /// Usually means the image carries no hidden data at all
    #[error("Embedded header declares an implausible bit length of {declared_bits}")]
    CorruptHeader { declared_bits: u64 },

    /// Represents embedded bytes that do not decode as UTF-8 text
    #[error("Embedded payload is not valid UTF-8")]
    CorruptPayload,

    /// Represents a decoded payload without the proof/message separator
    #[error("Embedded payload has no proof separator")]
    CorruptStructure,

    /// Represents a valid payload whose proof does not match the supplied
    /// password. The only failure that confirms hidden data is present
    #[error("Password does not match the embedded proof")]
    PasswordMismatch,

    /// Represents a carrier that ran out of safe pixels before the header's
    /// promise was fulfilled. Signals truncation or a resaved image
    #[error("Carrier ran out of safe pixels before the payload ended")]
    StreamExhausted,
}

impl From<FrameError> for ExtractError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::CorruptHeader { declared_bits } => {
                ExtractError::CorruptHeader { declared_bits }
            }
            FrameError::CorruptPayload(_) => ExtractError::CorruptPayload,
            FrameError::MissingSeparator => ExtractError::CorruptStructure,
            FrameError::PasswordMismatch => ExtractError::PasswordMismatch,
        }
    }
}

/// Crate-level error for the file-boundary API.
#[derive(Error, Debug)]
pub enum StegoShieldError {
    /// Represents an unsupported carrier file. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a stego output target that would destroy the embedded bits,
    /// for example a JPEG path. Stego images must be written losslessly
    #[error("Stego images must be written as PNG, a lossy format would corrupt the payload")]
    LossyOutputFormat,

    /// Represents a failure when encoding the output image
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents an embedding failure
    #[error(transparent)]
    Embed(#[from] EmbedError),

    /// Represents an extraction failure
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Represents all other cases of `std::io::Error`
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No output file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing password")]
    MissingPassword,
}
