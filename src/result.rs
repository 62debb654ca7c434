use crate::error::StegoShieldError;

pub type Result<T> = std::result::Result<T, StegoShieldError>;
