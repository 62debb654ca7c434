mod codec;
mod proof;

pub use codec::*;
pub use proof::*;
