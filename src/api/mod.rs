pub mod hide;
pub mod unveil;

mod password;
pub use password::Password;
