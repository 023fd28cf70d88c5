use thiserror::Error;

#[derive(Error, Debug)]
pub enum LockmacError {
    #[error("session locking is not supported on this platform")]
    UnsupportedPlatform,
}

pub type Result<T> = std::result::Result<T, LockmacError>;
