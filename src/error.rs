// SPDX-License-Identifier: MPL-2.0
use crate::application::port::StorageError;
use crate::domain::error::ProductError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Storage(StorageError),
    Serialization(String),
    Product(ProductError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::Serialization(e) => write!(f, "Serialization Error: {}", e),
            Error::Product(e) => write!(f, "Product Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ProductError> for Error {
    fn from(err: ProductError) -> Self {
        Error::Product(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
