//! Decoding: the whole input is read into memory, then handed to serde_json.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::Result;

pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    Ok(serde_json::from_str(s)?)
}

pub fn from_reader<R: Read, T: DeserializeOwned>(mut reader: R) -> Result<T> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    from_slice(&buf)
}

/// The file handle lives for exactly the duration of the read and is released
/// on every exit path.
pub fn from_path<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T> {
    let bytes = fs::read(path)?;
    from_slice(&bytes)
}
