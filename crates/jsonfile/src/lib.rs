#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod encode;
pub mod decode;

pub use crate::error::{Error, Result};
pub use crate::options::{Layout, Options};

use std::io::{Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

/// Serialize `value` as compact JSON and write it to the file at `path`,
/// creating the file or truncating an existing one.
pub fn encode_to_path<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    crate::encode::to_path(path, value, &Options::compact())
}

/// Like [`encode_to_path`], but pretty-printed with 4-space indentation.
pub fn encode_to_path_indented<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    crate::encode::to_path(path, value, &Options::indented())
}

pub fn encode_to_string<T: Serialize>(value: &T, options: &Options) -> Result<String> {
    crate::encode::to_string(value, options)
}

pub fn encode_to_writer<W: Write, T: Serialize>(writer: W, value: &T, options: &Options) -> Result<()> {
    crate::encode::to_writer(writer, value, options)
}

/// Read the file at `path` and parse its contents as JSON into `T`.
pub fn decode_from_path<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    crate::decode::from_path(path)
}

pub fn decode_from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    crate::decode::from_str(s)
}

pub fn decode_from_reader<R: Read, T: DeserializeOwned>(reader: R) -> Result<T> {
    crate::decode::from_reader(reader)
}
