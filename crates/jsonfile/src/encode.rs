//! Encoding pipeline: values are serialized fully in memory before any bytes
//! reach the sink, so a serialization failure never touches the target file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::options::{Layout, Options};
use crate::{Error, Result};

pub fn to_vec<T: Serialize>(value: &T, options: &Options) -> Result<Vec<u8>> {
    match options.layout {
        Layout::Compact => Ok(serde_json::to_vec(value)?),
        Layout::Indented => {
            let indent = vec![b' '; options.indent];
            let mut out = Vec::with_capacity(128);
            let mut ser =
                serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
            value.serialize(&mut ser)?;
            Ok(out)
        }
    }
}

pub fn to_string<T: Serialize>(value: &T, options: &Options) -> Result<String> {
    let out = to_vec(value, options)?;
    String::from_utf8(out).map_err(|e| Error::Message(e.to_string()))
}

pub fn to_writer<W: Write, T: Serialize>(mut writer: W, value: &T, options: &Options) -> Result<()> {
    let out = to_vec(value, options)?;
    writer.write_all(&out)?;
    Ok(())
}

/// Create-or-truncate, then a single `write_all`. Not atomic: an I/O failure
/// mid-write can leave a truncated file.
pub fn to_path<P: AsRef<Path>, T: Serialize>(path: P, value: &T, options: &Options) -> Result<()> {
    let out = to_vec(value, options)?;
    let mut file = create_all_access(path.as_ref())?;
    file.write_all(&out)?;
    Ok(())
}

// Mode 0o777 is requested at creation and reduced by the process umask; an
// existing file keeps whatever mode it already has.
#[cfg(unix)]
fn create_all_access(path: &Path) -> std::io::Result<File> {
    use std::fs::OpenOptions;
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o777)
        .open(path)
}

#[cfg(not(unix))]
fn create_all_access(path: &Path) -> std::io::Result<File> {
    File::create(path)
}
