use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use rocket::fs::TempFile;

use crate::config::RESOURCE_SERVER_CONFIG;

/// pulls the object path back out of a download url
static OBJECT_PATH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"/o/(.+?)\?").unwrap());

#[cfg(not(test))]
pub fn storage_dir() -> String {
    RESOURCE_SERVER_CONFIG.clone().storage.location
}

#[cfg(test)]
pub fn storage_dir() -> String {
    let thread_name = crate::test::current_thread_name();
    format!("./{thread_name}_objects")
}

/// where the blob for the passed object path lives on disk
pub fn blob_disk_path(object_path: &str) -> PathBuf {
    Path::new(storage_dir().as_str()).join(object_path)
}

/// strips everything outside `[A-Za-z0-9.-]` out of an uploaded file name so
/// it can be embedded in an object path
pub fn sanitize_file_name(name: &str) -> String {
    static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9.\-]").unwrap());
    UNSAFE_CHARS.replace_all(name, "_").to_string()
}

/// builds the object path a new blob is stored under. The timestamp prefix
/// keeps same-named uploads into the same folder from clobbering each other
pub fn object_path_for(
    course_id: &str,
    folder_key: &str,
    file_name: &str,
    timestamp_millis: i64,
) -> String {
    format!(
        "courses/{course_id}/{folder_key}/{timestamp_millis}_{}",
        sanitize_file_name(file_name)
    )
}

/// the url clients download the blob at. This url is the only handle kept on
/// the blob, so [object_path_from_url] must be able to reverse it
pub fn download_url(object_path: &str) -> String {
    let base_url = RESOURCE_SERVER_CONFIG.clone().storage.base_url;
    format!("{base_url}/o/{}?alt=media", percent_encode(object_path))
}

/// recovers the object path from a download url; `None` means the url was not
/// produced by [download_url]
pub fn object_path_from_url(url: &str) -> Option<String> {
    OBJECT_PATH_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| percent_decode(m.as_str()))
}

/// writes the uploaded temp file under the storage directory, creating the
/// intermediate directories as needed. Returns the blob size in bytes
pub async fn save_blob(
    object_path: &str,
    file: &mut TempFile<'_>,
) -> Result<u64, std::io::Error> {
    let disk_path = blob_disk_path(object_path);
    if let Some(parent) = disk_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let size = file.len();
    file.persist_to(&disk_path).await?;
    Ok(size)
}

/// removes the blob at the passed object path. A blob that's already gone is
/// not an error; rejection and deletion flows retry paths they may have
/// already cleaned up
pub fn delete_blob(object_path: &str) -> Result<(), std::io::Error> {
    match fs::remove_file(blob_disk_path(object_path)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// opens the blob for reading. Paths that would escape the storage directory
/// (absolute, or containing `..`) are reported as absent rather than followed
pub fn open_blob(object_path: &str) -> Result<fs::File, std::io::Error> {
    let path = Path::new(object_path);
    let escapes = path
        .components()
        .any(|component| !matches!(component, std::path::Component::Normal(_)));
    if escapes {
        return Err(std::io::Error::from(std::io::ErrorKind::NotFound));
    }
    fs::File::open(blob_disk_path(object_path))
}

/// percent-encodes everything outside the url-unreserved set, one utf8 byte
/// at a time
pub fn percent_encode(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(format!("%{byte:02X}").as_str()),
        }
    }
    encoded
}

/// reverses [percent_encode]. Malformed escapes are kept as literal text
/// instead of failing; the urls this parses are our own
pub fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut decoded: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = &raw[i + 1..i + 3];
            if let Ok(byte) = u8::from_str_radix(hex, 16) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(decoded.as_slice()).to_string()
}
