//! Message fingerprinting strategies.
//!
//! # Overview
//!
//! A fingerprint is the key under which a message file is grouped with
//! its duplicates. Two strategies are available, selected once per run
//! through [`FingerprintMode`]:
//!
//! - [`BodyFingerprint`]: SHA-1 of every byte after the header block.
//!   The header block ends at the first pair of consecutive blank lines
//!   (`\n` or `\r\n`). Matching is exact: a single differing byte in the
//!   body gives a different key, while header differences are ignored.
//! - [`MessageIdFingerprint`]: the verbatim bytes inside the angle
//!   brackets of the first `Message-ID:` line. Files without one have no
//!   key and are never grouped. Lines are matched as raw bytes, so IDs
//!   that differ only in non-UTF-8 bytes stay distinct.
//!
//! # Example
//!
//! ```no_run
//! use maildedup::scanner::{FingerprintMode, Fingerprinter};
//! use std::path::Path;
//!
//! let fingerprinter = FingerprintMode::MessageId.fingerprinter();
//! match fingerprinter.fingerprint(Path::new("cur/1700000000.M1P2.host")) {
//!     Ok(Some(key)) => println!("key: {}", String::from_utf8_lossy(&key)),
//!     Ok(None) => println!("no Message-ID header"),
//!     Err(e) => eprintln!("fatal: {}", e),
//! }
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::bytes::Regex;
use serde::Serialize;
use sha1::{Digest, Sha1};

use super::HashError;

/// Key that groups duplicate messages.
///
/// The ASCII bytes of a lowercase hex SHA-1 digest in body mode, the raw
/// `Message-ID` value in message-id mode. Keys from different modes are
/// never compared.
pub type FingerprintKey = Vec<u8>;

/// Buffer size for reading message files.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// `Message-ID:` header line, header name matched case-insensitively.
///
/// Unicode mode is off so `.` matches any byte, valid UTF-8 or not. The
/// capture is greedy: `<a@b> <c@d>` yields `a@b> <c@d`.
static MESSAGE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^message-id:\s*<(.+)>\s*$").expect("Message-ID pattern is valid")
});

/// Which fingerprint strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FingerprintMode {
    /// SHA-1 digest of the message body.
    #[default]
    Body,
    /// Value of the `Message-ID` header.
    MessageId,
}

impl FingerprintMode {
    /// Build the fingerprinter for this mode.
    #[must_use]
    pub fn fingerprinter(self) -> Box<dyn Fingerprinter> {
        match self {
            Self::Body => Box::new(BodyFingerprint::new()),
            Self::MessageId => Box::new(MessageIdFingerprint::new()),
        }
    }
}

impl fmt::Display for FingerprintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body => write!(f, "body"),
            Self::MessageId => write!(f, "message-id"),
        }
    }
}

/// Strategy that derives a [`FingerprintKey`] from a message file.
pub trait Fingerprinter: fmt::Debug {
    /// The mode this strategy implements.
    fn mode(&self) -> FingerprintMode;

    /// Compute the key for one message file.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the strategy cannot extract a key from this file.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    fn fingerprint(&self, path: &Path) -> Result<Option<FingerprintKey>, HashError>;
}

/// Body digest fingerprint (SHA-1 over everything after the header block).
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyFingerprint;

impl BodyFingerprint {
    /// Create a new body fingerprinter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Fingerprinter for BodyFingerprint {
    fn mode(&self) -> FingerprintMode {
        FingerprintMode::Body
    }

    fn fingerprint(&self, path: &Path) -> Result<Option<FingerprintKey>, HashError> {
        let reader = open_message(path)?;
        let key = body_digest(reader).map_err(|e| HashError::from_io(path.to_path_buf(), e))?;
        log::trace!("Body digest {} for {}", key, path.display());
        Ok(Some(key.into_bytes()))
    }
}

/// `Message-ID` header fingerprint.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageIdFingerprint;

impl MessageIdFingerprint {
    /// Create a new message-id fingerprinter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Fingerprinter for MessageIdFingerprint {
    fn mode(&self) -> FingerprintMode {
        FingerprintMode::MessageId
    }

    fn fingerprint(&self, path: &Path) -> Result<Option<FingerprintKey>, HashError> {
        let reader = open_message(path)?;
        let key =
            find_message_id(reader).map_err(|e| HashError::from_io(path.to_path_buf(), e))?;
        if key.is_none() {
            log::debug!("No Message-ID header: {}", path.display());
        }
        Ok(key)
    }
}

fn open_message(path: &Path) -> Result<BufReader<File>, HashError> {
    let file = File::open(path).map_err(|e| HashError::from_io(path.to_path_buf(), e))?;
    Ok(BufReader::with_capacity(READ_BUFFER_SIZE, file))
}

/// Hash the body of a message read from `reader`.
///
/// Lines are consumed until two consecutive blank lines have been seen;
/// every byte after them is digested. A message without that boundary
/// has an empty body.
///
/// # Errors
///
/// Returns any I/O error raised by the reader.
pub fn body_digest<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = Vec::new();
    let mut previous_blank = false;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(hex::encode(Sha1::new().finalize()));
        }

        let blank = is_blank_line(&line);
        if blank && previous_blank {
            break;
        }
        previous_blank = blank;
    }

    let mut hasher = Sha1::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Find the first `Message-ID:` line in `reader` and return its value.
///
/// The whole input is scanned top-down; there is no header boundary.
/// The value is returned byte for byte, with no decoding.
///
/// # Errors
///
/// Returns any I/O error raised by the reader.
pub fn find_message_id<R: BufRead>(mut reader: R) -> io::Result<Option<FingerprintKey>> {
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        if let Some(id) = parse_message_id(trim_line_ending(&line)) {
            return Ok(Some(id));
        }
    }
}

/// Extract the bracketed value from a single `Message-ID:` header line.
#[must_use]
pub fn parse_message_id(line: &[u8]) -> Option<FingerprintKey> {
    MESSAGE_ID_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes().to_vec())
}

fn is_blank_line(line: &[u8]) -> bool {
    line == b"\n" || line == b"\r\n"
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
