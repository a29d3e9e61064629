//! Binary-safe value strings.
//!
//! This module provides [`IniValue`], the owned byte buffer an INI value is
//! stored as. Values are opaque: the parser performs no type coercion, and
//! quoted values may contain any byte — including NUL, which the `\0`
//! escape produces.
//!
//! Every value carries an explicit length *and* a guaranteed trailing NUL
//! terminator. The terminator keeps the buffer usable by consumers that
//! expect C-style strings, while the explicit length makes bytes beyond an
//! embedded NUL addressable.
//!
//! ## Examples
//!
//! ```rust
//! use inicfg::IniValue;
//!
//! let value = IniValue::from("hello");
//! assert_eq!(value.len(), 5);
//! assert_eq!(value.as_str(), Some("hello"));
//! assert_eq!(value.as_bytes_with_nul(), b"hello\0");
//!
//! // An embedded NUL does not truncate the value.
//! let value = IniValue::new(b"hello\0world".to_vec());
//! assert_eq!(value.len(), 11);
//! assert_eq!(value.as_bytes(), b"hello\0world");
//! ```

/// An owned value byte string with an explicit length and a trailing NUL.
///
/// The trailing NUL is not part of the value and is not counted by
/// [`len`](IniValue::len); it exists for compatibility with
/// terminator-based consumers. Embedded NUL bytes are legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniValue {
    /// Invariant: never empty; the last byte is always NUL and is not part
    /// of the value.
    bytes: Vec<u8>,
}

impl IniValue {
    /// Creates a value from its content bytes, appending the terminator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::IniValue;
    ///
    /// let value = IniValue::new(vec![0x61, 0x00, 0x62]);
    /// assert_eq!(value.len(), 3);
    /// ```
    #[must_use]
    pub fn new(mut bytes: Vec<u8>) -> Self {
        bytes.push(0);
        IniValue { bytes }
    }

    /// The length of the value in bytes, excluding the trailing NUL.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Returns `true` if the value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value's bytes, without the trailing NUL.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The value's bytes including the trailing NUL, for terminator-based
    /// consumers. Note that embedded NULs make the terminator ambiguous;
    /// prefer [`as_bytes`](IniValue::as_bytes) with the explicit length.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// The value as UTF-8 text, or `None` if the bytes are not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::IniValue;
    ///
    /// assert_eq!(IniValue::from("héllo").as_str(), Some("héllo"));
    /// assert_eq!(IniValue::new(vec![0xFF]).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }
}

impl Default for IniValue {
    fn default() -> Self {
        IniValue::new(Vec::new())
    }
}

impl From<&str> for IniValue {
    fn from(text: &str) -> Self {
        IniValue::new(text.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for IniValue {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
