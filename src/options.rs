//! Parsing options for INI documents.
//!
//! This module provides [`IniOptions`], which selects the dialect features a
//! parse should accept:
//!
//! - **Global properties**: key-value pairs before any section header, or
//!   inside the unnamed section `[]`
//! - **Nesting**: section headers interpreted as delimiter-separated paths
//! - **Inline comments**: comments that start mid-line after a value
//! - **Quoted values**: values delimited by `'` or `"` with escape sequences
//!
//! The three special characters (name/value delimiter, comment character,
//! section delimiter) are configurable independently of the flags.
//!
//! ## Examples
//!
//! ```rust
//! use inicfg::IniOptions;
//!
//! // The stable preset: no extensions, `=`, `;` and `.` as characters.
//! let stable = IniOptions::stable();
//! assert!(!stable.nesting);
//!
//! // Everything on.
//! let all = IniOptions::all();
//! assert!(all.quoted_values);
//!
//! // Custom dialect: `:` separates names from values, `#` starts comments.
//! let options = IniOptions::stable()
//!     .with_inline_comments(true)
//!     .with_name_value_delim(b':')
//!     .with_comment_char(b'#');
//! ```

/// Options controlling which INI dialect features a parse accepts.
///
/// The default (via [`IniOptions::stable`]) enables none of the feature
/// flags and uses `=` as the name/value delimiter, `;` as the comment
/// character and `.` as the section delimiter. The section delimiter is only
/// consulted when [`nesting`](IniOptions::nesting) is enabled, but it is set
/// in the stable preset anyway so the preset can be copied and adjusted.
///
/// # Examples
///
/// ```rust
/// use inicfg::{parse_str, IniOptions};
///
/// let options = IniOptions::stable().with_global_props(true);
/// let ini = parse_str("greeting = hello\n", options).unwrap();
/// assert_eq!(ini.get("", "greeting").and_then(|v| v.as_str()), Some("hello"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IniOptions {
    /// Allow properties before any section header, and the unnamed
    /// section `[]` which reopens the global scope.
    pub global_props: bool,
    /// Allow nested sections using `section_delim` as a path delimiter.
    pub nesting: bool,
    /// Allow comments that do not start at the beginning of a line. After a
    /// value there has to be at least one whitespace character between the
    /// value and the comment character.
    pub inline_comments: bool,
    /// Allow values to be quoted strings, which may contain escape
    /// sequences for special characters.
    pub quoted_values: bool,
    /// The byte separating a name from its value. Default `=`.
    pub name_value_delim: u8,
    /// The byte starting a comment. Default `;`.
    pub comment_char: u8,
    /// The byte separating path segments in nested section headers.
    /// Default `.`.
    pub section_delim: u8,
}

impl Default for IniOptions {
    fn default() -> Self {
        Self::stable()
    }
}

impl IniOptions {
    /// The stable feature set: no flags enabled, `=`, `;` and `.` as the
    /// special characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::IniOptions;
    ///
    /// let options = IniOptions::stable();
    /// assert_eq!(options.name_value_delim, b'=');
    /// assert!(!options.global_props);
    /// ```
    #[must_use]
    pub const fn stable() -> Self {
        IniOptions {
            global_props: false,
            nesting: false,
            inline_comments: false,
            quoted_values: false,
            name_value_delim: b'=',
            comment_char: b';',
            section_delim: b'.',
        }
    }

    /// Every feature flag enabled, with the stable special characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::IniOptions;
    ///
    /// let options = IniOptions::all();
    /// assert!(options.global_props && options.nesting);
    /// assert!(options.inline_comments && options.quoted_values);
    /// ```
    #[must_use]
    pub const fn all() -> Self {
        IniOptions {
            global_props: true,
            nesting: true,
            inline_comments: true,
            quoted_values: true,
            name_value_delim: b'=',
            comment_char: b';',
            section_delim: b'.',
        }
    }

    /// Enables or disables global properties.
    #[must_use]
    pub fn with_global_props(mut self, enabled: bool) -> Self {
        self.global_props = enabled;
        self
    }

    /// Enables or disables nested section paths.
    #[must_use]
    pub fn with_nesting(mut self, enabled: bool) -> Self {
        self.nesting = enabled;
        self
    }

    /// Enables or disables comments that start mid-line.
    #[must_use]
    pub fn with_inline_comments(mut self, enabled: bool) -> Self {
        self.inline_comments = enabled;
        self
    }

    /// Enables or disables quoted values with escape sequences.
    #[must_use]
    pub fn with_quoted_values(mut self, enabled: bool) -> Self {
        self.quoted_values = enabled;
        self
    }

    /// Sets the byte separating names from values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::IniOptions;
    ///
    /// let options = IniOptions::stable().with_name_value_delim(b':');
    /// assert_eq!(options.name_value_delim, b':');
    /// ```
    #[must_use]
    pub fn with_name_value_delim(mut self, delim: u8) -> Self {
        self.name_value_delim = delim;
        self
    }

    /// Sets the byte that starts a comment.
    #[must_use]
    pub fn with_comment_char(mut self, comment: u8) -> Self {
        self.comment_char = comment;
        self
    }

    /// Sets the byte separating path segments in nested section headers.
    #[must_use]
    pub fn with_section_delim(mut self, delim: u8) -> Self {
        self.section_delim = delim;
        self
    }
}
