//! Tables and the parsed document.
//!
//! This module provides the two owning types a parse produces:
//!
//! - [`IniTable`]: one section's key-value entries plus its nested child
//!   tables, each held in an ordered case-insensitive [`IniMap`]
//! - [`Ini`]: the whole document — the root table and the options the
//!   parse ran with
//!
//! A successful document is read-only: every query takes `&self`, never
//! fails, and expresses absence as `None`. Releasing the document is plain
//! `Drop`; ownership is strictly tree-shaped, so the recursive free is
//! handled by the compiler.
//!
//! ## Examples
//!
//! ```rust
//! use inicfg::{parse_str, IniOptions};
//!
//! let ini = parse_str("[server]\nhost = example.com\n", IniOptions::stable()).unwrap();
//!
//! let server = ini.table("server").unwrap();
//! assert_eq!(server.get("host").and_then(|v| v.as_str()), Some("example.com"));
//! assert!(server.get("missing").is_none());
//! ```

use crate::map::{IniMap, Iter};
use crate::options::IniOptions;
use crate::value::IniValue;

/// A single INI section: named values plus nested child tables.
#[derive(Debug, Clone, Default)]
pub struct IniTable {
    pub(crate) values: IniMap<IniValue>,
    pub(crate) tables: IniMap<IniTable>,
}

impl IniTable {
    /// Gets a value by name. The empty name never matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::{parse_str, IniOptions};
    ///
    /// let ini = parse_str("[s]\nkey = 1\n", IniOptions::stable()).unwrap();
    /// let table = ini.table("s").unwrap();
    /// assert_eq!(table.get("KEY").and_then(|v| v.as_str()), Some("1"));
    /// assert!(table.get("").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IniValue> {
        if name.is_empty() {
            return None;
        }
        self.values.get(name)
    }

    /// Gets a direct child table by flat name. The empty name never
    /// matches.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&IniTable> {
        if name.is_empty() {
            return None;
        }
        self.tables.get(name)
    }

    /// Returns a fresh iterator over this table's key-value pairs in
    /// ascending case-insensitive key order.
    ///
    /// The iterator yields `None` once exhausted; restart by calling
    /// `iter` again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::{parse_str, IniOptions};
    ///
    /// let ini = parse_str("[s]\nb = 2\na = 1\n", IniOptions::stable()).unwrap();
    /// let table = ini.table("s").unwrap();
    ///
    /// let keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, IniValue> {
        self.values.iter()
    }
}

/// A parsed INI document: the root table plus the options it was parsed
/// with.
///
/// Produced only by [`parse_str`](crate::parse_str),
/// [`parse_slice`](crate::parse_slice), [`parse_reader`](crate::parse_reader)
/// or [`parser::parse`](crate::parser::parse). The document is immutable
/// and may be shared between threads for reading.
#[derive(Debug, Clone)]
pub struct Ini {
    pub(crate) root: IniTable,
    pub(crate) options: IniOptions,
}

impl Ini {
    /// The options this document was parsed with.
    #[must_use]
    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    /// Gets a table by name.
    ///
    /// The empty name denotes the root/global scope and only matches if
    /// global properties were enabled during the parse. If nesting was
    /// enabled, the name is interpreted as a path separated by the section
    /// delimiter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::{parse_str, IniOptions};
    ///
    /// let ini = parse_str("[a.b]\nkey = 1\n", IniOptions::all()).unwrap();
    /// assert!(ini.table("a.b").is_some());
    /// assert!(ini.table("a").is_some());
    /// assert!(ini.table("b").is_none());
    /// ```
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&IniTable> {
        if name.is_empty() {
            return self.options.global_props.then_some(&self.root);
        }
        if self.options.nesting {
            let delim = char::from(self.options.section_delim);
            let mut table = &self.root;
            for segment in name.split(delim) {
                table = table.tables.get(segment)?;
            }
            Some(table)
        } else {
            self.root.tables.get(name)
        }
    }

    /// Gets a value in one call: `table` addresses the table as in
    /// [`Ini::table`], `name` the value within it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::{parse_str, IniOptions};
    ///
    /// let ini = parse_str("[section]\nkey = value\n", IniOptions::stable()).unwrap();
    /// assert_eq!(ini.get("section", "key").and_then(|v| v.as_str()), Some("value"));
    /// assert!(ini.get("section", "other").is_none());
    /// assert!(ini.get("missing", "key").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, table: &str, name: &str) -> Option<&IniValue> {
        self.table(table)?.get(name)
    }
}
