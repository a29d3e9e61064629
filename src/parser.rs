//! Line-driven INI parsing.
//!
//! This module contains the parsing engine behind the crate-level entry
//! points:
//!
//! - [`ByteSource`]: the pull-based "next byte or end of input" capability
//!   the driver reads from, with [`SliceSource`] and [`ReaderSource`] as
//!   the provided implementations
//! - the line driver, which assembles logical lines into a reused scratch
//!   buffer, classifies them and tracks the currently open table
//! - the section resolver, which turns a header into a (possibly nested)
//!   table path
//! - the value decoder, which strips raw values, truncates inline comments
//!   and decodes quoted strings with escape sequences
//!
//! Parsing is all-or-nothing: the first error aborts the parse with its
//! 1-based line number and the partially built document is dropped.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use inicfg::{parse_str, IniOptions};
//!
//! let ini = parse_str("[s]\nkey = value\n", IniOptions::stable()).unwrap();
//! assert_eq!(ini.get("s", "key").and_then(|v| v.as_str()), Some("value"));
//! ```
//!
//! [`parse`] accepts any custom [`ByteSource`]:
//!
//! ```rust
//! use inicfg::parser::{parse, SliceSource};
//! use inicfg::IniOptions;
//!
//! let source = SliceSource::new(b"[s]\nkey = value\n");
//! let ini = parse(source, IniOptions::stable()).unwrap();
//! assert!(ini.table("s").is_some());
//! ```

use std::io::{self, Read};

use crate::error::{Error, Result};
use crate::options::IniOptions;
use crate::table::{Ini, IniTable};
use crate::value::IniValue;

/// A pull-based byte source the parser reads from.
///
/// The parser only requires this one capability; where the bytes come from
/// is opaque to it. Reading may block on external I/O.
pub trait ByteSource {
    /// Returns the next byte, `Ok(None)` at end of input, or an I/O error.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

/// A [`ByteSource`] over an in-memory byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    /// Creates a source reading `data` from its start to its end bound.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        SliceSource { data, position: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.data.get(self.position).copied();
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }
}

/// A [`ByteSource`] over any [`io::Read`] stream, buffered internally.
#[derive(Debug)]
pub struct ReaderSource<R> {
    bytes: io::Bytes<io::BufReader<R>>,
}

impl<R: Read> ReaderSource<R> {
    /// Creates a source pulling bytes from `reader`.
    pub fn new(reader: R) -> Self {
        ReaderSource {
            bytes: io::BufReader::new(reader).bytes(),
        }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }
}

/// Parses an INI document from an arbitrary [`ByteSource`].
///
/// On failure everything built so far is dropped and only the error, with
/// its 1-based line number, is returned.
///
/// # Errors
///
/// Returns the first [`Error`] any line produces; see the crate-level
/// documentation for the error catalogue.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse<S: ByteSource>(source: S, options: IniOptions) -> Result<Ini> {
    let mut parser = Parser::new(source, options);
    parser.run()?;
    Ok(Ini {
        root: parser.root,
        options,
    })
}

struct Parser<S> {
    source: S,
    options: IniOptions,
    root: IniTable,
    /// Path of the currently open table, relative to the root. The empty
    /// path is the root/global table itself; `None` means no table has
    /// been opened yet.
    current: Option<Vec<String>>,
    /// Scratch buffer for the current line, reused and grown across lines.
    line: Vec<u8>,
    line_number: usize,
}

impl<S: ByteSource> Parser<S> {
    fn new(source: S, options: IniOptions) -> Self {
        Parser {
            source,
            options,
            root: IniTable::default(),
            current: None,
            line: Vec::with_capacity(256),
            line_number: 0,
        }
    }

    fn run(&mut self) -> Result<()> {
        if self.options.global_props {
            self.current = Some(Vec::new());
        }
        loop {
            self.line_number += 1;
            let at_end = self.read_line()?;
            self.process_line()?;
            if at_end {
                return Ok(());
            }
        }
    }

    /// Reads the next raw line into the scratch buffer, stripping one
    /// trailing carriage return for CR-LF input. Returns `true` once the
    /// source is exhausted.
    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        let at_end = loop {
            let byte = self.source.next_byte().map_err(|e| Error::Io {
                line: self.line_number,
                message: e.to_string(),
            })?;
            match byte {
                None => break true,
                Some(b'\n') => break false,
                Some(byte) => self.line.push(byte),
            }
        };
        if self.line.last() == Some(&b'\r') {
            self.line.pop();
        }
        Ok(at_end)
    }

    fn process_line(&mut self) -> Result<()> {
        let (start, end) = strip_range(&self.line);
        if start == end || self.line[start] == self.options.comment_char {
            return Ok(());
        }
        if self.line[start] == b'[' {
            self.parse_section(start, end)
        } else {
            self.parse_key_value(start, end)
        }
    }

    fn parse_section(&mut self, start: usize, end: usize) -> Result<()> {
        let header = &self.line[start..end];
        if header[header.len() - 1] != b']' {
            return Err(Error::UnclosedSection {
                line: self.line_number,
            });
        }
        if header.len() == 2 {
            if self.options.global_props {
                self.current = Some(Vec::new());
                return Ok(());
            }
            return Err(Error::GlobalScopeDisallowed {
                line: self.line_number,
            });
        }
        let name = String::from_utf8_lossy(&header[1..header.len() - 1]).into_owned();
        self.open_section(&name);
        Ok(())
    }

    /// Resolves a section header name, creating tables as needed, and
    /// makes the final table the currently open one.
    fn open_section(&mut self, name: &str) {
        if !self.options.nesting {
            self.root.tables.get_or_create(name);
            self.current = Some(vec![name.to_string()]);
            return;
        }
        let delim = char::from(self.options.section_delim);
        let path: Vec<String> = match name.strip_prefix(delim) {
            // Relative address: resolution begins at the currently open
            // table, or the root when none is open yet.
            Some(rest) => {
                let mut path = self.current.clone().unwrap_or_default();
                path.extend(rest.split(delim).map(str::to_owned));
                path
            }
            None => name.split(delim).map(str::to_owned).collect(),
        };
        let mut table = &mut self.root;
        for segment in &path {
            table = table.tables.get_or_create(segment);
        }
        self.current = Some(path);
    }

    fn parse_key_value(&mut self, start: usize, end: usize) -> Result<()> {
        let line = &self.line[start..end];
        let delim = self.options.name_value_delim;
        let Some(at) = line.iter().position(|&b| b == delim) else {
            return Err(Error::NameWithoutValue {
                line: self.line_number,
            });
        };
        if self.current.is_none() {
            return Err(Error::NoTableDefined {
                line: self.line_number,
            });
        }
        let key = String::from_utf8_lossy(strip(&line[..at])).into_owned();
        let value = self.decode_value(strip(&line[at + 1..]))?;
        let mut table = &mut self.root;
        if let Some(path) = &self.current {
            for segment in path {
                table = table.tables.get_or_create(segment);
            }
        }
        // Last write wins on repeated keys within the same table.
        table.values.insert(&key, value);
        Ok(())
    }

    /// Turns the raw, already stripped value slice into a stored value.
    fn decode_value(&self, raw: &[u8]) -> Result<IniValue> {
        if self.options.quoted_values && matches!(raw.first(), Some(b'\'' | b'"')) {
            let (mut decoded, rest) = self.decode_quoted(raw)?;
            if !rest.is_empty() && !self.options.inline_comments {
                return Err(Error::TrailingCharactersAfterQuotedValue {
                    line: self.line_number,
                });
            }
            strip_in_place(&mut decoded);
            return Ok(IniValue::new(decoded));
        }
        let mut end = raw.len();
        if self.options.inline_comments {
            for (i, &byte) in raw.iter().enumerate() {
                if byte == self.options.comment_char {
                    // A comment marker as the very first character makes
                    // the value empty; elsewhere it only counts when
                    // preceded by whitespace.
                    if i == 0 {
                        return Ok(IniValue::default());
                    }
                    if is_horizontal_ws(raw[i - 1]) {
                        end = i;
                        break;
                    }
                }
            }
        }
        Ok(IniValue::new(strip(&raw[..end]).to_vec()))
    }

    /// Decodes a quoted value. On success returns the decoded bytes and
    /// the remainder of the line after the closing quote.
    fn decode_quoted<'a>(&self, raw: &'a [u8]) -> Result<(Vec<u8>, &'a [u8])> {
        let quote = raw[0];
        let mut out = Vec::with_capacity(raw.len().saturating_sub(2));
        let mut i = 1;
        while i < raw.len() {
            match raw[i] {
                b'\\' => {
                    let Some(&escape) = raw.get(i + 1) else {
                        // Lone backslash at end of line; no closing quote
                        // can follow.
                        break;
                    };
                    i += 2;
                    match escape {
                        b'\\' => out.push(b'\\'),
                        b'\'' => out.push(b'\''),
                        b'"' => out.push(b'"'),
                        b'0' => out.push(0),
                        b'a' => out.push(0x07),
                        b't' => out.push(b'\t'),
                        b'r' => out.push(b'\r'),
                        b'n' => out.push(b'\n'),
                        b'x' => {
                            let hi = raw.get(i).copied().and_then(hex_digit);
                            let lo = raw.get(i + 1).copied().and_then(hex_digit);
                            let (Some(hi), Some(lo)) = (hi, lo) else {
                                return Err(Error::InvalidHexEscape {
                                    line: self.line_number,
                                });
                            };
                            out.push(hi * 16 + lo);
                            i += 2;
                        }
                        b'u' | b'U' => {
                            let digits = if escape == b'u' { 4 } else { 8 };
                            let mut code: u32 = 0;
                            for _ in 0..digits {
                                let Some(digit) = raw.get(i).copied().and_then(hex_digit) else {
                                    return Err(Error::TruncatedUnicodeEscape {
                                        escape: char::from(escape),
                                        line: self.line_number,
                                    });
                                };
                                code = code * 16 + u32::from(digit);
                                i += 1;
                            }
                            // `from_u32` rejects surrogates and code points
                            // above U+10FFFF, which cannot be stored as
                            // UTF-8.
                            let Some(ch) = char::from_u32(code) else {
                                return Err(Error::IllegalUnicodeCharacter {
                                    line: self.line_number,
                                });
                            };
                            let mut buf = [0u8; 4];
                            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                        }
                        // Unrecognized escapes contribute nothing; both the
                        // backslash and the escaped character are dropped.
                        _ => {}
                    }
                }
                byte if byte == quote => return Ok((out, &raw[i + 1..])),
                byte => {
                    out.push(byte);
                    i += 1;
                }
            }
        }
        Err(Error::UnterminatedQuotedValue {
            line: self.line_number,
        })
    }
}

fn is_horizontal_ws(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

fn strip_range(bytes: &[u8]) -> (usize, usize) {
    let start = bytes
        .iter()
        .position(|b| !is_horizontal_ws(*b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !is_horizontal_ws(*b))
        .map_or(start, |i| i + 1);
    (start, end)
}

/// Strips leading and trailing horizontal whitespace (space, tab).
fn strip(bytes: &[u8]) -> &[u8] {
    let (start, end) = strip_range(bytes);
    &bytes[start..end]
}

fn strip_in_place(bytes: &mut Vec<u8>) {
    while bytes.last().is_some_and(|b| is_horizontal_ws(*b)) {
        bytes.pop();
    }
    let leading = bytes.iter().take_while(|b| is_horizontal_ws(**b)).count();
    bytes.drain(..leading);
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
