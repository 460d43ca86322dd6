/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The error type shared by all streams and codecs of the crate.

/// Errors returned by byte streams, bit streams and value codecs.
///
/// No operation of this crate retries or resynchronizes: every error is
/// returned to the immediate caller. Composite types wrap the error of the
/// failing field in [`Error::Field`]; use [`Error::root`] to get at the
/// innermost error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source was exhausted before delivering any byte of the current
    /// read.
    #[error("unexpected end of stream")]
    EndOfStream,

    /// The underlying transport failed, or delivered only part of a
    /// multi-byte value (kind [`std::io::ErrorKind::UnexpectedEof`]).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The fifth byte of an encoded `u32` carries bits beyond bit 31.
    #[error("malformed EncodedU32: fifth byte is {byte:#04x}, but must be at most 0x0f")]
    MalformedVarint { byte: u8 },

    /// A language code outside `1..=5`.
    #[error("invalid language code {0}: expected a value in 1..=5")]
    InvalidLanguageCode(u8),

    /// A bit width outside the range supported by a field or by the width
    /// field of a composite type.
    #[error("invalid width {width} for {kind}: the maximum is {max}")]
    InvalidFieldRange {
        kind: &'static str,
        width: usize,
        max: usize,
    },

    /// A value does not fit the requested number of bits. Returned only when
    /// the `checks` feature is enabled.
    #[error("value {value} does not fit in {width} bits")]
    ValueTooWide { value: i64, width: usize },

    /// A string to be encoded contains a zero byte, which would be read back
    /// as its terminator.
    #[error("string contains a zero byte at position {position}")]
    InteriorNul { position: usize },

    /// An error raised while reading or writing a named field of a composite
    /// type.
    #[error("{field}: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with the name of the field being processed.
    pub fn in_field(self, field: &'static str) -> Self {
        Error::Field {
            field,
            source: Box::new(self),
        }
    }

    /// Return the innermost error, skipping all [`Error::Field`] wrappers.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Error::Field { source, .. } = err {
            err = source;
        }
        err
    }

    /// Return the field path of this error, outermost first.
    pub fn field_path(&self) -> Vec<&'static str> {
        let mut path = vec![];
        let mut err = self;
        while let Error::Field { field, source } = err {
            path.push(*field);
            err = source;
        }
        path
    }

    /// Return true if the innermost error is [`Error::EndOfStream`].
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self.root(), Error::EndOfStream)
    }
}

/// Result type alias for all the fallible operations of this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Extension for results that adds field context to the error.
pub trait ResultExt<T> {
    /// Wrap the error, if any, with the name of the field being processed.
    fn field(self, field: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[inline]
    fn field(self, field: &'static str) -> Result<T> {
        self.map_err(|e| e.in_field(field))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_field_context() {
        let err = Error::EndOfStream.in_field("Rect.Xmax").in_field("Header");
        assert!(err.is_end_of_stream());
        assert_eq!(err.field_path(), vec!["Header", "Rect.Xmax"]);
        assert_eq!(
            err.to_string(),
            "Header: Rect.Xmax: unexpected end of stream"
        );
    }

    #[test]
    fn test_root_of_plain_error() {
        let err = Error::InvalidLanguageCode(6);
        assert!(matches!(err.root(), Error::InvalidLanguageCode(6)));
        assert!(!err.is_end_of_stream());
        assert!(err.field_path().is_empty());
    }
}
