//! Forward-only sources of decoded characters.
//!
//! The preprocessor reads one character at a time and occasionally needs to look at the
//! character after it. `PushbackSource` provides that lookahead over any `CodepointSource` by
//! holding a single pushed back character.
//!
//! Byte sources decode their whole buffer with `encoding_rs` when they are created, stopping at
//! the first invalid sequence. The characters before it are read normally; the error is then
//! returned by every further read.

use encoding_rs::{DecoderResult, Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::DecodeError;

pub trait CodepointSource {
    /// Decode the next character, returning `None` at the end of input.
    fn next_char(&mut self) -> Result<Option<char>, DecodeError>;
}

impl<S: CodepointSource + ?Sized> CodepointSource for &mut S {
    fn next_char(&mut self) -> Result<Option<char>, DecodeError> {
        (**self).next_char()
    }
}

/// The valid prefix of a buffer and the error that ended it, if any.
#[derive(Clone, Debug)]
struct Decoded {
    text: String,
    pos: usize,
    error: Option<DecodeError>,
}

impl Decoded {
    fn new(data: &[u8], encoding: &'static Encoding) -> Self {
        let mut decoder = encoding.new_decoder_without_bom_handling();
        let mut text = String::new();
        let mut read = 0;
        let mut last = false;
        let error = loop {
            let src = &data[read..];
            let size = decoder
                .max_utf8_buffer_length_without_replacement(src.len())
                .unwrap_or(src.len());
            text.reserve(size);
            let (res, n) = decoder.decode_to_string_without_replacement(src, &mut text, last);
            read += n;
            match res {
                DecoderResult::InputEmpty if last => break None,
                // Flush any partial sequence left at the end of the buffer
                DecoderResult::InputEmpty => last = true,
                DecoderResult::OutputFull => {}
                DecoderResult::Malformed(bad, after) => {
                    let offset = read - usize::from(bad) - usize::from(after);
                    break Some(if last {
                        DecodeError::Truncated { offset }
                    } else if encoding == UTF_16LE || encoding == UTF_16BE {
                        DecodeError::UnpairedSurrogate { offset }
                    } else {
                        DecodeError::Malformed { offset }
                    });
                }
            }
        };
        Decoded {
            text,
            pos: 0,
            error,
        }
    }

    fn next_char(&mut self) -> Result<Option<char>, DecodeError> {
        match self.text[self.pos..].chars().next() {
            Some(ch) => {
                self.pos += ch.len_utf8();
                Ok(Some(ch))
            }
            None => self.error.map_or(Ok(None), Err),
        }
    }
}

/// UTF-8 encoded bytes.
#[derive(Clone, Debug)]
pub struct Utf8Source {
    decoded: Decoded,
}

impl Utf8Source {
    pub fn new(data: &[u8]) -> Self {
        Utf8Source {
            decoded: Decoded::new(data, UTF_8),
        }
    }

    /// Byte offset of the next character.
    pub fn offset(&self) -> usize {
        // The decoded text is the input itself up to here
        self.decoded.pos
    }
}

impl CodepointSource for Utf8Source {
    fn next_char(&mut self) -> Result<Option<char>, DecodeError> {
        self.decoded.next_char()
    }
}

/// UTF-16 encoded bytes in either byte order.
#[derive(Clone, Debug)]
pub struct Utf16Source {
    decoded: Decoded,
    offset: usize,
}

impl Utf16Source {
    /// Little endian UTF-16.
    pub fn le(data: &[u8]) -> Self {
        Utf16Source::new(data, UTF_16LE)
    }

    /// Big endian UTF-16.
    pub fn be(data: &[u8]) -> Self {
        Utf16Source::new(data, UTF_16BE)
    }

    fn new(data: &[u8], encoding: &'static Encoding) -> Self {
        Utf16Source {
            decoded: Decoded::new(data, encoding),
            offset: 0,
        }
    }

    /// Byte offset of the next character.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl CodepointSource for Utf16Source {
    fn next_char(&mut self) -> Result<Option<char>, DecodeError> {
        let next = self.decoded.next_char()?;
        if let Some(ch) = next {
            self.offset += 2 * ch.len_utf16();
        }
        Ok(next)
    }
}

/// Bytes in any encoding `encoding_rs` supports, typically a legacy one such as Windows-874
/// (TIS-620).
#[derive(Clone, Debug)]
pub struct EncodedSource {
    decoded: Decoded,
}

impl EncodedSource {
    /// Decode `data` as `encoding`. No BOM sniffing is performed.
    pub fn new(data: &[u8], encoding: &'static Encoding) -> Self {
        EncodedSource {
            decoded: Decoded::new(data, encoding),
        }
    }
}

impl CodepointSource for EncodedSource {
    fn next_char(&mut self) -> Result<Option<char>, DecodeError> {
        self.decoded.next_char()
    }
}

/// Characters that have already been decoded.
#[derive(Clone, Debug)]
pub struct CharSource<'a> {
    chars: &'a [char],
    index: usize,
}

impl<'a> CharSource<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        CharSource { chars, index: 0 }
    }
}

impl CodepointSource for CharSource<'_> {
    fn next_char(&mut self) -> Result<Option<char>, DecodeError> {
        let ch = self.chars.get(self.index).copied();
        if ch.is_some() {
            self.index += 1;
        }
        Ok(ch)
    }
}

/// Wraps a source with room for one pushed back character.
#[derive(Clone, Debug)]
pub struct PushbackSource<S> {
    inner: S,
    pending: Option<char>,
}

impl<S: CodepointSource> PushbackSource<S> {
    pub fn new(inner: S) -> Self {
        PushbackSource {
            inner,
            pending: None,
        }
    }

    /// Return `ch` to the source so the next read yields it again.
    ///
    /// Only one character can be held. If one is already pending, `ch` is handed back in the
    /// error and the source is unchanged.
    pub fn push_back(&mut self, ch: char) -> Result<(), char> {
        if self.pending.is_some() {
            return Err(ch);
        }
        self.pending = Some(ch);
        Ok(())
    }

    /// Decode the next character without consuming it.
    pub fn peek(&mut self) -> Result<Option<char>, DecodeError> {
        if self.pending.is_some() {
            return Ok(self.pending);
        }
        let next = self.inner.next_char()?;
        self.pending = next;
        Ok(next)
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Returns the wrapped source. A pending pushed back character is lost.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: CodepointSource> CodepointSource for PushbackSource<S> {
    fn next_char(&mut self) -> Result<Option<char>, DecodeError> {
        match self.pending.take() {
            Some(ch) => Ok(Some(ch)),
            None => self.inner.next_char(),
        }
    }
}
