extern crate std;

use crate::{FinishMode, Lzma2Decoder, Lzma2Error};
use alloc::vec;
use alloc::vec::Vec;
use core::num::NonZeroUsize;
use std::io::Read;

impl std::error::Error for Lzma2Error {}

/// Pull based reader that decodes an LZMA2 stream from an inner reader.
#[derive(Debug)]
pub struct Lzma2Reader<R: Read> {
    /// the inner decoder with its own dictionary window
    decoder: Lzma2Decoder<'static>,
    /// the underlying stream
    reader: R,
    /// A buffer
    buffer: Vec<u8>,
    /// Amount of bytes in the buffer we have consumed.
    buffer_consumed: usize,
    /// Amount of bytes in the buffer available for consumption.
    buffer_fill_count: usize,
    /// Are we at the end of a valid LZMA2 stream and should return eof?
    eos: bool,
}

impl<R: Read> Lzma2Reader<R> {
    /// Creates a new instance of `Lzma2Reader`. The property byte is not
    /// part of the raw stream and must be supplied by the caller.
    ///
    /// # Errors
    /// `Lzma2Error::UnsupportedProperty` if `prop` exceeds 40.
    #[allow(clippy::missing_panics_doc)] //We never actually panic.
    pub fn new(r: R, prop: u8) -> Result<Self, Lzma2Error> {
        Self::new_with_buffer_size(r, prop, NonZeroUsize::new(8192).expect("Impossible to fail"))
    }

    /// Creates a new instance with a custom input buffer size.
    ///
    /// # Errors
    /// `Lzma2Error::UnsupportedProperty` if `prop` exceeds 40.
    pub fn new_with_buffer_size(
        r: R,
        prop: u8,
        buffer_size: NonZeroUsize,
    ) -> Result<Self, Lzma2Error> {
        Ok(Self {
            decoder: Lzma2Decoder::with_alloc_dict(prop)?,
            reader: r,
            buffer: vec![0; buffer_size.into()],
            buffer_consumed: 0,
            buffer_fill_count: 0,
            eos: false,
        })
    }

    /// Reset the decoder to possibly decode the next fresh stream.
    pub fn reset(&mut self) {
        self.eos = false;
        self.decoder.reset();
    }

    /// Returns true if the reader reached the end of a valid LZMA2 stream.
    #[must_use]
    pub const fn is_eos(&self) -> bool {
        self.eos
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Ensure that the buffer has at least 1 more readable byte. Otherwise, fill the inner buffer.
    fn fill_buffer(&mut self) -> std::io::Result<()> {
        debug_assert!(self.buffer_fill_count >= self.buffer_consumed);

        if self.buffer_consumed == self.buffer_fill_count {
            self.buffer_fill_count = self.reader.read(&mut self.buffer)?;
            if self.buffer_fill_count == 0 {
                return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
            }
            self.buffer_consumed = 0;
        }

        Ok(())
    }
}

impl<R: Read> Read for Lzma2Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if buf.is_empty() || self.eos {
            return Ok(0);
        }

        loop {
            debug_assert!(self.buffer_fill_count >= self.buffer_consumed);
            self.fill_buffer()?;

            let input = &self.buffer[self.buffer_consumed..self.buffer_fill_count];
            return match self.decoder.decode_to_buf(buf, input, FinishMode::Any) {
                Ok(res) => {
                    self.buffer_consumed += res.input_consumed();
                    if res.is_finished() {
                        self.eos = true;
                        return Ok(res.output_produced());
                    }
                    if res.output_produced() == 0 {
                        continue;
                    }
                    Ok(res.output_produced())
                }
                Err(err) => Err(std::io::Error::new(std::io::ErrorKind::InvalidData, err)),
            };
        }
    }
}
