use super::{Descriptor, InvalidDescriptor};

/// Verdict of a [`Walker::find_next`] predicate on a single sub-descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    /// Stop here and hand the descriptor to the caller.
    Found,
    /// Skip the descriptor and keep scanning.
    NotFound,
    /// Abort the scan, e.g. on reaching the next interface.
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// The stream ended before the predicate matched.
    NotFound,
    /// The predicate returned [`Search::Fail`].
    PredicateStop,
    /// The sub-descriptor at `offset` could not be parsed.
    Malformed {
        offset: usize,
        cause: InvalidDescriptor,
    },
}

/// Forward-only cursor over a configuration descriptor stream.
///
/// The cursor only moves past sub-descriptors that parsed successfully, so it
/// never leaves the buffer and a malformed entry is reported again on every
/// call instead of being skipped.
#[derive(Clone, Debug)]
pub struct Walker<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Walker<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Position of the cursor from the start of the stream.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Advance past the next sub-descriptor, whatever it is.
    pub fn next_descriptor(&mut self) -> Result<Descriptor<'a>, WalkError> {
        self.find_next(|_| Search::Found)
    }

    /// Scan for the first sub-descriptor accepted by `predicate`, starting at
    /// the cursor.
    ///
    /// On success the cursor is left past the returned descriptor so the scan
    /// can be resumed. On [`WalkError::PredicateStop`] it is left on the
    /// descriptor that stopped the scan.
    pub fn find_next<F>(&mut self, mut predicate: F) -> Result<Descriptor<'a>, WalkError>
    where
        F: FnMut(&Descriptor<'a>) -> Search,
    {
        loop {
            if self.buf.len() < 2 {
                return Err(WalkError::NotFound);
            }
            let (descriptor, length) =
                Descriptor::parse(self.buf).map_err(|cause| WalkError::Malformed {
                    offset: self.offset,
                    cause,
                })?;
            log::trace!("descriptor at {}: {:?}", self.offset, descriptor);
            match predicate(&descriptor) {
                Search::Found => {
                    self.advance(length);
                    return Ok(descriptor);
                }
                Search::NotFound => self.advance(length),
                Search::Fail => return Err(WalkError::PredicateStop),
            }
        }
    }

    fn advance(&mut self, length: usize) {
        self.buf = &self.buf[length..];
        self.offset += length;
    }
}
