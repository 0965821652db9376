use std::fmt;

/// Zero-based index of the first listing requested in a page (`from`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageOffset(u32);

impl PageOffset {
    pub const START: PageOffset = PageOffset(0);

    #[cfg(test)]
    pub fn new(offset: u32) -> Self {
        Self(offset)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Fixed-stride advance. The stride is the page size, never the number of
    /// records the previous page actually held. `None` once the offset would
    /// overflow.
    pub fn advance(self, stride: u32) -> Option<Self> {
        self.0.checked_add(stride).map(Self)
    }

    /// 1-based page number, for log lines.
    pub fn page_number(self, page_size: u32) -> u32 {
        self.0 / page_size.max(1) + 1
    }
}

impl fmt::Display for PageOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
