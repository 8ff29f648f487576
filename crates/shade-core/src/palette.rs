//! 256-entry RGB palette model.
//!
//! The host engine supplies the palette as an ordered list of 256 RGB
//! triples (8-bit channels), either as structured entries or as the flat
//! 768-byte R,G,B dump its data files carry. The palette is immutable for
//! the lifetime of any shade table built from it.

/// A single palette entry, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 256;

/// An ordered 256-colour palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
}

impl Palette {
    #[must_use]
    pub const fn new(entries: [Rgb; PALETTE_SIZE]) -> Self {
        Self { entries }
    }

    /// Build a palette from a flat 768-byte R,G,B stream.
    #[must_use]
    pub fn from_raw(raw: &[u8; PALETTE_SIZE * 3]) -> Self {
        let mut entries = [Rgb::new(0, 0, 0); PALETTE_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = Rgb::new(raw[i * 3], raw[i * 3 + 1], raw[i * 3 + 2]);
        }
        Self { entries }
    }

    /// Linear grayscale ramp: entry `i` is `(i, i, i)`.
    ///
    /// Every entry is distinct, which makes it a convenient neutral palette
    /// for inspecting shading bands.
    #[must_use]
    pub fn grayscale() -> Self {
        let mut entries = [Rgb::new(0, 0, 0); PALETTE_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            let v = i as u8;
            *entry = Rgb::new(v, v, v);
        }
        Self { entries }
    }

    /// Entry lookup. Total: every `u8` is a valid index.
    #[must_use]
    pub fn entry(&self, index: u8) -> Rgb {
        self.entries[usize::from(index)]
    }

    /// All entries in index order.
    #[must_use]
    pub const fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }
}
