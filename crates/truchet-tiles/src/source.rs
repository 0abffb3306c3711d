// SPDX-License-Identifier: MIT
//
// Glyph sources: where letter glyphs come from.
//
// The word renderer only needs `load(letter) -> Option<LetterGlyph>`.
// `None` means "no glyph for this letter" and the renderer skips the
// character; it is never an error.
//
// GlyphSet is the one concrete source. It is filled either from the
// built-in a–z data compiled into the crate or from a directory of
// `<letter>.txt` files. Either way every file is parsed and validated
// when the set is built, so lookups are infallible. A glyph taller than
// GLYPH_ROWS is rejected there too.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::compose::GLYPH_ROWS;
use crate::error::{GlyphError, GlyphResult};
use crate::glyph::LetterGlyph;

/// Anything that can hand out letter glyphs by lowercase letter.
pub trait GlyphSource {
    /// The glyph for `letter`, or `None` if this source has none.
    fn load(&self, letter: char) -> Option<LetterGlyph>;
}

impl<S: GlyphSource + ?Sized> GlyphSource for &S {
    fn load(&self, letter: char) -> Option<LetterGlyph> {
        (**self).load(letter)
    }
}

// ─── Built-in data ──────────────────────────────────────────────────────────

macro_rules! builtin_glyphs {
    ($($letter:literal => $file:literal),* $(,)?) => {
        &[$(($letter, include_str!(concat!("../data/", $file)))),*]
    };
}

const BUILTIN: &[(char, &str)] = builtin_glyphs![
    'a' => "a.txt", 'b' => "b.txt", 'c' => "c.txt", 'd' => "d.txt",
    'e' => "e.txt", 'f' => "f.txt", 'g' => "g.txt", 'h' => "h.txt",
    'i' => "i.txt", 'j' => "j.txt", 'k' => "k.txt", 'l' => "l.txt",
    'm' => "m.txt", 'n' => "n.txt", 'o' => "o.txt", 'p' => "p.txt",
    'q' => "q.txt", 'r' => "r.txt", 's' => "s.txt", 't' => "t.txt",
    'u' => "u.txt", 'v' => "v.txt", 'w' => "w.txt", 'x' => "x.txt",
    'y' => "y.txt", 'z' => "z.txt",
];

// ─── GlyphSet ───────────────────────────────────────────────────────────────

/// An in-memory glyph table keyed by lowercase letter.
///
/// # Examples
///
/// ```
/// use truchet_tiles::source::{GlyphSet, GlyphSource};
///
/// let glyphs = GlyphSet::builtin().unwrap();
/// assert_eq!(glyphs.len(), 26);
/// assert!(glyphs.load('a').is_some());
/// assert!(glyphs.load('7').is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSet {
    glyphs: BTreeMap<char, LetterGlyph>,
}

impl GlyphSet {
    /// A set with no glyphs.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            glyphs: BTreeMap::new(),
        }
    }

    /// The a–z glyphs shipped with the crate.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded data is malformed.
    pub fn builtin() -> GlyphResult<Self> {
        let mut set = Self::new();
        for &(letter, text) in BUILTIN {
            set.insert(letter, ingest(letter, text)?);
        }
        log::debug!("loaded {} built-in glyphs", set.len());
        Ok(set)
    }

    /// Read `<letter>.txt` for every letter a–z present in `dir`.
    ///
    /// Letters without a file are simply absent from the set.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::Io`] if `dir` or a present file cannot be
    /// read, and an [`GlyphError::InLetter`] wrapping the cause for a file
    /// with a non-tile character or more than [`GLYPH_ROWS`] rows.
    pub fn from_dir(dir: impl AsRef<Path>) -> GlyphResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(GlyphError::Io {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
            });
        }

        let mut set = Self::new();
        for letter in 'a'..='z' {
            let path = dir.join(format!("{letter}.txt"));
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => return Err(GlyphError::Io { path, source }),
            };
            set.insert(letter, ingest(letter, &text)?);
        }
        log::debug!("loaded {} glyphs from {}", set.len(), dir.display());
        Ok(set)
    }

    /// Add or replace the glyph for `letter` (stored lowercase).
    pub fn insert(&mut self, letter: char, glyph: LetterGlyph) -> Option<LetterGlyph> {
        self.glyphs.insert(letter.to_ascii_lowercase(), glyph)
    }

    /// Number of letters with a glyph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the set has no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Letters with a glyph, in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }
}

/// Parse one letter's glyph text and check it fits a letter line.
fn ingest(letter: char, text: &str) -> GlyphResult<LetterGlyph> {
    let glyph = LetterGlyph::parse(text).map_err(|e| e.in_letter(letter))?;
    if glyph.height() > GLYPH_ROWS {
        return Err(GlyphError::TooTall {
            rows: glyph.height(),
            max: GLYPH_ROWS,
        }
        .in_letter(letter));
    }
    Ok(glyph)
}

impl GlyphSource for GlyphSet {
    fn load(&self, letter: char) -> Option<LetterGlyph> {
        self.glyphs.get(&letter).cloned()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// A scratch directory under the system temp dir, removed on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir()
                .join(format!("truchet-glyphs-{name}-{}", std::process::id()));
            let _ = fs::remove_dir_all(&path);
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }

        fn write(&self, file: &str, text: &str) {
            fs::write(self.0.join(file), text).unwrap();
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    // ── Built-in ────────────────────────────────────────────────────────

    #[test]
    fn builtin_covers_alphabet() {
        let set = GlyphSet::builtin().unwrap();
        assert_eq!(set.letters().collect::<String>(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn builtin_glyphs_have_standard_height() {
        let set = GlyphSet::builtin().unwrap();
        for letter in set.letters() {
            let glyph = set.load(letter).unwrap();
            assert_eq!(glyph.height(), GLYPH_ROWS, "glyph {letter}");
            assert!(glyph.width() >= 3, "glyph {letter}");
        }
    }

    #[test]
    fn lookup_is_by_lowercase_letter() {
        let set = GlyphSet::builtin().unwrap();
        assert!(set.load('A').is_none());
        assert!(set.load(' ').is_none());
    }

    #[test]
    fn insert_lowercases_key() {
        let mut set = GlyphSet::new();
        set.insert('Q', LetterGlyph::parse("X\n").unwrap());
        assert!(set.load('q').is_some());
        assert_eq!(set.len(), 1);
    }

    // ── Directory ───────────────────────────────────────────────────────

    #[test]
    fn from_dir_reads_present_letters() {
        let dir = ScratchDir::new("present");
        dir.write("a.txt", "XX\nXX\n");
        dir.write("z.txt", "λ\n");
        dir.write("readme.md", "not a glyph");

        let set = GlyphSet::from_dir(&dir.0).unwrap();
        assert_eq!(set.letters().collect::<String>(), "az");
        assert_eq!(set.load('a').unwrap().to_string(), "XX\nXX");
        assert!(set.load('b').is_none());
    }

    #[test]
    fn from_dir_rejects_bad_tile() {
        let dir = ScratchDir::new("bad");
        dir.write("c.txt", "X?\n");

        let err = GlyphSet::from_dir(&dir.0).unwrap_err();
        match err {
            GlyphError::InLetter { letter, source } => {
                assert_eq!(letter, 'c');
                assert!(matches!(*source, GlyphError::InvalidTile { found: '?', .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_dir_rejects_glyph_taller_than_a_line() {
        let dir = ScratchDir::new("tall");
        dir.write("t.txt", "X\nX\nX\nX\nX\nX\n");

        let err = GlyphSet::from_dir(&dir.0).unwrap_err();
        match err {
            GlyphError::InLetter { letter, source } => {
                assert_eq!(letter, 't');
                assert!(matches!(*source, GlyphError::TooTall { rows: 6, max: GLYPH_ROWS }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_dir_accepts_glyph_of_exactly_a_line() {
        let dir = ScratchDir::new("exact");
        dir.write("t.txt", "X\nX\nX\nX\nX\n\n");
        let set = GlyphSet::from_dir(&dir.0).unwrap();
        assert_eq!(set.load('t').unwrap().height(), GLYPH_ROWS);
    }

    #[test]
    fn from_dir_missing_directory_is_io_error() {
        let missing = std::env::temp_dir().join("truchet-glyphs-does-not-exist");
        let err = GlyphSet::from_dir(&missing).unwrap_err();
        assert!(matches!(err, GlyphError::Io { .. }));
    }
}
