use std::{
    io::{self, Error, ErrorKind},
    path::{Path, PathBuf},
};

/// Where `@import` looks for the files it splices into a stylesheet.
///
/// The compiler itself never touches the disk: every import goes through the
/// `Fs` handed to it in [`Options`](crate::Options), so embedders can serve
/// stylesheets from memory, an archive, or nowhere at all.
pub trait Fs: std::fmt::Debug {
    /// Returns `true` if the path points at a readable regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read the entire contents of a file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Produce a stable key for `path`, used to detect import cycles
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        Ok(path.to_path_buf())
    }
}

/// Reads files through [`std::fs`]. This is the default.
#[derive(Debug)]
pub struct StdFs;

impl Fs for StdFs {
    #[inline]
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    #[inline]
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}

/// A file system with no files in it.
///
/// Every `@import` fails to resolve, which makes it suitable for compiling
/// untrusted input with [`from_string`][crate::from_string].
#[derive(Debug)]
pub struct NullFs;

impl Fs for NullFs {
    #[inline]
    fn is_file(&self, _path: &Path) -> bool {
        false
    }

    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        Err(Error::new(
            ErrorKind::NotFound,
            format!("NullFs cannot read {}", path.display()),
        ))
    }
}
