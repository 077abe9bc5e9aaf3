use std::fmt::Display;
use std::io::{self, Write};

use derive_more::Constructor;

/// Display wrapper rendering a pair as `(first, second)`.
///
/// The adapters yield plain tuples, which cannot implement [`Display`]
/// here; mapping them through this wrapper makes them printable.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Constructor)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A: Display, B: Display> Display for Pair<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Write every item followed by sep, except the last, which is followed by
/// end. Empty input writes nothing at all.
pub fn write_range<W, I>(out: &mut W, items: I, sep: &str, end: &str) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut items = items.into_iter().peekable();
    while let Some(item) = items.next() {
        match items.peek() {
            Some(_) => write!(out, "{item}{sep}")?,
            None => write!(out, "{item}{end}")?,
        }
    }
    Ok(())
}

/// Print items to standard out, space separated and newline terminated.
pub fn print_range<I>(items: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    write_range(&mut io::stdout().lock(), items, " ", "\n")
}
