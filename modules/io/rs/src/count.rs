use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use eyre::{Result, WrapErr};

/// Unit counted by [`wc`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Granularity {
    /// Every codepoint, whitespace included.
    Characters,
    /// Whitespace-separated tokens.
    Words,
    /// Newline-delimited records.
    Lines,
}

/// Count characters, words, or lines in a file.
pub fn wc(path: impl AsRef<Path>, granularity: Granularity) -> Result<usize> {
    let path = path.as_ref();
    let file =
        File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let count = match granularity {
        Granularity::Characters | Granularity::Words => {
            let mut content = String::new();
            reader
                .read_to_string(&mut content)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            match granularity {
                Granularity::Characters => content.chars().count(),
                _ => content.split_whitespace().count(),
            }
        }
        Granularity::Lines => {
            let mut total = 0;
            for line in reader.lines() {
                line.wrap_err_with(|| format!("Failed to read {}", path.display()))?;
                total += 1;
            }
            total
        }
    };

    log::trace!("Counted {count} {granularity:?} in {}", path.display());
    Ok(count)
}
