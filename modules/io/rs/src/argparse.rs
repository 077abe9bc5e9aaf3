use eyre::{Result, WrapErr};

/// Conversion from a single launch-vector token.
///
/// Implemented for strings, the primitive integers (base 10), and the
/// primitive floats. Anything else, notably `char` and reference types, has
/// no impl and is rejected at compile time.
pub trait FromToken: Sized {
    fn from_token(token: &str) -> Result<Self>;
}

impl FromToken for String {
    fn from_token(token: &str) -> Result<Self> {
        Ok(token.to_owned())
    }
}

macro_rules! impl_from_token_int {
    ($($int:ty),+ $(,)?) => {$(
        impl FromToken for $int {
            fn from_token(token: &str) -> Result<Self> {
                token
                    .parse::<$int>()
                    .wrap_err_with(|| format!("Invalid integer token: {token}"))
            }
        }
    )+};
}

impl_from_token_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_token_float {
    ($($float:ty),+ $(,)?) => {$(
        impl FromToken for $float {
            fn from_token(token: &str) -> Result<Self> {
                // Parse in the widest format, then narrow.
                let wide = token
                    .parse::<f64>()
                    .wrap_err_with(|| format!("Invalid float token: {token}"))?;
                Ok(wide as $float)
            }
        }
    )+};
}

impl_from_token_float!(f32, f64);

/// Convert a launch vector into typed values. The leading token is the
/// program name and is skipped; every other token must parse as T.
pub fn argparse<T: FromToken>(argv: impl IntoIterator<Item = String>) -> Result<Vec<T>> {
    argv.into_iter()
        .skip(1)
        .map(|token| T::from_token(&token))
        .collect()
}
