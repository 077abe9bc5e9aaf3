pub use enumerate::{enumerate, enumerate_from, Enumerate};
pub use product::{product, Product};
pub use range::{range, Range, RangeIter};
pub use zip::{zip, Zip};

mod enumerate;
mod product;
mod range;
mod zip;
