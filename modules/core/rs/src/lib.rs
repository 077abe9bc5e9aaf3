pub use contains::{contains, contains_key, KeyMember, Member};
pub use iter::{enumerate, enumerate_from, product, range, zip};
pub use iter::{Enumerate, Product, Range, Zip};

pub mod contains;
pub mod iter;
pub mod num;
