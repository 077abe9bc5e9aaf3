pub use join::{join, Joinable};
pub use slice::{slice, slice_str};
pub use split::{split, split_str};

mod join;
mod slice;
mod split;
