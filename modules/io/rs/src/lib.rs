pub use argparse::{argparse, FromToken};
pub use count::{wc, Granularity};
pub use print::{print_range, write_range, Pair};

mod argparse;
mod count;
mod print;
