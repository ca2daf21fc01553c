//! Output formatting.

mod terminal;

pub use terminal::{format_field, print_subnet_info};
