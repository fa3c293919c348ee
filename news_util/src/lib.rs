mod macros;
mod text;
mod time;

pub use text::*;
pub use time::*;
