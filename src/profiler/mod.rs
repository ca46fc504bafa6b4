pub mod scoped_timer;

pub use scoped_timer::{measurement_line, ScopedTimer};
