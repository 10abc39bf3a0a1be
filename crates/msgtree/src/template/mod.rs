//! Placeholder handling for message text.
//!
//! Message text may contain `{name}` placeholders, where `name` is one or more
//! ASCII word characters. This module splits text into literal and placeholder
//! segments and substitutes caller-supplied values into them.

mod placeholder;

pub use placeholder::{Segment, parse_segments, placeholder_names, substitute};
