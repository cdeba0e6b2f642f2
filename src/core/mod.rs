pub mod notation;
pub mod text_utils;

pub use notation::{Notation, notate, notate_str};
pub use text_utils::{SEPARATORS, non_blank};
