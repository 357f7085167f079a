//! Helpers for inputs whose elements stand for characters (`char`, `u8`)
//!
//! Element classifiers, pre-built single/run parsers built on them, and
//! converters from matched input to strings and numbers.

pub mod classify;
pub mod convert;
pub mod presets;

pub use classify::{
    in_set, is_alpha, is_alpha_num, is_digit, is_hex_digit, is_newline, is_space, is_space_or_newline,
    not_in_set,
};
pub use convert::{ConvertError, to_float, to_int, to_string};
pub use presets::{
    multi_alpha_nums, multi_alphas, multi_digits, multi_hex_digits, multi_newlines, multi_spaces,
    multi_spaces_or_newlines, single_alpha, single_alpha_num, single_digit, single_hex_digit, single_newline,
    single_space, single_space_or_newline,
};
