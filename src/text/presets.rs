use super::classify::{is_alpha, is_alpha_num, is_digit, is_hex_digit, is_newline, is_space, is_space_or_newline};
use crate::atomic::Atomic;
use crate::take::{TakeSingle, TakeWhile};

/// Element predicate usable in pre-built parsers
///
/// A plain function pointer, so every preset is `Send` and `Sync` and can live
/// in a `static`.
pub type Classifier<T> = fn(&T) -> bool;

macro_rules! presets {
    ($($name:literal, $classify:ident, $single:ident, $multi:ident;)+) => {
        $(
            #[doc = concat!("One `", $name, "` element")]
            pub fn $single<T: Atomic>() -> TakeSingle<Classifier<T>> {
                TakeSingle::new($name, $classify::<T> as Classifier<T>)
            }

            #[doc = concat!("A non-empty run of `", $name, "` elements")]
            pub fn $multi<T: Atomic>() -> TakeWhile<Classifier<T>> {
                TakeWhile::new($name, $classify::<T> as Classifier<T>)
            }
        )+
    };
}

presets! {
    "SPACE", is_space, single_space, multi_spaces;
    "NEWLINE", is_newline, single_newline, multi_newlines;
    "SPACE_OR_NEWLINE", is_space_or_newline, single_space_or_newline, multi_spaces_or_newlines;
    "ALPHA", is_alpha, single_alpha, multi_alphas;
    "DIGIT", is_digit, single_digit, multi_digits;
    "HEX_DIGIT", is_hex_digit, single_hex_digit, multi_hex_digits;
    "ALPHA_NUM", is_alpha_num, single_alpha_num, multi_alpha_nums;
}
