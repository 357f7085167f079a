use crate::atomic::Atomic;
use std::error::Error as StdError;
use std::str::FromStr;

/// Failure of a text converter
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("input is not text")]
    NotText,

    #[error("invalid number {text:?}: {source}")]
    Number {
        text: String,
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// The matched input as a `String`
///
/// Fails only for element types without a text view.
pub fn to_string<T: Atomic>(input: &[T]) -> Result<String, ConvertError> {
    T::slice_to_text(input).ok_or(ConvertError::NotText)
}

/// The matched input parsed as an integer of type `N`
pub fn to_int<N, T>(input: &[T]) -> Result<N, ConvertError>
where
    N: FromStr,
    N::Err: StdError + Send + Sync + 'static,
    T: Atomic,
{
    parse_number(input)
}

/// The matched input parsed as an `f64`
pub fn to_float<T: Atomic>(input: &[T]) -> Result<f64, ConvertError> {
    parse_number(input)
}

fn parse_number<N, T>(input: &[T]) -> Result<N, ConvertError>
where
    N: FromStr,
    N::Err: StdError + Send + Sync + 'static,
    T: Atomic,
{
    let text = to_string(input)?;
    text.parse().map_err(|source: N::Err| ConvertError::Number {
        text,
        source: Box::new(source),
    })
}
