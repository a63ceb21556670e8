/// English number words.
///
/// This module recognizes the spelled-out numbers that may appear as literals
/// or typed replies, such as `five` or `twenty-one`, and converts them to
/// their numeric value. The covered range is zero through ninety-nine; larger
/// quantities have to be written in digits.
pub mod words;
