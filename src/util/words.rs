/// Number words below twenty, indexed by their value.
const UNITS: [&str; 20] = ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
                           "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
                           "sixteen", "seventeen", "eighteen", "nineteen"];

/// Multiples of ten from twenty to ninety.
const TENS: [&str; 8] = ["twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty",
                         "ninety"];

/// Reads an English number word as a number.
///
/// Covers zero through ninety-nine, with compounds written hyphenated
/// (`twenty-one`). Matching ignores case so that quoted literals and typed
/// replies like `Five` still count. Anything outside the covered range is not
/// a number word.
///
/// # Examples
/// ```
/// use parlance::util::words::number;
///
/// assert_eq!(number("one"), Some(1.0));
/// assert_eq!(number("Seventeen"), Some(17.0));
/// assert_eq!(number("forty-two"), Some(42.0));
/// assert_eq!(number("ninety"), Some(90.0));
/// assert_eq!(number("twenty-zero"), None);
/// assert_eq!(number("hundred"), None);
/// ```
#[must_use]
pub fn number(text: &str) -> Option<f64> {
    let text = text.to_lowercase();

    if let Some(value) = unit(&text) {
        return Some(value);
    }
    if let Some(value) = tens(&text) {
        return Some(value);
    }

    let (left, right) = text.split_once('-')?;
    let base = tens(left)?;
    let unit = unit(right).filter(|value| (1.0..=9.0).contains(value))?;

    Some(base + unit)
}

fn unit(text: &str) -> Option<f64> {
    lookup(&UNITS, text)
}

fn tens(text: &str) -> Option<f64> {
    lookup(&TENS, text).map(|index| (index + 2.0) * 10.0)
}

/// Finds a word in a table and yields its index as a number.
fn lookup(table: &[&str], text: &str) -> Option<f64> {
    let index = table.iter().position(|&word| word == text)?;
    u32::try_from(index).ok().map(f64::from)
}
