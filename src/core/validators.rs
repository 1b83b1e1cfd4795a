use crate::utils::error::InputError;

pub const MIN_SENTENCE_WORDS: usize = 3;

/// Parses a single non-negative integer, such as an age.
///
/// Checks run in order: blank, token count, integer syntax, sign.
pub fn validate_non_negative_int(input: &str) -> Result<u32, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let mut tokens = input.split_whitespace();
    let token = tokens.next().ok_or(InputError::Empty)?;
    if tokens.next().is_some() {
        return Err(InputError::TooManyInputs);
    }

    let value: i32 = token.parse().map_err(|_| InputError::NotAnInteger)?;
    u32::try_from(value).map_err(|_| InputError::Negative)
}

pub fn validate_party_size(input: &str) -> Result<u32, InputError> {
    match validate_non_negative_int(input)? {
        0 => Err(InputError::EmptyGroup),
        size => Ok(size),
    }
}

/// Splits a sentence into words, discarding runs of whitespace.
pub fn validate_sentence(input: &str) -> Result<Vec<String>, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let words: Vec<String> = input.split_whitespace().map(str::to_string).collect();
    if words.len() < MIN_SENTENCE_WORDS {
        return Err(InputError::TooFewWords {
            expected: MIN_SENTENCE_WORDS,
            count: words.len(),
        });
    }

    Ok(words)
}
