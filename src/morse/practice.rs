//! Random practice messages.

use rand::Rng;
use rand::seq::SliceRandom;

use super::symbols::WORD_SPACE;

/// Chance of a word break before each token after the first.
pub const WORD_BREAK_PROBABILITY: f64 = 0.25;

/// A message of `length` tokens drawn uniformly from `alphabet`.
///
/// Word spaces are sprinkled between tokens with probability
/// [`WORD_BREAK_PROBABILITY`] and do not count towards `length`. The message
/// never starts with a space. Tokens are returned as-is, so prosigns stay whole
/// and the result can go straight to [`Keyer::code_tokens`](crate::Keyer::code_tokens).
///
/// # Examples
///
/// ```
/// use koch::random_message;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let message = random_message(&["K", "M", "AR"], 10, &mut rng);
/// assert_eq!(message.iter().filter(|t| **t != " ").count(), 10);
/// ```
pub fn random_message<'a, R: Rng + ?Sized>(
    alphabet: &[&'a str],
    length: usize,
    rng: &mut R,
) -> Vec<&'a str> {
    let mut message = Vec::with_capacity(length + length / 2);
    for i in 0..length {
        let Some(&token) = alphabet.choose(rng) else {
            break;
        };
        if i > 0 && rng.gen_bool(WORD_BREAK_PROBABILITY) {
            message.push(WORD_SPACE);
        }
        message.push(token);
    }
    message
}
