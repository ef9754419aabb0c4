use crate::formats::Difficulty;

/// Buckets extracted text by the share of "difficult" words (length > 7).
///
/// Tokens are literal space-separated runs, with no whitespace or punctuation
/// normalization; that token rule is shared with the word count feeding the
/// reading-time estimate. Note `"".split(' ')` yields a single empty token,
/// so the zero-token arm below is defensive; an input with no tokens at all
/// is classified Easy rather than dividing by zero.
pub fn classify(text: &str) -> Difficulty {
    let total_words = text.split(' ').count();
    if total_words == 0 {
        return Difficulty::Easy;
    }

    let difficult_words = text.split(' ').filter(|word| word.len() > 7).count();
    let ratio = 100.0 * difficult_words as f64 / total_words as f64;

    if ratio < 15.0 {
        Difficulty::Easy
    } else if ratio < 30.0 {
        Difficulty::Medium
    } else if ratio < 50.0 {
        Difficulty::Hard
    } else {
        Difficulty::VeryHard
    }
}
