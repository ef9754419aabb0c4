use crate::formats::Signature;
use crate::seed::seed;

/// Two-letter categorical tag derived from the title: parity of the raw
/// 32-bit seed, recomputed here rather than shared with the rating's
/// generator so the two derivations stay independent.
pub fn signature(title: &str) -> Signature {
    if seed(title) % 2 == 0 {
        Signature::Re
    } else {
        Signature::Je
    }
}
