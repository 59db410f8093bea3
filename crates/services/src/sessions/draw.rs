use rand::Rng;
use rand::seq::SliceRandom;

use drill_core::model::QuestionRecord;

/// Draw a uniform random subset of the pool, without replacement.
///
/// Returns `min(count, pool.len())` questions chosen via a partial
/// Fisher-Yates shuffle over borrowed entries; the pool itself is left
/// untouched and every element has the same chance of being selected.
pub(crate) fn draw_questions<R: Rng + ?Sized>(
    pool: &[QuestionRecord],
    count: usize,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    let mut candidates: Vec<&QuestionRecord> = pool.iter().collect();
    let amount = count.min(candidates.len());
    let (picked, _rest) = candidates.partial_shuffle(rng, amount);
    picked.iter().map(|question| (*question).clone()).collect()
}
