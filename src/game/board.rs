use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    error::GameError,
    models::{Seed, Tile, KEY_CARD},
};

pub struct BoardGenerator;

impl BoardGenerator {
    /// Pick `distribution.len()` distinct words and pair each with a color.
    ///
    /// Pure: the same seed, words and distribution always deal the same
    /// board, in any process. Words are expected to be deduplicated already.
    pub fn deal<'w, C: Clone>(
        seed: Seed,
        words: &'w [String],
        distribution: &[C],
    ) -> Result<Vec<(&'w str, C)>, GameError> {
        let size = distribution.len();
        if words.len() < size {
            return Err(GameError::TooFewWords {
                required: size,
                provided: words.len(),
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed.value());

        let mut indices: Vec<usize> = (0..words.len()).collect();
        let (picked, _) = indices.partial_shuffle(&mut rng, size);

        let mut colors = distribution.to_vec();
        colors.shuffle(&mut rng);

        Ok(picked
            .iter()
            .zip(colors)
            .map(|(&i, color)| (words[i].as_str(), color))
            .collect())
    }

    /// Deal a full board against the two-sided key card.
    pub fn generate(seed: Seed, words: &[String]) -> Result<Vec<Tile>, GameError> {
        Ok(Self::deal(seed, words, &KEY_CARD)?
            .into_iter()
            .map(|(word, colors)| Tile::new(word, colors))
            .collect())
    }

    /// Smallest vocabulary that can produce a board.
    pub fn required_words() -> usize {
        KEY_CARD.len()
    }
}
