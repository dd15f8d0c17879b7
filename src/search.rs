use crate::heuristic::{DefaultHeuristic, Heuristic, Score, Weights, WIN_SCORE};
use crate::{Board, Error, LetterInventory, Move};

#[cfg(feature = "flame_it")]
use flamer::flame;

/// Depth limited search for the best next move, with alpha-beta style cutoffs.
///
/// There is a single player, so every level maximizes. A position with no tiles left
/// scores [`WIN_SCORE`], a position without legal moves scores `-WIN_SCORE`, and at the depth
/// limit the heuristic scores the position. Among moves with equal scores the first one
/// found is kept.
pub struct Search {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl Search {
    pub fn new(depth: usize, weights: Weights) -> Self {
        Search {
            depth,
            heuristic: Box::new(DefaultHeuristic::new(weights)),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        Search { depth, heuristic }
    }

    /// Number of moves to look ahead.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Find the best move for `board` with tiles `inventory`, and its score.
    /// Returns None if the hand is empty or there is no legal move.
    /// ## Errors
    /// Only if a move from the board's own move list fails to apply, which means
    /// the board and the hand are out of sync.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn find_move(
        &self,
        board: &Board,
        inventory: &LetterInventory,
    ) -> Result<Option<(Move, Score)>, Error> {
        let (score, best) = self.search(board, inventory, self.depth, -i32::MAX, i32::MAX)?;
        Ok(best.map(|mv| (mv, score)))
    }

    /// Score of the position, as seen from the configured depth.
    pub fn score(&self, board: &Board, inventory: &LetterInventory) -> Result<Score, Error> {
        let (score, _) = self.search(board, inventory, self.depth, -i32::MAX, i32::MAX)?;
        Ok(score)
    }

    fn search(
        &self,
        board: &Board,
        inventory: &LetterInventory,
        depth: usize,
        mut alpha: Score,
        beta: Score,
    ) -> Result<(Score, Option<Move>), Error> {
        if inventory.is_empty() {
            return Ok((WIN_SCORE, None));
        }
        if depth == 0 {
            return Ok((self.heuristic.evaluate(board, inventory, false), None));
        }
        let moves = board.legal_moves(inventory);
        let mut best: Option<(Score, Move)> = None;
        for mv in moves {
            let mut hand = inventory.clone();
            let mut next = board.clone();
            if !next.add_move(&mv)? {
                continue;
            }
            hand.play(&mv)?;
            let (score, _) = self.search(&next, &hand, depth - 1, alpha, beta)?;
            if score == WIN_SCORE {
                return Ok((score, Some(mv)));
            }
            if best.as_ref().map_or(true, |(b, _)| score > *b) {
                best = Some((score, mv));
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        Ok(match best {
            Some((score, mv)) => (score, Some(mv)),
            None => (self.heuristic.evaluate(board, inventory, true), None),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dictionary, WordRef};

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &["cat", "cats", "at", "ta", "as", "aa", "ac", "tat", "sat"];

    /// Scores every position the same, so the first legal move wins ties.
    struct Flat;

    impl Heuristic for Flat {
        fn evaluate(&self, _: &Board, inventory: &LetterInventory, no_moves: bool) -> Score {
            if inventory.is_empty() {
                WIN_SCORE
            } else if no_moves {
                -WIN_SCORE
            } else {
                0
            }
        }
    }

    #[test]
    fn test_winning_move() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let mut board = Board::with_side_length(&dictionary, 11)?;
        board.add_first_word("CATS")?;
        let hand: LetterInventory = "A".chars().collect();
        let search = Search::new(1, Weights::default());
        let (mv, score) = search.find_move(&board, &hand)?.unwrap();
        assert_eq!(score, WIN_SCORE);
        assert_eq!(mv.word(), "AC");
        assert_eq!(mv.anchor(), &WordRef::new("CATS", 1));
        Ok(())
    }

    #[test]
    fn test_no_extension() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let mut board = Board::with_side_length(&dictionary, 11)?;
        board.add_first_word("CAT")?;
        let hand: LetterInventory = "Q".chars().collect();
        assert!(board.legal_moves(&hand).is_empty());
        let search = Search::new(1, Weights::default());
        assert!(search.find_move(&board, &hand)?.is_none());
        assert_eq!(search.score(&board, &hand)?, -WIN_SCORE);
        Ok(())
    }

    #[test]
    fn test_empty_hand() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let mut board = Board::new(&dictionary);
        board.add_first_word("CAT")?;
        let search = Search::new(2, Weights::default());
        let hand = LetterInventory::new();
        assert!(search.find_move(&board, &hand)?.is_none());
        assert_eq!(search.score(&board, &hand)?, WIN_SCORE);
        Ok(())
    }

    #[test]
    fn test_first_of_equal_moves() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let mut board = Board::with_side_length(&dictionary, 11)?;
        board.add_first_word("CAT")?;
        // the Q can not be placed, so no move empties the hand
        let hand: LetterInventory = "AQ".chars().collect();
        let search = Search::with_heuristic(1, Box::new(Flat));
        let moves = board.legal_moves(&hand);
        let (mv, score) = search.find_move(&board, &hand)?.unwrap();
        assert_eq!(score, 0);
        assert!(moves.len() > 1);
        assert_eq!(mv, moves[0]);
        Ok(())
    }

    #[test]
    fn test_deeper_search_finds_win() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let mut board = Board::with_side_length(&dictionary, 11)?;
        board.add_first_word("CAT")?;
        // one move can place at most two of these tiles, two moves can place all
        let hand: LetterInventory = "AAS".chars().collect();
        let search = Search::new(2, Weights::default());
        let (mv, score) = search.find_move(&board, &hand)?.unwrap();
        assert_eq!(score, WIN_SCORE);
        let mut next = board.clone();
        let mut rest = hand.clone();
        assert!(next.add_move(&mv)?);
        rest.play(&mv)?;
        assert!(Search::new(1, Weights::default())
            .find_move(&next, &rest)?
            .map_or(false, |(_, score)| score == WIN_SCORE));
        Ok(())
    }
}
