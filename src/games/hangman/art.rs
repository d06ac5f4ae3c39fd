/// Gallows stages, indexed by wrong guesses at the default maximum.
pub const STAGES: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Maps `wrong` out of `max_wrong` onto a stage so that a lost game always
/// lands on the last one.
pub fn stage_index(wrong: u8, max_wrong: u8) -> usize {
    let last = STAGES.len() - 1;
    if max_wrong == 0 || wrong >= max_wrong {
        return last;
    }
    usize::from(wrong) * last / usize::from(max_wrong)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_index_default_max() {
        for wrong in 0..=6 {
            assert_eq!(stage_index(wrong, 6), usize::from(wrong));
        }
    }

    #[test]
    fn test_stage_index_scaled() {
        assert_eq!(stage_index(0, 3), 0);
        assert_eq!(stage_index(1, 3), 2);
        assert_eq!(stage_index(2, 3), 4);
        assert_eq!(stage_index(3, 3), 6);
        assert_eq!(stage_index(11, 12), 5);
        assert_eq!(stage_index(0, 0), 6);
    }
}
