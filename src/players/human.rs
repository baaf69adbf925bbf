//! Human player reading coordinates from the console

use dialoguer::Input;

use crate::{
    Result,
    ports::Player,
    tictactoe::{Board, Move, Side},
};

/// Source of 1-based coordinates typed by a human
pub trait CoordinateInput {
    /// Ask for one number. Non-numeric input is handled by the source.
    fn read(&mut self, prompt: &str) -> Result<usize>;

    /// Tell the human the last selection was not accepted
    fn reject(&mut self) {}
}

/// Reads coordinates through `dialoguer`, re-prompting on non-numeric input
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl CoordinateInput for ConsoleInput {
    fn read(&mut self, prompt: &str) -> Result<usize> {
        let value = Input::<usize>::new()
            .with_prompt(prompt)
            .interact_text()?;
        Ok(value)
    }

    fn reject(&mut self) {
        println!("Invalid field selection");
    }
}

/// Player controlled by a human
pub struct HumanPlayer<I = ConsoleInput> {
    name: String,
    side: Side,
    input: I,
}

impl HumanPlayer {
    /// Human at the console
    pub fn new(side: Side) -> Self {
        Self::with_input(side, ConsoleInput)
    }
}

impl<I: CoordinateInput> HumanPlayer<I> {
    /// Human reading from a custom coordinate source
    pub fn with_input(side: Side, input: I) -> Self {
        Self {
            name: format!("Human {side}"),
            side,
            input,
        }
    }
}

impl<I: CoordinateInput> Player for HumanPlayer<I> {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Ask for a row and a column until they name a free cell.
    fn play(&mut self, board: &mut Board) -> Result<Move> {
        if board.status().is_terminal() {
            return Err(crate::Error::GameOver);
        }

        loop {
            let row = self.input.read("Select a row")?;
            let column = self.input.read("Select a column")?;
            let mv = Move::new(row, column);

            if board.place_at(self.side, mv) {
                return Ok(mv);
            }
            log::debug!("rejected selection {mv} for {}", self.side);
            self.input.reject();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::tictactoe::Cell;

    struct Scripted {
        answers: VecDeque<usize>,
        rejections: usize,
    }

    impl Scripted {
        fn new(answers: &[usize]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                rejections: 0,
            }
        }
    }

    impl CoordinateInput for Scripted {
        fn read(&mut self, _prompt: &str) -> Result<usize> {
            self.answers
                .pop_front()
                .ok_or_else(|| crate::Error::InvalidConfiguration {
                    message: "script exhausted".to_string(),
                })
        }

        fn reject(&mut self) {
            self.rejections += 1;
        }
    }

    #[test]
    fn test_human_places_typed_cell() {
        let mut player = HumanPlayer::with_input(Side::X, Scripted::new(&[2, 3]));
        let mut board = Board::new();

        let mv = player.play(&mut board).unwrap();

        assert_eq!(mv, Move::new(2, 3));
        assert_eq!(board.cell(1, 2), Some(Cell::X));
        assert_eq!(player.input.rejections, 0);
    }

    #[test]
    fn occupied_and_out_of_range_selections_are_retried() {
        // occupied (1,1), then (0,2) and (4,1) out of range, then (3,3)
        let script = Scripted::new(&[1, 1, 0, 2, 4, 1, 3, 3]);
        let mut player = HumanPlayer::with_input(Side::O, script);
        let mut board = Board::from_string("X.. ... ...").unwrap();

        let mv = player.play(&mut board).unwrap();

        assert_eq!(mv, Move::new(3, 3));
        assert_eq!(player.input.rejections, 3);
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn input_failure_propagates() {
        let mut player = HumanPlayer::with_input(Side::X, Scripted::new(&[1]));
        let mut board = Board::new();

        assert!(player.play(&mut board).is_err());
        assert_eq!(board, Board::new());
    }
}
