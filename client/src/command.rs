use std::str::FromStr;

use tictactoe_common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Reset,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_ascii_lowercase();
        match input.as_str() {
            "r" | "reset" => Ok(Command::Reset),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => match other.parse::<usize>() {
                Ok(number) if (1..=CELL_COUNT).contains(&number) => Ok(Command::Place(number - 1)),
                Ok(number) => Err(format!("Cell {} does not exist, use 1-{}", number, CELL_COUNT)),
                Err(_) => Err(format!(
                    "Unknown command '{}': enter 1-{}, r to restart or q to quit",
                    other, CELL_COUNT
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_are_one_based() {
        assert_eq!("1".parse(), Ok(Command::Place(0)));
        assert_eq!(" 9\n".parse(), Ok(Command::Place(8)));
    }

    #[test]
    fn test_out_of_range_cells_are_rejected() {
        assert!("0".parse::<Command>().is_err());
        assert!("10".parse::<Command>().is_err());
    }

    #[test]
    fn test_words() {
        assert_eq!("R".parse(), Ok(Command::Reset));
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert!("hello".parse::<Command>().is_err());
    }
}
