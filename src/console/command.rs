use crate::board::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A coordinate move such as `e2e4`
    Move(String),
    /// `moves <square>`: legal destinations of a piece
    Moves(Option<Square>),
    /// `fen` prints the position, `fen <text>` loads one
    Fen(Option<String>),
    Board,
    New,
    Help,
    Quit,
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let cmd = match first {
        "moves" => ConsoleCommand::Moves(parts.get(1).and_then(|s| s.parse().ok())),
        "fen" => {
            let rest = parts[1..].join(" ");
            ConsoleCommand::Fen(if rest.is_empty() { None } else { Some(rest) })
        }
        "board" | "d" => ConsoleCommand::Board,
        "new" => ConsoleCommand::New,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Move(first.to_string()),
    };

    Some(cmd)
}
