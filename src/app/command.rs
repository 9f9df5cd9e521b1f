//! Command parsing for the command line

use crate::view::{Mode, RevealDirection, Side};

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a card: :add <front> | <back>
    Add { front: String, back: String },
    /// Rewrite the card on screen: :edit <front> | <back>
    Edit { front: String, back: String },
    /// Delete the card on screen (asks first): :delete
    Delete,
    /// Flip the favorite flag: :fav
    Favorite,
    /// Switch mode: :mode general|favorites
    Mode(Mode),
    /// Set reveal direction: :dir ab|ba
    Direction(RevealDirection),
    /// Uncover a side: :reveal front|back
    Reveal(Side),
    /// Next card: :next or :n
    Next,
    /// Previous card: :prev or :p
    Prev,
    /// Pronounce the front: :speak
    Speak,
    /// Quit the application: :q or :quit
    Quit,
    /// Show help: :help or :h
    Help,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
    /// Argument present but not understood
    InvalidArgument { command: String, argument: String },
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    // Split into command and arguments
    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "add" | "a" => match split_sides(args) {
            Some((front, back)) => ParseResult::Ok(Command::Add { front, back }),
            None => ParseResult::MissingArgument("add".to_string()),
        },
        "edit" | "e" => match split_sides(args) {
            Some((front, back)) => ParseResult::Ok(Command::Edit { front, back }),
            None => ParseResult::MissingArgument("edit".to_string()),
        },
        "delete" | "del" | "rm" => ParseResult::Ok(Command::Delete),
        "fav" | "favorite" | "star" => ParseResult::Ok(Command::Favorite),
        "mode" | "m" => match args.to_lowercase().as_str() {
            "" => ParseResult::MissingArgument("mode".to_string()),
            "general" | "all" | "g" => ParseResult::Ok(Command::Mode(Mode::General)),
            "favorites" | "favorite" | "fav" | "f" => {
                ParseResult::Ok(Command::Mode(Mode::Favorites))
            }
            _ => invalid("mode", args),
        },
        "dir" | "direction" => match args {
            "" => ParseResult::MissingArgument("dir".to_string()),
            _ => match RevealDirection::parse(&args.to_uppercase()) {
                Some(direction) => ParseResult::Ok(Command::Direction(direction)),
                None => invalid("dir", args),
            },
        },
        "reveal" | "r" => match args.to_lowercase().as_str() {
            "" => ParseResult::MissingArgument("reveal".to_string()),
            "front" | "a" => ParseResult::Ok(Command::Reveal(Side::Front)),
            "back" | "b" => ParseResult::Ok(Command::Reveal(Side::Back)),
            _ => invalid("reveal", args),
        },
        "next" | "n" => ParseResult::Ok(Command::Next),
        "prev" | "p" => ParseResult::Ok(Command::Prev),
        "speak" | "say" => ParseResult::Ok(Command::Speak),
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

/// Escape a card side for the command line: `\` and `|` get a leading `\`
pub fn escape_side(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '|') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Split `front | back` at the first unescaped `|`, undoing [`escape_side`].
/// Empty sides are kept so the deck rejects them with its own message.
fn split_sides(args: &str) -> Option<(String, String)> {
    let mut front = String::new();
    let mut back = String::new();
    let mut in_back = false;
    let mut chars = args.chars().peekable();

    while let Some(c) = chars.next() {
        let side = if in_back { &mut back } else { &mut front };
        match c {
            '\\' if matches!(chars.peek(), Some('\\' | '|')) => {
                if let Some(escaped) = chars.next() {
                    side.push(escaped);
                }
            }
            '|' if !in_back => in_back = true,
            _ => side.push(c),
        }
    }

    in_back.then(|| (front.trim().to_string(), back.trim().to_string()))
}

fn invalid(command: &str, argument: &str) -> ParseResult {
    ParseResult::InvalidArgument { command: command.to_string(), argument: argument.to_string() }
}
