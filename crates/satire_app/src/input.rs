use satire_core::{Msg, VoteDirection};

pub enum Input {
    Core(Msg),
    /// `new <prompt>`: set the prompt and submit it in one step.
    Submit(String),
    /// Re-render the current view.
    Status,
    Help,
    Quit,
}

/// Parses one line of terminal input.
pub fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Core(Msg::NoOp);
    }
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };
    match command {
        "new" => Input::Submit(rest.to_string()),
        "up" if !rest.is_empty() => Input::Core(Msg::VoteClicked {
            id: rest.to_string(),
            direction: VoteDirection::Up,
        }),
        "down" if !rest.is_empty() => Input::Core(Msg::VoteClicked {
            id: rest.to_string(),
            direction: VoteDirection::Down,
        }),
        "refresh" => Input::Core(Msg::RefreshClicked),
        "status" => Input::Status,
        "quit" | "exit" => Input::Quit,
        _ => Input::Help,
    }
}
