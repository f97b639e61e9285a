use common::games::snake::{SessionCommand, Turn};
use eframe::egui;

/// Key binding cheat sheet shown beside the board.
pub const KEY_HELP: [(&str, &str); 14] = [
    ("a / ←", "Left"),
    ("d / →", "Right"),
    ("f", "Add food"),
    ("q", "Add special food"),
    ("g", "Grow"),
    ("c", "Next colour"),
    ("u", "Dump to log"),
    ("+ / -", "Game speed"),
    ("p / Enter", "Toggle paused"),
    ("r", "Reset"),
    ("w", "Toggle wrap"),
    ("t", "Toggle auto"),
    ("l", "Toggle labels"),
    ("*", "Increase size"),
];

/// Printable keys arrive as text so layout-dependent symbols like `*` work.
pub fn command_for_text(text: &str) -> Option<SessionCommand> {
    let command = match text {
        "a" | "A" => SessionCommand::Turn(Turn::Left),
        "d" | "D" => SessionCommand::Turn(Turn::Right),
        "f" | "F" => SessionCommand::AddFood,
        "q" | "Q" => SessionCommand::AddSpecialFood,
        "g" | "G" => SessionCommand::Grow,
        "c" | "C" => SessionCommand::NextColour,
        "u" | "U" => SessionCommand::Dump,
        "+" | "=" => SessionCommand::SpeedUp,
        "-" | "_" => SessionCommand::SpeedDown,
        "p" | "P" => SessionCommand::TogglePause,
        "r" | "R" => SessionCommand::Reset,
        "w" | "W" => SessionCommand::ToggleWrap,
        "t" | "T" => SessionCommand::ToggleAuto,
        "l" | "L" => SessionCommand::ToggleLabels,
        "*" => SessionCommand::IncreaseSize,
        _ => return None,
    };
    Some(command)
}

pub fn command_for_key(key: egui::Key) -> Option<SessionCommand> {
    match key {
        egui::Key::ArrowLeft => Some(SessionCommand::Turn(Turn::Left)),
        egui::Key::ArrowRight => Some(SessionCommand::Turn(Turn::Right)),
        egui::Key::Enter => Some(SessionCommand::TogglePause),
        _ => None,
    }
}

/// Commands for everything typed since the last frame, in input order.
pub fn collect_commands(ctx: &egui::Context) -> Vec<SessionCommand> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Text(text) => command_for_text(text),
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => command_for_key(*key),
                _ => None,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steering_keys() {
        assert_eq!(command_for_text("a"), Some(SessionCommand::Turn(Turn::Left)));
        assert_eq!(command_for_text("D"), Some(SessionCommand::Turn(Turn::Right)));
        assert_eq!(command_for_key(egui::Key::ArrowLeft), Some(SessionCommand::Turn(Turn::Left)));
        assert_eq!(command_for_key(egui::Key::ArrowRight), Some(SessionCommand::Turn(Turn::Right)));
    }

    #[test]
    fn test_debug_keys() {
        assert_eq!(command_for_text("*"), Some(SessionCommand::IncreaseSize));
        assert_eq!(command_for_text("+"), Some(SessionCommand::SpeedUp));
        assert_eq!(command_for_text("-"), Some(SessionCommand::SpeedDown));
        assert_eq!(command_for_text("u"), Some(SessionCommand::Dump));
        assert_eq!(command_for_key(egui::Key::Enter), Some(SessionCommand::TogglePause));
    }

    #[test]
    fn test_unbound_input_is_ignored() {
        assert_eq!(command_for_text("z"), None);
        assert_eq!(command_for_text("ab"), None);
        assert_eq!(command_for_key(egui::Key::Space), None);
    }

    #[test]
    fn test_every_help_entry_is_bound() {
        for (keys, _) in KEY_HELP {
            let first = keys.split(" / ").next().unwrap();
            assert!(command_for_text(first).is_some(), "{} is not bound", keys);
        }
    }
}
