use egui::Key;

use snake_core::game::Direction;

use crate::state::ClientCommand;

/// Every key the game reacts to. The UI polls exactly these each frame.
pub const MAPPED_KEYS: [Key; 9] = [
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::W,
    Key::A,
    Key::S,
    Key::D,
    Key::Space,
];

/// Keyboard layout: arrows and WASD steer, space is the primary action.
/// Anything else is ignored.
pub fn command_for_key(key: Key) -> Option<ClientCommand> {
    let command = match key {
        Key::ArrowUp | Key::W => ClientCommand::Turn {
            direction: Direction::Up,
        },
        Key::ArrowDown | Key::S => ClientCommand::Turn {
            direction: Direction::Down,
        },
        Key::ArrowLeft | Key::A => ClientCommand::Turn {
            direction: Direction::Left,
        },
        Key::ArrowRight | Key::D => ClientCommand::Turn {
            direction: Direction::Right,
        },
        Key::Space => ClientCommand::PrimaryAction,
        _ => return None,
    };
    Some(command)
}
