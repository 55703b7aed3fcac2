use macroquad::prelude::*;

use engine::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Rotate(Position),
    Relocate(Direction),
    NewBoard,
    Quit,
}

/// The grid cell under a pixel position: `row = y / tile_size`,
/// `col = x / tile_size`. Positions left of or above the board have no cell.
pub fn tile_at(x: f32, y: f32, tile_size: u32) -> Option<Position> {
    if x < 0.0 || y < 0.0 || tile_size == 0 {
        return None;
    }

    let row = y as u32 / tile_size;
    let col = x as u32 / tile_size;
    Some(Position::new(row as usize, col as usize))
}

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Everything the player asked for since the last frame.
pub fn poll_commands(tile_size: u32) -> Vec<Command> {
    let mut commands = Vec::new();

    if is_key_pressed(KeyCode::Escape) {
        commands.push(Command::Quit);
        return commands;
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        if let Some(position) = tile_at(x, y, tile_size) {
            commands.push(Command::Rotate(position));
        }
    }

    for key in [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right] {
        if is_key_pressed(key) {
            if let Some(direction) = direction_for_key(key) {
                commands.push(Command::Relocate(direction));
            }
        }
    }

    if is_key_pressed(KeyCode::N) {
        commands.push(Command::NewBoard);
    }

    commands
}
