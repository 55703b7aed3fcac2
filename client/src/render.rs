use macroquad::prelude::*;

use engine::{Board, Direction, Tile};

const WIRE_WIDTH: f32 = 5.0;
const WIN_FONT_SIZE: u16 = 40;
const WIN_MESSAGE: &str = "You Win!";

const TILE_BACKGROUND: Color = DARKGRAY;
const TILE_BORDER: Color = BLACK;
const POWERED_WIRE: Color = YELLOW;
const UNPOWERED_WIRE: Color = GRAY;
const STATION_FILL: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
const STATION_OUTLINE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

pub fn draw_board(board: &Board, tile_size: f32) {
    for (position, tile) in board.tiles() {
        let x = position.col as f32 * tile_size;
        let y = position.row as f32 * tile_size;
        draw_tile(tile, x, y, tile_size);
    }
}

fn draw_tile(tile: &Tile, x: f32, y: f32, size: f32) {
    draw_rectangle(x, y, size, size, TILE_BACKGROUND);
    draw_rectangle_lines(x, y, size, size, 1.0, TILE_BORDER);

    let color = if tile.is_powered() {
        POWERED_WIRE
    } else {
        UNPOWERED_WIRE
    };

    let half = size / 2.0;
    let half_wire = WIRE_WIDTH / 2.0;
    let (cx, cy) = (x + half, y + half);

    // Hub, so that a lone stub still reads as a wire end.
    draw_rectangle(cx - half_wire, cy - half_wire, WIRE_WIDTH, WIRE_WIDTH, color);

    if tile.has_wire(Direction::Up) {
        draw_rectangle(cx - half_wire, y, WIRE_WIDTH, half, color);
    }
    if tile.has_wire(Direction::Right) {
        draw_rectangle(cx, cy - half_wire, half, WIRE_WIDTH, color);
    }
    if tile.has_wire(Direction::Down) {
        draw_rectangle(cx - half_wire, cy, WIRE_WIDTH, half, color);
    }
    if tile.has_wire(Direction::Left) {
        draw_rectangle(x, cy - half_wire, half, WIRE_WIDTH, color);
    }

    if tile.is_power_station() {
        let radius = size / 3.0;
        draw_poly(cx, cy, 7, radius, 0.0, STATION_FILL);
        draw_poly_lines(cx, cy, 7, radius, 0.0, 2.0, STATION_OUTLINE);
    }
}

/// Centers the win message over the board, or over the window when the
/// board has no tiles.
pub fn draw_win_banner(board: &Board, tile_size: f32) {
    let (width, height) = if board.is_empty() {
        (screen_width(), screen_height())
    } else {
        (
            board.width() as f32 * tile_size,
            board.height() as f32 * tile_size,
        )
    };

    let metrics = measure_text(WIN_MESSAGE, None, WIN_FONT_SIZE, 1.0);
    draw_text(
        WIN_MESSAGE,
        (width - metrics.width) / 2.0,
        (height + metrics.offset_y) / 2.0,
        WIN_FONT_SIZE as f32,
        RED,
    );
}
