//! Grid cells to screen rectangles

use glam::IVec2;

use crate::consts::CELL_SIZE;
use crate::sim::{Color, Rect, Snake};

pub const SNAKE_COLOR: Color = Color::GREEN;
pub const FOOD_COLOR: Color = Color::RED;

/// Pixel rectangle covering one grid cell
pub fn cell_rect(cell: IVec2, color: Color) -> Rect {
    let size = CELL_SIZE as f32;
    let pos = (cell * CELL_SIZE).as_vec2();
    Rect::new(pos.x, pos.y, size, size, color)
}

pub fn food_rect(food: IVec2) -> Rect {
    cell_rect(food, FOOD_COLOR)
}

/// One rectangle per body segment, head first
pub fn snake_rects(snake: &Snake) -> impl Iterator<Item = Rect> + '_ {
    snake.body.iter().map(|&c| cell_rect(c, SNAKE_COLOR))
}
