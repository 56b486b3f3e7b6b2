//! Built-in demo scenes.

use crate::colors::{BLUE, GREEN, RED, WHITE, YELLOW};
use crate::engine::Engine;
use crate::error::Result;
use crate::math::Point;
use crate::render::{EdgeColors, LineAlgorithm, Triangle};

pub const LINES_SIZE: (u32, u32) = (64, 64);
pub const TRIANGLES_SIZE: (u32, u32) = (250, 250);
pub const MODEL_SIZE: (u32, u32) = (1000, 1000);

/// Three segments between three points, one drawn in both directions, with
/// the endpoints marked in white.
///
/// The red C→A line is drawn last and exactly covers the yellow A→C one.
pub fn draw_lines(engine: &mut Engine) {
    let a = Point::new(7, 3);
    let b = Point::new(12, 37);
    let c = Point::new(62, 53);

    engine.draw_line(a, b, BLUE);
    engine.draw_line(c, b, GREEN);
    engine.draw_line(c, a, YELLOW);
    engine.draw_line(a, c, RED);

    for p in [a, b, c] {
        engine.plot(p, WHITE);
    }
}

/// Three outlines with the two short edges green and the tall edge red.
pub fn draw_triangles(engine: &mut Engine) {
    let colors = EdgeColors {
        ab: GREEN,
        bc: GREEN,
        ca: RED,
    };
    for triangle in [
        Triangle::new(Point::new(7, 45), Point::new(35, 100), Point::new(45, 60)),
        Triangle::new(Point::new(120, 35), Point::new(90, 5), Point::new(45, 110)),
        Triangle::new(Point::new(115, 83), Point::new(80, 90), Point::new(85, 120)),
    ] {
        engine.draw_triangle_sorted(&triangle, colors);
    }
}

pub fn lines(algorithm: LineAlgorithm) -> Result<Engine> {
    let (width, height) = LINES_SIZE;
    let mut engine = Engine::new(width, height)?;
    engine.set_line_algorithm(algorithm);
    draw_lines(&mut engine);
    Ok(engine)
}

/// The sorted outlines are always drawn with Bresenham lines.
pub fn triangles() -> Result<Engine> {
    let (width, height) = TRIANGLES_SIZE;
    let mut engine = Engine::new(width, height)?;
    draw_triangles(&mut engine);
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BLACK;

    #[test]
    fn reverse_line_fully_covers_forward_line() {
        let engine = lines(LineAlgorithm::Bresenham).unwrap();
        let canvas = engine.canvas();
        assert_eq!(canvas.count(YELLOW), 0);
        // 56 pixels on A–C, minus the two white endpoints
        assert_eq!(canvas.count(RED), 54);
        assert_eq!(canvas.count(WHITE), 3);
        assert_eq!(canvas.get(12, 37), Some(WHITE));
    }

    #[test]
    fn blue_segment_keeps_its_pixels() {
        let engine = lines(LineAlgorithm::Bresenham).unwrap();
        // 35 pixels on A–B; A and B are repainted white
        assert_eq!(engine.canvas().count(BLUE), 33);
    }

    #[test]
    fn triangle_scene_draws_only_outlines() {
        let engine = triangles().unwrap();
        let canvas = engine.canvas();
        assert!(canvas.count(RED) > 0);
        assert!(canvas.count(GREEN) > 0);
        // inside the first triangle stays untouched
        assert_eq!(canvas.get(30, 70), Some(BLACK));
    }

    #[test]
    fn lines_scene_uses_selected_algorithm() {
        let engine = lines(LineAlgorithm::Dda).unwrap();
        assert_eq!(engine.line_algorithm(), LineAlgorithm::Dda);
        assert_eq!(engine.canvas().count(WHITE), 3);
    }
}
