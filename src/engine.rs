//! Wireframe rendering engine.
//!
//! The [`Engine`] owns a [`Canvas`] and the selected line algorithm. It
//! projects models onto the canvas and outlines every face.

use std::path::Path;

use crate::colors::Color;
use crate::error::Result;
use crate::math::Point;
use crate::model::Model;
use crate::projection::Orthographic;
use crate::render::{
    draw_triangle_sorted, draw_triangle_with, Canvas, EdgeColors, LineAlgorithm, LineDispatcher,
    LineRasterizer, Triangle,
};

pub struct Engine {
    canvas: Canvas,
    lines: LineDispatcher,
    projection: Orthographic,
}

impl Engine {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            lines: LineDispatcher::default(),
            projection: Orthographic::new(width, height),
        })
    }

    pub fn set_line_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.lines.set_algorithm(algorithm);
    }

    pub fn line_algorithm(&self) -> LineAlgorithm {
        self.lines.algorithm()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn clear(&mut self, color: Color) {
        self.canvas.clear(color);
    }

    pub fn draw_line(&mut self, a: Point, b: Point, color: Color) {
        self.lines.draw_line(a, b, &mut self.canvas, color);
    }

    pub fn draw_triangle(&mut self, triangle: &Triangle, color: Color) {
        draw_triangle_with(&self.lines, triangle, &mut self.canvas, color);
    }

    /// Always uses Bresenham, whatever algorithm is selected.
    pub fn draw_triangle_sorted(&mut self, triangle: &Triangle, colors: EdgeColors<Color>) {
        let [a, b, c] = triangle.points;
        draw_triangle_sorted(a, b, c, &mut self.canvas, colors);
    }

    pub fn plot(&mut self, p: Point, color: Color) {
        self.canvas.set_pixel(p.x, p.y, color);
    }

    /// Outline every face of `model`, projected orthographically.
    pub fn draw_model_wireframe(&mut self, model: &Model, color: Color) {
        log::debug!(
            "drawing {} faces of '{}' with {}",
            model.nfaces(),
            model.name(),
            self.lines.algorithm()
        );
        for corners in model.triangles() {
            let triangle = Triangle::from(corners.map(|v| self.projection.project(v)));
            draw_triangle_with(&self.lines, &triangle, &mut self.canvas, color);
        }
    }

    /// Plot a single pixel at every projected vertex of `model`.
    pub fn plot_vertices(&mut self, model: &Model, color: Color) {
        for &v in model.vertices() {
            let p = self.projection.project(v);
            self.canvas.set_pixel(p.x, p.y, color);
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.canvas.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, RED, WHITE};
    use crate::math::Vec3;
    use crate::model::Face;

    fn unit_triangle() -> Model {
        Model::new(
            "tri",
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(0.0, -1.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
            ],
            vec![Face::new(0, 1, 2)],
        )
        .unwrap()
    }

    #[test]
    fn wireframe_outlines_projected_faces() {
        let mut engine = Engine::new(20, 20).unwrap();
        engine.draw_model_wireframe(&unit_triangle(), RED);

        let canvas = engine.canvas();
        // projected to (0, 0), (10, 0), (0, 10)
        for x in 0..=10 {
            assert_eq!(canvas.get(x, 0), Some(RED));
        }
        for y in 0..=10 {
            assert_eq!(canvas.get(0, y), Some(RED));
        }
        assert_eq!(canvas.get(5, 5), Some(RED));
        assert_eq!(canvas.get(3, 3), Some(BLACK));
    }

    #[test]
    fn vertices_are_plotted_over_the_wireframe() {
        let mut engine = Engine::new(20, 20).unwrap();
        let model = unit_triangle();
        engine.draw_model_wireframe(&model, RED);
        engine.plot_vertices(&model, WHITE);
        assert_eq!(engine.canvas().count(WHITE), 3);
        assert_eq!(engine.canvas().get(10, 0), Some(WHITE));
    }

    #[test]
    fn selected_algorithm_is_used() {
        let mut engine = Engine::new(8, 8).unwrap();
        engine.set_line_algorithm(LineAlgorithm::Dda);
        assert_eq!(engine.line_algorithm(), LineAlgorithm::Dda);
        engine.draw_line(Point::new(0, 0), Point::new(7, 0), WHITE);
        assert_eq!(engine.canvas().count(WHITE), 8);
    }

    #[test]
    fn sorted_triangle_uses_edge_colors() {
        let mut engine = Engine::new(16, 16).unwrap();
        let triangle = Triangle::new(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
        engine.draw_triangle_sorted(
            &triangle,
            EdgeColors {
                ab: WHITE,
                bc: WHITE,
                ca: RED,
            },
        );
        // sorted: A = (0, 10), B = (10, 0), C = (0, 0), so C–A is the left edge
        assert_eq!(engine.canvas().get(0, 5), Some(RED));
        assert_eq!(engine.canvas().get(5, 5), Some(WHITE));
        assert_eq!(engine.canvas().get(5, 0), Some(WHITE));
    }

    #[test]
    fn clear_resets_the_canvas() {
        let mut engine = Engine::new(4, 4).unwrap();
        engine.plot(Point::new(1, 1), WHITE);
        engine.clear(BLACK);
        assert_eq!(engine.canvas().count(BLACK), 16);
    }
}
