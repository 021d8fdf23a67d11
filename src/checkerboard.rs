//! Checkerboard backdrop that shows through translucent alpha values.

use floem::context::PaintCx;
use floem::kurbo::Rect;
use floem::peniko::Color;
use floem_renderer::Renderer;

const LIGHT: Color = Color::rgb8(255, 255, 255);
const DARK: Color = Color::rgb8(204, 204, 204);

/// Dark cells of a checkerboard with `cell`-sized squares covering `rect`,
/// clipped to its edges.
fn dark_cells(rect: Rect, cell: f64) -> impl Iterator<Item = Rect> {
    let cols = (rect.width() / cell).ceil() as usize;
    let rows = (rect.height() / cell).ceil() as usize;
    (0..rows)
        .flat_map(move |row| (0..cols).map(move |col| (row, col)))
        .filter(|(row, col)| (row + col) % 2 == 1)
        .map(move |(row, col)| {
            let x = rect.x0 + col as f64 * cell;
            let y = rect.y0 + row as f64 * cell;
            Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1))
        })
}

/// Paint a checkerboard pattern into `rect`.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect, cell: f64) {
    cx.fill(&rect, LIGHT, 0.0);
    for cell_rect in dark_cells(rect, cell) {
        cx.fill(&cell_rect, DARK, 0.0);
    }
}
