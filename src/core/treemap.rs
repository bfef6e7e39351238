use crate::core::hierarchy::{NodeId, Tree};

/// Axis-aligned cell produced by layout. `x1 >= x0` and `y1 >= y0` always
/// hold after a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.width() * self.height()
    }

    /// Shrinks the rect by `padding` on every side, collapsing to the center
    /// line instead of inverting.
    #[must_use]
    pub fn inset(self, padding: f64) -> Self {
        let x0 = self.x0 + padding;
        let x1 = self.x1 - padding;
        let y0 = self.y0 + padding;
        let y1 = self.y1 - padding;
        let (x0, x1) = if x0 > x1 {
            let mid = (self.x0 + self.x1) * 0.5;
            (mid, mid)
        } else {
            (x0, x1)
        };
        let (y0, y1) = if y0 > y1 {
            let mid = (self.y0 + self.y1) * 0.5;
            (mid, mid)
        } else {
            (y0, y1)
        };
        Self::new(x0, y0, x1, y1)
    }
}

/// Squarified treemap layout over a weighted tree.
///
/// Children are sorted descending by value and placed in strips chosen to
/// minimize the worst cell aspect ratio (Bruls et al.).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreemapLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl TreemapLayout {
    #[must_use]
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Assigns a rect to every positive-value node, mutating the tree.
    ///
    /// Non-positive bounding sizes are not an error: every leaf receives a
    /// zero-area rect at the origin so downstream can render an empty state.
    pub fn layout(&self, tree: &mut Tree) {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            for id in all_ids(tree) {
                tree.node_mut(id).rect = Some(Rect::zero());
            }
            return;
        }

        let root = tree.root();
        tree.node_mut(root).rect = Some(Rect::new(0.0, 0.0, self.width, self.height));
        self.layout_children(tree, root);
    }

    fn layout_children(&self, tree: &mut Tree, parent: NodeId) {
        let Some(parent_rect) = tree.node(parent).rect else {
            return;
        };
        let parent_value = tree.node(parent).value;
        if !(parent_value > 0.0) {
            return;
        }

        let mut entries: Vec<(NodeId, f64)> = tree
            .children_of(parent)
            .iter()
            .map(|&id| (id, tree.node(id).value))
            .filter(|&(_, value)| value.is_finite() && value > 0.0)
            .collect();
        if entries.is_empty() {
            return;
        }
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let total: f64 = entries.iter().map(|(_, value)| value).sum();
        let areas: Vec<f64> = entries
            .iter()
            .map(|(_, value)| value / total * parent_rect.area())
            .collect();

        let cells = squarify(
            &areas,
            parent_rect.x0,
            parent_rect.y0,
            parent_rect.width(),
            parent_rect.height(),
        );

        for ((id, _), cell) in entries.into_iter().zip(cells) {
            let padded = cell.inset(self.padding);
            tree.node_mut(id).rect = Some(padded);
            self.layout_children(tree, id);
        }
    }
}

fn all_ids(tree: &Tree) -> Vec<NodeId> {
    let mut ids = vec![tree.root()];
    let mut cursor = 0;
    while cursor < ids.len() {
        let id = ids[cursor];
        ids.extend(tree.children_of(id).iter().copied());
        cursor += 1;
    }
    ids
}

/// Squarified strip placement: keep adding cells to the current strip while
/// the worst aspect ratio improves, then commit the strip along the shorter
/// side of the remaining rectangle.
///
/// Always emits exactly one cell per area, in order. Areas whose strip
/// cannot fit the remaining rectangle (extreme value skew exhausting a side
/// to rounding) collapse to zero-area cells at the cursor instead of being
/// dropped.
fn squarify(areas: &[f64], mut x: f64, mut y: f64, mut w: f64, mut h: f64) -> Vec<Rect> {
    let mut cells = Vec::with_capacity(areas.len());

    let mut idx = 0usize;
    let mut row_start = 0usize;
    let mut row_sum = 0.0;
    let mut row_min = f64::INFINITY;
    let mut row_max = 0.0;

    while idx < areas.len() {
        if w <= 1e-9 || h <= 1e-9 {
            break;
        }

        let area = areas[idx];
        let side = w.min(h);
        let current = if row_sum > 0.0 {
            worst_aspect(row_min, row_max, row_sum, side)
        } else {
            f64::INFINITY
        };
        let next_sum = row_sum + area;
        let next_min = row_min.min(area);
        let next_max = row_max.max(area);
        let next = worst_aspect(next_min, next_max, next_sum, side);

        if row_sum <= 0.0 || next <= current {
            row_sum = next_sum;
            row_min = next_min;
            row_max = next_max;
            idx += 1;
            continue;
        }

        commit_row(
            &areas[row_start..idx],
            row_sum,
            &mut x,
            &mut y,
            &mut w,
            &mut h,
            &mut cells,
        );
        row_start = idx;
        row_sum = 0.0;
        row_min = f64::INFINITY;
        row_max = 0.0;
    }

    if row_start < idx {
        commit_row(
            &areas[row_start..idx],
            row_sum,
            &mut x,
            &mut y,
            &mut w,
            &mut h,
            &mut cells,
        );
    }

    // Leftover areas after a degenerate remainder still get a cell.
    for _ in cells.len()..areas.len() {
        cells.push(Rect::new(x, y, x, y));
    }

    cells
}

fn commit_row(
    row: &[f64],
    row_sum: f64,
    x: &mut f64,
    y: &mut f64,
    w: &mut f64,
    h: &mut f64,
    out: &mut Vec<Rect>,
) {
    if row.is_empty() {
        return;
    }
    if row_sum <= 0.0 || *w <= 1e-12 || *h <= 1e-12 {
        for _ in row {
            out.push(Rect::new(*x, *y, *x, *y));
        }
        return;
    }

    // Strip runs along the shorter remaining side.
    let horizontal = *w <= *h;
    let (short, long) = if horizontal { (*w, *h) } else { (*h, *w) };
    let thickness = (row_sum / short).min(long);

    let mut offset = 0.0;
    for (i, &area) in row.iter().enumerate() {
        let mut length = area / thickness;
        if !length.is_finite() || length < 0.0 {
            length = 0.0;
        }
        // Absorb floating-point error into the final cell of the strip.
        if i == row.len() - 1 {
            let remaining = if horizontal {
                (*w - offset).max(0.0)
            } else {
                (*h - offset).max(0.0)
            };
            if remaining.is_finite() && remaining > 0.0 && length > 0.0 {
                length = remaining;
            }
        }

        let cell = if horizontal {
            Rect::new(*x + offset, *y, *x + offset + length, *y + thickness)
        } else {
            Rect::new(*x, *y + offset, *x + thickness, *y + offset + length)
        };
        out.push(cell);
        offset += length;
    }

    if horizontal {
        *y += thickness;
        *h = (*h - thickness).max(0.0);
    } else {
        *x += thickness;
        *w = (*w - thickness).max(0.0);
    }
}

fn worst_aspect(min_area: f64, max_area: f64, sum: f64, side: f64) -> f64 {
    if sum <= 0.0 || side <= 0.0 || min_area <= 0.0 || max_area <= 0.0 {
        return f64::MAX;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    let a = (side_sq * max_area) / sum_sq;
    let b = sum_sq / (side_sq * min_area);
    a.max(b)
}

#[cfg(test)]
mod tests {
    use super::{Rect, squarify};

    #[test]
    fn single_area_fills_bounds() {
        let cells = squarify(&[1920.0 * 1080.0], 0.0, 0.0, 1920.0, 1080.0);
        assert_eq!(cells.len(), 1);
        assert!((cells[0].width() - 1920.0).abs() < 1e-6);
        assert!((cells[0].height() - 1080.0).abs() < 1e-6);
    }

    #[test]
    fn strips_preserve_total_area() {
        let areas = [400.0, 300.0, 200.0, 100.0];
        let cells = squarify(&areas, 0.0, 0.0, 50.0, 20.0);
        let total_in: f64 = areas.iter().sum();
        let total_out: f64 = cells.iter().map(|cell| cell.area()).sum();
        assert!((total_in - total_out).abs() < 1e-6);
    }

    #[test]
    fn extreme_skew_emits_one_cell_per_area() {
        // The dominant area consumes the full rectangle; the tail must still
        // come back as zero-area cells in order, not be dropped.
        let total = 100.0 * 100.0;
        let big = total * (1e18 / (1e18 + 1.0));
        let small = total - big;
        let cells = squarify(&[big, small], 0.0, 0.0, 100.0, 100.0);

        assert_eq!(cells.len(), 2);
        assert!((cells[0].area() - total).abs() < 1e-6);
        assert!(cells[1].area() >= 0.0);
        assert!(cells[1].x1 >= cells[1].x0 && cells[1].y1 >= cells[1].y0);
    }

    #[test]
    fn inset_collapses_instead_of_inverting() {
        let rect = Rect::new(0.0, 0.0, 3.0, 10.0).inset(2.0);
        assert!(rect.x1 >= rect.x0);
        assert!(rect.y1 >= rect.y0);
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 6.0);
    }
}
