// File: crates/covid-chart-core/src/hover.rs
// Summary: Nearest-point (Voronoi cell) lookup from pointer position to data point.
// Notes:
// - A pointer lies in a site's Voronoi cell exactly when that site is its nearest
//   neighbour, so the cells are never materialised; sites are kept sorted by x and
//   a query sweeps outward from the pointer until the x-gap alone exceeds the best hit.
// - Cells are clipped to the inner plotting area; pointers outside it hit nothing.

use crate::geometry::LineGenerator;
use crate::layout::ChartLayout;
use crate::series::{Dataset, TimeSeriesPoint};
use crate::types::Point;

#[derive(Clone, Debug)]
struct Site {
    x: f64,
    y: f64,
    /// Position in the flattened pool; breaks distance ties.
    order: usize,
    point: TimeSeriesPoint,
}

#[derive(Clone, Debug)]
pub struct HoverIndex {
    sites: Vec<Site>,
    inner_width: f64,
    inner_height: f64,
}

impl HoverIndex {
    pub fn new(pool: &[&TimeSeriesPoint], line: &LineGenerator, inner_width: f64, inner_height: f64) -> Self {
        let mut sites: Vec<Site> = pool
            .iter()
            .enumerate()
            .filter_map(|(order, p)| {
                let pos = line.position(p);
                (pos.x.is_finite() && pos.y.is_finite()).then(|| Site { x: pos.x, y: pos.y, order, point: (*p).clone() })
            })
            .collect();
        sites.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.order.cmp(&b.order)));
        Self { sites, inner_width, inner_height }
    }

    pub fn from_layout(data: &Dataset, layout: &ChartLayout) -> Self {
        Self::new(&data.flatten(), &layout.line_generator(), layout.inner_width, layout.inner_height)
    }

    pub fn len(&self) -> usize { self.sites.len() }

    pub fn is_empty(&self) -> bool { self.sites.is_empty() }

    /// Nearest data point to `p` (inner-area coordinates). Equal distances resolve to the
    /// point that comes first in the flattened pool.
    pub fn nearest(&self, p: Point) -> Option<&TimeSeriesPoint> {
        if !(p.x >= 0.0 && p.x <= self.inner_width && p.y >= 0.0 && p.y <= self.inner_height) {
            return None;
        }
        let start = self.sites.partition_point(|s| s.x < p.x);
        let mut best: Option<(f64, usize, usize)> = None;

        let consider = |idx: usize, best: &mut Option<(f64, usize, usize)>| -> bool {
            let s = &self.sites[idx];
            let dx = s.x - p.x;
            if let Some((d2, _, _)) = *best {
                if dx * dx > d2 { return false; }
            }
            let dy = s.y - p.y;
            let d2 = dx * dx + dy * dy;
            let better = match *best {
                None => true,
                Some((bd2, border, _)) => d2 < bd2 || (d2 == bd2 && s.order < border),
            };
            if better { *best = Some((d2, s.order, idx)); }
            true
        };

        for idx in start..self.sites.len() {
            if !consider(idx, &mut best) { break; }
        }
        for idx in (0..start).rev() {
            if !consider(idx, &mut best) { break; }
        }
        best.map(|(_, _, idx)| &self.sites[idx].point)
    }
}
