//! Standard table geometry: pocket positions and the 8-ball rack.
//!
//! The planner itself takes pockets from the snapshot; these helpers build
//! the usual layout for callers and tests.

use glam::Vec2;

use super::ball::Ball;
use super::pocket::Pocket;

/// Rectangular playing surface.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    /// Top-left corner of the play area.
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    /// Corner pockets sit this far in from the corner along both axes.
    pub corner_inset: f32,
    /// Side pockets sit this far in from the long rail.
    pub side_inset: f32,
}

impl Default for TableLayout {
    /// 1000×500 table at the world origin.
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            width: 1000.0,
            height: 500.0,
            corner_inset: 24.5,
            side_inset: 17.5,
        }
    }
}

impl TableLayout {
    /// Four corner pockets, then the two side pockets (top, bottom).
    pub fn pockets(&self) -> [Pocket; 6] {
        let Vec2 { x, y } = self.origin;
        let (w, h) = (self.width, self.height);
        let c = self.corner_inset;
        [
            Pocket::new(x + c, y + c),
            Pocket::new(x + w - c, y + c),
            Pocket::new(x + c, y + h - c),
            Pocket::new(x + w - c, y + h - c),
            Pocket::new(x + w / 2.0, y + self.side_inset),
            Pocket::new(x + w / 2.0, y + h - self.side_inset),
        ]
    }
}

/// Standard 8-ball triangle rack, apex pointing left toward the cue ball.
///
/// ```text
///  1          <- apex (row 0)
///  9   2      <- row 1
///  3   8  10  <- row 2
/// 11  4  5  12 <- row 3
///  6 13 14  7 15 <- row 4
/// ```
pub fn rack(apex: Vec2, ball_radius: f32) -> Vec<Ball> {
    // Tight rack with a hair of clearance
    let gap = ball_radius * 2.0 + 1.0;
    let row_offset = gap * 0.866; // sqrt(3)/2

    let layout: [(u8, usize, f32); 15] = [
        (1, 0, 0.0),
        (9, 1, -0.5), (2, 1, 0.5),
        (3, 2, -1.0), (8, 2, 0.0), (10, 2, 1.0),
        (11, 3, -1.5), (4, 3, -0.5), (5, 3, 0.5), (12, 3, 1.5),
        (6, 4, -2.0), (13, 4, -1.0), (14, 4, 0.0), (7, 4, 1.0), (15, 4, 2.0),
    ];

    let mut balls: Vec<Ball> = layout
        .iter()
        .map(|&(number, row, v_offset)| {
            let x = apex.x + row as f32 * row_offset;
            let y = apex.y + v_offset * gap;
            Ball::new(number, x, y)
        })
        .collect();
    balls.sort_by_key(|b| b.id);
    balls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_pockets_inside_the_table() {
        let table = TableLayout::default();
        let pockets = table.pockets();
        assert_eq!(pockets.len(), 6);
        for p in pockets {
            assert!(p.pos.x > 0.0 && p.pos.x < table.width);
            assert!(p.pos.y > 0.0 && p.pos.y < table.height);
        }
        assert_eq!(pockets[4].pos.x, 500.0);
    }

    #[test]
    fn rack_has_fifteen_non_overlapping_balls() {
        let balls = rack(Vec2::new(700.0, 250.0), 14.0);
        assert_eq!(balls.len(), 15);
        assert_eq!(balls[0].id, 1);
        assert_eq!(balls[14].id, 15);
        for (i, a) in balls.iter().enumerate() {
            for b in &balls[i + 1..] {
                assert!(a.pos.distance(b.pos) >= 28.0, "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn eight_ball_sits_in_middle_of_third_row() {
        let apex = Vec2::new(700.0, 250.0);
        let balls = rack(apex, 14.0);
        let eight = balls.iter().find(|b| b.id == 8).unwrap();
        assert_eq!(eight.pos.y, apex.y);
        assert!(eight.pos.x > apex.x);
    }
}
