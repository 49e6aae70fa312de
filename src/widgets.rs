//! Small presentational helpers shared by the screens. Nothing here knows
//! about quiz logic.

use crate::util;

/// Numeric counter easing toward its target, stepped once per event-loop
/// pass for the results score count-up.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedCounter {
    start: f64,
    target: f64,
    progress: f64,
}

impl AnimatedCounter {
    pub fn new(target: u32) -> Self {
        Self {
            start: 0.0,
            target: target as f64,
            progress: 0.0,
        }
    }

    pub fn tick(&mut self) {
        self.progress = util::clamp(self.progress + 0.06, 0.0, 1.0);
    }

    pub fn value(&self) -> u32 {
        util::lerp(self.start, self.target, ease_out_quart(self.progress)).round() as u32
    }

    pub fn done(&self) -> bool {
        self.progress >= 1.0
    }
}

fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Animated scroll offset for long lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
}

impl SmoothScroll {
    pub fn scroll_to(&mut self, target: usize) {
        self.target = target as f64;
    }

    pub fn tick(&mut self) {
        self.current = util::lerp(self.current, self.target, 0.35);
        if (self.current - self.target).abs() < 0.5 {
            self.current = self.target;
        }
    }

    pub fn offset(&self) -> usize {
        self.current.round() as usize
    }

    pub fn settled(&self) -> bool {
        (self.current - self.target).abs() < f64::EPSILON
    }
}

/// Lazy list window: the half-open index range worth rendering so that the
/// selection stays visible inside `height` rows, given the previous offset.
pub fn visible_window(len: usize, height: usize, selected: usize, offset: usize) -> (usize, usize) {
    if len == 0 || height == 0 {
        return (0, 0);
    }
    let selected = selected.min(len - 1);

    let start = if selected < offset {
        selected
    } else if selected >= offset + height {
        selected + 1 - height
    } else {
        offset.min(len.saturating_sub(height))
    };

    (start, (start + height).min(len))
}

/// Rectangular progress ring, 5 rows by 7 columns, filled clockwise from
/// the top. The caller centers the percentage text inside it.
pub fn ring_lines(percent: u32, unicode: bool) -> Vec<String> {
    const ROWS: usize = 5;
    const COLS: usize = 7;
    // Border cells in clockwise order starting at the top middle.
    const TRACK: [(usize, usize); 20] = [
        (0, 3), (0, 4), (0, 5), (0, 6),
        (1, 6), (2, 6), (3, 6),
        (4, 6), (4, 5), (4, 4), (4, 3), (4, 2), (4, 1), (4, 0),
        (3, 0), (2, 0), (1, 0),
        (0, 0), (0, 1), (0, 2),
    ];

    let (on, off) = if unicode { ('█', '░') } else { ('#', '.') };
    let percent = percent.min(100);
    let filled = ((percent as f64 / 100.0) * TRACK.len() as f64).round() as usize;

    let mut grid = [[' '; COLS]; ROWS];
    for (i, (r, c)) in TRACK.iter().enumerate() {
        grid[*r][*c] = if i < filled { on } else { off };
    }

    grid.iter().map(|row| row.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_reaches_target() {
        let mut counter = AnimatedCounter::new(87);
        assert_eq!(counter.value(), 0);
        for _ in 0..20 {
            counter.tick();
        }
        assert!(counter.done());
        assert_eq!(counter.value(), 87);
    }

    #[test]
    fn scroll_settles_on_target() {
        let mut scroll = SmoothScroll::default();
        scroll.scroll_to(12);
        for _ in 0..30 {
            scroll.tick();
        }
        assert!(scroll.settled());
        assert_eq!(scroll.offset(), 12);
    }

    #[test]
    fn window_follows_selection() {
        // Selection below the window pulls it down.
        assert_eq!(visible_window(20, 5, 9, 0), (5, 10));
        // Selection above pulls it up.
        assert_eq!(visible_window(20, 5, 2, 10), (2, 7));
        // Selection inside keeps the offset.
        assert_eq!(visible_window(20, 5, 6, 5), (5, 10));
        // Degenerate sizes.
        assert_eq!(visible_window(0, 5, 0, 0), (0, 0));
        assert_eq!(visible_window(3, 5, 2, 0), (0, 3));
    }

    #[test]
    fn ring_fills_clockwise() {
        let empty = ring_lines(0, true);
        assert_eq!(empty.len(), 5);
        assert!(empty.iter().all(|row| !row.contains('█')));

        let full = ring_lines(100, true);
        assert!(full.iter().all(|row| !row.contains('░')));

        let half = ring_lines(50, false);
        let filled: usize = half.iter().map(|row| row.matches('#').count()).sum();
        assert_eq!(filled, 10);
    }
}
