// Boolean gates derived from the progress pipeline: direction detection,
// threshold latching with hysteresis, and staggered reveal windows.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// One-sample history comparator. Strict greater-than, so equal
/// consecutive samples report `Up`; kept as the documented default.
#[derive(Debug, Clone)]
pub struct DirectionTracker {
    prev: f64,
    current: ScrollDirection,
}

impl DirectionTracker {
    pub fn new() -> Self {
        Self::with_origin(0.0)
    }

    /// Start comparing against `prev` instead of 0, for pages that mount
    /// already scrolled.
    pub fn with_origin(prev: f64) -> Self {
        Self {
            prev,
            current: ScrollDirection::Down,
        }
    }

    pub fn sample(&mut self, y: f64) -> ScrollDirection {
        self.current = if y > self.prev {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.prev = y;
        self.current
    }

    pub fn current(&self) -> ScrollDirection {
        self.current
    }
}

impl Default for DirectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Level-crossing latch with separate engage and release thresholds so the
/// flag cannot flicker at a single crossing point. Engages only while
/// moving down, releases only while moving up; otherwise it holds.
#[derive(Debug, Clone)]
pub struct HysteresisGate {
    engage_at: f64,
    release_below: f64,
    engaged: bool,
}

impl HysteresisGate {
    pub fn new(engage_at: f64, release_below: f64) -> Self {
        Self {
            engage_at,
            release_below,
            engaged: false,
        }
    }

    pub fn update(&mut self, progress: f64, direction: ScrollDirection) -> bool {
        if direction == ScrollDirection::Down && progress >= self.engage_at {
            self.engaged = true;
        } else if direction == ScrollDirection::Up && progress < self.release_below {
            self.engaged = false;
        }
        self.engaged
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

/// Reveal window for the i-th staggered element: starts shift by `step`
/// per index, so elements always animate in index order.
pub fn stagger_window(index: usize, base: f64, step: f64, width: f64) -> (f64, f64) {
    let start = base + index as f64 * step;
    (start, start + width)
}
