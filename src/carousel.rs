use std::time::Duration;

/// Index of the slide on show, with optional auto-advance.
///
/// Any manual move hands control to the user and stops autoplay.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    len: usize,
    autoplay: bool,
    interval: Duration,
    elapsed: Duration,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            index: 0,
            len,
            autoplay: true,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn manual(len: usize) -> Self {
        Self {
            autoplay: false,
            ..Self::new(len, Duration::ZERO)
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn next(&mut self) {
        self.advance();
        self.stop();
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.stop();
    }

    /// Jump to slot `index`; out of range requests are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.stop();
        }
    }

    /// Feed elapsed wall time; returns how many slides were advanced.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if !self.autoplay || self.len == 0 || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut advanced = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.advance();
            advanced += 1;
        }
        advanced
    }

    fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    fn stop(&mut self) {
        self.autoplay = false;
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut c = Carousel::manual(3);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn autoplay_advances_once_per_interval() {
        let mut c = Carousel::new(6, Duration::from_secs(5));
        assert_eq!(c.tick(Duration::from_millis(4999)), 0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.tick(Duration::from_millis(1)), 1);
        assert_eq!(c.index(), 1);
        assert_eq!(c.tick(Duration::from_secs(10)), 2);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn manual_navigation_stops_autoplay() {
        let mut c = Carousel::new(6, Duration::from_secs(5));
        c.go_to(4);
        assert!(!c.is_autoplaying());
        assert_eq!(c.tick(Duration::from_secs(60)), 0);
        assert_eq!(c.index(), 4);

        let mut c = Carousel::new(6, Duration::from_secs(5));
        c.go_to(6);
        assert!(c.is_autoplaying());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut c = Carousel::new(0, Duration::from_secs(1));
        assert!(c.is_empty());
        assert_eq!(c.tick(Duration::from_secs(5)), 0);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }
}
