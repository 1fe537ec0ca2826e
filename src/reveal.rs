/// Marker class carried by every element that animates in on scroll.
pub const REVEAL_CLASS: &str = "reveal";
/// Added once the element has been seen.
pub const REVEALED_CLASS: &str = "revealed";

/// Fraction of the element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the bottom of the viewport so elements reveal slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// One-way visibility flag. Once revealed, never hidden again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds an intersection change. Returns `true` only on the transition to revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn class(&self) -> String {
        if self.revealed {
            format!("{REVEAL_CLASS} {REVEALED_CLASS}")
        } else {
            REVEAL_CLASS.to_string()
        }
    }
}
