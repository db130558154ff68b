use std::fmt;

/// Half-extent of the contact area reported around the touch point, in pixels.
pub const CONTACT_HALF_EXTENT: i32 = 2;

/// Phase of a simulated contact at the moment of injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
}

impl TouchPhase {
    /// Action label used in console announcements and error messages.
    pub fn action(&self) -> &'static str {
        match self {
            TouchPhase::Down => "touch down",
            TouchPhase::Move => "touch move",
            TouchPhase::Up => "touch up",
        }
    }
}

impl fmt::Display for TouchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

/// One instantaneous state of the simulated touch point.
///
/// Built fresh immediately before each submission and dropped right after;
/// nothing holds on to a descriptor across submissions.
#[derive(Debug, Clone, Copy)]
pub struct ContactDescriptor {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub phase: TouchPhase,
}

impl ContactDescriptor {
    pub fn new(phase: TouchPhase, x: i32, y: i32, id: u32) -> Self {
        Self { id, x, y, phase }
    }

    /// Contact area around the touch point as (left, top, right, bottom).
    pub fn contact_rect(&self) -> (i32, i32, i32, i32) {
        (
            self.x - CONTACT_HALF_EXTENT,
            self.y - CONTACT_HALF_EXTENT,
            self.x + CONTACT_HALF_EXTENT,
            self.y + CONTACT_HALF_EXTENT,
        )
    }
}

#[cfg(test)]
mod test {
    use super::{ContactDescriptor, TouchPhase};

    #[test]
    fn contact_rect_surrounds_position() {
        let contact = ContactDescriptor::new(TouchPhase::Down, 300, 300, 0);
        assert_eq!(contact.contact_rect(), (298, 298, 302, 302));

        let contact = ContactDescriptor::new(TouchPhase::Move, -1, 7, 0);
        assert_eq!(contact.contact_rect(), (-3, 5, 1, 9));
    }
}
