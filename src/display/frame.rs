//! Orientation modes and the part of controller memory the panel shows in each.

use crate::command::consts::*;

/// An orientation mode in the range 0-7. Modes 0-3 are landscape, 4-7 portrait; each selects one
/// memory access control value from `consts::MODE_MADCTL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mode(u8);

impl Mode {
    /// Validate `mode`, returning `None` outside 0-7.
    pub fn new(mode: u8) -> Option<Self> {
        if mode < NUM_MODES {
            Some(Mode(mode))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_landscape(self) -> bool {
        self.0 < 4
    }

    /// The memory access control value sent for this mode.
    pub fn madctl(self) -> u8 {
        MODE_MADCTL[usize::from(self.0)]
    }
}

impl Default for Mode {
    /// Portrait mode 4.
    fn default() -> Self {
        Mode(4)
    }
}

/// The sub-rectangle of controller memory that the panel actually shows, as origin and extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameWindow {
    pub x_start: u16,
    pub width: u16,
    pub y_start: u16,
    pub height: u16,
}

impl FrameWindow {
    pub fn for_mode(mode: Mode) -> Self {
        if mode.is_landscape() {
            FrameWindow {
                x_start: PANEL_OFFSET,
                width: PANEL_SHORT_SIDE,
                y_start: 0,
                height: PANEL_LONG_SIDE,
            }
        } else {
            FrameWindow {
                x_start: 0,
                width: PANEL_LONG_SIDE,
                y_start: PANEL_OFFSET,
                height: PANEL_SHORT_SIDE,
            }
        }
    }

    /// Translate a frame-relative column to a controller column.
    pub fn column(&self, x: u16) -> u16 {
        self.x_start.saturating_add(x)
    }

    /// Translate a frame-relative row to a controller row.
    pub fn row(&self, y: u16) -> u16 {
        self.y_start.saturating_add(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_range() {
        for m in 0..8 {
            assert_eq!(Mode::new(m).map(Mode::value), Some(m));
        }
        assert_eq!(Mode::new(8), None);
        assert_eq!(Mode::new(255), None);
    }

    #[test]
    fn frame_for_each_mode() {
        let landscape = FrameWindow {
            x_start: 35,
            width: 170,
            y_start: 0,
            height: 320,
        };
        let portrait = FrameWindow {
            x_start: 0,
            width: 320,
            y_start: 35,
            height: 170,
        };
        for m in 0..4 {
            assert_eq!(FrameWindow::for_mode(Mode::new(m).unwrap()), landscape);
        }
        for m in 4..8 {
            assert_eq!(FrameWindow::for_mode(Mode::new(m).unwrap()), portrait);
        }
    }

    #[test]
    fn madctl_lookup() {
        let values: Vec<u8> = (0..8).map(|m| Mode::new(m).unwrap().madctl()).collect();
        assert_eq!(values, MODE_MADCTL.to_vec());
    }

    #[test]
    fn origin_offset() {
        let frame = FrameWindow::for_mode(Mode::new(0).unwrap());
        assert_eq!(frame.column(10), 45);
        assert_eq!(frame.row(10), 10);
    }
}
