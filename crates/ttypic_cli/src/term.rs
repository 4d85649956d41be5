//! Terminal window-size detection.

use ttypic_render::Dimensions;

/// Current terminal size in character cells, or `None` when stdin is not a
/// terminal or the size cannot be queried.
#[cfg(unix)]
pub fn window_size() -> Option<Dimensions> {
    use std::mem;

    use libc::{winsize, STDIN_FILENO, TIOCGWINSZ};

    // SAFETY: `ioctl` is an FFI call; `winsz` is a valid zeroed out-param.
    unsafe {
        let mut winsz: winsize = mem::zeroed();
        if libc::ioctl(STDIN_FILENO, TIOCGWINSZ, &mut winsz) == -1 {
            return None;
        }
        // Some contexts report zero cells; treat that as unknown.
        if winsz.ws_col == 0 || winsz.ws_row == 0 {
            return None;
        }
        Some(Dimensions::new(u32::from(winsz.ws_col), u32::from(winsz.ws_row)))
    }
}

#[cfg(not(unix))]
pub fn window_size() -> Option<Dimensions> {
    None
}
