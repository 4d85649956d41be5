/// Width:height ratio of a terminal character cell. Cells are roughly twice
/// as tall as they are wide, so vertical pixel spans are compressed by this
/// factor to keep the rendered image visually square.
pub const CHARACTER_ASPECT_RATIO: f32 = 0.5;

/// Extent in pixels (source images) or character cells (target grids).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Derive the character-grid size for a source image so that it fits inside
/// `max_width` x `max_height` cells without distortion.
///
/// Both axes are scaled by the same factor, chosen from whichever bound is
/// tighter once the cell aspect is folded into the vertical comparison. The
/// aspect correction appears twice: in `scale_y`, so the comparison is made
/// in visual units, and in the final height, so the grid itself is squashed
/// to compensate for tall cells. Results truncate toward zero.
///
/// `source` must be non-empty; callers reject zero-dimension images before
/// reaching this function.
pub fn determine_image_size(source: Dimensions, max_width: u32, max_height: u32) -> Dimensions {
    let scale_x = max_width as f32 / source.width as f32;
    let scale_y = max_height as f32 / (source.height as f32 * CHARACTER_ASPECT_RATIO);
    let scale = scale_x.min(scale_y);

    Dimensions {
        width: (source.width as f32 * scale) as u32,
        height: (source.height as f32 * scale * CHARACTER_ASPECT_RATIO) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_bound_source_fills_width() {
        // 4x2 in a 4x4 box: scale_x = 1.0, scale_y = 4.0, width binds.
        let target = determine_image_size(Dimensions::new(4, 2), 4, 4);
        assert_eq!(target, Dimensions::new(4, 1));
    }

    #[test]
    fn height_bound_source_fills_height() {
        // 100x100 in an 80x20 box: scale_x = 0.8, scale_y = 0.4, height binds.
        let target = determine_image_size(Dimensions::new(100, 100), 80, 20);
        assert_eq!(target, Dimensions::new(40, 20));
    }

    #[test]
    fn square_source_keeps_visual_aspect() {
        let target = determine_image_size(Dimensions::new(100, 100), 40, 40);
        assert_eq!(target, Dimensions::new(40, 20));
        // Undoing the cell aspect recovers the source ratio.
        let visual = target.width as f32 / (target.height as f32 / CHARACTER_ASPECT_RATIO);
        assert!((visual - 1.0).abs() < 0.05);
    }

    #[test]
    fn output_never_exceeds_bounds() {
        for (w, h) in [(1, 1), (3, 3), (640, 480), (1920, 1080), (2, 300)] {
            let target = determine_image_size(Dimensions::new(w, h), 80, 24);
            assert!(target.width <= 80, "{w}x{h} gave width {}", target.width);
            assert!(target.height <= 24, "{w}x{h} gave height {}", target.height);
        }
    }

    #[test]
    fn extreme_portrait_source_truncates_width_to_zero() {
        // Fitting 1x1000 into 4x4 leaves less than one column after scaling.
        let target = determine_image_size(Dimensions::new(1, 1000), 4, 4);
        assert_eq!(target.width, 0);
        assert!(target.height <= 4);
    }

    #[test]
    fn zero_bounds_give_zero_grid() {
        let target = determine_image_size(Dimensions::new(640, 480), 0, 0);
        assert_eq!(target, Dimensions::new(0, 0));
    }
}
