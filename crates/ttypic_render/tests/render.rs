use ttypic_render::{
    AsciiRenderer, DecodedImage, Dimensions, GlyphSet, PixelSource, RenderError, RenderOptions,
};

struct SolidSource {
    size: Dimensions,
    color: [u16; 3],
    quantum_max: u16,
}

impl PixelSource for SolidSource {
    fn size(&self) -> Dimensions {
        self.size
    }

    fn quantum_max(&self) -> u16 {
        self.quantum_max
    }

    fn color_at(&self, _x: u32, _y: u32) -> [u16; 3] {
        self.color
    }
}

fn options(max_width: u32, max_height: u32, glyphs: &str) -> RenderOptions {
    RenderOptions { max_width, max_height, glyphs: GlyphSet::new(glyphs).unwrap() }
}

fn render_to_string<S: PixelSource>(source: &S, options: &RenderOptions) -> String {
    let mut out = Vec::new();
    AsciiRenderer::default().render(source, options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn four_by_two_red_source_renders_one_row() {
    // scale_x = 1.0 and scale_y = 4.0, so the 4x2 source maps to a 4x1 grid.
    let source = SolidSource {
        size: Dimensions::new(4, 2),
        color: [65535, 0, 0],
        quantum_max: u16::MAX,
    };

    let rendered = render_to_string(&source, &options(4, 4, "#"));
    assert_eq!(rendered, "\x1b[38;2;255;0;0m#\x1b[0m".repeat(4) + "\n");
}

#[test]
fn eight_bit_source_colors_survive_unchanged() {
    let source = SolidSource {
        size: Dimensions::new(2, 2),
        color: [10, 200, 31],
        quantum_max: 255,
    };

    let rendered = render_to_string(&source, &options(2, 1, "#"));
    assert!(rendered.contains("\x1b[38;2;10;200;31m#\x1b[0m"));
}

#[test]
fn decoded_image_renders_like_synthetic_source() {
    let buffer = image::ImageBuffer::from_pixel(4, 2, image::Rgb([255u8, 0, 0]));
    let decoded = DecodedImage::from_dynamic(image::DynamicImage::ImageRgb8(buffer));

    let rendered = render_to_string(&decoded, &options(4, 4, "#"));
    assert_eq!(rendered, "\x1b[38;2;255;0;0m#\x1b[0m".repeat(4) + "\n");
}

#[test]
fn zero_sized_source_is_rejected_before_scaling() {
    let source = SolidSource {
        size: Dimensions::new(0, 4),
        color: [0, 0, 0],
        quantum_max: u16::MAX,
    };

    let mut out = Vec::new();
    let result = AsciiRenderer::default().render(&source, &options(80, 24, "#"), &mut out);
    assert!(matches!(result, Err(RenderError::EmptyImage)));
    assert!(out.is_empty(), "no output may be produced for a rejected image");
}

#[test]
fn empty_glyph_string_is_rejected_at_construction() {
    assert!(matches!(GlyphSet::new(""), Err(RenderError::EmptyGlyphs)));
}

#[test]
fn multi_glyph_cycle_is_row_major_across_whole_image() {
    let source = SolidSource {
        size: Dimensions::new(4, 4),
        color: [255, 255, 255],
        quantum_max: 255,
    };
    // 4x4 source in a 4x4 box maps to a 4x2 grid; 8 cells over "abc".
    let rendered = render_to_string(&source, &options(4, 4, "abc"));

    let glyphs: String = rendered
        .split('m')
        .filter_map(|chunk| chunk.chars().next())
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    assert_eq!(glyphs, "abcabcab");
}
