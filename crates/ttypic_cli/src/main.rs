mod term;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::debug;
use ttypic_render::{AsciiRenderer, Dimensions, GlyphSet, RenderError, RenderOptions};

/// Fraction of the terminal window used when no explicit size is given.
const DEFAULT_TERMINAL_SCALE_FACTOR: f32 = 0.5;
/// Terminal size assumed when the window size cannot be queried.
const DEFAULT_TERMINAL_COLUMNS: u32 = 160;
const DEFAULT_TERMINAL_LINES: u32 = 22;

// Clap's automatic -h is disabled so the short flag can mean height;
// --help is added back explicitly below.
#[derive(Parser, Debug)]
#[command(name = "ttypic", version, about = "Print a picture as ASCII art", disable_help_flag = true)]
struct Cli {
    /// Path of image to display
    image_path: PathBuf,

    /// Width in characters of output image
    #[arg(short, long, requires = "height")]
    width: Option<u32>,

    /// Height in characters of output image
    #[arg(short = 'h', long, requires = "width")]
    height: Option<u32>,

    /// Characters to use to draw ascii art
    #[arg(short, long, default_value = "#")]
    glyph: String,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.image_path.exists() {
        println!("{} does not exist!", cli.image_path.display());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&cli.image_path, err),
    }
}

fn run(cli: &Cli) -> Result<(), RenderError> {
    let glyphs = GlyphSet::new(cli.glyph.as_str())?;
    let bounds = resolve_bounds(cli.width.zip(cli.height), term::window_size());
    debug!(
        "rendering {} within {}x{} cells",
        cli.image_path.display(),
        bounds.width,
        bounds.height
    );

    let options = RenderOptions { max_width: bounds.width, max_height: bounds.height, glyphs };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    AsciiRenderer::default().render_path(&cli.image_path, &options, &mut out)
}

/// Character-grid bounds for the render: the explicit `-w`/`-h` pair when
/// given, otherwise half the terminal window, falling back to 160x22 when
/// the window size is unknown.
fn resolve_bounds(explicit: Option<(u32, u32)>, terminal: Option<Dimensions>) -> Dimensions {
    if let Some((width, height)) = explicit {
        return Dimensions::new(width, height);
    }

    let term = terminal.unwrap_or_else(|| {
        debug!(
            "terminal size unavailable, assuming {}x{}",
            DEFAULT_TERMINAL_COLUMNS, DEFAULT_TERMINAL_LINES
        );
        Dimensions::new(DEFAULT_TERMINAL_COLUMNS, DEFAULT_TERMINAL_LINES)
    });

    Dimensions::new(
        (term.width as f32 * DEFAULT_TERMINAL_SCALE_FACTOR) as u32,
        (term.height as f32 * DEFAULT_TERMINAL_SCALE_FACTOR) as u32,
    )
}

fn report_failure(path: &Path, err: RenderError) -> ExitCode {
    match err {
        RenderError::Decode(_) | RenderError::EmptyImage => {
            println!("{} is not a valid image!", path.display());
            ExitCode::FAILURE
        }
        RenderError::EmptyGlyphs => {
            println!("Glyph must be a single non-empty character!");
            ExitCode::FAILURE
        }
        RenderError::Io(err) => {
            println!("Ran into exception! {err}");
            ExitCode::SUCCESS
        }
    }
}
