//! Face renderer
//!
//! Layout on the 128x64 panel:
//!
//! ```text
//!  > (run indicator)      120        large digits
//!                         bpm        caption
//!
//!  [#]                               pendulum
//!  ------------------------------    track
//! ```

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use metronome_core::config::PendulumConfig;
use metronome_core::render::PendulumRect;
use metronome_core::state::PendulumState;

use super::Screen;

/// Horizontal centre of the panel
const CENTER_X: i32 = 64;

/// Top of the tempo digits
const BPM_TOP: i32 = 2;

/// Top of the "bpm" caption
const CAPTION_TOP: i32 = 24;

/// Top of the pendulum block
const PENDULUM_TOP: i32 = 44;

/// Side of the run indicator glyph
const INDICATOR_SIZE: i32 = 8;

/// Draw the whole face for `screen`
pub fn draw_face<D>(
    target: &mut D,
    screen: &Screen,
    geometry: &PendulumConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();

    let digits = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
    Text::with_text_style(
        screen.bpm_text(),
        Point::new(CENTER_X, BPM_TOP),
        digits,
        centered,
    )
    .draw(target)?;

    let caption = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    Text::with_text_style("bpm", Point::new(CENTER_X, CAPTION_TOP), caption, centered)
        .draw(target)?;

    draw_indicator(target, screen.is_running())?;
    draw_pendulum(target, screen.pendulum(), geometry)
}

/// Play triangle while running, stop square otherwise
fn draw_indicator<D>(target: &mut D, running: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let fill = PrimitiveStyle::with_fill(BinaryColor::On);
    let top = BPM_TOP + 4;

    if running {
        Triangle::new(
            Point::new(2, top),
            Point::new(2, top + INDICATOR_SIZE),
            Point::new(2 + INDICATOR_SIZE, top + INDICATOR_SIZE / 2),
        )
        .into_styled(fill)
        .draw(target)
    } else {
        Rectangle::new(
            Point::new(2, top),
            Size::new(INDICATOR_SIZE as u32, INDICATOR_SIZE as u32),
        )
        .into_styled(fill)
        .draw(target)
    }
}

/// Track line with the pendulum block above it
fn draw_pendulum<D>(
    target: &mut D,
    pendulum: &PendulumState,
    geometry: &PendulumConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    // Track is centred when narrower than the panel
    let origin_x = (target.bounding_box().size.width as i32 - geometry.track_width as i32) / 2;
    let origin_x = origin_x.max(0);

    let rect = PendulumRect::locate(pendulum, geometry);

    Rectangle::new(
        Point::new(origin_x + rect.x, PENDULUM_TOP + rect.y),
        Size::new(rect.width, rect.height),
    )
    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
    .draw(target)?;

    let track_y = PENDULUM_TOP + geometry.pendulum_height as i32 + 1;
    Line::new(
        Point::new(origin_x, track_y),
        Point::new(origin_x + geometry.track_width as i32 - 1, track_y),
    )
    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
    .draw(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ops::Range;
    use metronome_drivers::display::sh1106::{Sh1106, HEIGHT, WIDTH};

    fn render(screen: &Screen) -> Sh1106<()> {
        let mut display = Sh1106::new(());
        draw_face(&mut display, screen, &PendulumConfig::default()).unwrap();
        display
    }

    fn stopped_screen() -> Screen {
        let mut screen = Screen::new();
        screen.set_bpm_text("120");
        screen
    }

    fn any_lit(display: &Sh1106<()>, xs: Range<usize>, ys: Range<usize>) -> bool {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .any(|(x, y)| display.pixel(x, y))
    }

    #[test]
    fn test_pendulum_at_left_extreme() {
        let display = render(&stopped_screen());

        assert!(display.pixel(0, 44));
        assert!(display.pixel(7, 51));
        assert!(!display.pixel(8, 48));
        assert!(!display.pixel(0, 43));
    }

    #[test]
    fn test_pendulum_at_right_extreme() {
        let geometry = PendulumConfig::default();
        let mut pendulum = PendulumState::new();
        pendulum.on_beat(&geometry);
        assert_eq!(pendulum.left_offset(), 120);

        let mut screen = stopped_screen();
        screen.set_pendulum(pendulum);
        let display = render(&screen);

        assert!(display.pixel(120, 44));
        assert!(display.pixel(127, 51));
        assert!(!display.pixel(119, 48));
        assert!(!any_lit(&display, 0..8, 44..52));
    }

    #[test]
    fn test_pendulum_sits_above_track() {
        let display = render(&stopped_screen());

        // One blank row between block and track
        assert!(!any_lit(&display, 0..WIDTH, 52..53));
        assert!((0..WIDTH).all(|x| display.pixel(x, 53)));
        assert!(!any_lit(&display, 0..WIDTH, 54..HEIGHT));
    }

    #[test]
    fn test_caption_below_digits() {
        let display = render(&stopped_screen());

        // Digits in the top band, caption under them, then a gap
        assert!(any_lit(&display, 49..79, 2..22));
        assert!(any_lit(&display, 55..73, 24..34));
        assert!(!any_lit(&display, 0..WIDTH, 34..44));
    }

    #[test]
    fn test_run_indicator() {
        let mut screen = stopped_screen();
        let stopped = render(&screen);
        // Stop square fills its corner
        assert!(stopped.pixel(9, 6));

        screen.set_running(true);
        let running = render(&screen);
        // Play triangle leaves it empty
        assert!(!running.pixel(9, 6));
        assert!(running.pixel(3, 10));
    }
}
