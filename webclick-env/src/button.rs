//! The square button shared by both environments.
use crate::{
    config::{ButtonConfig, PageConfig},
    geometry::Rect,
    render::{Canvas, Typeface, BLUE, WHITE},
    WebClickError,
};
use rand::Rng;

/// Samples the top-left corner of the button uniformly so that the button fits
/// in the canvas.
pub(crate) fn sample_position<R: Rng + ?Sized>(
    rng: &mut R,
    page: &PageConfig,
    button: &ButtonConfig,
) -> [u32; 2] {
    [
        rng.gen_range(0..=page.width - button.size),
        rng.gen_range(0..=page.height - button.size),
    ]
}

/// Checks that a button at `position` fits in the canvas.
pub(crate) fn check_position(
    position: [u32; 2],
    page: &PageConfig,
    button: &ButtonConfig,
) -> Result<(), WebClickError> {
    let [x, y] = position;
    if x > page.width - button.size || y > page.height - button.size {
        return Err(WebClickError::OutOfCanvas {
            what: "button".to_string(),
            x,
            y,
            width: page.width,
            height: page.height,
        });
    }
    Ok(())
}

/// Clickable area of the button.
pub(crate) fn rect(position: [u32; 2], button: &ButtonConfig) -> Rect {
    let size = button.size as f32;
    Rect::new(position[0] as f32, position[1] as f32, size, size)
}

/// Draws the button with its label centered on it.
pub(crate) fn draw(
    canvas: &mut Canvas,
    typeface: &Typeface,
    position: [u32; 2],
    button: &ButtonConfig,
) {
    let area = rect(position, button);
    canvas.fill_rect(&area, BLUE);

    let font_size = button.label_font_size;
    let text_width = typeface.text_width(&button.label, font_size);
    let x = area.x + (area.width - text_width) / 2.0;
    let y = area.y + (area.height - font_size) / 2.0;
    canvas.draw_text(typeface, &button.label, x, y, font_size, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_sampled_positions_fit() {
        let page = PageConfig::default();
        let button = ButtonConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let position = sample_position(&mut rng, &page, &button);
            assert!(check_position(position, &page, &button).is_ok());
            assert!(position[0] <= 350 && position[1] <= 250);
        }
    }

    #[test]
    fn test_position_out_of_canvas() {
        let page = PageConfig::default();
        let button = ButtonConfig::default();
        assert!(check_position([350, 250], &page, &button).is_ok());
        assert!(check_position([351, 0], &page, &button).is_err());
        assert!(check_position([0, 251], &page, &button).is_err());
    }

    #[test]
    fn test_draw_label_inside_button() {
        let button = ButtonConfig::default();
        let mut canvas = Canvas::new(400, 300, WHITE);
        draw(&mut canvas, &Typeface::Builtin, [100, 100], &button);
        let img = canvas.image();

        assert_eq!(*img.get_pixel(100, 100), BLUE);
        assert_eq!(*img.get_pixel(149, 149), BLUE);
        assert_eq!(*img.get_pixel(150, 150), WHITE);
        // The label is white on blue.
        let n_label = (100..150)
            .flat_map(|y| (100..150).map(move |x| (x, y)))
            .filter(|&(x, y)| *img.get_pixel(x, y) == WHITE)
            .count();
        assert!(n_label > 0);
    }
}
