//! News articles listed on the page of [`ArticleButtonEnv`](crate::ArticleButtonEnv).
use crate::{
    geometry::Rect,
    render::{Canvas, Typeface, BLACK},
};
use serde::{Deserialize, Serialize};

/// Left edge of titles and bodies.
pub const TEXT_X: f32 = 20.0;

/// Height of the clickable area of a title.
pub const TITLE_HEIGHT: f32 = 30.0;

/// Font size of titles.
pub const TITLE_FONT_SIZE: f32 = 24.0;

/// Font size of bodies.
pub const BODY_FONT_SIZE: f32 = 16.0;

/// Distance from the top of a title to the top of its body.
pub const BODY_OFFSET: u32 = 40;

/// Distance from the top of a body to the top of the next title.
pub const NEXT_ARTICLE_OFFSET: u32 = 80;

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Title, the click target.
    pub title: String,

    /// Body text drawn below the title.
    pub body: String,

    /// Top of the title on the canvas.
    pub y_position: u32,
}

impl Article {
    /// Constructs an [`Article`].
    pub fn new(title: impl Into<String>, body: impl Into<String>, y_position: u32) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            y_position,
        }
    }

    /// Clickable area of the title.
    pub fn title_rect(&self, typeface: &Typeface) -> Rect {
        let width = typeface.text_width(&self.title, TITLE_FONT_SIZE);
        Rect::new(TEXT_X, self.y_position as f32, width, TITLE_HEIGHT)
    }
}

/// Top of the title of the `i`-th article in the stacked layout.
pub fn stacked_y_position(i: usize) -> u32 {
    i as u32 * (BODY_OFFSET + NEXT_ARTICLE_OFFSET)
}

/// The three articles of the default page.
pub fn default_catalog() -> Vec<Article> {
    vec![
        Article::new(
            "Breaking News: AI Revolution",
            "Artificial intelligence is transforming industries.",
            0,
        ),
        Article::new(
            "Sports Update: Local Team Wins",
            "The local team clinched the championship.",
            120,
        ),
        Article::new(
            "Weather Alert: Storm Incoming",
            "A storm is expected to hit the area this weekend.",
            240,
        ),
    ]
}

/// Draws the titles and bodies of all articles, stacked from the top of the page.
pub(crate) fn draw_all(canvas: &mut Canvas, typeface: &Typeface, articles: &[Article]) {
    let mut y = 0;
    for article in articles {
        canvas.draw_text(typeface, &article.title, TEXT_X, y as f32, TITLE_FONT_SIZE, BLACK);
        y += BODY_OFFSET;
        canvas.draw_text(typeface, &article.body, TEXT_X, y as f32, BODY_FONT_SIZE, BLACK);
        y += NEXT_ARTICLE_OFFSET;
    }
}
