//! Configuration of [`ArticleButtonEnv`](super::ArticleButtonEnv).
use crate::{
    article::{default_catalog, stacked_y_position, Article, TITLE_HEIGHT},
    config::{load_yaml, save_yaml, ButtonConfig, PageConfig},
    render::FontConfig,
    WebClickError,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the mode of an episode is chosen on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSelection {
    /// Every episode targets an article title.
    Article,

    /// Every episode targets the button.
    Button,

    /// Each episode picks one of the modes with equal probability.
    Random,
}

impl Default for ModeSelection {
    fn default() -> Self {
        Self::Article
    }
}

/// Configuration of [`ArticleButtonEnv`](super::ArticleButtonEnv).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleButtonEnvConfig {
    /// Canvas and reward settings.
    pub page: PageConfig,

    /// The button used in button mode.
    pub button: ButtonConfig,

    /// Articles listed on the page, from top to bottom.
    pub articles: Vec<Article>,

    /// Mode selection on reset.
    pub mode: ModeSelection,
}

impl Default for ArticleButtonEnvConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            button: ButtonConfig::default(),
            articles: default_catalog(),
            mode: ModeSelection::default(),
        }
    }
}

impl ArticleButtonEnvConfig {
    /// Sets the glyph source.
    pub fn font(mut self, font: FontConfig) -> Self {
        self.page.font = font;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.page.max_steps = max_steps;
        self
    }

    /// Sets the articles.
    pub fn articles(mut self, articles: Vec<Article>) -> Self {
        self.articles = articles;
        self
    }

    /// Sets the mode selection.
    pub fn mode(mut self, mode: ModeSelection) -> Self {
        self.mode = mode;
        self
    }

    /// Constructs [`ArticleButtonEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_yaml(path)
    }

    /// Saves [`ArticleButtonEnvConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_yaml(self, path)
    }

    /// Checks that the articles are laid out the way they are drawn.
    ///
    /// Title widths depend on the typeface and are checked when the environment
    /// is built.
    pub(crate) fn validate(&self) -> Result<(), WebClickError> {
        self.page.validate()?;
        self.button.validate(&self.page)?;

        if self.articles.is_empty() {
            return Err(WebClickError::InvalidConfig(
                "at least one article is required".to_string(),
            ));
        }
        for (i, article) in self.articles.iter().enumerate() {
            let expected = stacked_y_position(i);
            if article.y_position != expected {
                return Err(WebClickError::InvalidConfig(format!(
                    "article {:?} is drawn at y = {}, but y_position is {}",
                    article.title, expected, article.y_position
                )));
            }
            if article.y_position as f32 + TITLE_HEIGHT > self.page.height as f32 {
                return Err(WebClickError::OutOfCanvas {
                    what: format!("title {:?}", article.title),
                    x: 0,
                    y: article.y_position,
                    width: self.page.width,
                    height: self.page.height,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_article_button_env_config() -> Result<()> {
        let config = ArticleButtonEnvConfig::default()
            .mode(ModeSelection::Random)
            .max_steps(Some(5));

        let dir = TempDir::new("article_button_env_config")?;
        let path = dir.path().join("article_button_env_config.yaml");
        config.save(&path)?;
        let config_ = ArticleButtonEnvConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_validate_layout() {
        assert!(ArticleButtonEnvConfig::default().validate().is_ok());

        let config = ArticleButtonEnvConfig::default().articles(vec![]);
        assert!(config.validate().is_err());

        let mut articles = default_catalog();
        articles[1].y_position = 100;
        let config = ArticleButtonEnvConfig::default().articles(articles);
        assert!(matches!(
            config.validate(),
            Err(WebClickError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_title_below_canvas() {
        let mut articles = default_catalog();
        articles.push(Article::new("Late Edition", "Nothing to report.", 360));
        let config = ArticleButtonEnvConfig::default().articles(articles);
        assert!(matches!(
            config.validate(),
            Err(WebClickError::OutOfCanvas { .. })
        ));
    }
}
