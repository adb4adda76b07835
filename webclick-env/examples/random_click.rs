use anyhow::Result;
use rand::{rngs::SmallRng, SeedableRng};
use webclick_core::{BoxSpace, DefaultEvaluator, Env as _, Evaluator, Policy};
use webclick_env::{
    ArticleButtonEnv, ArticleButtonEnvConfig, ClickAct, PixelObs, SingleButtonEnv,
    SingleButtonEnvConfig,
};

/// Clicks uniformly at random in the action space.
struct RandomPolicy {
    space: BoxSpace,
    rng: SmallRng,
}

impl RandomPolicy {
    fn click(&mut self) -> ClickAct {
        let v = self.space.sample(&mut self.rng);
        ClickAct::new(v[0], v[1])
    }
}

impl Policy<SingleButtonEnv> for RandomPolicy {
    fn sample(&mut self, _: &PixelObs) -> ClickAct {
        self.click()
    }
}

impl Policy<ArticleButtonEnv> for RandomPolicy {
    fn sample(&mut self, _: &PixelObs) -> ClickAct {
        self.click()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut policy = RandomPolicy {
        space: SingleButtonEnvConfig::default().page.action_space(),
        rng: SmallRng::seed_from_u64(42),
    };

    // Single button
    let config = SingleButtonEnvConfig::default().terminate_on_click(true);
    let record = DefaultEvaluator::<SingleButtonEnv>::new(&config, 0, 5)?
        .max_steps(50)
        .evaluate(&mut policy)?;
    println!("SingleButtonEnv: {:?}", record.get_scalar("Episode return")?);

    // Articles
    let config = ArticleButtonEnvConfig::default();
    let record = DefaultEvaluator::<ArticleButtonEnv>::new(&config, 0, 5)?
        .max_steps(50)
        .evaluate(&mut policy)?;
    println!("ArticleButtonEnv: {:?}", record.get_scalar("Episode return")?);

    // Saves the first frames
    let mut env = SingleButtonEnv::build(&SingleButtonEnvConfig::default(), 0)?;
    env.reset()?.0.save("single_button.png")?;
    let mut env = ArticleButtonEnv::build(&ArticleButtonEnvConfig::default(), 0)?;
    env.reset()?.0.save("article_button.png")?;

    Ok(())
}
