use anyhow::Result;
use webclick_core::{
    record::{BufferedRecorder, Record, RecordValue},
    Act, BoxSpace, DefaultEvaluator, Env, Evaluator, Obs, Policy, Step,
};

#[derive(Clone, Debug)]
struct CountObs(usize);

impl Obs for CountObs {
    fn shape(&self) -> Vec<usize> {
        vec![1]
    }
}

#[derive(Clone, Debug)]
struct NoopAct;

impl Act for NoopAct {
    fn to_vec(&self) -> Vec<f32> {
        vec![]
    }
}

/// Terminates after `length` steps with reward 1 per step.
struct CountdownEnv {
    length: usize,
    t: usize,
}

impl Env for CountdownEnv {
    type Config = usize;
    type Obs = CountObs;
    type Act = NoopAct;
    type Info = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            length: *config,
            t: 0,
        })
    }

    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        self.t += 1;
        let is_terminated = self.t >= self.length;
        let step = Step::new(CountObs(self.t), a.clone(), 1.0, is_terminated, false, ());
        (step, Record::from_scalar("reward", 1.0))
    }

    fn reset(&mut self) -> Result<(Self::Obs, Self::Info)> {
        self.t = 0;
        Ok((CountObs(0), ()))
    }

    fn reset_with_index(&mut self, _ix: usize) -> Result<(Self::Obs, Self::Info)> {
        self.reset()
    }

    fn action_space(&self) -> BoxSpace {
        BoxSpace::new(0.0, 0.0, vec![0])
    }

    fn observation_space(&self) -> BoxSpace {
        BoxSpace::new(0.0, self.length as f32, vec![1])
    }
}

struct NoopPolicy;

impl Policy<CountdownEnv> for NoopPolicy {
    fn sample(&mut self, _obs: &CountObs) -> NoopAct {
        NoopAct
    }
}

#[test]
fn test_evaluate_terminating_episodes() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut evaluator = DefaultEvaluator::<CountdownEnv>::new(&3, 0, 4)?;
    let record = evaluator.evaluate(&mut NoopPolicy)?;

    assert_eq!(record.get_scalar("Episode return")?, 3.0);
    assert_eq!(record.get_scalar("Episode length")?, 3.0);
    assert_eq!(record.get_scalar("Termination rate")?, 1.0);
    Ok(())
}

#[test]
fn test_evaluate_caps_episode_length() -> Result<()> {
    let mut evaluator = DefaultEvaluator::<CountdownEnv>::new(&10, 0, 2)?.max_steps(4);
    let record = evaluator.evaluate(&mut NoopPolicy)?;

    assert_eq!(record.get_scalar("Episode return")?, 4.0);
    assert_eq!(record.get_scalar("Termination rate")?, 0.0);
    Ok(())
}

#[test]
fn test_evaluate_with_recorder() -> Result<()> {
    let mut evaluator = DefaultEvaluator::<CountdownEnv>::new(&2, 0, 3)?;
    let mut recorder = BufferedRecorder::new();
    evaluator.evaluate_with_recorder(&mut NoopPolicy, &mut recorder)?;

    assert_eq!(recorder.len(), 6);
    let last = recorder.iter().last().unwrap();
    assert_eq!(last.get("episode"), Some(&RecordValue::Scalar(2.0)));
    assert_eq!(last.get("step"), Some(&RecordValue::Scalar(2.0)));
    assert_eq!(last.get_scalar("reward")?, 1.0);
    Ok(())
}

#[test]
fn test_step_with_reset() -> Result<()> {
    let mut env = CountdownEnv::build(&2, 0)?;
    env.reset()?;

    let (step, _) = env.step_with_reset(&NoopAct)?;
    assert!(!step.is_done());
    assert!(step.init_obs.is_none());

    let (step, _) = env.step_with_reset(&NoopAct)?;
    assert!(step.is_done());
    assert_eq!(step.init_obs.map(|o| o.0), Some(0));
    assert_eq!(env.t, 0);
    Ok(())
}
