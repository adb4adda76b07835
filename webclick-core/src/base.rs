//! Core functionalities.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::Policy;
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
pub trait Obs: Clone + Debug {
    /// Returns the shape of the observation.
    fn shape(&self) -> Vec<usize>;
}

/// An action of an environment.
pub trait Act: Clone + Debug {
    /// Returns the elements of the action in a flat vector.
    ///
    /// This is used to check the action against the declared action space.
    fn to_vec(&self) -> Vec<f32>;
}
