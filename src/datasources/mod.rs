pub mod classifier;

pub use classifier::{ClassifierClient, ClassifierFeatures};
