//! Transform pipeline infrastructure
//!
//! The engine is an ordered list of stages. Each stage implements [`Runnable`] and is
//! chained with [`Transform::then`], so the compiler checks that every stage accepts what
//! the previous one produces:
//!
//! ```rust,ignore
//! let structure = Transform::from_fn(Ok)
//!     .then(Segmentation)       // String -> Vec<Node>
//!     .then(SectionHeaders::new(icons))
//!     .then_transform(&LIST_DETECTION)
//!     .then(CollectBlocks);     // Vec<Node> -> Vec<Block>
//! ```
//!
//! Stages that need no configuration are pre-built as statics in [`standard`]; stages
//! that need tables are constructed per formatter.
//!
//! # Module Organization
//!
//! - [`stages`]: Individual stages (segmentation, headers, lists, quotes, paragraphs,
//!   inlines, highlighting, classification)
//! - [`standard`]: Pre-built chains and the full block pipeline

pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Stage failed with specific error
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` represents a transformation from type `I` to type `O`. The boxed
/// closure is `Send + Sync`, so a built pipeline can be shared between threads.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static transform to this transform
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

// Implement Runnable for Transform so transforms can be used as stages
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
