//! # phi-session
//!
//! [`PhiSession`] owns the current model, the training-example store and the
//! derived stats, and threads them through detection, feedback, retraining,
//! pretraining, export and reset. Every learning operation takes `&mut self`,
//! so at most one runs at a time and a retrain always finishes before the
//! next detection sees its model.

mod confirmation;
mod persistence;
mod session;

pub use confirmation::Confirmation;
pub use persistence::Persistence;
pub use session::PhiSession;
