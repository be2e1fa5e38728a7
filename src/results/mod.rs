//! Prediction output and submission staging

pub mod reconcile;
pub mod writer;

pub use self::reconcile::{reconcile, ReconcileOutcome, ReconcileReport, ResultSet, REQUIRED_SPLITS};
pub use self::writer::{format_general, write_predictions};
