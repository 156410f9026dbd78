//! Pipeline stages.
//!
//! Each stage takes the [`AppDescriptor`](crate::bundler::AppDescriptor) by
//! value and hands back the (possibly relocated) descriptor. Failures are
//! wrapped in the stage's own [`Error`](crate::bundler::Error) variant so the
//! caller can tell where the run stopped.
//!
//! Order: [`copy`] → [`clean`] → [`inject`] → [`rebuild`] → [`brand`] → [`package`].

pub mod brand;
pub mod clean;
pub mod copy;
pub mod inject;
pub mod package;
pub mod rebuild;

pub use brand::Brander;
