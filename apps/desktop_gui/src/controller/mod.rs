//! Controller layer: actions queued by widgets and their application to the session.

pub mod orchestration;
