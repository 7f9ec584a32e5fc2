//! Infrastructure configuration modules.

pub mod decision;
pub mod logging;
pub mod oracle;
pub mod settings;
