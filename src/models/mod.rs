mod history;
mod metrics;
mod process;

pub use history::*;
pub use metrics::*;
pub use process::*;
