pub mod axis;
pub mod error;
pub mod invocation;
pub mod launch;
pub mod runner;
pub mod sweep;
pub mod template;
pub mod timing;
