//! One module per subcommand

pub mod add;
pub mod batch;
pub mod explain;
