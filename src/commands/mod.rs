// Video Wall Commands
// Command-name dispatch used by the binary and embedding servers

mod playlist;

pub use playlist::*;
