pub use bag::*;
pub use board::*;
pub use command::*;
pub use errors::*;
pub use rack::*;
pub use scoring::*;
pub use search::*;
pub use tiles::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod bag;
mod board;
mod command;
mod errors;
mod rack;
mod scoring;
mod search;
mod tiles;
mod turn;
mod visualization;
