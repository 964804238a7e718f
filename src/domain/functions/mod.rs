pub mod acquire;
pub mod publish;
pub mod resolve;
pub mod select;
