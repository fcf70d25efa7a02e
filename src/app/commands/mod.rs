pub mod generate;
pub mod suggest;
pub mod wizard;
