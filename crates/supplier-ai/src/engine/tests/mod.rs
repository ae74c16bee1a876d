pub(crate) mod common;

mod analysis;
mod prediction;
