mod common;

mod equivalence;
mod split_contracts;
mod unreachable;
