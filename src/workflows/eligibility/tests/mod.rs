mod common;

mod comparison;
mod scoring;
