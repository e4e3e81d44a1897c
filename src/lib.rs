//! Walkthrough of core Rust constructs, printed as numbered console sections.

pub mod helpers;
pub mod persona;
pub mod runner;
pub mod sections;

pub type Result<T> = anyhow::Result<T>;

pub use helpers::{add, multiply};
pub use persona::Persona;
pub use runner::{render, run};
pub use sections::{SECTION_TITLES, Section};
