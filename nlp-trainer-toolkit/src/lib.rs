//! Native text-processing toolkit behind the NLP trainer.
//!
//! The language resources (lexicons, stopword lists, gazetteers, language
//! profiles) are loaded once into a [`Toolkit`] and shared read-only. Each
//! task has an adapter in [`adapters`] that reshapes toolkit output into the
//! task's result type, and [`Dispatcher`] routes a request to one adapter.

pub mod adapters;
pub mod dispatch;
pub mod doc;
pub mod entities;
pub mod language;
pub mod lemma;
pub mod resources;
pub mod sentiment;
pub mod stopwords;
pub mod tagger;
pub mod tokenize;
pub mod vectorize;

pub use dispatch::Dispatcher;
pub use resources::Toolkit;
