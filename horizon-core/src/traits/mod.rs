mod index_engine;

pub use index_engine::IIndexEngine;
