pub mod catalog;
pub mod gardener;
pub mod matching;
