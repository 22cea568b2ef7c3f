pub mod items;
pub mod results;
pub mod stats;
pub mod track;
