//! Domain data supplied by the page: the icon set.

pub mod assets;
