//! Text analysis stages applied to every article.

pub mod classify;
pub mod drugs;
pub mod geo;
pub mod language;
pub mod matcher;
pub mod summarize;
pub mod translate;
