#![doc = include_str!("../README.md")]

pub mod cli;
pub mod document;
pub mod error;
pub mod metadata;
pub mod selectors;

pub use document::{HeadDocument, HtmlParser, MetaKey, MetaTag, ScraperDocument, ScraperParser};
pub use error::{HeadmetaError, Result};
pub use metadata::*;
