//! Strategy Suite - Guided business-strategy worksheet engine.
//!
//! This crate implements the analysis core of a strategy worksheet: a company
//! profile is walked through PESTEL, Porter's Six Forces, internal issues,
//! SWOT, and customer segmentation, with GUT-scored risk ranking throughout,
//! plus a proxy service that researches company facts via Claude.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
