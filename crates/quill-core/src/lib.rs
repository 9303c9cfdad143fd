//! Quill Core Types and Definitions
//!
//! This crate provides the foundational types for Quill drawings. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: The [`draw::Renderer`] and [`draw::Drawable`] traits, strokes,
//!   command recording and the built-in shapes ([`draw`] module)
//! - **Diagram**: The composite [`diagram::Diagram`] drawable

pub mod color;
pub mod diagram;
pub mod draw;
pub mod geometry;
