//! Rule-based ENEM essay grading.
//!
//! The [`grading`] module is a stateless engine mapping essay text and a
//! theme to five competency scores (0-200 each), feedback, strengths and
//! weaknesses, tags, and a structural pre-check. All detection is fixed
//! substring or keyword matching against the curated lists in
//! [`grading::Rubric`]; there is no language model, spell checker, or I/O.

pub mod config;
pub mod error;
pub mod grading;
pub mod telemetry;
