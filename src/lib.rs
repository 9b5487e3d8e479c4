//! Cookie Jar Library
//!
//! An unordered bag of cookies. Cookies come in a closed set of flavors,
//! can be put in a jar, taken out at random and counted. The crate also
//! ships the walkthroughs and the in-memory jar service built on top.

// Domain modules
pub mod demo;
pub mod jar;

// Infrastructure
pub mod config;
pub mod router;
