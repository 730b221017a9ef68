//! Tree module tests
//!
//! - Resolver tests over the arena document
//! - Resolver tests over a minimal hand-written `TreeNode`
//! - Target resolution tests

#[cfg(test)]
mod resolver_tests;
