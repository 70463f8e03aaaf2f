// fakecheck: Heuristic fake-follower estimation
//
// This is the library root. The scoring engine is pure; input and output
// are thin boundaries around it.

pub mod config;
pub mod input;
pub mod output;
pub mod scoring;
