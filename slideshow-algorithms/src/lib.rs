pub mod greedy;
pub use greedy::solve_challenge;
