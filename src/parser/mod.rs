pub mod assemble;
pub mod extract;
pub mod patterns;
pub mod tree;
