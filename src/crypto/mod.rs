pub mod hash;
pub mod zkp;
