pub mod check;
pub mod password_gen;
pub mod policy;
