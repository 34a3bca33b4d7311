pub mod export;
pub mod hash;
pub mod jwt;
pub mod object_key;
