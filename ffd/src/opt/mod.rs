pub mod ffd_packer;
pub mod search;
