pub mod embed;
pub mod links;
