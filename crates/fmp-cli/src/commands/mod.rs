pub mod company;
pub mod index;
pub mod market;
pub mod prices;
pub mod quote;
pub mod symbols;
