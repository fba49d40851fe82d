pub mod department;
pub mod menu;
