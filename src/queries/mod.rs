pub mod aggregate;

pub mod find;

pub mod index;

pub mod mutate;
