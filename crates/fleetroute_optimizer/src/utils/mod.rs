pub mod index_newtype;
