pub mod fis;
