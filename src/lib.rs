#![no_std]

pub mod mt19937;
pub mod recovery;
pub mod uniform;

#[derive(Debug)]
pub enum Error {
    InvalidIndex,
    InvalidLength,
}
