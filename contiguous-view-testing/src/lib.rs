#![cfg(test)]

mod bounds;
mod bytes;
mod construction;
mod fixtures;
mod serialization;
mod slicing;
