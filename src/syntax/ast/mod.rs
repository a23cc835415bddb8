//! The Standard ML abstract syntax tree.

pub mod node;
pub mod reserved;

pub use self::{
    node::{Ast, Dec, Exp, Pat},
    reserved::Reserved,
};
