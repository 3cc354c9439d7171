// Core modules implementing kind dispatch, literal parsing, and error modeling.
pub mod bind;
pub mod error;
pub mod kind;
pub mod parse;
pub mod scalar;
pub mod timestamp;
pub mod value;
