pub mod alphabet;
pub mod alphabets;
pub mod buffer;
pub mod check;
pub mod chronometer;
pub mod codec;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;
pub mod routes;
pub mod server;

pub use self::{
    alphabet::Alphabet,
    buffer::ByteBuffer,
    check::CheckedCodec,
    codec::BaseCodec,
    configuration::Configuration,
    error::Error,
    logger::Logger,
};
