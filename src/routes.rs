use crate::{
    alphabet::Alphabet,
    alphabets,
    buffer::ByteBuffer,
    check::CheckedCodec,
    codec::BaseCodec,
    error::Error,
    logger::Logger,
    server::{Parameters, Server},
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct Service {
    default: BaseCodec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodeRequest {
    pub hex: String,
    pub alphabet: Option<String>,
    pub size: Option<usize>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecodeRequest {
    pub text: String,
    pub alphabet: Option<String>,
    pub size: Option<usize>,
    #[serde(default)]
    pub checked: bool,
}

impl Service {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            default: BaseCodec::from_alphabet(alphabet),
        }
    }

    fn codec(&self, alphabet: Option<&str>) -> Result<BaseCodec, Error> {
        match alphabet {
            Some(alphabet) => Ok(BaseCodec::from_alphabet(alphabets::resolve(alphabet)?)),
            None => Ok(self.default.clone()),
        }
    }

    fn encode_buffer(&self, buffer: &ByteBuffer, alphabet: Option<&str>, checked: bool) -> Result<Value, Error> {
        let codec = self.codec(alphabet)?;
        let base = codec.base();
        let text = if checked {
            CheckedCodec::new(codec).encode(buffer)
        } else {
            codec.encode(buffer)
        };
        Ok(json!({ "text": text, "base": base }))
    }

    pub fn encode(&self, request: &EncodeRequest) -> Result<Value, Error> {
        let buffer = ByteBuffer::from_hex(&request.hex, request.size)?;
        self.encode_buffer(&buffer, request.alphabet.as_deref(), request.checked)
    }

    pub fn encode_integer(&self, integer: &str, alphabet: Option<&str>, size: Option<usize>, checked: bool) -> Result<Value, Error> {
        let buffer = ByteBuffer::from_decimal(integer, size)?;
        self.encode_buffer(&buffer, alphabet, checked)
    }

    pub fn decode(&self, request: &DecodeRequest) -> Result<Value, Error> {
        let codec = self.codec(request.alphabet.as_deref())?;
        let buffer = if request.checked {
            CheckedCodec::new(codec).decode(&request.text)?
        } else {
            codec.decode(&request.text)?
        };
        let buffer = match request.size {
            Some(size) => ByteBuffer::from_raw(buffer.to_decimal_array(), Some(size))?,
            None => buffer,
        };
        Ok(json!({
            "hex": buffer,
            "size": buffer.size(),
            "integer": buffer.to_decimal(),
        }))
    }

    pub fn alphabets(&self) -> Value {
        json!(alphabets::NAMES
            .iter()
            .filter_map(|&name| alphabets::by_name(name).map(|alphabet| (name, alphabet)))
            .map(|(name, alphabet)| json!({ "name": name, "alphabet": alphabet.as_str(), "base": alphabet.len() }))
            .collect::<Vec<_>>())
    }
}

fn parse_flag(parameters: &Parameters, name: &str) -> Result<bool, Error> {
    Ok(parameters.parse(name)?.unwrap_or(false))
}

fn encode_request_from_parameters(parameters: &Parameters) -> Result<EncodeRequest, Error> {
    Ok(EncodeRequest {
        hex: parameters.require("hex")?.to_string(),
        alphabet: parameters.get("alphabet").map(str::to_string),
        size: parameters.parse("size")?,
        checked: parse_flag(parameters, "checked")?,
    })
}

fn decode_request_from_parameters(parameters: &Parameters) -> Result<DecodeRequest, Error> {
    Ok(DecodeRequest {
        text: parameters.require("text")?.to_string(),
        alphabet: parameters.get("alphabet").map(str::to_string),
        size: parameters.parse("size")?,
        checked: parse_flag(parameters, "checked")?,
    })
}

fn parse_body<'a, T: Deserialize<'a>>(body: &'a [u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|error| Error::new(format!("Invalid JSON body ({})", error)))
}

pub fn create_server(service: Arc<Service>, logger: Logger) -> Server<Service> {
    let mut server = Server::new(service, logger);

    server.get("/alphabets", |_parameters, _body, service| async move { Ok::<_, Error>(service.alphabets()) });

    server.get("/encode/{hex}", |parameters, _body, service| async move {
        service.encode(&encode_request_from_parameters(&parameters)?)
    });

    server.post("/encode", |_parameters, body, service| async move {
        service.encode(&parse_body(&body)?)
    });

    server.get("/integers/{integer}/encode", |parameters, _body, service| async move {
        service.encode_integer(
            parameters.require("integer")?,
            parameters.get("alphabet"),
            parameters.parse("size")?,
            parse_flag(&parameters, "checked")?,
        )
    });

    server.get("/decode/{text}", |parameters, _body, service| async move {
        service.decode(&decode_request_from_parameters(&parameters)?)
    });

    server.post("/decode", |_parameters, body, service| async move {
        service.decode(&parse_body(&body)?)
    });

    server
}
