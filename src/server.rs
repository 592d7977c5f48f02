use crate::{error::Error, hex, logger::Logger};
use hyper::{
    header::{HeaderValue, CONTENT_TYPE},
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, StatusCode,
};
use regex::Regex;
use serde_json::{json, Value};
use std::{collections::HashMap, convert::Infallible, future::Future, net::SocketAddr, pin::Pin, str::FromStr, sync::Arc};

pub struct DynamicUri {
    regex: Regex,
    names: Vec<String>,
}

impl DynamicUri {
    pub fn new(uri: &str) -> Self {
        let placeholder = Regex::new(r"\{([^{}/]*)\}").expect("placeholder pattern");
        let mut pattern = String::from("^");
        let mut names = Vec::new();
        let mut offset = 0;
        for captures in placeholder.captures_iter(uri) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            assert!(!names.iter().any(|existing| existing == name.as_str()), "Duplicate parameter {}", name.as_str());
            pattern.push_str(&regex::escape(&uri[offset..whole.start()]));
            pattern.push_str("([^/]*)");
            names.push(name.as_str().to_string());
            offset = whole.end();
        }
        pattern.push_str(&regex::escape(&uri[offset..]));
        pattern.push('$');
        let regex = Regex::new(&pattern).expect("escaped route pattern");
        Self { regex, names }
    }

    pub fn check(&self, path: &str) -> Option<Vec<(String, String)>> {
        let captures = self.regex.captures(path)?;
        Some(
            self.names
                .iter()
                .enumerate()
                .map(|(index, name)| (name.clone(), captures[index + 1].to_string()))
                .collect(),
        )
    }
}

pub fn percent_decode(text: &str) -> Result<String, Error> {
    let bytes = text.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let escape = bytes
                .get(index + 1..index + 3)
                .ok_or_else(|| Error::new(format!(r#"Truncated escape in "{}""#, text)))?;
            output.extend(hex::decode(escape)?);
            index += 3;
        } else {
            output.push(bytes[index]);
            index += 1;
        }
    }
    String::from_utf8(output).map_err(|_| Error::new(format!(r#"Invalid utf8 in "{}""#, text)))
}

#[derive(Debug, Default, Clone)]
pub struct Parameters {
    values: HashMap<String, String>,
}

impl Parameters {
    fn from_request(path: Vec<(String, String)>, query: Option<&str>) -> Result<Self, Error> {
        let mut values = HashMap::new();
        for part in query.unwrap_or("").split('&').filter(|part| !part.is_empty()) {
            if let Some((name, value)) = part.split_once('=') {
                values.insert(percent_decode(name)?, percent_decode(value)?);
            }
        }
        for (name, value) in path {
            values.insert(name, percent_decode(&value)?);
        }
        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn require(&self, name: &str) -> Result<&str, Error> {
        self.get(name).ok_or_else(|| Error::new(format!("Missing {} parameter", name)))
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Result<Option<T>, Error> {
        match self.get(name) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| Error::new(format!(r#"Invalid {} parameter "{}""#, name, value))),
            None => Ok(None),
        }
    }
}

type BoxedResultFuture = Pin<Box<dyn Send + Future<Output = Result<Value, Error>>>>;
type BoxedHandler<S> = Box<dyn Fn(Parameters, Vec<u8>, Arc<S>) -> BoxedResultFuture + Send + Sync>;

struct Route<S> {
    method: Method,
    dynamic_uri: DynamicUri,
    handler: BoxedHandler<S>,
}

pub struct Server<S> {
    routes: Vec<Route<S>>,
    state: Arc<S>,
    logger: Logger,
}

fn respond(status: StatusCode, value: Value) -> Response<Body> {
    let mut response = Response::new(Body::from(value.to_string()));
    *response.status_mut() = status;
    response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

impl<S: 'static + Send + Sync> Server<S> {
    pub fn new(state: Arc<S>, logger: Logger) -> Self {
        Self {
            routes: Vec::new(),
            state,
            logger,
        }
    }

    pub fn get<H, F>(&mut self, uri: &str, handler: H)
    where
        H: 'static + Fn(Parameters, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Result<Value, Error>> + Send,
    {
        self.add(Method::GET, uri, handler);
    }

    pub fn post<H, F>(&mut self, uri: &str, handler: H)
    where
        H: 'static + Fn(Parameters, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Result<Value, Error>> + Send,
    {
        self.add(Method::POST, uri, handler);
    }

    fn add<H, F>(&mut self, method: Method, uri: &str, handler: H)
    where
        H: 'static + Fn(Parameters, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Result<Value, Error>> + Send,
    {
        self.routes.push(Route {
            method,
            dynamic_uri: DynamicUri::new(uri),
            handler: Box::new(move |parameters, body, state| Box::pin(handler(parameters, body, state))),
        });
    }

    pub async fn route(&self, method: &Method, path: &str, query: Option<&str>, body: Vec<u8>) -> Response<Body> {
        let response = self.dispatch(method, path, query, body).await;
        self.logger.log(format!("{} {} -> {}", method, path, response.status().as_u16()));
        response
    }

    async fn dispatch(&self, method: &Method, path: &str, query: Option<&str>, body: Vec<u8>) -> Response<Body> {
        for route in self.routes.iter().filter(|route| route.method == method) {
            if let Some(path_parameters) = route.dynamic_uri.check(path) {
                let result = match Parameters::from_request(path_parameters, query) {
                    Ok(parameters) => (route.handler)(parameters, body, self.state.clone()).await,
                    Err(error) => Err(error),
                };
                return match result {
                    Ok(value) => respond(StatusCode::OK, value),
                    Err(error) => respond(StatusCode::BAD_REQUEST, json!({ "message": error.message() })),
                };
            }
        }
        respond(StatusCode::NOT_FOUND, json!({ "message": "Not Found" }))
    }

    pub async fn run(self, address: SocketAddr) -> Result<(), hyper::Error> {
        let server = Arc::new(self);
        let make_service = make_service_fn(|_| {
            let server = server.clone();
            async {
                Ok::<_, Infallible>(service_fn(move |request: Request<Body>| {
                    let server = server.clone();
                    async move {
                        let (parts, body) = request.into_parts();
                        let response = match hyper::body::to_bytes(body).await {
                            Ok(body) => server.route(&parts.method, parts.uri.path(), parts.uri.query(), body.to_vec()).await,
                            Err(error) => respond(StatusCode::BAD_REQUEST, json!({ "message": error.to_string() })),
                        };
                        Ok::<_, Infallible>(response)
                    }
                }))
            }
        });
        server.logger.log(format!("Listening on {}", address));
        hyper::Server::try_bind(&address)?.serve(make_service).await
    }
}
