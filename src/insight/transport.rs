// HTTP round trips used by the explorer client

use reqwest::blocking::{Client, Response};

use super::TransportError;

/// One synchronous request per call, full body returned on success
///
/// Non-success HTTP statuses are errors. Implementations add no retries.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;

    /// POST an `application/x-www-form-urlencoded` body
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Vec<u8>, TransportError>;
}

/// Blocking reqwest transport
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client, e.g. one with timeouts or a proxy
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send().map_err(|e| request_error(url, e))?;
        read_body(url, response)
    }

    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .map_err(|e| request_error(url, e))?;
        read_body(url, response)
    }
}

fn request_error(url: &str, err: reqwest::Error) -> TransportError {
    TransportError::Request {
        url: url.to_string(),
        source: Box::new(err),
    }
}

fn read_body(url: &str, response: Response) -> Result<Vec<u8>, TransportError> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.bytes().map_err(|e| request_error(url, e))?;
    Ok(body.to_vec())
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;

    #[test]
    fn test_mock_unknown_url_is_404() {
        let transport = MockTransport::new().with_body("http://a/x", b"ok");
        assert_eq!(transport.get("http://a/x").unwrap(), b"ok");
        assert!(matches!(
            transport.get("http://a/y"),
            Err(TransportError::Status { status: 404, .. })
        ));
        assert_eq!(transport.requested(), vec!["http://a/x", "http://a/y"]);
    }
}
