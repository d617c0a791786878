use reqwest::blocking::Client;
use tracing::debug;

use crate::catalog::error::SourceError;
use crate::catalog::models::BirdImage;
use crate::catalog::queries::{
    distinct_categories, images_in_category, parse_pictures, PICTURES_ENDPOINT,
};

/// Where the view-model gets its data from. Called from background threads.
pub trait BirdSource: Send + Sync {
    fn fetch_categories(&self) -> Result<Vec<String>, SourceError>;

    fn fetch_images(&self, category: &str) -> Result<Vec<BirdImage>, SourceError>;
}

pub struct HttpBirdSource {
    client: Client,
    base_url: String,
}

impl HttpBirdSource {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(concat!("bird-gallery/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn pictures_url(&self) -> String {
        format!("{}{PICTURES_ENDPOINT}", self.base_url)
    }

    fn fetch_all(&self) -> Result<Vec<BirdImage>, SourceError> {
        let url = self.pictures_url();
        debug!(%url, "fetching picture list");
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = response.text()?;
        parse_pictures(&body)
    }
}

impl BirdSource for HttpBirdSource {
    fn fetch_categories(&self) -> Result<Vec<String>, SourceError> {
        let images = self.fetch_all()?;
        Ok(distinct_categories(&images))
    }

    fn fetch_images(&self, category: &str) -> Result<Vec<BirdImage>, SourceError> {
        let images = self.fetch_all()?;
        Ok(images_in_category(images, category))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Serves a single canned response on a loopback port and returns the
    /// base URL pointing at it.
    fn serve_once(response: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let port = listener.local_addr().expect("local addr").port();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut buf).expect("read request");
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            stream
                .write_all(response.as_bytes())
                .expect("write response");
        });
        (format!("http://127.0.0.1:{port}/"), handle)
    }

    #[test]
    fn pictures_url_appends_endpoint_to_base() {
        let source =
            HttpBirdSource::new("https://sebastianaigner.github.io/demo-image-api/").expect("client");
        assert_eq!(
            source.pictures_url(),
            "https://sebastianaigner.github.io/demo-image-api/pictures.json"
        );
    }

    #[test]
    fn non_success_status_is_reported() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let source = HttpBirdSource::new(&base_url).expect("client");
        let result = source.fetch_categories();
        server.join().expect("server thread");
        assert!(matches!(result, Err(SourceError::Status(404))));
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
            listener.local_addr().expect("local addr").port()
        };
        let source = HttpBirdSource::new(&format!("http://127.0.0.1:{port}/")).expect("client");
        assert!(matches!(
            source.fetch_images("sparrow"),
            Err(SourceError::Http(_))
        ));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 8\r\nConnection: close\r\n\r\nnot json",
        );
        let source = HttpBirdSource::new(&base_url).expect("client");
        let result = source.fetch_categories();
        server.join().expect("server thread");
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }

    #[test]
    fn successful_response_is_filtered_by_category() {
        let (base_url, server) = serve_once(concat!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 120\r\nConnection: close\r\n\r\n",
            r#"[{"category":"owl","path":"owl/1.jpg","author":"carol"},"#,
            r#"{"category":"sparrow","path":"sparrow/1.jpg","author":"jsmith"}]"#,
        ));
        let source = HttpBirdSource::new(&base_url).expect("client");
        let images = source.fetch_images("sparrow");
        server.join().expect("server thread");
        assert_eq!(
            images.expect("images"),
            vec![BirdImage::new("sparrow", "sparrow/1.jpg", "jsmith")]
        );
    }
}
