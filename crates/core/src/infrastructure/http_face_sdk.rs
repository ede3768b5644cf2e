use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::groups::domain::group::{Group, GroupPage, GroupToCreate, UpdateGroup};
use crate::groups::domain::group_api::GroupApi;
use crate::matching::domain::detect::{DetectRequest, DetectResponse};
use crate::matching::domain::face_match::{MatchRequest, MatchResponse};
use crate::matching::domain::matching_api::MatchingApi;
use crate::persons::domain::person::{ImagePage, Person, PersonFields, PersonImage, PersonPage};
use crate::persons::domain::person_api::PersonApi;
use crate::search::domain::search::{SearchRequest, SearchResult};
use crate::search::domain::search_api::SearchApi;
use crate::shared::api_error::ApiError;
use crate::shared::client_config::{ClientConfig, ConfigError};
use crate::shared::image_payload::ImageFields;

/// Blocking HTTP implementation of every face service API.
///
/// Each call issues exactly one request and blocks until the service
/// answers. No retries.
#[derive(Clone, Debug)]
pub struct HttpFaceSdk {
    client: Client,
    base_url: Url,
}

impl HttpFaceSdk {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = config.base_url()?;
        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout)
            .build()
            .map_err(ConfigError::Client)?;
        log::debug!("Face service client targeting {base_url}");
        Ok(Self { client, base_url })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an API path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
            path: path.to_string(),
            source: e,
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("{method} {url}");
        Ok(self.client.request(method, url))
    }

    fn paged(
        &self,
        path: &str,
        page: u32,
        size: u32,
    ) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .request(Method::GET, path)?
            .query(&[("page", page), ("size", size)]))
    }

    fn execute(&self, path: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().map_err(|e| ApiError::Transport {
            endpoint: path.to_string(),
            source: e,
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        log::debug!("{path} answered {status}: {body}");
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    fn bytes(&self, path: &str, builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = self.execute(path, builder)?;
        let bytes = response.bytes().map_err(|e| ApiError::Transport {
            endpoint: path.to_string(),
            source: e,
        })?;
        Ok(bytes.to_vec())
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.bytes(path, builder)?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            endpoint: path.to_string(),
            source: e,
        })
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, path)?.json(body);
        self.fetch(path, builder)
    }

    /// Sends a request whose success response carries no body worth decoding.
    fn send_unit(&self, path: &str, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute(path, builder).map(|_| ())
    }
}

impl MatchingApi for HttpFaceSdk {
    fn detect(&self, request: &DetectRequest) -> Result<DetectResponse, ApiError> {
        self.post("api/detect", request)
    }

    fn match_faces(&self, request: &MatchRequest) -> Result<MatchResponse, ApiError> {
        self.post("api/match", request)
    }
}

impl GroupApi for HttpFaceSdk {
    fn create_group(&self, group: &GroupToCreate) -> Result<Group, ApiError> {
        self.post("api/groups", group)
    }

    fn get_all_groups(&self, page: u32, size: u32) -> Result<GroupPage, ApiError> {
        let path = "api/groups";
        self.fetch(path, self.paged(path, page, size)?)
    }

    fn get_group(&self, group_id: Uuid) -> Result<Group, ApiError> {
        let path = format!("api/groups/{group_id}");
        self.fetch(&path, self.request(Method::GET, &path)?)
    }

    fn update_group(&self, group_id: Uuid, group: &GroupToCreate) -> Result<(), ApiError> {
        let path = format!("api/groups/{group_id}");
        self.send_unit(&path, self.request(Method::PUT, &path)?.json(group))
    }

    fn delete_group(&self, group_id: Uuid) -> Result<(), ApiError> {
        let path = format!("api/groups/{group_id}");
        self.send_unit(&path, self.request(Method::DELETE, &path)?)
    }

    fn get_all_persons_by_group_id(
        &self,
        page: u32,
        size: u32,
        group_id: Uuid,
    ) -> Result<PersonPage, ApiError> {
        let path = format!("api/groups/{group_id}/persons");
        self.fetch(&path, self.paged(&path, page, size)?)
    }

    fn update_persons_in_group(
        &self,
        group_id: Uuid,
        update: &UpdateGroup,
    ) -> Result<(), ApiError> {
        let path = format!("api/groups/{group_id}/persons");
        self.send_unit(&path, self.request(Method::POST, &path)?.json(update))
    }
}

impl PersonApi for HttpFaceSdk {
    fn create_person(&self, person: &PersonFields) -> Result<Person, ApiError> {
        self.post("api/persons", person)
    }

    fn get_person(&self, person_id: Uuid) -> Result<Person, ApiError> {
        let path = format!("api/persons/{person_id}");
        self.fetch(&path, self.request(Method::GET, &path)?)
    }

    fn update_person(&self, person_id: Uuid, person: &PersonFields) -> Result<(), ApiError> {
        let path = format!("api/persons/{person_id}");
        self.send_unit(&path, self.request(Method::PUT, &path)?.json(person))
    }

    fn delete_person(&self, person_id: Uuid) -> Result<(), ApiError> {
        let path = format!("api/persons/{person_id}");
        self.send_unit(&path, self.request(Method::DELETE, &path)?)
    }

    fn add_image_to_person(
        &self,
        person_id: Uuid,
        image: &ImageFields,
    ) -> Result<PersonImage, ApiError> {
        self.post(&format!("api/persons/{person_id}/images"), image)
    }

    fn get_all_images_by_person_id(
        &self,
        page: u32,
        size: u32,
        person_id: Uuid,
    ) -> Result<ImagePage, ApiError> {
        let path = format!("api/persons/{person_id}/images");
        self.fetch(&path, self.paged(&path, page, size)?)
    }

    fn get_image_of_person(&self, person_id: Uuid, image_id: Uuid) -> Result<Vec<u8>, ApiError> {
        let path = format!("api/persons/{person_id}/images/{image_id}");
        self.bytes(&path, self.request(Method::GET, &path)?)
    }

    fn delete_image_of_person(&self, person_id: Uuid, image_id: Uuid) -> Result<(), ApiError> {
        let path = format!("api/persons/{person_id}/images/{image_id}");
        self.send_unit(&path, self.request(Method::DELETE, &path)?)
    }

    fn get_all_groups_by_person_id(
        &self,
        page: u32,
        size: u32,
        person_id: Uuid,
    ) -> Result<GroupPage, ApiError> {
        let path = format!("api/persons/{person_id}/groups");
        self.fetch(&path, self.paged(&path, page, size)?)
    }
}

impl SearchApi for HttpFaceSdk {
    fn search(&self, request: &SearchRequest) -> Result<SearchResult, ApiError> {
        self.post("api/search", request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    fn sdk(url: &str) -> HttpFaceSdk {
        HttpFaceSdk::new(&ClientConfig::new(url)).unwrap()
    }

    /// Answers a single request on a loopback port with a canned response.
    /// Returns the base URL and a handle yielding the received request line.
    fn serve_once(status: &str, content_type: &str, body: &[u8]) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let mut response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header.trim_end().is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            reader.into_inner().write_all(&response).unwrap();
            request_line.trim_end().to_string()
        });
        (url, handle)
    }

    #[test]
    fn test_endpoint_appends_to_base_path() {
        let sdk = sdk("https://faces.example.com/v7");
        let id = Uuid::nil();
        assert_eq!(
            sdk.endpoint(&format!("api/groups/{id}/persons")).unwrap().as_str(),
            "https://faces.example.com/v7/api/groups/00000000-0000-0000-0000-000000000000/persons"
        );
    }

    #[test]
    fn test_paged_request_carries_page_and_size() {
        let sdk = sdk("http://localhost:41101/");
        let request = sdk.paged("api/groups", 2, 10).unwrap().build().unwrap();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:41101/api/groups?page=2&size=10"
        );
    }

    #[test]
    fn test_json_body_is_sent_with_content_type() {
        let sdk = sdk("http://localhost:41101/");
        let request = sdk
            .request(Method::POST, "api/groups")
            .unwrap()
            .json(&GroupToCreate::new("test"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/json"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"name":"test"}"#);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = HttpFaceSdk::new(&ClientConfig::new("localhost:41101")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_unreachable_service_is_transport_error() {
        // Port 9 (discard) on loopback is reliably closed in test environments.
        let sdk = sdk("http://127.0.0.1:9/");
        let err = sdk.get_all_groups(1, 1).unwrap_err();
        assert!(matches!(err, ApiError::Transport { ref endpoint, .. } if endpoint == "api/groups"));
    }

    #[test]
    fn test_error_body_becomes_status_error() {
        let (url, server) = serve_once(
            "404 Not Found",
            "application/json",
            br#"{"code": 404, "message": "Group not found"}"#,
        );
        let id = Uuid::nil();
        let err = sdk(&url).get_group(id).unwrap_err();

        assert!(err.is_not_found());
        match err {
            ApiError::Status {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, Some(404));
                assert_eq!(message, "Group not found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(server.join().unwrap(), format!("GET /api/groups/{id} HTTP/1.1"));
    }

    #[test]
    fn test_non_json_success_is_decode_error() {
        let (url, server) = serve_once("200 OK", "text/html", b"<html>maintenance</html>");
        let err = sdk(&url).get_all_groups(1, 20).unwrap_err();

        assert!(matches!(err, ApiError::Decode { ref endpoint, .. } if endpoint == "api/groups"));
        assert_eq!(
            server.join().unwrap(),
            "GET /api/groups?page=1&size=20 HTTP/1.1"
        );
    }

    #[test]
    fn test_no_content_delete_succeeds() {
        let (url, server) = serve_once("204 No Content", "text/plain", b"");
        let id = Uuid::nil();
        sdk(&url).delete_group(id).unwrap();
        assert_eq!(server.join().unwrap(), format!("DELETE /api/groups/{id} HTTP/1.1"));
    }

    #[test]
    fn test_image_bytes_are_returned_verbatim() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        let (url, server) = serve_once("200 OK", "image/jpeg", &jpeg);
        let (person, image) = (Uuid::nil(), Uuid::from_u128(1));

        let bytes = sdk(&url).get_image_of_person(person, image).unwrap();

        assert_eq!(bytes, jpeg);
        assert_eq!(
            server.join().unwrap(),
            format!("GET /api/persons/{person}/images/{image} HTTP/1.1")
        );
    }

    #[test]
    fn test_created_group_is_decoded() {
        let id = Uuid::nil();
        let body = format!(r#"{{"id": "{id}", "name": "test", "metadata": null}}"#);
        let (url, server) = serve_once("200 OK", "application/json", body.as_bytes());

        let group = sdk(&url).create_group(&GroupToCreate::new("test")).unwrap();

        assert_eq!(group.id, id);
        assert_eq!(group.name, "test");
        assert!(group.metadata.is_empty());
        assert_eq!(server.join().unwrap(), "POST /api/groups HTTP/1.1");
    }
}
