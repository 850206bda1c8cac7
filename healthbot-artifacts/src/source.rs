use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no artifact URL configured, set HEALTHBOT_ARTIFACT_URL")]
    NotConfigured,
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
}

type Result<T> = std::result::Result<T, Error>;

/// Where missing artifact files are downloaded from.
#[mockall::automock]
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>>;
}

pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file_name)
    }
}

pub fn create(base_url: String) -> impl ArtifactSource {
    HttpSource::new(base_url)
}

#[async_trait]
impl ArtifactSource for HttpSource {
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>> {
        self.client
            .get(self.url_for(file_name))
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(|resp| {
                if resp.status().is_client_error() {
                    Err(Error::RequestError)
                } else if resp.status().is_server_error() {
                    Err(Error::InternalServerError)
                } else {
                    Ok(resp)
                }
            })?
            .bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(|_| Error::ResponseError)
    }
}

/// Stand-in used when no base URL is configured; every fetch fails.
pub struct Unconfigured;

#[async_trait]
impl ArtifactSource for Unconfigured {
    async fn fetch(&self, _file_name: &str) -> Result<Vec<u8>> {
        Err(Error::NotConfigured)
    }
}
