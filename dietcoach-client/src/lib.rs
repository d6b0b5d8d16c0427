mod advice;
mod generation;

pub use advice::*;
pub use generation::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
    #[error("server returned no text")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, Error>;

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_client_error() {
        Err(Error::RequestError)
    } else if status.is_server_error() {
        Err(Error::InternalServerError)
    } else if !status.is_success() {
        Err(Error::ResponseError)
    } else {
        Ok(resp)
    }
}
